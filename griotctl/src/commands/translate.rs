use griot_contracts::translate::Translate;
use griot_core::i18n::Dictionary;
use griot_model::Locale;
use tracing::warn;

pub fn run(key: &str, locale: Locale) {
    let dictionary = Dictionary::builtin();
    if !dictionary.contains_key(key) {
        warn!(key, "no dictionary entry; printing the key");
    }
    println!("{}", dictionary.translate(locale, key));
}
