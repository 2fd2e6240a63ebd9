use griot_model::Locale;
use std::borrow::Cow;

/// Dictionary lookup used by screens for user-facing strings.
pub trait Translate {
    /// Look up `key` for `locale`. Implementations never fail: an unknown
    /// key comes back unchanged.
    fn translate<'a>(&'a self, locale: Locale, key: &'a str) -> Cow<'a, str>;
}
