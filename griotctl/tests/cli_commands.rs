//! Run the binary against a scratch working directory so no local config
//! or `.env` leaks in.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn griotctl(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("griotctl");
    cmd.current_dir(dir.path());
    for var in [
        "GRIOT_CONFIG_PATH",
        "GRIOT_CONFIG_JSON",
        "GRIOT_LOCALE",
        "GRIOT_DATA_DIR",
        "GRIOT_AUTO_ADVANCE",
        "GRIOT_TRANSITION",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn catalog_list_filters_by_category() {
    let dir = TempDir::new().expect("tempdir");
    griotctl(&dir)
        .args(["catalog", "list", "--category", "paintings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timbuktu Manuscripts"))
        .stdout(predicate::str::contains("Great Sphinx").not());
}

#[test]
fn catalog_rejects_unknown_category() {
    let dir = TempDir::new().expect("tempdir");
    griotctl(&dir)
        .args(["catalog", "list", "--category", "pottery"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn catalog_search_is_case_insensitive() {
    let dir = TempDir::new().expect("tempdir");
    griotctl(&dir)
        .args(["catalog", "search", "AKSUM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Aksumite Obelisk"));
}

#[test]
fn translate_uses_requested_locale_and_falls_back_to_key() {
    let dir = TempDir::new().expect("tempdir");
    griotctl(&dir)
        .args(["translate", "seeMore", "--locale", "wolof"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Gëna xem\n"));

    griotctl(&dir)
        .args(["translate", "seeMore"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Voir plus\n"));

    griotctl(&dir)
        .args(["translate", "noSuchKey", "--locale", "en"])
        .assert()
        .success()
        .stdout(predicate::str::diff("noSuchKey\n"))
        .stderr(predicate::str::contains("no dictionary entry"));
}

#[test]
fn env_file_flag_sets_the_locale() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("guide.env"), "GRIOT_LOCALE=en\n")
        .expect("write env file");
    griotctl(&dir)
        .args(["--env-file", "guide.env", "translate", "seeMore"])
        .assert()
        .success()
        .stdout(predicate::str::diff("See more\n"));
}

#[test]
fn config_locale_is_the_translate_default() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("griot.toml"), "locale = \"en\"\n")
        .expect("write config");
    griotctl(&dir)
        .args(["translate", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::diff("Hello\n"));

    griotctl(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("griot.toml"))
        .stdout(predicate::str::contains("auto_advance_period_ms = 5000"));
}

#[test]
fn favorites_toggle_persists_between_runs() {
    let dir = TempDir::new().expect("tempdir");
    let data = dir.path().join("data");
    let data_arg = data.to_str().expect("utf-8 path");

    griotctl(&dir)
        .args(["favorites", "toggle", "4", "--data-dir", data_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("added 4"));

    griotctl(&dir)
        .args(["favorites", "list", "--data-dir", data_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Timbuktu Manuscripts"));

    griotctl(&dir)
        .args(["favorites", "toggle", "4", "--data-dir", data_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed 4"));

    griotctl(&dir)
        .args(["favorites", "toggle", "77", "--data-dir", data_arg])
        .assert()
        .failure();
}

#[test]
fn carousel_prints_each_settle_and_exits() {
    let dir = TempDir::new().expect("tempdir");
    griotctl(&dir)
        .args([
            "carousel",
            "--cycles",
            "3",
            "--period-ms",
            "40",
            "--transition-ms",
            "20",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[0] Terracotta Head | Bronze Mask of Queen Mother Idia | Great Sphinx of Giza",
        ))
        .stdout(predicate::str::contains(
            "[1] Bronze Mask of Queen Mother Idia | Great Sphinx of Giza | Aksumite Obelisk",
        ))
        .stdout(predicate::str::contains(
            "[3] Aksumite Obelisk | Timbuktu Manuscripts | Terracotta Head",
        ));
}
