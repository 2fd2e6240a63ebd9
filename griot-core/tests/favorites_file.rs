//! File-backed favourites against a temporary data directory.

use griot_core::error::CoreError;
use griot_core::favorites::{
    FAVORITES_FILE, Favorites, FavoritesStore, JsonFileFavoritesStore,
};
use griot_model::ArtifactId;
use tempfile::TempDir;

fn id(raw: &str) -> ArtifactId {
    ArtifactId::new(raw).expect("valid id")
}

#[tokio::test]
async fn missing_file_loads_empty() {
    let dir = TempDir::new().expect("tempdir");
    let store = JsonFileFavoritesStore::new(dir.path());
    assert!(store.load().await.expect("load").is_empty());
    assert!(!store.path().exists());
}

#[tokio::test]
async fn toggles_survive_a_reopen() {
    let dir = TempDir::new().expect("tempdir");

    let mut favorites = Favorites::open(JsonFileFavoritesStore::new(dir.path()))
        .await
        .expect("open");
    favorites.toggle(&id("2")).await.expect("toggle");
    favorites.toggle(&id("4")).await.expect("toggle");
    favorites.toggle(&id("2")).await.expect("toggle");

    let reopened = Favorites::open(JsonFileFavoritesStore::new(dir.path()))
        .await
        .expect("reopen");
    assert_eq!(reopened.ids(), [id("4")]);

    let raw = std::fs::read_to_string(dir.path().join(FAVORITES_FILE))
        .expect("read file");
    let doc: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(doc["version"], 1);
    assert_eq!(doc["ids"], serde_json::json!(["4"]));
    assert!(doc["saved_at"].is_string());

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .expect("read dir")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(leftovers, [FAVORITES_FILE]);
}

#[tokio::test]
async fn legacy_array_is_accepted() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join(FAVORITES_FILE), r#"["1", "5", "1", " "]"#)
        .expect("write legacy file");

    let favorites = Favorites::open(JsonFileFavoritesStore::new(dir.path()))
        .await
        .expect("open");
    assert_eq!(favorites.ids(), [id("1"), id("5")]);
}

#[tokio::test]
async fn corrupt_file_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join(FAVORITES_FILE), "{not json")
        .expect("write corrupt file");

    let err = JsonFileFavoritesStore::new(dir.path())
        .load()
        .await
        .expect_err("corrupt file should fail");
    assert!(matches!(err, CoreError::Serialization(_)));
}

#[tokio::test]
async fn creates_the_data_directory_on_first_save() {
    let dir = TempDir::new().expect("tempdir");
    let nested = dir.path().join("guide").join("data");
    let store = JsonFileFavoritesStore::new(&nested);
    store.persist(&[id("3")]).await.expect("persist");
    assert_eq!(store.load().await.expect("load"), [id("3")]);
}
