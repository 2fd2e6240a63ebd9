//! Favourite artifacts, persisted between sessions.
//!
//! [`Favorites`] is the in-memory set the screens query; every toggle is
//! written through a [`FavoritesStore`]. The file-backed store keeps one
//! small JSON document per data directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use griot_model::{Artifact, ArtifactId};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::{CoreError, Result};

/// File name used inside the data directory.
pub const FAVORITES_FILE: &str = "mcn_favorites_v1.json";

const DOCUMENT_VERSION: u32 = 1;

/// Persistence seam for the favourites set.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    async fn load(&self) -> Result<Vec<ArtifactId>>;
    async fn persist(&self, ids: &[ArtifactId]) -> Result<()>;
}

/// Keeps the ids in memory only.
#[derive(Debug, Default)]
pub struct MemoryFavoritesStore {
    ids: Mutex<Vec<ArtifactId>>,
}

impl MemoryFavoritesStore {
    pub fn with_ids(ids: impl IntoIterator<Item = ArtifactId>) -> Self {
        Self {
            ids: Mutex::new(ids.into_iter().collect()),
        }
    }

    /// What the last `persist` call wrote.
    pub fn stored(&self) -> Vec<ArtifactId> {
        self.ids.lock().clone()
    }
}

#[async_trait]
impl FavoritesStore for MemoryFavoritesStore {
    async fn load(&self) -> Result<Vec<ArtifactId>> {
        Ok(self.ids.lock().clone())
    }

    async fn persist(&self, ids: &[ArtifactId]) -> Result<()> {
        *self.ids.lock() = ids.to_vec();
        Ok(())
    }
}

/// On-disk document. Version 1 adds the envelope; older builds wrote a bare
/// array of ids, which is still accepted on load.
#[derive(Debug, Serialize, Deserialize)]
struct FavoritesDocument {
    version: u32,
    ids: Vec<String>,
    saved_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredFavorites {
    Document(FavoritesDocument),
    Legacy(Vec<String>),
}

/// JSON file in the app's data directory.
#[derive(Debug, Clone)]
pub struct JsonFileFavoritesStore {
    path: PathBuf,
}

impl JsonFileFavoritesStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(FAVORITES_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

#[async_trait]
impl FavoritesStore for JsonFileFavoritesStore {
    async fn load(&self) -> Result<Vec<ArtifactId>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no favorites file yet");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let raw_ids = match serde_json::from_str::<StoredFavorites>(&raw)? {
            StoredFavorites::Document(doc) => {
                if doc.version > DOCUMENT_VERSION {
                    warn!(
                        version = doc.version,
                        "favorites file written by a newer version"
                    );
                }
                doc.ids
            }
            StoredFavorites::Legacy(ids) => {
                info!(path = %self.path.display(), "loading legacy favorites array");
                ids
            }
        };

        let mut ids = Vec::with_capacity(raw_ids.len());
        for raw in raw_ids {
            match ArtifactId::new(raw) {
                Ok(id) if !ids.contains(&id) => ids.push(id),
                Ok(_) => {}
                Err(err) => warn!("skipping stored favorite: {err}"),
            }
        }
        Ok(ids)
    }

    async fn persist(&self, ids: &[ArtifactId]) -> Result<()> {
        let doc = FavoritesDocument {
            version: DOCUMENT_VERSION,
            ids: ids.iter().map(|id| id.as_str().to_string()).collect(),
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string_pretty(&doc)?;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = self.temp_path();
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!(count = ids.len(), path = %self.path.display(), "favorites saved");
        Ok(())
    }
}

/// Favourite artifact ids, in the order they were added.
#[derive(Debug)]
pub struct Favorites<S> {
    store: S,
    ids: Vec<ArtifactId>,
}

impl<S: FavoritesStore> Favorites<S> {
    pub async fn open(store: S) -> Result<Self> {
        let ids = store.load().await?;
        Ok(Self { store, ids })
    }

    /// Add `id` if absent, remove it if present, then persist. Returns
    /// whether `id` is a favourite afterwards. The in-memory set is left
    /// unchanged when persisting fails.
    pub async fn toggle(&mut self, id: &ArtifactId) -> Result<bool> {
        let mut next = self.ids.clone();
        let now_favorite = match next.iter().position(|f| f == id) {
            Some(at) => {
                next.remove(at);
                false
            }
            None => {
                next.push(id.clone());
                true
            }
        };
        self.store.persist(&next).await?;
        self.ids = next;
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, id: &ArtifactId) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &[ArtifactId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favourite artifacts in catalog order. Ids the catalog no longer
    /// knows are skipped.
    pub fn resolve<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Artifact> {
        catalog
            .artifacts()
            .iter()
            .filter(|artifact| self.is_favorite(&artifact.id))
            .collect()
    }

    /// Look up `id` in `catalog` and toggle it, rejecting unknown ids.
    pub async fn toggle_known(
        &mut self,
        catalog: &Catalog,
        id: &str,
    ) -> Result<bool> {
        let artifact = catalog
            .get(id)
            .ok_or_else(|| CoreError::NotFound(format!("artifact '{id}'")))?;
        let id = artifact.id.clone();
        self.toggle(&id).await
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> ArtifactId {
        ArtifactId::new(raw).unwrap()
    }

    #[tokio::test]
    async fn toggle_adds_then_removes_and_persists() {
        let mut favorites = Favorites::open(MemoryFavoritesStore::default())
            .await
            .unwrap();
        assert!(favorites.toggle(&id("3")).await.unwrap());
        assert!(favorites.toggle(&id("1")).await.unwrap());
        assert!(favorites.is_favorite(&id("3")));
        assert_eq!(favorites.ids(), [id("3"), id("1")]);

        assert!(!favorites.toggle(&id("3")).await.unwrap());
        assert!(!favorites.is_favorite(&id("3")));
        assert_eq!(favorites.into_store().stored(), [id("1")]);
    }

    #[tokio::test]
    async fn resolve_follows_catalog_order() {
        let store = MemoryFavoritesStore::with_ids([id("5"), id("2"), id("42")]);
        let favorites = Favorites::open(store).await.unwrap();
        let catalog = Catalog::builtin();
        let names: Vec<_> = favorites
            .resolve(&catalog)
            .into_iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, ["Great Sphinx of Giza", "Terracotta Head"]);
    }

    #[tokio::test]
    async fn toggle_known_rejects_unknown_ids() {
        let mut favorites = Favorites::open(MemoryFavoritesStore::default())
            .await
            .unwrap();
        let catalog = Catalog::builtin();
        let err = favorites.toggle_known(&catalog, "99").await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
        assert!(favorites.toggle_known(&catalog, "4").await.unwrap());
    }
}
