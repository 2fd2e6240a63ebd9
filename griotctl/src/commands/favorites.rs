use std::path::Path;

use anyhow::Result;
use griot_core::catalog::Catalog;
use griot_core::favorites::{Favorites, JsonFileFavoritesStore};

use super::catalog::print_artifacts;

pub async fn list(data_dir: &Path) -> Result<()> {
    let favorites = Favorites::open(JsonFileFavoritesStore::new(data_dir)).await?;
    let catalog = Catalog::builtin();
    print_artifacts(&favorites.resolve(&catalog));
    Ok(())
}

pub async fn toggle(data_dir: &Path, id: &str) -> Result<()> {
    let mut favorites =
        Favorites::open(JsonFileFavoritesStore::new(data_dir)).await?;
    let catalog = Catalog::builtin();
    if favorites.toggle_known(&catalog, id).await? {
        println!("added {id} to favorites");
    } else {
        println!("removed {id} from favorites");
    }
    Ok(())
}
