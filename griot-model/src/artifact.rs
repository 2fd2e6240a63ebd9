use crate::error::ModelError;
use crate::ids::ArtifactId;
use crate::slide::ImageRef;
use std::fmt;
use std::str::FromStr;

/// Exhibit categories used by the listing screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    Paintings,
    Tapestries,
    Sculptures,
    Photos,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Paintings,
        Category::Tapestries,
        Category::Sculptures,
        Category::Photos,
    ];

    /// Listing id used in navigation (`"sculptures"`).
    pub fn id(self) -> &'static str {
        match self {
            Category::Paintings => "paintings",
            Category::Tapestries => "tapestries",
            Category::Sculptures => "sculptures",
            Category::Photos => "photos",
        }
    }

    /// Display name (`"Sculptures"`).
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Paintings => "Paintings",
            Category::Tapestries => "Tapestries",
            Category::Sculptures => "Sculptures",
            Category::Photos => "Photos",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}

/// A catalogued museum piece.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Artifact {
    pub id: ArtifactId,
    pub name: String,
    pub description: String,
    pub origin: String,
    pub period: String,
    pub category: Category,
    pub image: ImageRef,
}
