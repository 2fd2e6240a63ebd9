use crate::error::ModelError;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Stable identity of a slide shown by the carousel.
///
/// Slide ids are opaque strings supplied by the data collaborator; the only
/// validation is that they are not blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SlideId(String);

impl SlideId {
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ModelError::InvalidId(
                "Slide ID cannot be empty".to_string(),
            ));
        }
        Ok(SlideId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SlideId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SlideId::new(s)
    }
}

impl Borrow<str> for SlideId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Strongly typed ID for museum artifacts
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ArtifactId(String);

impl ArtifactId {
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ModelError::InvalidId(
                "Artifact ID cannot be empty".to_string(),
            ));
        }
        Ok(ArtifactId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The carousel shows artifacts under their own id.
    pub fn to_slide_id(&self) -> SlideId {
        SlideId(self.0.clone())
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ArtifactId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtifactId::new(s)
    }
}

impl Borrow<str> for ArtifactId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&SlideId> for ArtifactId {
    fn from(id: &SlideId) -> Self {
        ArtifactId(id.0.clone())
    }
}
