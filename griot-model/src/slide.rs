use crate::ids::SlideId;

/// Opaque image handle. The carousel never interprets it; renderers resolve
/// it to an asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(handle: impl Into<String>) -> Self {
        ImageRef(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One logical item the carousel can display.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    pub id: SlideId,
    pub title: String,
    pub description: String,
    pub image: ImageRef,
}

impl Slide {
    pub fn new(
        id: SlideId,
        title: impl Into<String>,
        description: impl Into<String>,
        image: ImageRef,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            image,
        }
    }
}
