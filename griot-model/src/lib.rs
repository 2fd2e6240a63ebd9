//! Core data model definitions shared across Griot crates.
#![allow(missing_docs)]

pub mod artifact;
pub mod error;
pub mod ids;
pub mod locale;
pub mod slide;

pub use artifact::{Artifact, Category};
pub use error::{ModelError, Result as ModelResult};
pub use ids::{ArtifactId, SlideId};
pub use locale::Locale;
pub use slide::{ImageRef, Slide};
