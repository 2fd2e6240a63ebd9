//! Trait surfaces that describe interactions with Griot data models.
#![allow(missing_docs)]

pub mod listener;
pub mod slide_like;
pub mod translate;

/// Frequently used traits for UI and orchestration crates.
pub mod prelude {
    pub use super::listener::{CarouselListener, LoggingListener};
    pub use super::slide_like::SlideLike;
    pub use super::translate::Translate;
}
