//! Core library for the Griot museum guide.
//!
//! The interesting part is [`carousel`]: an infinite three-card rotating
//! carousel whose index and transition protocol are owned by a
//! [`CarouselEngine`] and driven on a tokio runtime by a
//! [`CarouselDriver`]. The remaining modules are the collaborators the home
//! screen wires around it: the artifact [`catalog`], persisted
//! [`favorites`], and the [`i18n`] dictionary.
#![allow(missing_docs)]

pub mod carousel;
pub mod catalog;
pub mod error;
pub mod favorites;
pub mod i18n;

pub use carousel::{
    CardLayout, CardPosition, CardTransform, CarouselDriver, CarouselEngine,
    CarouselFrame, CarouselTiming, Easing, EngineState, SkipReason,
    TickOutcome, TransitionTicket, VisibleTriple,
};
pub use catalog::{Catalog, CategoryFilter};
pub use error::{CoreError, Result};
pub use favorites::{
    Favorites, FavoritesStore, JsonFileFavoritesStore, MemoryFavoritesStore,
};
pub use i18n::Dictionary;
