//! Infinite three-card rotating carousel.
//!
//! The carousel shows a left/center/right window over a finite slide list
//! and rotates it at a fixed cadence. The pieces are split the same way the
//! app splits them at runtime:
//!
//! - [`index`]: circular index arithmetic (pure)
//! - [`triple`]: the visible left/center/right window (derived, never stored)
//! - [`easing`] and [`timing`]: the transition curve and cadence
//! - [`engine`]: the `Inert`/`Idle`/`Transitioning` state machine
//! - [`driver`]: tokio timer + animation tasks feeding the engine
//! - [`layout`]: per-card transforms for renderers

pub mod driver;
pub mod easing;
pub mod engine;
pub mod index;
pub mod layout;
pub mod timing;
pub mod triple;

pub use driver::{CarouselDriver, CarouselFrame};
pub use easing::Easing;
pub use engine::{
    CarouselEngine, EngineState, SkipReason, TickOutcome, TransitionTicket,
};
pub use index::{CircularIndex, normalize};
pub use layout::{CardLayout, CardTransform};
pub use timing::CarouselTiming;
pub use triple::{CardPosition, VisibleTriple};
