//! The three cards currently on screen.

use griot_model::{Slide, SlideId};
use std::fmt;

use super::index::CircularIndex;

/// Slot a card occupies in the carousel window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardPosition {
    Left,
    Center,
    Right,
}

impl CardPosition {
    pub const ALL: [CardPosition; 3] =
        [CardPosition::Left, CardPosition::Center, CardPosition::Right];

    /// Offset from the current index.
    pub fn offset(self) -> isize {
        match self {
            CardPosition::Left => -1,
            CardPosition::Center => 0,
            CardPosition::Right => 1,
        }
    }
}

impl fmt::Display for CardPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CardPosition::Left => "left",
            CardPosition::Center => "center",
            CardPosition::Right => "right",
        })
    }
}

/// Borrowed view of the left/center/right slides.
///
/// For fewer than three slides some slots legitimately show the same slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleTriple<'a> {
    pub left: &'a Slide,
    pub center: &'a Slide,
    pub right: &'a Slide,
}

impl<'a> VisibleTriple<'a> {
    pub(crate) fn resolve(slides: &'a [Slide], index: &CircularIndex) -> Self {
        Self {
            left: &slides[index.offset(CardPosition::Left.offset())],
            center: &slides[index.current()],
            right: &slides[index.offset(CardPosition::Right.offset())],
        }
    }

    pub fn at(&self, position: CardPosition) -> &'a Slide {
        match position {
            CardPosition::Left => self.left,
            CardPosition::Center => self.center,
            CardPosition::Right => self.right,
        }
    }

    pub fn ids(&self) -> [&'a SlideId; 3] {
        [&self.left.id, &self.center.id, &self.right.id]
    }
}
