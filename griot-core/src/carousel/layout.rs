//! Screen placement of the three cards.
//!
//! Renderers feed the engine's eased progress in and get a horizontal offset,
//! a scale and a stacking order per card out. The numbers here are a visual
//! choice; nothing in the engine depends on them.

use super::triple::CardPosition;

/// Geometry of the card strip, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayout {
    pub card_width: f32,
    pub card_spacing: f32,
    /// Scale of the side cards relative to the centre card.
    pub side_scale: f32,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            card_width: 300.0,
            card_spacing: 25.0,
            side_scale: 0.83,
        }
    }
}

/// Placement of one card for a given progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Offset from the strip's centre line.
    pub translate_x: f32,
    pub scale: f32,
    pub z_index: u8,
}

impl CardLayout {
    /// Distance between the resting positions of adjacent cards.
    #[inline]
    pub fn stride(&self) -> f32 {
        self.card_width + self.card_spacing
    }

    /// Transform for `position` while a transition is `progress` of the way
    /// to the next settle point. Progress outside `[0, 1]` is clamped.
    ///
    /// Every card slides one stride to the left over a transition, so at
    /// `progress = 1` the right card sits where the centre card started,
    /// matching the triple after the commit.
    pub fn transform(&self, position: CardPosition, progress: f32) -> CardTransform {
        let p = progress.clamp(0.0, 1.0);
        let rest = position.offset() as f32 * self.stride();
        let translate_x = rest - p * self.stride();

        let scale = match position {
            CardPosition::Left => self.side_scale,
            CardPosition::Center => lerp(1.0, self.side_scale, p),
            CardPosition::Right => lerp(self.side_scale, 1.0, p),
        };

        // Whichever card is nearer the centre line draws on top.
        let z_index = match position {
            CardPosition::Center if p < 0.5 => 2,
            CardPosition::Right if p >= 0.5 => 2,
            _ => 1,
        };

        CardTransform {
            translate_x,
            scale,
            z_index,
        }
    }
}

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
