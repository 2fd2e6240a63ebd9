use std::time::Duration;

use super::easing::Easing;

/// Cadence of the auto-advancing carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselTiming {
    /// Time between the starts of two auto-advance transitions.
    pub auto_advance_period: Duration,
    /// Time one transition takes to slide the cards.
    pub transition_duration: Duration,
    /// How often the driver samples progress while animating.
    pub frame_interval: Duration,
    /// How long a manual touch holds off the next auto-advance.
    pub resume_delay: Duration,
    pub easing: Easing,
}

impl CarouselTiming {
    pub const DEFAULT_AUTO_ADVANCE_PERIOD: Duration = Duration::from_millis(5000);
    pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(1000);
    pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);
    pub const DEFAULT_RESUME_DELAY: Duration = Duration::from_millis(2000);

    pub fn with_periods(
        auto_advance_period: Duration,
        transition_duration: Duration,
    ) -> Self {
        Self {
            auto_advance_period,
            transition_duration,
            ..Self::default()
        }
    }
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            auto_advance_period: Self::DEFAULT_AUTO_ADVANCE_PERIOD,
            transition_duration: Self::DEFAULT_TRANSITION_DURATION,
            frame_interval: Self::DEFAULT_FRAME_INTERVAL,
            resume_delay: Self::DEFAULT_RESUME_DELAY,
            easing: Easing::EaseInOut,
        }
    }
}
