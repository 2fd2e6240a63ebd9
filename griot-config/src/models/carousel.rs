use std::time::Duration;

use griot_core::carousel::{CarouselTiming, Easing};
use serde::{Deserialize, Serialize};

use crate::validation::ConfigGuardRailError;

/// Carousel cadence as written in config files.
///
/// Durations are plain milliseconds here; `GRIOT_AUTO_ADVANCE` and
/// `GRIOT_TRANSITION` accept humantime strings and are converted on load.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Time between the starts of two auto-advance transitions.
    pub auto_advance_period_ms: u64,
    /// How long one slide transition animates.
    pub transition_duration_ms: u64,
    /// Sampling interval of the animation task.
    pub frame_interval_ms: u64,
    /// Pause after a manual touch before auto-advance resumes.
    pub resume_delay_ms: u64,
    pub easing: Easing,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_period_ms: 5_000,
            transition_duration_ms: 1_000,
            frame_interval_ms: 16,
            resume_delay_ms: 2_000,
            easing: Easing::default(),
        }
    }
}

impl CarouselConfig {
    pub fn auto_advance_period(&self) -> Duration {
        Duration::from_millis(self.auto_advance_period_ms)
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }

    /// Validated engine timing.
    pub fn timing(&self) -> Result<CarouselTiming, ConfigGuardRailError> {
        for (field, value) in [
            ("auto_advance_period_ms", self.auto_advance_period_ms),
            ("transition_duration_ms", self.transition_duration_ms),
            ("frame_interval_ms", self.frame_interval_ms),
        ] {
            if value == 0 {
                return Err(ConfigGuardRailError::ZeroDuration { field });
            }
        }

        Ok(CarouselTiming {
            auto_advance_period: self.auto_advance_period(),
            transition_duration: self.transition_duration(),
            frame_interval: Duration::from_millis(self.frame_interval_ms),
            resume_delay: Duration::from_millis(self.resume_delay_ms),
            easing: self.easing,
        })
    }
}
