use thiserror::Error;

use crate::models::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("carousel.{field} must be greater than zero")]
    ZeroDuration { field: &'static str },
    #[error("data directory path is empty")]
    EmptyDataDir,
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }
}

/// Reject settings the carousel cannot run with and collect the ones that
/// merely look wrong.
pub fn apply_guard_rails(
    config: &AppConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.data_dir.as_os_str().is_empty() {
        return Err(ConfigGuardRailError::EmptyDataDir);
    }

    let carousel = &config.carousel;
    carousel.timing()?;

    if carousel.transition_duration_ms >= carousel.auto_advance_period_ms {
        warnings.push_with_hint(
            format!(
                "transition ({} ms) is not shorter than the auto-advance period ({} ms); every other tick will be skipped",
                carousel.transition_duration_ms,
                carousel.auto_advance_period_ms
            ),
            "Lower carousel.transition_duration_ms or raise carousel.auto_advance_period_ms",
        );
    }

    if carousel.frame_interval_ms > carousel.transition_duration_ms {
        warnings.push(format!(
            "frame interval ({} ms) exceeds the transition duration; the slide will jump instead of animating",
            carousel.frame_interval_ms
        ));
    }

    if carousel.resume_delay_ms == 0 {
        warnings.push("resume_delay_ms is 0; touches will not pause the carousel");
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_without_warnings() {
        let warnings = apply_guard_rails(&AppConfig::default()).unwrap();
        assert!(warnings.items.is_empty());
    }

    #[test]
    fn slow_transition_warns() {
        let mut config = AppConfig::default();
        config.carousel.transition_duration_ms = 6_000;
        let warnings = apply_guard_rails(&config).unwrap();
        assert_eq!(warnings.items.len(), 1);
        assert!(warnings.items[0].hint.is_some());
    }

    #[test]
    fn empty_data_dir_is_rejected() {
        let mut config = AppConfig::default();
        config.data_dir = Default::default();
        assert!(matches!(
            apply_guard_rails(&config),
            Err(ConfigGuardRailError::EmptyDataDir)
        ));
    }
}
