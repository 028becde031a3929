use std::time::Duration;

use crate::{ArchiveError, Result};

pub const DEFAULT_BASE_URL: &str = "https://loteriascaixa-api.herokuapp.com/api/lotofacil";

#[derive(Debug, Clone)]
pub struct ArchiveConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Pause between two sequential archive calls.
    pub request_delay: Duration,
    /// Upper bound on draws fetched while walking back from the latest one.
    pub max_walk_steps: usize,
    /// Chance that a day is left out of a synthetic range.
    pub synthetic_omit_probability: f64,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
            request_delay: Duration::from_millis(200),
            max_walk_steps: 500,
            synthetic_omit_probability: 0.2,
        }
    }
}

impl ArchiveConfig {
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ArchiveError::ConfigError(
                "base_url cannot be empty".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.synthetic_omit_probability) {
            return Err(ArchiveError::ConfigError(format!(
                "synthetic_omit_probability must be within 0-1, got {}",
                self.synthetic_omit_probability
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ArchiveConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_walk_steps, 500);
        assert_eq!(config.request_delay, Duration::from_millis(200));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ArchiveConfig {
            base_url: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ArchiveConfig {
            synthetic_omit_probability: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
