//! Polling configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Timer periods of the live views
#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    /// Queue position refresh, in seconds
    #[serde(default = "default_queue_position_secs")]
    pub queue_position_secs: u64,

    /// Checkout countdown refresh, in seconds
    #[serde(default = "default_countdown_secs")]
    pub countdown_secs: u64,
}

impl PollingConfig {
    pub fn queue_position_period(&self) -> Duration {
        Duration::from_secs(self.queue_position_secs)
    }

    pub fn countdown_period(&self) -> Duration {
        Duration::from_secs(self.countdown_secs)
    }

    /// Validate polling configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.queue_position_secs == 0 {
            return Err(ValidationError::InvalidInterval("polling.queue_position_secs"));
        }
        if self.countdown_secs == 0 {
            return Err(ValidationError::InvalidInterval("polling.countdown_secs"));
        }
        Ok(())
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            queue_position_secs: default_queue_position_secs(),
            countdown_secs: default_countdown_secs(),
        }
    }
}

fn default_queue_position_secs() -> u64 {
    5
}

fn default_countdown_secs() -> u64 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polling_defaults() {
        let config = PollingConfig::default();
        assert_eq!(config.queue_position_period(), Duration::from_secs(5));
        assert_eq!(config.countdown_period(), Duration::from_secs(1));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let config = PollingConfig {
            countdown_secs: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidInterval("polling.countdown_secs"))
        );
    }
}
