//! How a party joins the queue.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Queue joining mode, sent as the `mode` field of `create-group`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QueueMode {
    /// Queue alone.
    #[default]
    Solo,

    /// Queue with a friend who joins the group as second buyer.
    Friend,

    /// Join a watch party; watchers follow along without buying.
    Watch,
}

impl QueueMode {
    /// Wire name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueueMode::Solo => "solo",
            QueueMode::Friend => "friend",
            QueueMode::Watch => "watch",
        }
    }

    /// Label of the action that joins in this mode.
    pub fn action_label(&self) -> &'static str {
        match self {
            QueueMode::Solo => "Join Queue",
            QueueMode::Friend => "Queue With a Friend",
            QueueMode::Watch => "Join Watch Party",
        }
    }
}

impl fmt::Display for QueueMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueueMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solo" => Ok(QueueMode::Solo),
            "friend" => Ok(QueueMode::Friend),
            "watch" => Ok(QueueMode::Watch),
            other => Err(ValidationError::invalid_format(
                "mode",
                format!("expected solo, friend or watch, got '{}'", other),
            )),
        }
    }
}
