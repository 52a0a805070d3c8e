use crate::expiry::ExpiryPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

#[derive(thiserror::Error, Debug)]
pub enum NotificationError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("timeout_ms must be greater than zero")]
    InvalidTimeout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub policy: ExpiryPolicy,
    /// Paint at most this many of the most recent toasts.
    #[serde(default)]
    pub max_visible: Option<usize>,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            policy: ExpiryPolicy::default(),
            max_visible: None,
        }
    }
}

impl NotificationSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn from_toml_str(data: &str) -> Result<Self, NotificationError> {
        let settings: NotificationSettings = toml::from_str(data)?;
        settings.normalize()
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, NotificationError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&data)
    }

    /// Rejects a zero timeout and treats `max_visible = 0` as unlimited.
    pub fn normalize(mut self) -> Result<Self, NotificationError> {
        if self.timeout_ms == 0 {
            return Err(NotificationError::InvalidTimeout);
        }
        if self.max_visible == Some(0) {
            self.max_visible = None;
        }
        Ok(self)
    }
}
