use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// Identifier assigned to a notification when it is shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(String);

impl NotificationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NotificationId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Classification tag. Only affects how a toast is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Success,
    Error,
    Info,
}

impl NotificationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationStatus::Success => "success",
            NotificationStatus::Error => "error",
            NotificationStatus::Info => "info",
        }
    }
}

impl std::str::FromStr for NotificationStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(NotificationStatus::Success),
            "error" => Ok(NotificationStatus::Error),
            "info" => Ok(NotificationStatus::Info),
            other => Err(format!(
                "status must be 'success', 'error', or 'info' (got '{other}')"
            )),
        }
    }
}

/// An active notification as held by the center.
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<NotificationStatus>,
    #[serde(skip)]
    pub created_at: Instant,
}

impl PartialEq for Notification {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.description == other.description
            && self.status == other.status
    }
}

impl Eq for Notification {}

/// Input to [`crate::NotificationCenter::show`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NotificationRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<NotificationStatus>,
}

impl NotificationRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: NotificationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title).status(NotificationStatus::Success)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title).status(NotificationStatus::Error)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title).status(NotificationStatus::Info)
    }
}

impl From<&str> for NotificationRequest {
    fn from(title: &str) -> Self {
        Self::new(title)
    }
}

impl From<String> for NotificationRequest {
    fn from(title: String) -> Self {
        Self::new(title)
    }
}
