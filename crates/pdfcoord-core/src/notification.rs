//! Transient notifications shown after user actions

use serde::Serialize;

use crate::error::ViewerError;

pub const DEFAULT_NOTIFICATION_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// CSS class suffix
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    /// Background color of the toast
    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#2e7d32",
            NotificationKind::Error => "#c62828",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub duration_ms: u32,
}

impl Notification {
    pub fn success(message: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
            duration_ms,
        }
    }

    pub fn error(message: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            duration_ms,
        }
    }

    /// Shown after coordinates were copied
    pub fn copied(text: &str, duration_ms: u32) -> Self {
        Self::success(format!("Copied {}", text), duration_ms)
    }

    /// Shown when the clipboard write failed
    pub fn copy_failed(err: &ViewerError, duration_ms: u32) -> Self {
        Self::error(err.to_string(), duration_ms)
    }

    pub fn class_name(&self) -> String {
        format!("toast toast-{}", self.kind.as_str())
    }
}
