//! Viewer configuration
//!
//! Every field is optional in JSON; missing fields take the A4 defaults.

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;
use crate::geometry::{SurfaceSize, A4_HEIGHT, A4_WIDTH};
use crate::notification::DEFAULT_NOTIFICATION_MS;
use crate::overlay::DEFAULT_LABEL_OFFSET;

/// pdf.js worker matching the library version loaded by the host page
pub const DEFAULT_WORKER_SRC: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/pdf.js/3.11.174/pdf.worker.min.js";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub target_width: f64,
    pub target_height: f64,
    pub label_offset: f64,
    pub worker_src: String,
    pub notification_ms: u32,
    pub line_color: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            target_width: A4_WIDTH,
            target_height: A4_HEIGHT,
            label_offset: DEFAULT_LABEL_OFFSET,
            worker_src: DEFAULT_WORKER_SRC.to_string(),
            notification_ms: DEFAULT_NOTIFICATION_MS,
            line_color: "red".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ViewerError> {
        let config: ViewerConfig =
            serde_json::from_str(json).map_err(|e| ViewerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ViewerError> {
        for (name, value) in [
            ("target_width", self.target_width),
            ("target_height", self.target_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ViewerError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !self.label_offset.is_finite() {
            return Err(ViewerError::Config("label_offset must be finite".into()));
        }
        if self.worker_src.trim().is_empty() {
            return Err(ViewerError::Config("worker_src is empty".into()));
        }
        Ok(())
    }

    pub fn surface(&self) -> SurfaceSize {
        SurfaceSize::new(self.target_width, self.target_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_a4() {
        let config = ViewerConfig::default();
        assert_eq!(config.surface(), SurfaceSize::a4());
        assert_eq!(config.label_offset, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = ViewerConfig::from_json("{}").unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config =
            ViewerConfig::from_json(r#"{"label_offset": 4, "line_color": "blue"}"#).unwrap();
        assert_eq!(config.label_offset, 4.0);
        assert_eq!(config.line_color, "blue");
        assert_eq!(config.target_width, A4_WIDTH);
    }

    #[test]
    fn test_rejects_zero_width() {
        let err = ViewerConfig::from_json(r#"{"target_width": 0}"#).unwrap_err();
        assert!(matches!(err, ViewerError::Config(_)));
    }

    #[test]
    fn test_page_number_is_not_configurable() {
        let config = ViewerConfig::from_json(r#"{"page_number": 3}"#).unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert!(!serde_json::to_string(&config).unwrap().contains("page_number"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = ViewerConfig::from_json("{not json").unwrap_err();
        assert!(err.to_string().starts_with("Invalid configuration:"));
    }
}
