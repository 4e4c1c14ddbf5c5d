//! Pipeline configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::request::DEFAULT_QR_SIZE;
use crate::types::ColorScheme;

/// Tunables for the export pipeline, loaded from JSON.
///
/// Missing fields take their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Side length of the QR symbol in pixels
    pub qr_size: u32,
    /// Whether the provider adds a quiet zone around the symbol
    pub quiet_zone: bool,
    /// JPEG quality (1-100)
    pub jpeg_quality: u8,
    /// Caption font size in pixels
    pub caption_font_size: f32,
    /// Name of the scheme selected at startup
    pub default_scheme: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            qr_size: DEFAULT_QR_SIZE,
            quiet_zone: true,
            jpeg_quality: 92,
            caption_font_size: 22.0,
            default_scheme: "Classic".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: PipelineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.qr_size == 0 {
            return Err(ConfigError::Invalid {
                reason: "qr_size must be greater than zero".to_string(),
            });
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::Invalid {
                reason: format!("jpeg_quality must be 1-100, got {}", self.jpeg_quality),
            });
        }
        if !(self.caption_font_size.is_finite() && self.caption_font_size > 0.0) {
            return Err(ConfigError::Invalid {
                reason: format!("caption_font_size must be positive, got {}", self.caption_font_size),
            });
        }
        if ColorScheme::by_name(&self.default_scheme).is_none() {
            return Err(ConfigError::Invalid {
                reason: format!("unknown color scheme: {}", self.default_scheme),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.qr_size, 512);
        assert!(config.quiet_zone);
        assert_eq!(config.jpeg_quality, 92);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = PipelineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config =
            PipelineConfig::from_json_str(r#"{"jpeg_quality": 75, "default_scheme": "ocean"}"#)
                .unwrap();
        assert_eq!(config.jpeg_quality, 75);
        assert_eq!(config.qr_size, 512);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            PipelineConfig::from_json_str(r#"{"jpeg_quality": 0}"#),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            PipelineConfig::from_json_str(r#"{"qr_size": 0}"#),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            PipelineConfig::from_json_str(r#"{"default_scheme": "Neon"}"#),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            PipelineConfig::from_json_str("not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"qr_size": 256, "quiet_zone": false}}"#).unwrap();

        let config = PipelineConfig::load(file.path()).unwrap();
        assert_eq!(config.qr_size, 256);
        assert!(!config.quiet_zone);
    }
}
