//! Export options and the exported blob.

use qrframe_core::{ExportFormat, PipelineConfig};
use qrframe_layout::LayoutOptions;

/// Options shared by every export format.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    pub layout: LayoutOptions,
    /// JPEG quality (1-100)
    pub jpeg_quality: u8,
    /// Caption font size in pixels
    pub caption_font_size: f32,
    /// Ask the symbol provider for a quiet zone
    pub quiet_zone: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from(&PipelineConfig::default())
    }
}

impl From<&PipelineConfig> for ExportOptions {
    fn from(config: &PipelineConfig) -> Self {
        Self {
            layout: LayoutOptions::default(),
            jpeg_quality: config.jpeg_quality,
            caption_font_size: config.caption_font_size,
            quiet_zone: config.quiet_zone,
        }
    }
}

/// An encoded export, ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub bytes: Vec<u8>,
    pub format: ExportFormat,
}

impl Blob {
    pub fn new(bytes: Vec<u8>, format: ExportFormat) -> Self {
        Self { bytes, format }
    }

    pub fn file_name(&self) -> String {
        self.format.file_name()
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_config() {
        let options = ExportOptions::default();
        assert_eq!(options.jpeg_quality, 92);
        assert_eq!(options.caption_font_size, 22.0);
        assert!(options.quiet_zone);
        assert_eq!(options.layout, LayoutOptions::default());
    }

    #[test]
    fn test_from_config() {
        let config = PipelineConfig {
            jpeg_quality: 60,
            quiet_zone: false,
            ..PipelineConfig::default()
        };
        let options = ExportOptions::from(&config);
        assert_eq!(options.jpeg_quality, 60);
        assert!(!options.quiet_zone);
    }

    #[test]
    fn test_blob_naming_tracks_format() {
        let blob = Blob::new(vec![1, 2, 3], ExportFormat::RasterLossy);
        assert_eq!(blob.file_name(), "qrcode.jpeg");
        assert_eq!(blob.mime_type(), "image/jpeg");
        assert_eq!(blob.len(), 3);
        assert!(!blob.is_empty());
    }
}
