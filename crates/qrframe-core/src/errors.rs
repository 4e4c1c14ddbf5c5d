//! Error types for the qrframe pipeline.

use thiserror::Error;

/// Errors during layout computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Invalid dimension for {name}: {value} (must be greater than zero)")]
    InvalidDimension { name: &'static str, value: u32 },
}

/// Errors raised by a QR symbol provider.
#[derive(Debug, Error)]
pub enum SymbolError {
    #[error("Nothing to encode")]
    EmptyData,

    #[error("Text is too long to fit in a QR symbol")]
    DataTooLong,

    #[error("QR encoding failed: {reason}")]
    Encode { reason: String },
}

/// Errors during rasterization.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    #[error("Vector image could not be rasterized: {reason}")]
    DecodeFailed { reason: String },
}

/// Errors during export.
///
/// Every variant is local to one export attempt; nothing is retried and no partial
/// artifact is produced.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Please enter some text to generate a QR code")]
    EmptyInput,

    #[error("No rendered QR image is available")]
    MissingSource,

    #[error("Failed to decode the QR image: {reason}")]
    DecodeFailure { reason: String },

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Symbol(#[from] SymbolError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Encoding {format} failed: {reason}")]
    EncodeFailed { format: &'static str, reason: String },
}

impl ExportError {
    /// Whether the condition must be reported to the user. Everything else may
    /// fail silently from the pipeline's point of view.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, ExportError::EmptyInput)
    }
}

/// Errors while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {reason}")]
    Invalid { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_empty_input_is_user_visible() {
        assert!(ExportError::EmptyInput.is_user_visible());
        assert!(!ExportError::MissingSource.is_user_visible());
        assert!(!ExportError::DecodeFailure {
            reason: "bad".into()
        }
        .is_user_visible());
    }

    #[test]
    fn test_layout_error_wraps_transparently() {
        let err: ExportError = LayoutError::InvalidDimension {
            name: "qr_size",
            value: 0,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid dimension for qr_size: 0 (must be greater than zero)"
        );
    }
}
