//! Render requests and export formats.

use std::fmt;
use std::str::FromStr;

use crate::errors::ExportError;
use crate::types::{CaptionStyle, CaptionStyleId, ColorScheme};

/// Side length of the QR symbol in pixels.
pub const DEFAULT_QR_SIZE: u32 = 512;

/// Everything the pipeline needs for one export.
///
/// Rebuilt from editor state for every export and never persisted. The scheme and
/// caption style point into the static catalogs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub text: String,
    pub qr_size: u32,
    pub color_scheme: &'static ColorScheme,
    pub caption: String,
    pub show_caption: bool,
    pub caption_style: &'static CaptionStyle,
    pub show_frame: bool,
}

impl RenderRequest {
    /// A request with the default scheme, no caption and no frame.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            qr_size: DEFAULT_QR_SIZE,
            color_scheme: ColorScheme::classic(),
            caption: String::new(),
            show_caption: false,
            caption_style: CaptionStyle::none(),
            show_frame: false,
        }
    }

    pub fn with_scheme(mut self, scheme: &'static ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self.show_caption = !self.caption.is_empty();
        self
    }

    pub fn with_caption_style(mut self, id: CaptionStyleId) -> Self {
        self.caption_style = CaptionStyle::get(id);
        self
    }

    pub fn with_frame(mut self, show_frame: bool) -> Self {
        self.show_frame = show_frame;
        self
    }

    pub fn with_qr_size(mut self, qr_size: u32) -> Self {
        self.qr_size = qr_size;
        self
    }

    /// Reject requests with nothing to encode.
    pub fn validate(&self) -> Result<(), ExportError> {
        if self.text.is_empty() {
            return Err(ExportError::EmptyInput);
        }
        Ok(())
    }

    /// Whether the frame ring is drawn.
    pub fn frame_active(&self) -> bool {
        self.caption_style.has_frame && self.show_frame
    }

    /// Whether the caption is drawn.
    pub fn caption_visible(&self) -> bool {
        self.show_caption && !self.caption.is_empty() && self.caption_style.id != CaptionStyleId::None
    }
}

/// Output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// The provider's SVG, serialized verbatim. Frame and caption are not applied.
    Vector,
    /// PNG composite
    RasterLossless,
    /// JPEG composite
    RasterLossy,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [
        ExportFormat::Vector,
        ExportFormat::RasterLossless,
        ExportFormat::RasterLossy,
    ];

    /// File extension and MIME type.
    fn descriptor(&self) -> (&'static str, &'static str) {
        match self {
            ExportFormat::Vector => ("svg", "image/svg+xml;charset=utf-8"),
            ExportFormat::RasterLossless => ("png", "image/png"),
            ExportFormat::RasterLossy => ("jpeg", "image/jpeg"),
        }
    }

    pub fn extension(&self) -> &'static str {
        self.descriptor().0
    }

    pub fn mime_type(&self) -> &'static str {
        self.descriptor().1
    }

    /// Download file name, e.g. `qrcode.png`.
    pub fn file_name(&self) -> String {
        format!("qrcode.{}", self.extension())
    }

    pub fn is_raster(&self) -> bool {
        !matches!(self, ExportFormat::Vector)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" | "vector" => Ok(ExportFormat::Vector),
            "png" | "raster-lossless" => Ok(ExportFormat::RasterLossless),
            "jpeg" | "jpg" | "raster-lossy" => Ok(ExportFormat::RasterLossy),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}
