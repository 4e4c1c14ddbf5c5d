//! Symbol provider seam and the `qrcode`-backed implementation.

use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};
use tracing::trace;

use qrframe_core::{Color, ModuleRun, RenderRequest, SymbolError, VectorImage};

/// Modules of blank margin added on each side when a quiet zone is requested.
pub const QUIET_ZONE_MODULES: u32 = 4;

/// QR error correction levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrection {
    /// ~7% recovery
    Low,
    /// ~15% recovery
    Medium,
    /// ~25% recovery
    Quartile,
    /// ~30% recovery
    #[default]
    High,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

/// What to encode and how the symbol should look.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolRequest {
    pub text: String,
    /// Rendered width and height in pixels
    pub size: u32,
    pub error_correction: ErrorCorrection,
    pub foreground: Color,
    pub background: Color,
    /// Surround the symbol with a quiet zone
    pub margin: bool,
}

impl SymbolRequest {
    /// The symbol for a render request: its text, size and scheme colors, at
    /// the highest error correction level, with a quiet zone.
    pub fn from_request(request: &RenderRequest) -> Self {
        Self {
            text: request.text.clone(),
            size: request.qr_size,
            error_correction: ErrorCorrection::High,
            foreground: request.color_scheme.fg_color,
            background: request.color_scheme.bg_color,
            margin: true,
        }
    }

    pub fn with_margin(mut self, margin: bool) -> Self {
        self.margin = margin;
        self
    }
}

/// Encodes text into a QR vector image.
pub trait SymbolProvider {
    fn render(&self, request: &SymbolRequest) -> Result<VectorImage, SymbolError>;
}

/// Provider backed by the `qrcode` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrcodeProvider;

impl QrcodeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl SymbolProvider for QrcodeProvider {
    fn render(&self, request: &SymbolRequest) -> Result<VectorImage, SymbolError> {
        if request.text.is_empty() {
            return Err(SymbolError::EmptyData);
        }

        let code = QrCode::with_error_correction_level(
            request.text.as_bytes(),
            request.error_correction.into(),
        )
        .map_err(|e| match e {
            QrError::DataTooLong => SymbolError::DataTooLong,
            other => SymbolError::Encode {
                reason: other.to_string(),
            },
        })?;

        let width = code.width();
        let margin = if request.margin { QUIET_ZONE_MODULES } else { 0 };
        let view_box = width as u32 + 2 * margin;

        let mut image = VectorImage::new(request.size, view_box, request.background, request.foreground);

        // Merge each row's dark modules into horizontal runs.
        let colors = code.to_colors();
        for (y, row) in colors.chunks(width).enumerate() {
            let mut start: Option<usize> = None;
            for (x, color) in row.iter().enumerate() {
                let dark = *color == qrcode::Color::Dark;
                match (dark, start) {
                    (true, None) => start = Some(x),
                    (false, Some(s)) => {
                        image.push_run(ModuleRun::new(s as u32 + margin, y as u32 + margin, (x - s) as u32));
                        start = None;
                    }
                    _ => {}
                }
            }
            if let Some(s) = start {
                image.push_run(ModuleRun::new(s as u32 + margin, y as u32 + margin, (width - s) as u32));
            }
        }

        trace!(
            modules = width,
            view_box,
            runs = image.runs.len(),
            "encoded QR symbol"
        );

        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrframe_core::{ColorScheme, RenderRequest};

    fn request(text: &str) -> SymbolRequest {
        SymbolRequest::from_request(&RenderRequest::new(text))
    }

    #[test]
    fn test_from_request_uses_scheme_and_high_ecc() {
        let ocean = ColorScheme::by_name("Ocean").unwrap();
        let r = SymbolRequest::from_request(&RenderRequest::new("hi").with_scheme(ocean));
        assert_eq!(r.error_correction, ErrorCorrection::High);
        assert_eq!(r.foreground, ocean.fg_color);
        assert_eq!(r.background, ocean.bg_color);
        assert_eq!(r.size, 512);
        assert!(r.margin);
    }

    #[test]
    fn test_render_with_quiet_zone() {
        let image = QrcodeProvider::new().render(&request("https://example.com")).unwrap();
        assert!(image.validate().is_ok());
        assert_eq!(image.size, 512);

        // Symbol sides are always 17 + 4 * version modules.
        let modules = image.view_box - 2 * QUIET_ZONE_MODULES;
        assert_eq!(modules % 4, 1);
        assert!(modules >= 21);

        // Nothing is drawn inside the quiet zone.
        for run in &image.runs {
            assert!(run.x >= QUIET_ZONE_MODULES && run.y >= QUIET_ZONE_MODULES);
            assert!(run.x + run.len <= image.view_box - QUIET_ZONE_MODULES);
            assert!(run.y < image.view_box - QUIET_ZONE_MODULES);
        }

        // The top-left finder pattern starts with a run of seven dark modules.
        assert_eq!(
            image.runs.first(),
            Some(&ModuleRun::new(QUIET_ZONE_MODULES, QUIET_ZONE_MODULES, 7))
        );
    }

    #[test]
    fn test_render_without_margin() {
        let image = QrcodeProvider::new()
            .render(&request("https://example.com").with_margin(false))
            .unwrap();
        assert_eq!(image.runs.first(), Some(&ModuleRun::new(0, 0, 7)));
        assert_eq!(image.view_box % 4, 1);
    }

    #[test]
    fn test_render_is_deterministic() {
        let provider = QrcodeProvider::new();
        let a = provider.render(&request("same input")).unwrap();
        let b = provider.render(&request("same input")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_svg(), b.to_svg());
    }

    #[test]
    fn test_svg_carries_scheme_colors() {
        let sunset = ColorScheme::by_name("Sunset").unwrap();
        let r = SymbolRequest::from_request(&RenderRequest::new("hello").with_scheme(sunset));
        let svg = QrcodeProvider::new().render(&r).unwrap().to_svg();
        assert!(svg.contains("#E65100"));
        assert!(svg.contains("#FFF3E0"));
    }

    #[test]
    fn test_empty_text() {
        assert!(matches!(
            QrcodeProvider::new().render(&request("")),
            Err(SymbolError::EmptyData)
        ));
    }

    #[test]
    fn test_too_long() {
        let text = "x".repeat(4000);
        assert!(matches!(
            QrcodeProvider::new().render(&request(&text)),
            Err(SymbolError::DataTooLong)
        ));
    }
}
