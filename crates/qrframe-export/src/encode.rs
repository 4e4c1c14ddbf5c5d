//! Raster encoding through the `image` crate.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use qrframe_core::ExportError;
use qrframe_render::Surface;

/// Encode a surface as PNG, keeping alpha.
pub fn encode_png(surface: Surface) -> Result<Vec<u8>, ExportError> {
    let image = surface.into_rgba_image();
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(|e| ExportError::EncodeFailed {
            format: "png",
            reason: e.to_string(),
        })?;
    Ok(bytes.into_inner())
}

/// Encode a surface as JPEG at the given quality. Alpha is dropped.
pub fn encode_jpeg(surface: Surface, quality: u8) -> Result<Vec<u8>, ExportError> {
    let rgb = DynamicImage::ImageRgba8(surface.into_rgba_image()).into_rgb8();
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100))
        .encode_image(&rgb)
        .map_err(|e| ExportError::EncodeFailed {
            format: "jpeg",
            reason: e.to_string(),
        })?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrframe_core::Color;

    fn surface(color: Color) -> Surface {
        let mut surface = Surface::new(16, 8).unwrap();
        surface.clear(color);
        surface
    }

    #[test]
    fn test_png_keeps_pixels() {
        let color = Color::rgb8(0x0D, 0x47, 0xA1);
        let bytes = encode_png(surface(color)).unwrap();
        assert_eq!(&bytes[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (16, 8));
        assert_eq!(decoded.get_pixel(15, 7).0, color.to_rgba8());
    }

    #[test]
    fn test_jpeg_has_soi_marker() {
        let bytes = encode_jpeg(surface(Color::WHITE), 92).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 8));
    }

    #[test]
    fn test_jpeg_quality_is_clamped() {
        assert!(encode_jpeg(surface(Color::BLACK), 0).is_ok());
    }
}
