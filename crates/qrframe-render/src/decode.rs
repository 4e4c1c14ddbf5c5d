//! Decoding a vector QR image into pixels.
//!
//! Decoding is the one asynchronous step of an export. Callers await it before
//! touching the output surface, so a failed decode never leaves partial pixels.

use qrframe_core::{RenderError, VectorImage};
use tracing::debug;

use crate::surface::Surface;

/// Turns a vector image into a surface at the image's pixel size.
#[allow(async_fn_in_trait)]
pub trait RasterDecoder {
    async fn decode(&self, image: &VectorImage) -> Result<Surface, RenderError>;
}

/// Decoder that rasterizes module runs directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorRasterizer;

impl VectorRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous body of [`RasterDecoder::decode`].
    pub fn rasterize(&self, image: &VectorImage) -> Result<Surface, RenderError> {
        image
            .validate()
            .map_err(|reason| RenderError::DecodeFailed { reason })?;

        let mut surface = Surface::new(image.size, image.size)?;
        surface.clear(image.background);

        let scale = image.size as f32 / image.view_box as f32;
        for run in &image.runs {
            surface.fill_rect(
                run.x as f32 * scale,
                run.y as f32 * scale,
                run.len as f32 * scale,
                scale,
                image.foreground,
            );
        }

        debug!(size = image.size, runs = image.runs.len(), "rasterized vector image");
        Ok(surface)
    }
}

impl RasterDecoder for VectorRasterizer {
    async fn decode(&self, image: &VectorImage) -> Result<Surface, RenderError> {
        self.rasterize(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrframe_core::{Color, ModuleRun};

    fn checker() -> VectorImage {
        // 4-module view box rendered at 8px: each module is 2x2 pixels.
        let mut image = VectorImage::new(8, 4, Color::WHITE, Color::BLACK);
        image.push_run(ModuleRun::new(0, 0, 1));
        image.push_run(ModuleRun::new(1, 1, 2));
        image
    }

    #[test]
    fn test_decode_module_grid() {
        let surface = pollster::block_on(VectorRasterizer::new().decode(&checker())).unwrap();
        assert_eq!((surface.width(), surface.height()), (8, 8));

        assert_eq!(surface.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(surface.pixel(1, 1), Some(Color::BLACK));
        assert_eq!(surface.pixel(2, 0), Some(Color::WHITE));
        assert_eq!(surface.pixel(2, 2), Some(Color::BLACK));
        assert_eq!(surface.pixel(5, 3), Some(Color::BLACK));
        assert_eq!(surface.pixel(6, 2), Some(Color::WHITE));
        assert_eq!(surface.pixel(7, 7), Some(Color::WHITE));
    }

    #[test]
    fn test_decode_non_integer_scale_has_no_gaps() {
        let mut image = VectorImage::new(100, 3, Color::WHITE, Color::BLACK);
        image.push_run(ModuleRun::new(0, 0, 1));
        image.push_run(ModuleRun::new(1, 0, 2));
        let surface = VectorRasterizer::new().rasterize(&image).unwrap();
        for x in 0..100 {
            assert_eq!(surface.pixel(x, 10), Some(Color::BLACK));
        }
        assert_eq!(surface.pixel(50, 40), Some(Color::WHITE));
    }

    #[test]
    fn test_decode_rejects_invalid_image() {
        let mut image = checker();
        image.push_run(ModuleRun::new(3, 0, 5));
        let result = pollster::block_on(VectorRasterizer::new().decode(&image));
        assert!(matches!(result, Err(RenderError::DecodeFailed { .. })));
    }

    #[test]
    fn test_decode_rejects_zero_size() {
        let image = VectorImage::new(0, 4, Color::WHITE, Color::BLACK);
        assert!(VectorRasterizer::new().rasterize(&image).is_err());
    }
}
