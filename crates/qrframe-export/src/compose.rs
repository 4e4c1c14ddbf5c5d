//! Raster composition: background, frame ring, symbol, caption.

use qrframe_core::{CaptionBackground, RenderError, RenderRequest};
use qrframe_layout::{Bounds, Geometry};
use qrframe_render::{Surface, TextRenderer};
use tracing::trace;

/// Distance from the top of a minimal caption box to the text baseline.
const MINIMAL_BASELINE: u32 = 25;

/// Draw a composite onto a fresh surface.
///
/// Drawing happens strictly in z-order: background, frame ring, symbol, caption.
/// `qr` is scaled to exactly the symbol size at the symbol origin.
pub fn compose(
    request: &RenderRequest,
    geometry: &Geometry,
    qr: &Surface,
    caption_font_size: f32,
) -> Result<Surface, RenderError> {
    let scheme = request.color_scheme;
    let mut surface = Surface::new(geometry.canvas_width, geometry.canvas_height)?;

    if geometry.frame_active() {
        surface.clear(scheme.bg_color);
        draw_frame(&mut surface, request, geometry);
    } else {
        surface.clear(scheme.display_bg);
    }
    trace!(framed = geometry.frame_active(), "filled background");

    let origin = geometry.qr_origin();
    surface.draw_surface(
        qr,
        origin.x as i32,
        origin.y as i32,
        geometry.qr_size,
        geometry.qr_size,
    );

    if let Some(bounds) = geometry.caption_bounds() {
        draw_caption(&mut surface, request, bounds, caption_font_size);
        trace!(caption = %request.caption, "drew caption");
    }

    Ok(surface)
}

fn draw_frame(surface: &mut Surface, request: &RenderRequest, geometry: &Geometry) {
    let scheme = request.color_scheme;
    let radius = request.caption_style.frame_radius as f32;
    let thickness = geometry.frame_thickness as f32;
    let width = geometry.canvas_width as f32;
    let height = geometry.canvas_height as f32;

    surface.fill_rounded_rect(0.0, 0.0, width, height, radius, scheme.fg_color);
    surface.fill_rounded_rect(
        thickness,
        thickness,
        width - 2.0 * thickness,
        height - 2.0 * thickness,
        (radius - thickness).max(0.0),
        scheme.bg_color,
    );
}

fn draw_caption(surface: &mut Surface, request: &RenderRequest, bounds: Bounds, font_size: f32) {
    let scheme = request.color_scheme;
    let renderer = TextRenderer::new(font_size).bold();
    let metrics = renderer.measure(&request.caption);
    let x = bounds.x as i32 + (bounds.width as i32 - metrics.width as i32) / 2;

    match request.caption_style.background {
        CaptionBackground::Solid => {
            surface.fill_rounded_rect(
                bounds.x as f32,
                bounds.y as f32,
                bounds.width as f32,
                bounds.height as f32,
                request.caption_style.border_radius as f32,
                scheme.fg_color,
            );
            let y = bounds.y as i32 + (bounds.height as i32 - metrics.height as i32) / 2;
            renderer.draw(surface, &request.caption, x, y, scheme.bg_color);
        }
        CaptionBackground::Minimal => {
            let y = (bounds.y + MINIMAL_BASELINE) as i32 - metrics.ascent as i32;
            renderer.draw(surface, &request.caption, x, y, scheme.fg_color);
        }
        CaptionBackground::None => {}
    }
}
