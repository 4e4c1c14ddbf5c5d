//! Owned RGBA pixel surface with a triangle rasterizer.

use glam::Vec2;
use image::RgbaImage;
use qrframe_core::{Color, RenderError};

use crate::shapes::{Mesh, Tessellator};

/// An RGBA8 pixel buffer.
///
/// Each export allocates its own surface; nothing here is shared.
pub struct Surface {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
    tessellator: Tessellator,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Surface {
    /// Create a transparent surface with the given dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            buffer: vec![0; width as usize * height as usize * 4],
            tessellator: Tessellator::new(),
        })
    }

    /// Get the surface width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the surface height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get a reference to the raw pixel buffer.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Read one pixel. Returns `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        let p = &self.buffer[idx..idx + 4];
        Some(Color::rgba8(p[0], p[1], p[2], p[3]))
    }

    /// Convert into an `image` buffer for encoding.
    pub fn into_rgba_image(self) -> RgbaImage {
        // The buffer length always matches the dimensions.
        RgbaImage::from_raw(self.width, self.height, self.buffer)
            .unwrap_or_else(|| RgbaImage::new(0, 0))
    }

    /// Fill the whole surface with one color.
    pub fn clear(&mut self, color: Color) {
        let rgba = color.to_rgba8();
        for chunk in self.buffer.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Fill an axis-aligned rectangle.
    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let mut mesh = Mesh::new();
        self.tessellator.tessellate_rect(x, y, width, height, &mut mesh);
        self.fill_mesh(&mesh, color);
    }

    /// Fill a rectangle with uniformly rounded corners.
    pub fn fill_rounded_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        color: Color,
    ) {
        let mut mesh = Mesh::new();
        self.tessellator
            .tessellate_rounded_rect(x, y, width, height, radius, &mut mesh);
        self.fill_mesh(&mesh, color);
    }

    /// Rasterize a tessellated mesh with a solid color.
    pub fn fill_mesh(&mut self, mesh: &Mesh, color: Color) {
        for [v0, v1, v2] in mesh.triangles() {
            self.rasterize_triangle(v0, v1, v2, color);
        }
    }

    /// Blit `src` scaled to `width` x `height` at `(x, y)` with nearest-neighbour
    /// sampling. Pixels falling outside this surface are dropped.
    pub fn draw_surface(&mut self, src: &Surface, x: i32, y: i32, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        for dy in 0..height {
            let ty = y + dy as i32;
            if ty < 0 || ty >= self.height as i32 {
                continue;
            }
            let sy = (dy as u64 * src.height as u64 / height as u64) as u32;

            for dx in 0..width {
                let tx = x + dx as i32;
                if tx < 0 || tx >= self.width as i32 {
                    continue;
                }
                let sx = (dx as u64 * src.width as u64 / width as u64) as u32;

                let s = src.index(sx, sy);
                let rgba = [
                    src.buffer[s],
                    src.buffer[s + 1],
                    src.buffer[s + 2],
                    src.buffer[s + 3],
                ];
                self.blend_pixel(tx as u32, ty as u32, Color::rgba8(rgba[0], rgba[1], rgba[2], rgba[3]));
            }
        }
    }

    /// Paint one pixel, blending when the color is translucent.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x >= self.width || y >= self.height || color.a == 0 {
            return;
        }
        let idx = self.index(x, y);

        if color.is_opaque() {
            self.buffer[idx..idx + 4].copy_from_slice(&color.to_rgba8());
            return;
        }

        // Standard source-over: out = src * alpha + dst * (1 - alpha)
        let a = color.a as u32;
        let inv = 255 - a;
        let src = color.to_rgba8();
        for c in 0..3 {
            let dst = self.buffer[idx + c] as u32;
            self.buffer[idx + c] = ((src[c] as u32 * a + dst * inv + 127) / 255) as u8;
        }
        let dst_a = self.buffer[idx + 3] as u32;
        self.buffer[idx + 3] = (a + (dst_a * inv + 127) / 255) as u8;
    }

    /// Rasterize a single triangle using edge functions, sampling pixel centres.
    fn rasterize_triangle(&mut self, v0: Vec2, v1: Vec2, v2: Vec2, color: Color) {
        // Get bounding box
        let min_x = v0.x.min(v1.x).min(v2.x).max(0.0).floor() as i32;
        let max_x = v0.x.max(v1.x).max(v2.x).min(self.width as f32 - 1.0).ceil() as i32;
        let min_y = v0.y.min(v1.y).min(v2.y).max(0.0).floor() as i32;
        let max_y = v0.y.max(v1.y).max(v2.y).min(self.height as f32 - 1.0).ceil() as i32;

        let area = edge_function(v0, v1, v2);
        if area.abs() < 0.0001 {
            return; // Degenerate triangle
        }

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);

                let w0 = edge_function(v1, v2, p);
                let w1 = edge_function(v2, v0, p);
                let w2 = edge_function(v0, v1, p);

                // Inside for either winding
                if (w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0) || (w0 <= 0.0 && w1 <= 0.0 && w2 <= 0.0) {
                    self.blend_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

/// Edge function for triangle rasterization.
/// Returns positive if point p is to the left of edge (a, b).
#[inline]
fn edge_function(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}
