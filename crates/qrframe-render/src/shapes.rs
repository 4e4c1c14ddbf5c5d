//! Shape tessellation for 2D rendering.

use glam::Vec2;
use lyon::geom::{point, Box2D};
use lyon::path::builder::BorderRadii;
use lyon::path::{Path, Winding};
use lyon::tessellation::{BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers};

/// Tessellated triangle mesh ready for rasterization.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec2; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }
}

/// Tessellator for converting shapes to meshes.
pub struct Tessellator {
    fill_tessellator: FillTessellator,
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::new()
    }
}

impl Tessellator {
    pub fn new() -> Self {
        Self {
            fill_tessellator: FillTessellator::new(),
        }
    }

    /// Tessellate an axis-aligned rectangle into two triangles.
    pub fn tessellate_rect(&mut self, x: f32, y: f32, width: f32, height: f32, mesh: &mut Mesh) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let base = mesh.vertices.len() as u32;

        mesh.vertices.push(Vec2::new(x, y));
        mesh.vertices.push(Vec2::new(x + width, y));
        mesh.vertices.push(Vec2::new(x + width, y + height));
        mesh.vertices.push(Vec2::new(x, y + height));

        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Tessellate a rectangle with uniformly rounded corners.
    ///
    /// The radius is clamped to half the shorter side. A zero radius produces a
    /// plain rectangle.
    pub fn tessellate_rounded_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        mesh: &mut Mesh,
    ) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        let radius = radius.clamp(0.0, width.min(height) / 2.0);
        if radius == 0.0 {
            self.tessellate_rect(x, y, width, height, mesh);
            return;
        }

        let path = build_rounded_rect_path(x, y, width, height, radius);
        self.tessellate_fill(&path, mesh);
    }

    fn tessellate_fill(&mut self, path: &Path, mesh: &mut Mesh) {
        let mut buffers: VertexBuffers<Vec2, u32> = VertexBuffers::new();

        let result = self.fill_tessellator.tessellate_path(
            path,
            &FillOptions::default(),
            &mut BuffersBuilder::new(&mut buffers, |vertex: FillVertex| {
                let p = vertex.position();
                Vec2::new(p.x, p.y)
            }),
        );

        if result.is_ok() {
            let base = mesh.vertices.len() as u32;
            mesh.vertices.extend(buffers.vertices);
            mesh.indices.extend(buffers.indices.iter().map(|i| i + base));
        }
    }
}

fn build_rounded_rect_path(x: f32, y: f32, width: f32, height: f32, radius: f32) -> Path {
    let mut builder = Path::builder();

    let radii = BorderRadii {
        top_left: radius,
        top_right: radius,
        bottom_left: radius,
        bottom_right: radius,
    };

    let rect = Box2D::new(point(x, y), point(x + width, y + height));

    builder.add_rounded_rectangle(&rect, &radii, Winding::Positive);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tessellate_rect() {
        let mut tessellator = Tessellator::new();
        let mut mesh = Mesh::new();

        tessellator.tessellate_rect(0.0, 0.0, 100.0, 50.0, &mut mesh);

        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        assert_eq!(mesh.triangles().count(), 2);
    }

    #[test]
    fn test_tessellate_empty_rect() {
        let mut tessellator = Tessellator::new();
        let mut mesh = Mesh::new();

        tessellator.tessellate_rect(0.0, 0.0, 0.0, 50.0, &mut mesh);
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_tessellate_rounded_rect() {
        let mut tessellator = Tessellator::new();
        let mut mesh = Mesh::new();

        tessellator.tessellate_rounded_rect(0.0, 0.0, 100.0, 50.0, 10.0, &mut mesh);

        assert!(mesh.vertices.len() > 4);
        assert!(!mesh.is_empty());
        for v in &mesh.vertices {
            assert!(v.x >= -0.01 && v.x <= 100.01);
            assert!(v.y >= -0.01 && v.y <= 50.01);
        }
    }

    #[test]
    fn test_zero_radius_is_plain_rect() {
        let mut tessellator = Tessellator::new();
        let mut mesh = Mesh::new();

        tessellator.tessellate_rounded_rect(0.0, 0.0, 100.0, 50.0, 0.0, &mut mesh);
        assert_eq!(mesh.vertices.len(), 4);
    }

    #[test]
    fn test_mesh_offsets_indices() {
        let mut tessellator = Tessellator::new();
        let mut mesh = Mesh::new();

        tessellator.tessellate_rect(0.0, 0.0, 10.0, 10.0, &mut mesh);
        tessellator.tessellate_rounded_rect(20.0, 0.0, 10.0, 10.0, 2.0, &mut mesh);

        let max_index = *mesh.indices.iter().max().unwrap() as usize;
        assert!(max_index < mesh.vertices.len());
        assert!(mesh.indices[6..].iter().all(|&i| i >= 4));
    }
}
