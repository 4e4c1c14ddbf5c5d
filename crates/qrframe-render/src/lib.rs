//! 2D software rendering for qrframe.
//!
//! This crate provides a CPU rasterizer for composing exports:
//! - [`Surface`]: an owned RGBA pixel buffer with solid-color fills
//! - [`Tessellator`]: lyon-based tessellation of rectangles and rounded rectangles
//! - [`TextRenderer`]: a built-in bitmap font for captions
//! - [`RasterDecoder`]: the asynchronous vector-to-pixel decode step

mod decode;
mod font;
mod shapes;
mod surface;
mod text;

pub use decode::{RasterDecoder, VectorRasterizer};
pub use shapes::{Mesh, Tessellator};
pub use surface::Surface;
pub use text::{TextMetrics, TextRenderer};
