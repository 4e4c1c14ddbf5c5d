//! Export for qrframe.
//!
//! Supported formats:
//! - Vector (SVG, the symbol only)
//! - Raster lossless (PNG composite)
//! - Raster lossy (JPEG composite)
//!
//! Raster composites stack a background, an optional frame ring, the QR symbol
//! and an optional caption, sized by [`qrframe_layout::compute_layout`].

mod compose;
mod encode;
mod options;
mod pipeline;

pub use compose::compose;
pub use encode::{encode_jpeg, encode_png};
pub use options::{Blob, ExportOptions};
pub use pipeline::{export, export_blocking, export_raster, export_vector, Exporter};
