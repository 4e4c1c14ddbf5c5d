//! Layout computation for qrframe exports.
//!
//! A pure function from symbol size and frame/caption settings to canvas
//! geometry: canvas dimensions, symbol origin, caption box. No drawing, no I/O.
//!
//! # Example
//!
//! ```
//! use qrframe_core::{CaptionStyleId, RenderRequest};
//! use qrframe_layout::{compute_layout, LayoutInput, LayoutOptions};
//!
//! let request = RenderRequest::new("https://example.com")
//!     .with_caption_style(CaptionStyleId::Solid)
//!     .with_frame(true)
//!     .with_caption("Scan Me!");
//!
//! let geometry = compute_layout(&LayoutInput::from_request(&request), &LayoutOptions::default())?;
//! assert_eq!((geometry.canvas_width, geometry.canvas_height), (576, 696));
//! # Ok::<(), qrframe_core::LayoutError>(())
//! ```

mod bounds;
mod compute;

pub use bounds::Bounds;
pub use compute::{compute_layout, Geometry, LayoutInput, LayoutOptions};
