//! Geometry computation from frame and caption settings.

use glam::UVec2;
use qrframe_core::{CaptionStyle, CaptionStyleId, LayoutError, RenderRequest};
use serde::Serialize;

use crate::bounds::Bounds;

/// Fixed layout constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Thickness of the frame ring when it is drawn
    pub frame_thickness: u32,
    /// Padding around the symbol when no frame is drawn
    pub unframed_padding: u32,
    /// Extra canvas height reserved below the symbol for a caption
    pub caption_height: u32,
    /// Gap between the symbol and the caption box
    pub caption_gap: u32,
    /// Height of the caption box
    pub caption_box_height: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            frame_thickness: 8,
            unframed_padding: 16,
            caption_height: 120,
            caption_gap: 4,
            caption_box_height: 50,
        }
    }
}

/// The inputs the layout depends on, and nothing else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInput<'a> {
    pub qr_size: u32,
    pub caption_style: &'a CaptionStyle,
    pub show_frame: bool,
    pub show_caption: bool,
    /// Whether the caption text is non-empty
    pub has_caption_text: bool,
}

impl<'a> LayoutInput<'a> {
    pub fn from_request(request: &'a RenderRequest) -> Self {
        Self {
            qr_size: request.qr_size,
            caption_style: request.caption_style,
            show_frame: request.show_frame,
            show_caption: request.show_caption,
            has_caption_text: !request.caption.is_empty(),
        }
    }

    fn frame_active(&self) -> bool {
        self.caption_style.has_frame && self.show_frame
    }

    fn caption_visible(&self) -> bool {
        self.show_caption && self.has_caption_text && self.caption_style.id != CaptionStyleId::None
    }
}

/// Computed canvas geometry, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Geometry {
    pub frame_thickness: u32,
    pub frame_padding: u32,
    pub caption_height: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub qr_size: u32,
    pub qr_origin_x: u32,
    pub qr_origin_y: u32,
    pub caption_origin_y: u32,
    pub caption_box_width: u32,
    pub caption_box_height: u32,
}

impl Geometry {
    pub fn frame_active(&self) -> bool {
        self.frame_thickness > 0
    }

    pub fn caption_visible(&self) -> bool {
        self.caption_height > 0
    }

    pub fn canvas_size(&self) -> UVec2 {
        UVec2::new(self.canvas_width, self.canvas_height)
    }

    pub fn qr_origin(&self) -> UVec2 {
        UVec2::new(self.qr_origin_x, self.qr_origin_y)
    }

    pub fn canvas_bounds(&self) -> Bounds {
        Bounds::new(0, 0, self.canvas_width, self.canvas_height)
    }

    /// The area inside the frame ring. Equals the canvas when no frame is drawn.
    pub fn frame_inner_bounds(&self) -> Bounds {
        self.canvas_bounds().inset(self.frame_thickness)
    }

    pub fn qr_bounds(&self) -> Bounds {
        Bounds::new(self.qr_origin_x, self.qr_origin_y, self.qr_size, self.qr_size)
    }

    /// The caption box, or `None` when no caption is drawn.
    pub fn caption_bounds(&self) -> Option<Bounds> {
        self.caption_visible().then(|| {
            Bounds::new(
                self.qr_origin_x,
                self.caption_origin_y,
                self.caption_box_width,
                self.caption_box_height,
            )
        })
    }
}

/// Compute the canvas geometry.
///
/// Deterministic in its inputs. Fails for a zero symbol size, or one so large
/// that the canvas does not fit in `u32` pixels.
pub fn compute_layout(input: &LayoutInput, options: &LayoutOptions) -> Result<Geometry, LayoutError> {
    if input.qr_size == 0 {
        return Err(LayoutError::InvalidDimension {
            name: "qr_size",
            value: input.qr_size,
        });
    }

    let framed = input.frame_active();
    let frame_thickness = if framed { options.frame_thickness } else { 0 };
    let frame_padding = if framed {
        input.caption_style.frame_padding
    } else {
        options.unframed_padding
    };
    let caption_height = if input.caption_visible() {
        options.caption_height
    } else {
        0
    };

    let qr_size = input.qr_size;
    let too_large = || LayoutError::InvalidDimension {
        name: "qr_size",
        value: qr_size,
    };

    let origin = frame_thickness.checked_add(frame_padding).ok_or_else(too_large)?;
    let square = origin
        .checked_mul(2)
        .and_then(|margins| margins.checked_add(qr_size))
        .ok_or_else(too_large)?;
    let canvas_height = square.checked_add(caption_height).ok_or_else(too_large)?;
    let caption_origin_y = origin
        .checked_add(qr_size)
        .and_then(|y| y.checked_add(options.caption_gap))
        .ok_or_else(too_large)?;

    Ok(Geometry {
        frame_thickness,
        frame_padding,
        caption_height,
        canvas_width: square,
        canvas_height,
        qr_size,
        qr_origin_x: origin,
        qr_origin_y: origin,
        caption_origin_y,
        caption_box_width: qr_size,
        caption_box_height: options.caption_box_height,
    })
}
