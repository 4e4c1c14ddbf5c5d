//! Editor state and its transitions.
//!
//! The selection widgets write here; the pipeline only ever sees the
//! [`RenderRequest`] derived from it. Coupled updates (typing a caption picks a
//! caption style and drops the frame) happen in these transitions so the layout
//! and compositor stay pure.

use crate::config::PipelineConfig;
use crate::request::{RenderRequest, DEFAULT_QR_SIZE};
use crate::types::{CaptionStyle, CaptionStyleId, ColorScheme, COLOR_SCHEMES};

/// Smallest selectable symbol size in pixels.
pub const MIN_QR_SIZE: u32 = 128;
/// Largest selectable symbol size in pixels.
pub const MAX_QR_SIZE: u32 = 512;
/// Size selection granularity in pixels.
pub const QR_SIZE_STEP: u32 = 32;

/// Current UI selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    text: String,
    qr_size: u32,
    scheme_index: usize,
    caption: String,
    show_caption: bool,
    caption_style: CaptionStyleId,
    show_frame: bool,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            text: String::new(),
            qr_size: DEFAULT_QR_SIZE,
            scheme_index: 0,
            caption: String::new(),
            show_caption: false,
            caption_style: CaptionStyleId::None,
            show_frame: false,
        }
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state from configuration. The configured size goes through the
    /// same clamp as [`EditorState::set_qr_size`].
    pub fn from_config(config: &PipelineConfig) -> Self {
        let mut state = Self {
            scheme_index: ColorScheme::index_of(&config.default_scheme).unwrap_or(0),
            ..Self::default()
        };
        state.set_qr_size(config.qr_size);
        state
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn show_caption(&self) -> bool {
        self.show_caption
    }

    pub fn show_frame(&self) -> bool {
        self.show_frame
    }

    pub fn qr_size(&self) -> u32 {
        self.qr_size
    }

    pub fn caption_style(&self) -> CaptionStyleId {
        self.caption_style
    }

    pub fn scheme(&self) -> &'static ColorScheme {
        &COLOR_SCHEMES[self.scheme_index]
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Update the caption text.
    ///
    /// The first non-empty caption turns the caption on, replaces the `none` style
    /// with `minimal` and turns the frame off. Clearing the caption hides it.
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        let was_empty = self.caption.is_empty();
        self.caption = caption.into();

        if self.caption.is_empty() {
            self.show_caption = false;
        } else if was_empty {
            self.show_caption = true;
            if self.caption_style == CaptionStyleId::None {
                self.caption_style = CaptionStyleId::Minimal;
            }
            self.show_frame = false;
        }
    }

    /// Toggle caption visibility. Stays off while the caption is empty.
    pub fn set_show_caption(&mut self, show: bool) {
        self.show_caption = show && !self.caption.is_empty();
    }

    /// Select a caption style. Selecting `none` also turns the frame off.
    pub fn select_caption_style(&mut self, id: CaptionStyleId) {
        self.caption_style = id;
        if id == CaptionStyleId::None {
            self.show_frame = false;
        }
    }

    /// Toggle the frame. Only has a visible effect for framed styles.
    pub fn set_show_frame(&mut self, show: bool) {
        self.show_frame = show;
    }

    /// Select a scheme by name. Returns false and keeps the current scheme if
    /// the name is unknown.
    pub fn select_scheme(&mut self, name: &str) -> bool {
        match ColorScheme::index_of(name) {
            Some(index) => {
                self.scheme_index = index;
                true
            }
            None => false,
        }
    }

    /// Set the symbol size, clamped to the selectable range and snapped to the
    /// nearest step.
    pub fn set_qr_size(&mut self, size: u32) {
        let clamped = size.clamp(MIN_QR_SIZE, MAX_QR_SIZE);
        let steps = (clamped - MIN_QR_SIZE + QR_SIZE_STEP / 2) / QR_SIZE_STEP;
        self.qr_size = (MIN_QR_SIZE + steps * QR_SIZE_STEP).min(MAX_QR_SIZE);
    }

    /// Derive a fresh request for an export.
    pub fn request(&self) -> RenderRequest {
        RenderRequest {
            text: self.text.clone(),
            qr_size: self.qr_size,
            color_scheme: self.scheme(),
            caption: self.caption.clone(),
            show_caption: self.show_caption,
            caption_style: CaptionStyle::get(self.caption_style),
            show_frame: self.show_frame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let state = EditorState::new();
        let request = state.request();
        assert_eq!(request.qr_size, 512);
        assert_eq!(request.color_scheme.name, "Classic");
        assert_eq!(request.caption_style.id, CaptionStyleId::None);
        assert!(!request.show_frame);
        assert!(!request.show_caption);
    }

    #[test]
    fn test_typing_caption_switches_style_and_drops_frame() {
        let mut state = EditorState::new();
        state.set_show_frame(true);
        state.set_caption("Scan Me!");

        assert!(state.show_caption());
        assert_eq!(state.caption_style(), CaptionStyleId::Minimal);
        assert!(!state.show_frame());
    }

    #[test]
    fn test_editing_caption_keeps_user_choices() {
        let mut state = EditorState::new();
        state.set_caption("Scan");
        state.select_caption_style(CaptionStyleId::Solid);
        state.set_show_frame(true);

        state.set_caption("Scan Me!");
        assert_eq!(state.caption_style(), CaptionStyleId::Solid);
        assert!(state.show_frame());
    }

    #[test]
    fn test_clearing_caption_hides_it() {
        let mut state = EditorState::new();
        state.set_caption("Hi");
        state.set_caption("");
        assert!(!state.show_caption());

        state.set_show_caption(true);
        assert!(!state.show_caption());
    }

    #[test]
    fn test_none_style_drops_frame() {
        let mut state = EditorState::new();
        state.select_caption_style(CaptionStyleId::Solid);
        state.set_show_frame(true);
        state.select_caption_style(CaptionStyleId::None);
        assert!(!state.show_frame());
    }

    #[test]
    fn test_select_scheme() {
        let mut state = EditorState::new();
        assert!(state.select_scheme("sunset"));
        assert_eq!(state.scheme().name, "Sunset");
        assert!(!state.select_scheme("Neon"));
        assert_eq!(state.scheme().name, "Sunset");
    }

    #[test]
    fn test_qr_size_is_clamped_and_snapped() {
        let mut state = EditorState::new();
        state.set_qr_size(10);
        assert_eq!(state.qr_size(), 128);
        state.set_qr_size(4096);
        assert_eq!(state.qr_size(), 512);
        state.set_qr_size(300);
        assert_eq!(state.qr_size(), 288);
        state.set_qr_size(305);
        assert_eq!(state.qr_size(), 320);
    }

    #[test]
    fn test_from_config() {
        let config = PipelineConfig {
            default_scheme: "Night".to_string(),
            qr_size: 256,
            ..PipelineConfig::default()
        };
        let state = EditorState::from_config(&config);
        assert_eq!(state.scheme().name, "Night");
        assert_eq!(state.qr_size(), 256);
    }

    #[test]
    fn test_from_config_clamps_size() {
        let config = PipelineConfig::from_json_str(r#"{"qr_size": 60000}"#).unwrap();
        assert_eq!(EditorState::from_config(&config).qr_size(), MAX_QR_SIZE);

        let config = PipelineConfig::from_json_str(r#"{"qr_size": 4294967295}"#).unwrap();
        assert_eq!(EditorState::from_config(&config).qr_size(), MAX_QR_SIZE);

        let config = PipelineConfig::from_json_str(r#"{"qr_size": 1}"#).unwrap();
        assert_eq!(EditorState::from_config(&config).qr_size(), MIN_QR_SIZE);
    }

    #[test]
    fn test_request_does_not_mutate_state() {
        let mut state = EditorState::new();
        state.set_text("https://example.com");
        let before = state.clone();
        let _ = state.request();
        assert_eq!(state, before);
    }
}
