//! Command-line arguments and the editor state they produce.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use qrframe_core::{CaptionStyleId, EditorState, ExportFormat, PipelineConfig};

/// Export a QR code as SVG, PNG or JPEG, with an optional frame and caption
#[derive(Parser, Debug)]
#[command(name = "qrframe", author, version, about, long_about = None)]
pub struct Args {
    /// Text to encode
    pub text: String,

    /// Output format: svg, png or jpeg
    #[arg(short, long, default_value = "png")]
    pub format: ExportFormat,

    /// Color scheme name, e.g. Classic or Ocean
    #[arg(short, long)]
    pub scheme: Option<String>,

    /// Caption drawn below the symbol
    #[arg(short, long)]
    pub caption: Option<String>,

    /// Caption style: none, minimal or solid
    #[arg(long, value_parser = parse_style)]
    pub style: Option<CaptionStyleId>,

    /// Draw a frame around the symbol (minimal and solid styles)
    #[arg(long)]
    pub frame: bool,

    /// Symbol size in pixels, snapped to 128-512 in steps of 32
    #[arg(long)]
    pub size: Option<u32>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// JSON pipeline config
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the computed layout as JSON
    #[arg(long)]
    pub print_layout: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_style(s: &str) -> Result<CaptionStyleId, String> {
    CaptionStyleId::parse(s).ok_or_else(|| format!("unknown caption style: {s}"))
}

impl Args {
    pub fn load_config(&self) -> anyhow::Result<PipelineConfig> {
        match &self.config {
            Some(path) => PipelineConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display())),
            None => Ok(PipelineConfig::default()),
        }
    }

    /// Replay the arguments as editor transitions, in the order a user would
    /// make them: text, scheme, caption, style, frame, size.
    pub fn editor_state(&self, config: &PipelineConfig) -> anyhow::Result<EditorState> {
        let mut state = EditorState::from_config(config);
        state.set_text(self.text.as_str());

        if let Some(name) = &self.scheme {
            if !state.select_scheme(name) {
                bail!("Unknown color scheme: {name}");
            }
        }
        if let Some(caption) = &self.caption {
            state.set_caption(caption.as_str());
        }
        if let Some(style) = self.style {
            state.select_caption_style(style);
        }
        if self.frame {
            state.set_show_frame(true);
        }
        if let Some(size) = self.size {
            state.set_qr_size(size);
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("qrframe").chain(argv.iter().copied())).unwrap()
    }

    fn state(argv: &[&str]) -> EditorState {
        args(argv).editor_state(&PipelineConfig::default()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let a = args(&["https://example.com"]);
        assert_eq!(a.format, ExportFormat::RasterLossless);
        assert_eq!(a.out, PathBuf::from("."));

        let s = state(&["https://example.com"]);
        assert_eq!(s.caption_style(), CaptionStyleId::None);
        assert_eq!(s.scheme().name, "Classic");
        assert_eq!(s.qr_size(), 512);
    }

    #[test]
    fn test_caption_switches_style() {
        let s = state(&["x", "--caption", "Scan Me!"]);
        assert!(s.show_caption());
        assert_eq!(s.caption_style(), CaptionStyleId::Minimal);
        assert!(!s.show_frame());
    }

    #[test]
    fn test_frame_applies_after_caption() {
        let s = state(&["x", "--caption", "Scan Me!", "--style", "solid", "--frame"]);
        assert_eq!(s.caption_style(), CaptionStyleId::Solid);
        assert!(s.show_frame());
        assert!(s.request().frame_active());
    }

    #[test]
    fn test_format_and_style_parsing() {
        assert_eq!(args(&["x", "-f", "jpg"]).format, ExportFormat::RasterLossy);
        assert_eq!(args(&["x", "--format", "svg"]).format, ExportFormat::Vector);
        assert!(Args::try_parse_from(["qrframe", "x", "--format", "gif"]).is_err());
        assert!(Args::try_parse_from(["qrframe", "x", "--style", "fancy"]).is_err());
    }

    #[test]
    fn test_unknown_scheme() {
        let err = args(&["x", "--scheme", "Neon"])
            .editor_state(&PipelineConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("Neon"));
    }

    #[test]
    fn test_size_is_snapped() {
        assert_eq!(state(&["x", "--size", "300"]).qr_size(), 288);
        assert_eq!(state(&["x", "--size", "4000"]).qr_size(), 512);
    }

    #[test]
    fn test_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_scheme": "Ocean", "qr_size": 256}}"#).unwrap();

        let a = args(&["x", "--config", file.path().to_str().unwrap()]);
        let config = a.load_config().unwrap();
        let s = a.editor_state(&config).unwrap();
        assert_eq!(s.scheme().name, "Ocean");
        assert_eq!(s.qr_size(), 256);
    }

    #[test]
    fn test_missing_config_file() {
        let a = args(&["x", "--config", "/nonexistent/qrframe.json"]);
        assert!(a.load_config().is_err());
    }
}
