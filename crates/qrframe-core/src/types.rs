//! Core value types and the static catalogs.

use std::fmt;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create from hex string (e.g., "#FF5733", "FF5733" or "#FF573380").
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::rgb8(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba8(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Convert to 8-bit RGBA array.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert to hex string (e.g., "#FF5733").
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    // Common colors
    pub const WHITE: Self = Self::rgb8(255, 255, 255);
    pub const BLACK: Self = Self::rgb8(0, 0, 0);
    pub const TRANSPARENT: Self = Self::rgba8(0, 0, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A named foreground/background pairing.
///
/// `fg_color` and `bg_color` are handed to the symbol provider. `display_bg` is the
/// surface shown around the symbol when no frame is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub name: &'static str,
    pub fg_color: Color,
    pub bg_color: Color,
    pub display_bg: Color,
}

impl ColorScheme {
    pub const fn new(name: &'static str, fg_color: Color, bg_color: Color, display_bg: Color) -> Self {
        Self {
            name,
            fg_color,
            bg_color,
            display_bg,
        }
    }

    /// Look up a scheme by name, ignoring ASCII case.
    pub fn by_name(name: &str) -> Option<&'static ColorScheme> {
        COLOR_SCHEMES
            .iter()
            .find(|scheme| scheme.name.eq_ignore_ascii_case(name))
    }

    /// Index of a scheme in [`COLOR_SCHEMES`].
    pub fn index_of(name: &str) -> Option<usize> {
        COLOR_SCHEMES
            .iter()
            .position(|scheme| scheme.name.eq_ignore_ascii_case(name))
    }

    /// The default scheme (Classic).
    pub fn classic() -> &'static ColorScheme {
        &COLOR_SCHEMES[0]
    }
}

/// The fixed catalog of color schemes. The first entry is the default.
pub static COLOR_SCHEMES: [ColorScheme; 10] = [
    ColorScheme::new(
        "Classic",
        Color::rgb8(0x00, 0x00, 0x00),
        Color::rgb8(0xFF, 0xFF, 0xFF),
        Color::rgb8(0xFF, 0xFF, 0xFF),
    ),
    ColorScheme::new(
        "Ocean",
        Color::rgb8(0x0D, 0x47, 0xA1),
        Color::rgb8(0xE3, 0xF2, 0xFD),
        Color::rgb8(0xE3, 0xF2, 0xFD),
    ),
    ColorScheme::new(
        "Forest",
        Color::rgb8(0x1B, 0x5E, 0x20),
        Color::rgb8(0xE8, 0xF5, 0xE9),
        Color::rgb8(0xE8, 0xF5, 0xE9),
    ),
    ColorScheme::new(
        "Sunset",
        Color::rgb8(0xE6, 0x51, 0x00),
        Color::rgb8(0xFF, 0xF3, 0xE0),
        Color::rgb8(0xFF, 0xF3, 0xE0),
    ),
    ColorScheme::new(
        "Royal",
        Color::rgb8(0x4A, 0x14, 0x8C),
        Color::rgb8(0xF3, 0xE5, 0xF5),
        Color::rgb8(0xF3, 0xE5, 0xF5),
    ),
    ColorScheme::new(
        "Berry",
        Color::rgb8(0x88, 0x0E, 0x4F),
        Color::rgb8(0xFC, 0xE4, 0xEC),
        Color::rgb8(0xFC, 0xE4, 0xEC),
    ),
    ColorScheme::new(
        "Night",
        Color::rgb8(0xFF, 0xFF, 0xFF),
        Color::rgb8(0x21, 0x21, 0x21),
        Color::rgb8(0x21, 0x21, 0x21),
    ),
    ColorScheme::new(
        "Mint",
        Color::rgb8(0x00, 0x4D, 0x40),
        Color::rgb8(0xE0, 0xF2, 0xF1),
        Color::rgb8(0xE0, 0xF2, 0xF1),
    ),
    ColorScheme::new(
        "Coral",
        Color::rgb8(0xBF, 0x36, 0x0C),
        Color::rgb8(0xFB, 0xE9, 0xE7),
        Color::rgb8(0xFB, 0xE9, 0xE7),
    ),
    ColorScheme::new(
        "Lavender",
        Color::rgb8(0x31, 0x1B, 0x92),
        Color::rgb8(0xED, 0xE7, 0xF6),
        Color::rgb8(0xED, 0xE7, 0xF6),
    ),
];

/// Caption style identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptionStyleId {
    None,
    Minimal,
    Solid,
}

impl CaptionStyleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptionStyleId::None => "none",
            CaptionStyleId::Minimal => "minimal",
            CaptionStyleId::Solid => "solid",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Some(CaptionStyleId::None),
            "minimal" => Some(CaptionStyleId::Minimal),
            "solid" => Some(CaptionStyleId::Solid),
            _ => None,
        }
    }
}

impl fmt::Display for CaptionStyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the caption box background is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptionBackground {
    /// Filled rounded box in the foreground color, text in the background color
    Solid,
    /// No box, text in the foreground color
    Minimal,
    /// Nothing is drawn
    None,
}

/// A caption/frame style from [`CAPTION_STYLES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionStyle {
    pub id: CaptionStyleId,
    /// Corner radius of the solid caption box, in pixels
    pub border_radius: u32,
    pub background: CaptionBackground,
    /// Whether this style can draw a frame around the symbol
    pub has_frame: bool,
    /// Outer corner radius of the frame ring, in pixels
    pub frame_radius: u32,
    /// Space between the frame ring and the symbol, in pixels
    pub frame_padding: u32,
}

impl CaptionStyle {
    pub fn get(id: CaptionStyleId) -> &'static CaptionStyle {
        match id {
            CaptionStyleId::None => &CAPTION_STYLES[0],
            CaptionStyleId::Minimal => &CAPTION_STYLES[1],
            CaptionStyleId::Solid => &CAPTION_STYLES[2],
        }
    }

    pub fn none() -> &'static CaptionStyle {
        Self::get(CaptionStyleId::None)
    }
}

/// The fixed catalog of caption styles, indexed in [`CaptionStyleId`] order.
pub static CAPTION_STYLES: [CaptionStyle; 3] = [
    CaptionStyle {
        id: CaptionStyleId::None,
        border_radius: 0,
        background: CaptionBackground::None,
        has_frame: false,
        frame_radius: 0,
        frame_padding: 16,
    },
    CaptionStyle {
        id: CaptionStyleId::Minimal,
        border_radius: 0,
        background: CaptionBackground::Minimal,
        has_frame: true,
        frame_radius: 16,
        frame_padding: 24,
    },
    CaptionStyle {
        id: CaptionStyleId::Solid,
        border_radius: 8,
        background: CaptionBackground::Solid,
        has_frame: true,
        frame_radius: 24,
        frame_padding: 24,
    },
];
