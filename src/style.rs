// ABOUTME: Style token resolution for the deckgen application
// ABOUTME: Maps theme color tokens onto concrete RGB colors with per-axis defaults

use std::fmt;

/// A concrete RGB color, rendered as `RRGGBB` hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor(pub [u8; 3]);

impl HexColor {
    pub const WHITE: HexColor = HexColor([0xFF, 0xFF, 0xFF]);
    pub const BLACK: HexColor = HexColor([0x00, 0x00, 0x00]);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        HexColor([r, g, b])
    }

    /// Parse a 6-digit hex string, with or without a leading `#`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.trim_start_matches('#');
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(HexColor([r, g, b]))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "{:02X}{:02X}{:02X}", r, g, b)
    }
}

/// A lookup table from a single style token to a color.
pub type ColorTable = [(&'static str, HexColor)];

/// Foreground tokens used for titles, body text and bullets.
pub static TEXT_COLORS: &ColorTable = &[
    ("text-indigo-400", HexColor::rgb(0x81, 0x8C, 0xF8)),
    ("text-teal-300", HexColor::rgb(0x5E, 0xEA, 0xD4)),
    ("text-yellow-200", HexColor::rgb(0xFD, 0xE0, 0x47)),
    ("text-blue-600", HexColor::rgb(0x25, 0x63, 0xEB)),
    ("text-white", HexColor::WHITE),
    ("text-slate-300", HexColor::rgb(0xCB, 0xD5, 0xE1)),
    ("text-gray-200", HexColor::rgb(0xE5, 0xE7, 0xEB)),
    ("text-blue-100", HexColor::rgb(0xDB, 0xEA, 0xFE)),
    ("text-gray-600", HexColor::rgb(0x4B, 0x55, 0x63)),
    ("text-gray-800", HexColor::rgb(0x1F, 0x29, 0x37)),
    ("text-black", HexColor::BLACK),
    ("text-gray-300", HexColor::rgb(0xD1, 0xD5, 0xDB)),
    ("text-rose-100", HexColor::rgb(0xFF, 0xE4, 0xE6)),
    ("text-gray-700", HexColor::rgb(0x37, 0x41, 0x51)),
    ("text-yellow-900", HexColor::rgb(0x78, 0x35, 0x0F)),
    ("text-cyan-300", HexColor::rgb(0x67, 0xE8, 0xF9)),
    ("text-lime-100", HexColor::rgb(0xEC, 0xFC, 0xCB)),
    ("text-sky-900", HexColor::rgb(0x0C, 0x4A, 0x6E)),
    ("text-indigo-200", HexColor::rgb(0xC7, 0xD2, 0xFE)),
    ("text-red-200", HexColor::rgb(0xFE, 0xCA, 0xCA)),
    ("text-emerald-400", HexColor::rgb(0x34, 0xD3, 0x99)),
    ("text-rose-300", HexColor::rgb(0xFD, 0xA4, 0xAF)),
    ("text-gray-400", HexColor::rgb(0x9C, 0xA3, 0xAF)),
    ("text-gray-500", HexColor::rgb(0x6B, 0x72, 0x81)),
    ("text-yellow-800", HexColor::rgb(0x92, 0x40, 0x0E)),
    ("text-cyan-400", HexColor::rgb(0x22, 0xD3, 0xEE)),
    ("text-lime-400", HexColor::rgb(0xA3, 0xE6, 0x35)),
    ("text-sky-800", HexColor::rgb(0x07, 0x59, 0x85)),
    ("text-yellow-400", HexColor::rgb(0xFA, 0xCC, 0x15)),
    ("text-red-400", HexColor::rgb(0xF8, 0x71, 0x71)),
    ("text-purple-500", HexColor::rgb(0xA8, 0x55, 0xF7)),
    ("text-fuchsia-500", HexColor::rgb(0xD9, 0x46, 0xEF)),
    ("text-yellow-300", HexColor::rgb(0xFB, 0xBF, 0x24)),
    ("text-purple-800", HexColor::rgb(0x6B, 0x21, 0xA8)),
];

/// Background tokens. Gradients resolve through their start (`from-`) token.
pub static BACKGROUND_COLORS: &ColorTable = &[
    ("from-slate-900", HexColor::rgb(0x0F, 0x17, 0x2A)),
    ("from-indigo-900", HexColor::rgb(0x31, 0x2E, 0x81)),
    ("from-gray-900", HexColor::rgb(0x11, 0x18, 0x27)),
    ("from-blue-900", HexColor::rgb(0x1E, 0x40, 0xAF)),
    ("from-red-500", HexColor::rgb(0xEF, 0x44, 0x44)),
    ("bg-white", HexColor::WHITE),
    ("from-emerald-800", HexColor::rgb(0x06, 0x5F, 0x46)),
    ("from-red-800", HexColor::rgb(0x99, 0x1B, 0x1B)),
    ("bg-gray-800", HexColor::rgb(0x1F, 0x29, 0x37)),
    ("bg-gray-100", HexColor::rgb(0xF3, 0xF4, 0xF6)),
    ("bg-yellow-50", HexColor::rgb(0xFE, 0xFC, 0xE8)),
    ("bg-black", HexColor::BLACK),
    ("from-green-900", HexColor::rgb(0x14, 0x53, 0x2D)),
    ("from-sky-200", HexColor::rgb(0xBA, 0xE6, 0xFD)),
    ("from-red-900", HexColor::rgb(0x7F, 0x1D, 0x1D)),
    ("from-pink-200", HexColor::rgb(0xFE, 0xCD, 0xD3)),
];

/// Resolve a compound, space-separated token string against `table`.
///
/// Tokens are scanned left to right and the first one present in the table
/// wins; later matches are never consulted. Falls back to `default`.
pub fn resolve_color(tokens: &str, table: &ColorTable, default: HexColor) -> HexColor {
    tokens
        .split_whitespace()
        .find_map(|token| {
            table
                .iter()
                .find(|(key, _)| *key == token)
                .map(|(_, color)| *color)
        })
        .unwrap_or(default)
}

/// The four style axes a theme carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleAxis {
    Background,
    Text,
    Title,
    Bullet,
}

impl StyleAxis {
    pub fn table(self) -> &'static ColorTable {
        match self {
            StyleAxis::Background => BACKGROUND_COLORS,
            StyleAxis::Text | StyleAxis::Title | StyleAxis::Bullet => TEXT_COLORS,
        }
    }

    pub fn default_color(self) -> HexColor {
        match self {
            StyleAxis::Background => HexColor::rgb(0x1A, 0x20, 0x2C),
            StyleAxis::Text => HexColor::rgb(0x6C, 0x75, 0x7D),
            StyleAxis::Title => HexColor::rgb(0x33, 0x33, 0x33),
            StyleAxis::Bullet => HexColor::rgb(0x00, 0x7B, 0xFF),
        }
    }

    /// Total resolution for this axis: always yields a color.
    pub fn resolve(self, tokens: &str) -> HexColor {
        resolve_color(tokens, self.table(), self.default_color())
    }
}

/// Concrete colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: HexColor,
    pub text: HexColor,
    pub title: HexColor,
    pub bullet: HexColor,
}
