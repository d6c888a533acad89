//! Colors and the fixed palette set

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::hex(0xFFFFFF);
    pub const BLACK: Color = Color::hex(0x000000);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a packed 0xRRGGBB value
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            a: 255,
        }
    }

    /// Parse `#RRGGBB` / `RRGGBB` (optionally `#RRGGBBAA`)
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// CSS color string for the browser 2D context
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            self.a as f32 / 255.0
        )
    }

    /// Normalized color for vertex buffers
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Number of colors in every palette
pub const PALETTE_LEN: usize = 6;

/// An ordered set of six colors shared by one wheel
pub type Palette = [Color; PALETTE_LEN];

/// The fixed palette set wheels choose from
pub const PALETTES: [Palette; 4] = [
    [
        Color::hex(0x8BC34A),
        Color::hex(0x81D4FA),
        Color::hex(0xF48FB1),
        Color::hex(0xCE93D8),
        Color::hex(0xFFCC80),
        Color::hex(0xAED581),
    ],
    [
        Color::hex(0xFF6B6B),
        Color::hex(0x4ECDC4),
        Color::hex(0x45B7D1),
        Color::hex(0x96CEB4),
        Color::hex(0xFFEAA7),
        Color::hex(0xFFB300),
    ],
    [
        Color::hex(0x6A0572),
        Color::hex(0xAB83A1),
        Color::hex(0x3C91E6),
        Color::hex(0x342E37),
        Color::hex(0xFA824C),
        Color::hex(0xFF7043),
    ],
    [
        Color::hex(0x2A9D8F),
        Color::hex(0xE9C46A),
        Color::hex(0xF4A261),
        Color::hex(0xE76F51),
        Color::hex(0x264653),
        Color::hex(0xFFD740),
    ],
];

/// Fixed decoration colors
pub mod colors {
    use super::Color;

    pub const GLOW: Color = Color::rgba(255, 255, 255, 35);
    pub const CONCENTRIC_OUTER: Color = Color::hex(0xFF9800);
    pub const CONCENTRIC_MIDDLE: Color = Color::BLACK;
    pub const CONCENTRIC_CENTER: Color = Color::WHITE;
    pub const SPOKE: Color = Color::WHITE;
    pub const HUB: Color = Color::hex(0xFAFAFA);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse_hex("#1e2c3a"), Some(Color::hex(0x1E2C3A)));
        assert_eq!(Color::parse_hex("FF9800"), Some(Color::hex(0xFF9800)));
        assert_eq!(
            Color::parse_hex("#FFFFFF23"),
            Some(Color::rgba(255, 255, 255, 0x23))
        );
        assert_eq!(Color::parse_hex("#FFF"), None);
        assert_eq!(Color::parse_hex("#GG0000"), None);
    }

    #[test]
    fn test_hex_channels() {
        let c = Color::hex(0x8BC34A);
        assert_eq!((c.r, c.g, c.b, c.a), (0x8B, 0xC3, 0x4A, 255));
    }

    #[test]
    fn test_to_f32() {
        let c = Color::rgba(255, 0, 51, 255).to_f32();
        assert_eq!(c[0], 1.0);
        assert_eq!(c[1], 0.0);
        assert!((c[2] - 0.2).abs() < 1e-6);
    }
}
