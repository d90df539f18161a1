//! Color palette
//!
//! Fixed RGB values for each semantic [`Color`]. The table is a match over the
//! closed enum, so every color always has a complete quadruple.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::tokens::Color;

/// An opaque RGB color, rendered in CSS space-separated syntax
/// (`rgb(59 130 246)`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a hex value (0xRRGGBB)
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Hex value (0xRRGGBB)
    pub const fn as_hex(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({} {} {})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Resolved colors for one semantic [`Color`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ColorValues {
    pub background: Rgb,
    pub text: Rgb,
    pub border: Rgb,
    pub hover: Rgb,
}

impl ColorValues {
    /// Solid fill: background and border share a color, text is white
    const fn solid(fill: Rgb, hover: Rgb) -> Self {
        Self {
            background: fill,
            text: Rgb::WHITE,
            border: fill,
            hover,
        }
    }
}

// Tailwind 500/600 steps
const BLUE_500: Rgb = Rgb::new(59, 130, 246);
const BLUE_600: Rgb = Rgb::new(37, 99, 235);
const GRAY_400: Rgb = Rgb::new(156, 163, 175);
const GRAY_500: Rgb = Rgb::new(107, 114, 128);
const GRAY_600: Rgb = Rgb::new(75, 85, 99);
const GREEN_500: Rgb = Rgb::new(34, 197, 94);
const GREEN_600: Rgb = Rgb::new(22, 163, 74);
const AMBER_500: Rgb = Rgb::new(245, 158, 11);
const AMBER_600: Rgb = Rgb::new(217, 119, 6);
const RED_500: Rgb = Rgb::new(239, 68, 68);
const RED_600: Rgb = Rgb::new(220, 38, 38);

impl Color {
    /// Palette entry for this color
    pub const fn values(self) -> ColorValues {
        match self {
            Color::Primary => ColorValues::solid(BLUE_500, BLUE_600),
            Color::Secondary => ColorValues::solid(GRAY_500, GRAY_600),
            Color::Success => ColorValues::solid(GREEN_500, GREEN_600),
            Color::Warning => ColorValues::solid(AMBER_500, AMBER_600),
            Color::Error => ColorValues::solid(RED_500, RED_600),
            Color::Info => ColorValues::solid(BLUE_500, BLUE_600),
            Color::Muted => ColorValues::solid(GRAY_400, GRAY_500),
        }
    }
}

/// Resolve an optional color. An absent color has no values.
pub fn color_values(color: Option<Color>) -> Option<ColorValues> {
    color.map(Color::values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primary_values() {
        let values = Color::Primary.values();
        assert_eq!(values.background.to_string(), "rgb(59 130 246)");
        assert_eq!(values.text.to_string(), "rgb(255 255 255)");
        assert_eq!(values.border.to_string(), "rgb(59 130 246)");
        assert_eq!(values.hover.to_string(), "rgb(37 99 235)");
    }

    #[test]
    fn test_every_color_is_complete() {
        for color in Color::ALL {
            let values = color.values();
            assert_eq!(values.text, Rgb::WHITE);
            assert_eq!(values.background, values.border);
            assert_ne!(values.background, values.hover);
        }
        assert_eq!(Color::Muted.values().hover.to_string(), "rgb(107 114 128)");
        assert_eq!(Color::Warning.values().hover.to_string(), "rgb(217 119 6)");
    }

    #[test]
    fn test_full_palette() {
        let white = "rgb(255 255 255)";
        let expected = [
            (Color::Primary, "rgb(59 130 246)", "rgb(37 99 235)"),
            (Color::Secondary, "rgb(107 114 128)", "rgb(75 85 99)"),
            (Color::Success, "rgb(34 197 94)", "rgb(22 163 74)"),
            (Color::Warning, "rgb(245 158 11)", "rgb(217 119 6)"),
            (Color::Error, "rgb(239 68 68)", "rgb(220 38 38)"),
            (Color::Info, "rgb(59 130 246)", "rgb(37 99 235)"),
            (Color::Muted, "rgb(156 163 175)", "rgb(107 114 128)"),
        ];
        assert_eq!(expected.len(), Color::ALL.len());

        for (color, fill, hover) in expected {
            let values = color.values();
            let actual = [
                values.background.to_string(),
                values.text.to_string(),
                values.border.to_string(),
                values.hover.to_string(),
            ];
            assert_eq!(actual, [fill, white, fill, hover], "{color}");
        }
    }

    #[test]
    fn test_absent_color() {
        assert_eq!(color_values(None), None);
        assert_eq!(color_values(Some(Color::Error)), Some(Color::Error.values()));
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Rgb::from_hex(0x3B82F6);
        assert_eq!(color, BLUE_500);
        assert_eq!(color.as_hex(), 0x3B82F6);
    }

    #[test]
    fn test_serializes_as_css() {
        let json = serde_json::to_value(Color::Success.values()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "background": "rgb(34 197 94)",
                "text": "rgb(255 255 255)",
                "border": "rgb(34 197 94)",
                "hover": "rgb(22 163 74)",
            })
        );
    }
}
