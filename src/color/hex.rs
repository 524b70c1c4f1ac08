//! sRGB color type and hex parsing
//!
//! Accepts exactly `#RRGGBB` or `RRGGBB` (case-insensitive). Shorthand
//! `#RGB`, named colors and functional notation are rejected.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::{ContrastError, Result};

/// An 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// Fallback for unparseable input
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse a hexadecimal color string
    ///
    /// # Arguments
    ///
    /// * `input` - Hex color string (e.g., "#FF0000" or "ff0000")
    ///
    /// # Errors
    ///
    /// Returns [`ContrastError::InvalidColorFormat`] unless the input is six
    /// hex digits with an optional leading `#`
    pub fn from_hex(input: &str) -> Result<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        // from_str_radix tolerates a leading '+', so check digits up front
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ContrastError::invalid_color(input));
        }

        let channel = |start: usize| {
            u8::from_str_radix(&hex[start..start + 2], 16)
                .map_err(|_| ContrastError::invalid_color(input))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Uppercase `#RRGGBB` representation
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Channels normalized to [0, 1]
    pub fn to_srgb_f64(self) -> Srgb<f64> {
        Srgb::<u8>::from(self).into_format()
    }
}

/// Parse a color, falling back to black on malformed input
///
/// The fallback hides typos from the caller; use [`Color::from_hex`] when the
/// error should be surfaced.
pub fn parse_color(input: &str) -> Color {
    Color::from_hex(input).unwrap_or_else(|err| {
        tracing::debug!(%err, "falling back to black");
        Color::BLACK
    })
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl FromStr for Color {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ContrastError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl From<Srgb<u8>> for Color {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<Color> for Srgb<u8> {
    fn from(color: Color) -> Self {
        Srgb::new(color.red, color.green, color.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_with_and_without_hash() {
        assert_eq!(Color::from_hex("#FF8000").unwrap(), Color::new(255, 128, 0));
        assert_eq!(Color::from_hex("00ff7f").unwrap(), Color::new(0, 255, 127));
    }

    #[test]
    fn test_from_hex_case_insensitive() {
        assert_eq!(
            Color::from_hex("#ABCDEF").unwrap(),
            Color::from_hex("#abcdef").unwrap()
        );
        assert_eq!(Color::from_hex("#aBcDeF").unwrap(), Color::new(0xAB, 0xCD, 0xEF));
    }

    #[test]
    fn test_from_hex_rejects_other_forms() {
        for input in [
            "", "#", "#fff", "fff", "#FF00", "#FF00000", "##FF0000", "#GGGGGG", "red",
            " #FF0000", "#FF0000 ", "+f+f+f", "#+fffff", "rgb(0,0,0)", "#ＦＦ0000",
        ] {
            let err = Color::from_hex(input).unwrap_err();
            assert!(
                matches!(err, ContrastError::InvalidColorFormat { input: ref got } if got == input),
                "expected rejection of {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_color_falls_back_to_black() {
        assert_eq!(parse_color("notacolor"), Color::BLACK);
        assert_eq!(parse_color("#123"), Color::BLACK);
        assert_eq!(parse_color("#2196F3"), Color::new(0x21, 0x96, 0xF3));
    }

    #[test]
    fn test_display_uppercase() {
        assert_eq!(Color::new(0xab, 0x0c, 0xff).to_string(), "#AB0CFF");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn test_from_str() {
        let color: Color = "#2196f3".parse().unwrap();
        assert_eq!(color, Color::new(33, 150, 243));
        assert!("blue".parse::<Color>().is_err());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::new(1, 2, 3)).unwrap();
        assert_eq!(json, "\"#010203\"");

        let color: Color = serde_json::from_str("\"ffffff\"").unwrap();
        assert_eq!(color, Color::WHITE);

        assert!(serde_json::from_str::<Color>("\"#fff\"").is_err());
    }

    #[test]
    fn test_palette_conversion() {
        let srgb: Srgb<u8> = Color::new(10, 20, 30).into();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (10, 20, 30));
        assert_eq!(Color::from(srgb), Color::new(10, 20, 30));

        let normalized = Color::WHITE.to_srgb_f64();
        assert!((normalized.red - 1.0).abs() < 1e-12);
        assert!((normalized.green - 1.0).abs() < 1e-12);
        assert!((normalized.blue - 1.0).abs() < 1e-12);
    }
}
