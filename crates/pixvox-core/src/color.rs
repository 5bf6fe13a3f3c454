//! Color values
//!
//! Every cell of a sprite or voxel sprite holds a straight (non-premultiplied)
//! 8-bit RGBA [`Color`]. External sources hand over premultiplied 16-bit
//! samples through the [`ColorSample`] trait.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum value of a 16-bit channel
const MAX_16: u32 = 0xFFFF;

/// Errors from parsing a color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("Expected 6 or 8 hex digits, got {0}")]
    InvalidLength(usize),

    #[error("Invalid hex digits: {0}")]
    InvalidDigit(String),
}

/// A straight-alpha RGBA color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (0 = fully transparent)
    pub a: u8,
}

impl Color {
    /// Fully transparent black, returned for cells that do not exist
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// Opaque black
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Opaque red
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Opaque green
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Opaque blue
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Create a color from all four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Channels as an `[r, g, b, a]` array
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the color is fully opaque
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Convert a premultiplied 16-bit sample back to a straight 8-bit color
    ///
    /// A sample with zero alpha carries no color information and maps to
    /// [`Color::TRANSPARENT`].
    pub fn from_premultiplied_rgba16(sample: [u16; 4]) -> Self {
        let [r, g, b, a] = sample;
        if a == 0 {
            return Self::TRANSPARENT;
        }

        let alpha = a as u32;
        let unpremultiply = |channel: u16| -> u8 {
            let straight = ((channel as u32 * MAX_16 + alpha / 2) / alpha).min(MAX_16);
            narrow(straight)
        };

        Self {
            r: unpremultiply(r),
            g: unpremultiply(g),
            b: unpremultiply(b),
            a: narrow(alpha),
        }
    }

    /// Convert to a premultiplied 16-bit sample
    pub fn to_premultiplied_rgba16(self) -> [u16; 4] {
        premultiply_rgba16([
            widen(self.r),
            widen(self.g),
            widen(self.b),
            widen(self.a),
        ])
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse `#rrggbb` or `#rrggbbaa` (the `#` is optional)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorParseError::InvalidLength(hex.len()));
        }

        let channel = |i: usize| -> Result<u8, ColorParseError> {
            hex.get(i..i + 2)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| ColorParseError::InvalidDigit(hex.to_string()))
        };

        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

/// A value that can be sampled as a premultiplied 16-bit RGBA color
///
/// This is the capability external color grids must offer to be copied
/// into a sprite.
pub trait ColorSample {
    /// Premultiplied `[r, g, b, a]`, 16 bits per channel
    fn premultiplied_rgba16(&self) -> [u16; 4];
}

impl ColorSample for Color {
    fn premultiplied_rgba16(&self) -> [u16; 4] {
        self.to_premultiplied_rgba16()
    }
}

impl ColorSample for image::Rgba<u8> {
    fn premultiplied_rgba16(&self) -> [u16; 4] {
        Color::from(self.0).to_premultiplied_rgba16()
    }
}

impl ColorSample for image::Rgba<u16> {
    fn premultiplied_rgba16(&self) -> [u16; 4] {
        premultiply_rgba16(self.0)
    }
}

impl<T: ColorSample + ?Sized> ColorSample for &T {
    fn premultiplied_rgba16(&self) -> [u16; 4] {
        (**self).premultiplied_rgba16()
    }
}

/// Expand an 8-bit channel to 16 bits
fn widen(channel: u8) -> u16 {
    channel as u16 * 257
}

/// Round a 16-bit channel to the nearest 8-bit value
fn narrow(channel: u32) -> u8 {
    ((channel + 128) / 257) as u8
}

/// Multiply the color channels of a straight 16-bit sample by its alpha
pub(crate) fn premultiply_rgba16([r, g, b, a]: [u16; 4]) -> [u16; 4] {
    let alpha = a as u32;
    let premultiply = |channel: u16| ((channel as u32 * alpha + MAX_16 / 2) / MAX_16) as u16;

    [premultiply(r), premultiply(g), premultiply(b), a]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!(Color::RED.to_array(), [255, 0, 0, 255]);
        assert_eq!(Color::TRANSPARENT, Color::default());
        assert!(Color::BLACK.is_opaque());
        assert!(!Color::TRANSPARENT.is_opaque());
    }

    #[test]
    fn test_opaque_sample_conversion() {
        let sample = Color::rgb(12, 200, 255).to_premultiplied_rgba16();
        assert_eq!(sample[3], 0xFFFF);
        assert_eq!(
            Color::from_premultiplied_rgba16(sample),
            Color::rgb(12, 200, 255)
        );
    }

    #[test]
    fn test_translucent_sample_unpremultiplies() {
        let color = Color::rgba(200, 0, 0, 128);
        let sample = color.to_premultiplied_rgba16();

        assert_eq!(sample[3], widen(128));
        assert!(sample[0] < widen(200));
        assert_eq!(Color::from_premultiplied_rgba16(sample), color);
    }

    #[test]
    fn test_every_translucent_color_survives_conversion() {
        for a in 1..=255u8 {
            for c in 0..=255u8 {
                let color = Color::rgba(c, 255 - c, c / 2, a);
                let back = Color::from_premultiplied_rgba16(color.to_premultiplied_rgba16());
                assert_eq!(back, color, "{} came back as {}", color, back);
            }
        }
    }

    #[test]
    fn test_low_alpha_keeps_channels() {
        let faint = Color::rgba(1, 1, 1, 1);
        assert_eq!(
            Color::from_premultiplied_rgba16(faint.to_premultiplied_rgba16()),
            faint
        );

        let dim = Color::rgba(2, 2, 2, 1);
        assert_eq!(Color::from_premultiplied_rgba16(dim.premultiplied_rgba16()), dim);
    }

    #[test]
    fn test_zero_alpha_is_transparent() {
        assert_eq!(
            Color::from_premultiplied_rgba16([0x1234, 0xFFFF, 0, 0]),
            Color::TRANSPARENT
        );
        assert_eq!(Color::from_premultiplied_rgba16([0; 4]), Color::TRANSPARENT);
    }

    #[test]
    fn test_overbright_sample_saturates() {
        // Color channel larger than alpha is malformed but must not overflow
        let color = Color::from_premultiplied_rgba16([0xFFFF, 0, 0, 0x8080]);
        assert_eq!(color.r, 255);
        assert_eq!(color.a, 0x80);
    }

    #[test]
    fn test_image_samples() {
        let rgba8 = image::Rgba([255u8, 0, 0, 255]);
        assert_eq!(rgba8.premultiplied_rgba16(), [0xFFFF, 0, 0, 0xFFFF]);

        let rgba16 = image::Rgba([0xFFFFu16, 0xFFFF, 0, 0]);
        assert_eq!(rgba16.premultiplied_rgba16(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_parse_and_display() {
        let color: Color = "#ff8000".parse().unwrap();
        assert_eq!(color, Color::rgb(255, 128, 0));
        assert_eq!(color.to_string(), "#ff8000ff");

        let color: Color = "10203040".parse().unwrap();
        assert_eq!(color, Color::rgba(0x10, 0x20, 0x30, 0x40));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "#fff".parse::<Color>(),
            Err(ColorParseError::InvalidLength(3))
        );
        assert!(matches!(
            "#gg0000".parse::<Color>(),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Color::BLUE).unwrap();
        assert_eq!(json, r#"{"r":0,"g":0,"b":255,"a":255}"#);
        let parsed: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Color::BLUE);
    }
}
