//! Color value type and manipulation helpers.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(input: &str) -> Result<Self> {
        let invalid = || CoreError::InvalidColor(input.to_string());
        let hex = input.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let byte = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };

        match hex.len() {
            3 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&hex[i..=i], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Self::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Ok(Self::rgba(
                byte(0..2)?,
                byte(2..4)?,
                byte(4..6)?,
                byte(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Same color with a new alpha byte.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { a: alpha, ..self }
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Lighten by raising HSL lightness. `amount` is in `-1.0..=1.0`.
    pub fn lighten(self, amount: f32) -> Self {
        let (h, s, l) = rgb_to_hsl(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let (r, g, b) = hsl_to_rgb(h, s, (l + amount).clamp(0.0, 1.0));
        Self {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
            a: self.a,
        }
    }

    pub fn darken(self, amount: f32) -> Self {
        self.lighten(-amount)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Alpha bytes used across the style tables for tinted fills.
pub mod alpha {
    /// Badge and tag background tint.
    pub const TINT: u8 = 0x20;
    /// Badge and tag border tint.
    pub const TINT_BORDER: u8 = 0x30;
    /// Selected table rows.
    pub const SELECTED: u8 = 0x10;
    /// Hover overlays.
    pub const OVERLAY: u8 = 0xcc;
}

fn to_byte(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f32::EPSILON {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if (max - r).abs() < f32::EPSILON {
        let mut h = (g - b) / d;
        if g < b {
            h += 6.0;
        }
        h
    } else if (max - g).abs() < f32::EPSILON {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h * 60.0, s, l)
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    if s.abs() < f32::EPSILON {
        return (l, l, l);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;
    let h = h / 360.0;

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(
            Color::from_hex("#5e6ad2").unwrap(),
            Color::rgb(0x5e, 0x6a, 0xd2)
        );
        assert_eq!(Color::from_hex("fff").unwrap(), Color::WHITE);
        assert_eq!(
            Color::from_hex("#4cb78220").unwrap(),
            Color::rgba(0x4c, 0xb7, 0x82, 0x20)
        );
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#12", "#12345", "#gggggg", "#1234567"] {
            assert!(
                matches!(Color::from_hex(bad), Err(CoreError::InvalidColor(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn alpha_suffix_round_trips_through_hex() {
        let green = Color::rgb(0x4c, 0xb7, 0x82);
        assert_eq!(green.to_hex(), "#4cb782");
        assert_eq!(green.with_alpha(alpha::TINT).to_hex(), "#4cb78220");
        assert_eq!(green.with_alpha(alpha::TINT_BORDER).to_hex(), "#4cb78230");
    }

    #[test]
    fn lighten_raises_luminance_and_keeps_alpha() {
        let base = Color::rgba(0x5e, 0x6a, 0xd2, 0x80);
        let lighter = base.lighten(0.1);
        assert!(
            u16::from(lighter.r) + u16::from(lighter.g) + u16::from(lighter.b)
                > u16::from(base.r) + u16::from(base.g) + u16::from(base.b)
        );
        assert_eq!(lighter.a, 0x80);
        assert_eq!(Color::WHITE.lighten(0.5), Color::WHITE);
        assert_eq!(Color::WHITE.darken(1.0), Color::BLACK);
    }
}
