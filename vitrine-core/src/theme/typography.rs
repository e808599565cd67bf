//! Font size and weight tokens.
//!
//! Sizes scale linearly with the preset factor. Weights never scale.

use serde::Serialize;

/// Semantic font sizes in pixels.
///
/// | Token     | Base |
/// |-----------|------|
/// | `micro`   | 11   |
/// | `mini`    | 12   |
/// | `small`   | 13   |
/// | `regular` | 15   |
/// | `large`   | 17   |
/// | `title`   | 24   |
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontSizes {
    pub micro: f32,
    pub mini: f32,
    pub small: f32,
    pub regular: f32,
    pub large: f32,
    pub title: f32,
}

impl FontSizes {
    pub const BASE: Self = Self {
        micro: 11.0,
        mini: 12.0,
        small: 13.0,
        regular: 15.0,
        large: 17.0,
        title: 24.0,
    };

    pub fn scaled(scale: f32) -> Self {
        Self {
            micro: Self::BASE.micro * scale,
            mini: Self::BASE.mini * scale,
            small: Self::BASE.small * scale,
            regular: Self::BASE.regular * scale,
            large: Self::BASE.large * scale,
            title: Self::BASE.title * scale,
        }
    }

    pub fn get(&self, size: FontSize) -> f32 {
        match size {
            FontSize::Micro => self.micro,
            FontSize::Mini => self.mini,
            FontSize::Small => self.small,
            FontSize::Regular => self.regular,
            FontSize::Large => self.large,
            FontSize::Title => self.title,
        }
    }

    /// CSS length for `size`, rounded to whole pixels.
    pub fn css(&self, size: FontSize) -> String {
        format!("{}px", self.get(size).round())
    }
}

impl Default for FontSizes {
    fn default() -> Self {
        Self::BASE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Micro,
    Mini,
    Small,
    Regular,
    Large,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontWeights {
    pub light: u16,
    pub normal: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

impl FontWeights {
    pub const BASE: Self = Self {
        light: 300,
        normal: 400,
        medium: 510,
        semibold: 590,
        bold: 680,
    };
}

impl Default for FontWeights {
    fn default() -> Self {
        Self::BASE
    }
}
