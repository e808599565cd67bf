//! The dark storefront palette.

use serde::Serialize;

use super::colors::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandColors {
    pub primary: Color,
    pub primary_text: Color,
    pub accent: Color,
    pub accent_hover: Color,
    pub blue: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackgroundColors {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub quaternary: Color,
    pub translucent: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextColors {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    pub quaternary: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BorderColors {
    pub primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusColors {
    pub red: Color,
    pub orange: Color,
    pub yellow: Color,
    pub green: Color,
    pub blue: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FunctionalColors {
    pub white: Color,
    pub black: Color,
    /// Pressed state of danger buttons.
    pub danger_active: Color,
    /// Hover state of danger buttons.
    pub danger_hover: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkColors {
    pub primary: Color,
    pub hover: Color,
}

/// Every color token, grouped the way the style tables address them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub brand: BrandColors,
    pub background: BackgroundColors,
    pub text: TextColors,
    pub border: BorderColors,
    pub link: LinkColors,
    pub status: StatusColors,
    pub functional: FunctionalColors,
}

impl Palette {
    pub const DARK: Self = Self {
        brand: BrandColors {
            primary: Color::rgb(0x5e, 0x6a, 0xd2),
            primary_text: Color::WHITE,
            accent: Color::rgb(0x71, 0x70, 0xff),
            accent_hover: Color::rgb(0x82, 0x8f, 0xff),
            blue: Color::rgb(0x4e, 0xa7, 0xfc),
        },
        background: BackgroundColors {
            primary: Color::rgb(0x08, 0x09, 0x0a),
            secondary: Color::rgb(0x1c, 0x1c, 0x1f),
            tertiary: Color::rgb(0x23, 0x23, 0x26),
            quaternary: Color::rgb(0x28, 0x28, 0x2c),
            translucent: Color::rgba(0xff, 0xff, 0xff, 0x0d),
        },
        text: TextColors {
            primary: Color::rgb(0xf7, 0xf8, 0xf8),
            secondary: Color::rgb(0xd0, 0xd6, 0xe0),
            tertiary: Color::rgb(0x8a, 0x8f, 0x98),
            quaternary: Color::rgb(0x62, 0x66, 0x6d),
        },
        border: BorderColors {
            primary: Color::rgb(0x23, 0x25, 0x2a),
            secondary: Color::rgb(0x34, 0x34, 0x3a),
            tertiary: Color::rgb(0x3e, 0x3e, 0x44),
        },
        link: LinkColors {
            primary: Color::rgb(0x82, 0x8f, 0xff),
            hover: Color::WHITE,
        },
        status: StatusColors {
            red: Color::rgb(0xeb, 0x57, 0x57),
            orange: Color::rgb(0xfc, 0x78, 0x40),
            yellow: Color::rgb(0xf2, 0xc9, 0x4c),
            green: Color::rgb(0x4c, 0xb7, 0x82),
            blue: Color::rgb(0x4e, 0xa7, 0xfc),
        },
        functional: FunctionalColors {
            white: Color::WHITE,
            black: Color::BLACK,
            danger_hover: Color::rgb(0xd1, 0x44, 0x44),
            danger_active: Color::rgb(0xb9, 0x33, 0x33),
        },
    };

    /// `(group, token, color)` for every token, in display order. Drives the
    /// theme overview on the components page.
    pub fn swatches(&self) -> Vec<(&'static str, &'static str, Color)> {
        vec![
            ("brand", "primary", self.brand.primary),
            ("brand", "primaryText", self.brand.primary_text),
            ("brand", "accent", self.brand.accent),
            ("brand", "accentHover", self.brand.accent_hover),
            ("brand", "blue", self.brand.blue),
            ("background", "primary", self.background.primary),
            ("background", "secondary", self.background.secondary),
            ("background", "tertiary", self.background.tertiary),
            ("background", "quaternary", self.background.quaternary),
            ("background", "translucent", self.background.translucent),
            ("text", "primary", self.text.primary),
            ("text", "secondary", self.text.secondary),
            ("text", "tertiary", self.text.tertiary),
            ("text", "quaternary", self.text.quaternary),
            ("border", "primary", self.border.primary),
            ("border", "secondary", self.border.secondary),
            ("border", "tertiary", self.border.tertiary),
            ("status", "red", self.status.red),
            ("status", "orange", self.status.orange),
            ("status", "yellow", self.status.yellow),
            ("status", "green", self.status.green),
            ("status", "blue", self.status.blue),
        ]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::DARK
    }
}
