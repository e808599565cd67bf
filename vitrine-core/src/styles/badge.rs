use serde::Serialize;
use vitrine_model::{BadgeSize, BadgeVariant};

use super::Insets;
use crate::theme::{Color, FontSize, Radius, ThemeTokens, colors::alpha};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeStyle {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub padding: Insets,
    pub font_size: f32,
    pub font_weight: u16,
    pub radius: Radius,
    /// Diameter of the leading status dot, drawn in the foreground color.
    pub dot: Option<u16>,
}

const DOT_DIAMETER: u16 = 6;

pub fn badge_style(
    tokens: &ThemeTokens,
    variant: BadgeVariant,
    size: BadgeSize,
    dot: bool,
) -> BadgeStyle {
    let p = &tokens.palette;

    let (background, foreground, border) = match variant {
        BadgeVariant::Default => {
            (p.background.tertiary, p.text.secondary, p.border.secondary)
        }
        BadgeVariant::Primary => tinted(p.brand.primary, p.brand.accent),
        BadgeVariant::Success => tinted(p.status.green, p.status.green),
        BadgeVariant::Warning => tinted(p.status.orange, p.status.orange),
        BadgeVariant::Danger => tinted(p.status.red, p.status.red),
        BadgeVariant::Info => tinted(p.brand.blue, p.brand.blue),
    };

    let (padding, font) = match size {
        BadgeSize::Small => (Insets::symmetric(2, 6), FontSize::Micro),
        BadgeSize::Medium => (Insets::symmetric(4, 8), FontSize::Mini),
    };

    BadgeStyle {
        background,
        foreground,
        border,
        padding,
        font_size: tokens.font_sizes.get(font),
        font_weight: tokens.font_weights.medium,
        radius: Radius::R4,
        dot: dot.then_some(DOT_DIAMETER),
    }
}

fn tinted(base: Color, foreground: Color) -> (Color, Color, Color) {
    (
        base.with_alpha(alpha::TINT),
        foreground,
        base.with_alpha(alpha::TINT_BORDER),
    )
}
