use serde::Serialize;
use vitrine_model::ControlSize;

use crate::theme::{Color, FontSize, Radius, ThemeTokens};

/// Page number and navigation button of a pagination bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageButtonStyle {
    pub min_width: u16,
    pub height: u16,
    pub horizontal_padding: u16,
    pub font_size: f32,
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub radius: Radius,
}

pub fn page_button_style(
    tokens: &ThemeTokens,
    size: ControlSize,
    active: bool,
) -> PageButtonStyle {
    let p = &tokens.palette;
    let (extent, font) = match size {
        ControlSize::Small => (28, FontSize::Mini),
        ControlSize::Medium => (32, FontSize::Small),
        ControlSize::Large => (40, FontSize::Regular),
    };
    let (background, foreground, border) = if active {
        (p.brand.primary, p.brand.primary_text, p.brand.primary)
    } else {
        (p.background.secondary, p.text.secondary, p.border.secondary)
    };

    PageButtonStyle {
        min_width: extent,
        height: extent,
        horizontal_padding: 8,
        font_size: tokens.font_sizes.get(font),
        background,
        foreground,
        border,
        radius: Radius::R6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_and_active_fill() {
        let tokens = ThemeTokens::default();
        let small = page_button_style(&tokens, ControlSize::Small, false);
        let large = page_button_style(&tokens, ControlSize::Large, true);
        assert_eq!((small.min_width, small.height), (28, 28));
        assert_eq!(small.font_size, tokens.font_sizes.mini);
        assert_eq!(large.height, 40);
        assert_eq!(large.background, tokens.palette.brand.primary);
    }
}
