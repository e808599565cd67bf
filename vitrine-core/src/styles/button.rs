use serde::Serialize;
use vitrine_model::{ButtonVariant, ControlSize};

use super::Insets;
use crate::theme::{Color, FontSize, Radius, ThemeTokens, TransitionSpeed};

/// Colors for one interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InteractionColors {
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonStyle {
    pub rest: InteractionColors,
    pub hover: InteractionColors,
    pub active: InteractionColors,
    pub padding: Insets,
    pub height: u16,
    pub font_size: f32,
    pub font_weight: u16,
    pub radius: Radius,
    /// Opacity applied while disabled.
    pub disabled_opacity: f32,
    pub transition_ms: u64,
}

pub fn button_style(
    tokens: &ThemeTokens,
    variant: ButtonVariant,
    size: ControlSize,
) -> ButtonStyle {
    let p = &tokens.palette;

    let (rest, hover, active) = match variant {
        ButtonVariant::Primary => (
            solid(p.brand.primary, p.brand.primary_text),
            solid(p.brand.accent, p.brand.primary_text),
            solid(p.brand.accent_hover, p.brand.primary_text),
        ),
        ButtonVariant::Secondary => {
            let rest = InteractionColors {
                background: p.background.secondary,
                foreground: p.text.primary,
                border: p.border.secondary,
            };
            let hover = InteractionColors {
                background: p.background.tertiary,
                border: p.border.tertiary,
                ..rest
            };
            let active = InteractionColors {
                background: p.background.quaternary,
                ..hover
            };
            (rest, hover, active)
        }
        ButtonVariant::Ghost => {
            let rest = InteractionColors {
                background: Color::TRANSPARENT,
                foreground: p.text.secondary,
                border: Color::TRANSPARENT,
            };
            let hover = InteractionColors {
                background: p.background.translucent,
                foreground: p.text.primary,
                ..rest
            };
            let active = InteractionColors {
                background: p.background.secondary,
                ..hover
            };
            (rest, hover, active)
        }
        ButtonVariant::Danger => (
            solid(p.status.red, p.functional.white),
            solid(p.functional.danger_hover, p.functional.white),
            solid(p.functional.danger_active, p.functional.white),
        ),
    };

    let (padding, height, font, radius) = match size {
        ControlSize::Small => {
            (Insets::symmetric(6, 12), 28, FontSize::Small, Radius::R6)
        }
        ControlSize::Medium => {
            (Insets::symmetric(8, 16), 36, FontSize::Regular, Radius::R8)
        }
        ControlSize::Large => {
            (Insets::symmetric(12, 24), 44, FontSize::Large, Radius::R8)
        }
    };

    ButtonStyle {
        rest,
        hover,
        active,
        padding,
        height,
        font_size: tokens.font_sizes.get(font),
        font_weight: tokens.font_weights.medium,
        radius,
        disabled_opacity: 0.5,
        transition_ms: tokens.transitions.get(TransitionSpeed::Quick),
    }
}

fn solid(fill: Color, foreground: Color) -> InteractionColors {
    InteractionColors {
        background: fill,
        foreground,
        border: fill,
    }
}
