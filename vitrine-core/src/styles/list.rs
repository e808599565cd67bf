use serde::Serialize;
use vitrine_model::{ControlSize, ListVariant};

use super::Insets;
use crate::theme::{Color, Radius, ThemeTokens, colors::alpha};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListStyle {
    pub cell_padding: Insets,
    pub header_background: Color,
    pub row_divider: Color,
    /// Fill of even rows, set for the striped variant only.
    pub stripe: Option<Color>,
    pub selected_background: Color,
    pub hover_background: Color,
    /// Outer border and radius for the bordered variant.
    pub outline: Option<(Color, Radius)>,
    /// Rows render as a card grid with this gap.
    pub card_gap: Option<u16>,
}

pub fn cell_padding(size: ControlSize) -> Insets {
    match size {
        ControlSize::Small => Insets::symmetric(8, 12),
        ControlSize::Medium => Insets::symmetric(12, 16),
        ControlSize::Large => Insets::symmetric(16, 20),
    }
}

pub fn list_style(
    tokens: &ThemeTokens,
    variant: ListVariant,
    size: ControlSize,
) -> ListStyle {
    let p = &tokens.palette;
    ListStyle {
        cell_padding: cell_padding(size),
        header_background: p.background.secondary,
        row_divider: p.border.primary,
        stripe: (variant == ListVariant::Striped)
            .then_some(p.background.translucent),
        selected_background: p.brand.primary.with_alpha(alpha::SELECTED),
        hover_background: p.background.secondary,
        outline: (variant == ListVariant::Bordered)
            .then_some((p.border.primary, Radius::R8)),
        card_gap: (variant == ListVariant::Cards).then_some(16),
    }
}
