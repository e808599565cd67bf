use serde::Serialize;
use vitrine_model::{CardPadding, CardVariant};

use crate::theme::{Color, Radius, ThemeTokens};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardStyle {
    pub background: Color,
    pub border: Color,
    /// Border color while hovered, when the card is clickable.
    pub hover_border: Color,
    pub elevated: bool,
    pub padding: u16,
    pub radius: Radius,
}

pub fn card_style(
    tokens: &ThemeTokens,
    variant: CardVariant,
    padding: CardPadding,
) -> CardStyle {
    let p = &tokens.palette;
    let (background, border, elevated) = match variant {
        CardVariant::Default => (p.background.secondary, p.border.primary, false),
        CardVariant::Elevated => (p.background.secondary, p.border.primary, true),
        CardVariant::Outlined => (Color::TRANSPARENT, p.border.secondary, false),
    };

    CardStyle {
        background,
        border,
        hover_border: p.border.tertiary,
        elevated,
        padding: match padding {
            CardPadding::None => 0,
            CardPadding::Small => 12,
            CardPadding::Medium => 20,
            CardPadding::Large => 32,
        },
        radius: Radius::R12,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_scale() {
        let tokens = ThemeTokens::default();
        let paddings: Vec<u16> = CardPadding::ALL
            .iter()
            .map(|p| card_style(&tokens, CardVariant::Default, *p).padding)
            .collect();
        assert_eq!(paddings, vec![0, 12, 20, 32]);
    }

    #[test]
    fn outlined_cards_have_no_fill() {
        let style = card_style(
            &ThemeTokens::default(),
            CardVariant::Outlined,
            CardPadding::Medium,
        );
        assert!(style.background.is_transparent());
        assert!(!style.elevated);
    }
}
