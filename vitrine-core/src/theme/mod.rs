//! Design tokens shared by every style table.
//!
//! The token set is static; a [`ScalePreset`] only rescales sizes. Spacing
//! and font sizes scale linearly, transitions by the square root of the
//! factor, colors and radii not at all.

pub mod colors;
pub mod motion;
pub mod palette;
pub mod spacing;
pub mod typography;

use serde::Serialize;
use vitrine_model::ScalePreset;

pub use colors::Color;
pub use motion::{TransitionSpeed, TransitionTokens};
pub use palette::Palette;
pub use spacing::{Radius, SpacingSize, SpacingTokens};
pub use typography::{FontSize, FontSizes, FontWeights};

/// Resolved token set for one scale factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThemeTokens {
    pub scale: f32,
    pub palette: Palette,
    pub font_sizes: FontSizes,
    pub font_weights: FontWeights,
    pub spacing: SpacingTokens,
    pub transitions: TransitionTokens,
}

impl ThemeTokens {
    pub fn scaled(scale: f32) -> Self {
        Self {
            scale,
            palette: Palette::DARK,
            font_sizes: FontSizes::scaled(scale),
            font_weights: FontWeights::BASE,
            spacing: SpacingTokens::scaled(scale),
            transitions: TransitionTokens::scaled(scale),
        }
    }

    pub fn for_preset(preset: ScalePreset) -> Self {
        Self::scaled(preset.scale_factor())
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::for_preset(ScalePreset::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preset_is_unscaled() {
        let tokens = ThemeTokens::default();
        assert_eq!(tokens.font_sizes, FontSizes::BASE);
        assert_eq!(tokens.spacing, SpacingTokens::BASE);
        assert_eq!(tokens.transitions, TransitionTokens::BASE);
    }

    #[test]
    fn presets_leave_colors_alone() {
        let huge = ThemeTokens::for_preset(ScalePreset::Huge);
        assert_eq!(huge.palette, Palette::DARK);
        assert!(huge.font_sizes.regular > FontSizes::BASE.regular);
        assert!(huge.transitions.regular > TransitionTokens::BASE.regular);
    }
}
