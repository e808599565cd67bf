//! Style tables: pure mappings from variant enums to style descriptors.
//!
//! Every descriptor is plain data resolved against a
//! [`ThemeTokens`](crate::theme::ThemeTokens) set, so a renderer only has to
//! translate fields into its own styling primitives.

pub mod avatar;
pub mod badge;
pub mod button;
pub mod card;
pub mod list;
pub mod pagination;

use serde::Serialize;

pub use avatar::{
    AvatarStyle, StatusDot, avatar_style, display_name, initials, status_color,
};
pub use badge::{BadgeStyle, badge_style};
pub use button::{ButtonStyle, InteractionColors, button_style};
pub use card::{CardStyle, card_style};
pub use list::{ListStyle, cell_padding, list_style};
pub use pagination::{PageButtonStyle, page_button_style};

/// Vertical and horizontal padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Insets {
    pub vertical: u16,
    pub horizontal: u16,
}

impl Insets {
    pub const ZERO: Self = Self::symmetric(0, 0);

    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    pub const fn uniform(value: u16) -> Self {
        Self::symmetric(value, value)
    }

    /// CSS shorthand, e.g. `6px 12px`.
    pub fn css(&self) -> String {
        if self.vertical == self.horizontal {
            format!("{}px", self.vertical)
        } else {
            format!("{}px {}px", self.vertical, self.horizontal)
        }
    }
}
