use serde::Serialize;
use vitrine_model::{AvatarShape, AvatarSize, PresenceStatus};

use crate::theme::{Color, Radius, ThemeTokens};

/// Name shown when neither a name nor alt text is available.
pub const DEFAULT_DISPLAY_NAME: &str = "User";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDot {
    pub color: Color,
    pub diameter: u16,
    /// Ring separating the dot from the avatar.
    pub ring: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvatarStyle {
    pub diameter: u16,
    pub font_size: u16,
    pub radius: Radius,
    pub background: Color,
    pub foreground: Color,
    pub status: Option<StatusDot>,
}

pub fn avatar_style(
    tokens: &ThemeTokens,
    size: AvatarSize,
    shape: AvatarShape,
    status: Option<PresenceStatus>,
) -> AvatarStyle {
    let p = &tokens.palette;
    let (diameter, font_size) = match size {
        AvatarSize::Small => (24, 10),
        AvatarSize::Medium => (32, 13),
        AvatarSize::Large => (40, 16),
        AvatarSize::XLarge => (64, 24),
    };
    let dot_diameter = match size {
        AvatarSize::Small => 8,
        AvatarSize::Medium => 10,
        AvatarSize::Large | AvatarSize::XLarge => 12,
    };

    AvatarStyle {
        diameter,
        font_size,
        radius: match shape {
            AvatarShape::Circle => Radius::Circle,
            AvatarShape::Square => Radius::R8,
        },
        background: p.brand.primary,
        foreground: p.brand.primary_text,
        status: status.map(|status| StatusDot {
            color: status_color(tokens, status),
            diameter: dot_diameter,
            ring: p.background.primary,
        }),
    }
}

pub fn status_color(tokens: &ThemeTokens, status: PresenceStatus) -> Color {
    let p = &tokens.palette;
    match status {
        PresenceStatus::Online => p.status.green,
        PresenceStatus::Offline => p.text.quaternary,
        PresenceStatus::Busy => p.status.red,
        PresenceStatus::Away => p.status.orange,
    }
}

/// First non-empty of `name` and `alt`, or [`DEFAULT_DISPLAY_NAME`].
pub fn display_name<'a>(name: Option<&'a str>, alt: Option<&'a str>) -> &'a str {
    [name, alt]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.trim().is_empty())
        .unwrap_or(DEFAULT_DISPLAY_NAME)
}

/// One word: its first two characters. Several words: the first letter of
/// the first and last word. Always uppercased.
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    match words.as_slice() {
        [] => String::new(),
        [single] => single.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => first
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_follow_word_count() {
        assert_eq!(initials("kim"), "KI");
        assert_eq!(initials("Jane Q Public"), "JP");
        assert_eq!(initials("  ada   lovelace "), "AL");
        assert_eq!(initials("X"), "X");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn display_name_falls_back_to_user() {
        assert_eq!(display_name(Some("Ada"), Some("alt")), "Ada");
        assert_eq!(display_name(None, Some("Profile")), "Profile");
        assert_eq!(display_name(Some(" "), None), "User");
        assert_eq!(initials(display_name(None, None)), "US");
    }

    #[test]
    fn status_dot_tracks_size_and_presence() {
        let tokens = ThemeTokens::default();
        let style = avatar_style(
            &tokens,
            AvatarSize::Small,
            AvatarShape::Square,
            Some(PresenceStatus::Away),
        );
        assert_eq!(style.diameter, 24);
        assert_eq!(style.radius, Radius::R8);
        let dot = style.status.unwrap();
        assert_eq!(dot.diameter, 8);
        assert_eq!(dot.color.to_hex(), "#fc7840");

        let offline = status_color(&tokens, PresenceStatus::Offline);
        assert_eq!(offline.to_hex(), "#62666d");
    }
}
