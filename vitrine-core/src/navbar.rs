//! Navbar scroll tracking and mobile menu disclosure.

use serde::Serialize;

use crate::theme::{Color, ThemeTokens, colors::alpha};

/// Offset in px past which a sticky or transparent navbar counts as
/// scrolled.
pub const SCROLL_THRESHOLD: f32 = 10.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavbarState {
    pub sticky: bool,
    pub transparent: bool,
    scrolled: bool,
    mobile_menu_open: bool,
}

/// Resolved navbar chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavbarAppearance {
    pub background: Color,
    pub border: Option<Color>,
    pub sticky: bool,
}

impl NavbarState {
    pub fn new(sticky: bool, transparent: bool) -> Self {
        Self {
            sticky,
            transparent,
            ..Self::default()
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    fn tracks_scroll(&self) -> bool {
        self.sticky || self.transparent
    }

    /// Returns whether the scrolled flag flipped.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        if !self.tracks_scroll() {
            return false;
        }
        let scrolled = offset > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn appearance(&self, tokens: &ThemeTokens) -> NavbarAppearance {
        let p = &tokens.palette;
        let background = if self.scrolled {
            p.background.primary.with_alpha(alpha::OVERLAY)
        } else if self.transparent {
            Color::TRANSPARENT
        } else {
            p.background.primary
        };
        NavbarAppearance {
            background,
            border: (!self.transparent || self.scrolled)
                .then_some(p.border.primary),
            sticky: self.sticky,
        }
    }
}
