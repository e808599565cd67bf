//! Layout of a pagination bar for a given variant and toggle set.

use serde::Serialize;
use vitrine_config::{PaginationConfig, PaginationDisplay};
use vitrine_model::{ControlSize, PageLabel, PaginationVariant};

use super::controller::PaginationController;
use crate::styles::{PageButtonStyle, page_button_style};
use crate::theme::ThemeTokens;

pub const QUICK_JUMP_LABEL: &str = "Go to:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavKind {
    First,
    Previous,
    Next,
    Last,
}

impl NavKind {
    /// Button text. The minimal variant spells out previous/next.
    pub fn label(self, variant: PaginationVariant) -> &'static str {
        match (self, variant) {
            (NavKind::Previous, PaginationVariant::Minimal) => "Previous",
            (NavKind::Next, PaginationVariant::Minimal) => "Next",
            (NavKind::First, _) => "⟨⟨",
            (NavKind::Previous, _) => "⟨",
            (NavKind::Next, _) => "⟩",
            (NavKind::Last, _) => "⟩⟩",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavButton {
    pub kind: NavKind,
    pub label: &'static str,
    /// Page the button leads to.
    pub target: usize,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub label: PageLabel,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSizeSelector {
    pub options: Vec<usize>,
    pub selected: usize,
}

/// Everything a renderer needs to draw one pagination bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationView {
    pub variant: PaginationVariant,
    pub size: ControlSize,
    pub gap: u16,
    pub page_info: Option<String>,
    pub page_size_selector: Option<PageSizeSelector>,
    pub first: Option<NavButton>,
    pub previous: Option<NavButton>,
    pub pages: Vec<PageButton>,
    /// "Page X of Y", minimal variant only.
    pub summary: Option<String>,
    pub next: Option<NavButton>,
    pub last: Option<NavButton>,
    pub quick_jump: bool,
    pub button: PageButtonStyle,
    pub active_button: PageButtonStyle,
}

impl PaginationView {
    /// Lay out the bar. The minimal variant renders nothing for a single
    /// page.
    pub fn build(
        controller: &PaginationController,
        variant: PaginationVariant,
        size: ControlSize,
        display: &PaginationDisplay,
        tokens: &ThemeTokens,
    ) -> Option<Self> {
        let minimal = variant == PaginationVariant::Minimal;
        if minimal && controller.total_pages() <= 1 {
            return None;
        }

        let current = controller.current_page();
        let total = controller.total_pages();

        let nav = |kind: NavKind, target: usize, enabled: bool| NavButton {
            kind,
            label: kind.label(variant),
            target,
            disabled: !enabled,
        };

        let show_first_last = display.show_first_last && !minimal;
        let show_prev_next = display.show_prev_next;

        let pages = if minimal {
            Vec::new()
        } else {
            controller
                .labels()
                .into_iter()
                .map(|label| PageButton {
                    active: label.page() == Some(current),
                    label,
                })
                .collect()
        };

        let page_size_selector = (display.show_items_per_page
            && controller.has_items_per_page_handler()
            && variant == PaginationVariant::Default)
            .then(|| PageSizeSelector {
                options: controller.items_per_page_options().to_vec(),
                selected: controller.items_per_page(),
            });

        Some(Self {
            variant,
            size,
            gap: if variant == PaginationVariant::Compact { 8 } else { 16 },
            page_info: (display.show_page_info && !minimal)
                .then(|| controller.page_info())
                .flatten(),
            page_size_selector,
            first: show_first_last.then(|| {
                nav(NavKind::First, 1, controller.can_go_first())
            }),
            previous: show_prev_next.then(|| {
                nav(
                    NavKind::Previous,
                    current.saturating_sub(1),
                    controller.can_go_previous(),
                )
            }),
            pages,
            summary: minimal.then(|| format!("Page {current} of {total}")),
            next: show_prev_next.then(|| {
                nav(
                    NavKind::Next,
                    current.saturating_add(1),
                    controller.can_go_next(),
                )
            }),
            last: show_first_last.then(|| {
                nav(NavKind::Last, total, controller.can_go_last())
            }),
            quick_jump: variant == PaginationVariant::Default,
            button: page_button_style(tokens, size, false),
            active_button: page_button_style(tokens, size, true),
        })
    }

    pub fn from_config(
        controller: &PaginationController,
        config: &PaginationConfig,
        tokens: &ThemeTokens,
    ) -> Option<Self> {
        Self::build(
            controller,
            config.variant,
            config.size,
            &config.display,
            tokens,
        )
    }

    /// Single-line plain-text rendering. The active page is bracketed and
    /// disabled navigation is dropped.
    pub fn to_text(&self) -> String {
        fn push_nav(button: &Option<NavButton>, parts: &mut Vec<String>) {
            if let Some(button) = button.as_ref().filter(|b| !b.disabled) {
                parts.push(button.label.to_string());
            }
        }

        let mut parts: Vec<String> = Vec::new();

        push_nav(&self.first, &mut parts);
        push_nav(&self.previous, &mut parts);
        for page in &self.pages {
            if page.active {
                parts.push(format!("[{}]", page.label));
            } else {
                parts.push(page.label.to_string());
            }
        }
        if let Some(summary) = &self.summary {
            parts.push(summary.clone());
        }
        push_nav(&self.next, &mut parts);
        push_nav(&self.last, &mut parts);

        let mut line = parts.join(" ");
        if let Some(info) = &self.page_info {
            line = format!("{info} | {line}");
        }
        if let Some(selector) = &self.page_size_selector {
            line.push_str(&format!(" | {} / page", selector.selected));
        }
        if self.quick_jump {
            line.push_str(&format!(" | {QUICK_JUMP_LABEL}"));
        }
        line
    }
}
