use serde::{Deserialize, Serialize};
use vitrine_model::{ControlSize, PaginationVariant};

/// Page window size used when a caller does not pass one.
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 7;
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

fn default_items_per_page_options() -> Vec<usize> {
    vec![10, 20, 50, 100]
}

/// Which optional parts of the pagination bar are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaginationDisplay {
    /// `⟨⟨` / `⟩⟩` jump buttons. Never shown by the minimal variant.
    pub show_first_last: bool,
    /// Previous / next buttons.
    pub show_prev_next: bool,
    /// "Showing a-b of n items". Requires a known item count.
    pub show_page_info: bool,
    /// Page size selector. Only the default variant renders it, and only when
    /// an items-per-page callback is wired.
    pub show_items_per_page: bool,
}

impl Default for PaginationDisplay {
    fn default() -> Self {
        Self {
            show_first_last: true,
            show_prev_next: true,
            show_page_info: false,
            show_items_per_page: false,
        }
    }
}

/// Defaults applied to every pagination bar in the showcase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Window size handed to the page-window calculator. Odd values keep the
    /// current page centred.
    pub max_visible_pages: usize,
    pub items_per_page: usize,
    /// Choices offered by the page size selector.
    #[serde(default = "default_items_per_page_options")]
    pub items_per_page_options: Vec<usize>,
    pub variant: PaginationVariant,
    pub size: ControlSize,
    #[serde(flatten)]
    pub display: PaginationDisplay,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            items_per_page_options: default_items_per_page_options(),
            variant: PaginationVariant::Default,
            size: ControlSize::Medium,
            display: PaginationDisplay::default(),
        }
    }
}
