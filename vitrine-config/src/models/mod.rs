pub mod carousel;
pub mod pagination;

use serde::{Deserialize, Serialize};
use vitrine_model::ScalePreset;

use self::carousel::CarouselConfig;
use self::pagination::PaginationConfig;

/// Sizing of the complete data-table demo on the components page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page when the demo mounts.
    pub page_size: usize,
    /// Number of generated demo users.
    pub row_count: usize,
    /// Choices offered by the table's page size selector.
    pub page_size_options: Vec<usize>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            row_count: 50,
            page_size_options: vec![5, 10, 20, 50],
        }
    }
}

/// Token scaling. The token values themselves are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub scale_preset: ScalePreset,
}

/// Top-level showcase configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub pagination: PaginationConfig,
    pub carousel: CarouselConfig,
    pub table: TableConfig,
    pub theme: ThemeConfig,
}
