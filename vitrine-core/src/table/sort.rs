use serde::Serialize;
use tracing::debug;
use vitrine_model::SortDirection;

use super::TableRow;

/// Glyph for sortable columns that are not the active sort key.
pub const INACTIVE_SORT_GLYPH: &str = "↕";

/// Active sort column and direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }

    /// Header click: flip the direction of the active column, or make `key`
    /// the active column in ascending order.
    pub fn toggle(&mut self, key: &str) {
        if self.is_active(key) {
            self.direction = self.direction.flipped();
        } else {
            self.key = Some(key.to_string());
            self.direction = SortDirection::Ascending;
        }
        debug!(key, direction = ?self.direction, "sort changed");
    }

    pub fn glyph(&self, key: &str) -> &'static str {
        if self.is_active(key) {
            self.direction.glyph()
        } else {
            INACTIVE_SORT_GLYPH
        }
    }
}

/// Stable in-place sort by the active column. No active column leaves the
/// order untouched.
pub fn sort_rows<R: TableRow>(rows: &mut [R], state: &SortState) {
    let Some(key) = state.key.as_deref() else {
        return;
    };
    rows.sort_by(|a, b| {
        state.direction.apply(a.cell(key).compare(&b.cell(key)))
    });
}
