//! List / data table state: sorting, selection and the rendered layout.

pub mod selection;
pub mod sort;

use std::fmt::Display;

use serde::Serialize;
use vitrine_model::{
    CellAlign, CellValue, ColumnSpec, ControlSize, DemoUser, ListVariant,
};

pub use selection::SelectionSet;
pub use sort::{INACTIVE_SORT_GLYPH, SortState, sort_rows};

use crate::styles::{ListStyle, list_style};
use crate::theme::ThemeTokens;

pub const DEFAULT_EMPTY_MESSAGE: &str = "No items to display";

/// A row a list can sort, select and print.
pub trait TableRow {
    type Key: Ord + Clone + Display;

    fn row_key(&self) -> Self::Key;

    /// Value under `column`; [`CellValue::Empty`] for unknown columns.
    fn cell(&self, column: &str) -> CellValue;
}

impl TableRow for DemoUser {
    type Key = u32;

    fn row_key(&self) -> u32 {
        self.id
    }

    fn cell(&self, column: &str) -> CellValue {
        match column {
            "id" => CellValue::Number(f64::from(self.id)),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "department" => self.department.as_str().into(),
            "status" => self.status.to_string().into(),
            "last_login" => self.last_login.as_str().into(),
            _ => CellValue::Empty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    pub variant: ListVariant,
    pub size: ControlSize,
    pub selectable: bool,
    pub loading: bool,
    pub empty_message: String,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            variant: ListVariant::Default,
            size: ControlSize::Medium,
            selectable: false,
            loading: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub key: String,
    pub label: String,
    pub align: CellAlign,
    /// Sort glyph, for sortable columns only.
    pub sort_glyph: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub key: String,
    pub selected: bool,
    pub cells: Vec<String>,
}

/// Render-ready list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListView {
    pub variant: ListVariant,
    pub header: Vec<HeaderCell>,
    /// Header checkbox, present when rows are selectable.
    pub select_all: Option<bool>,
    pub rows: Vec<RowView>,
    /// Shown instead of the rows for an empty, settled list.
    pub empty_message: Option<String>,
    /// Overlay the content with a spinner.
    pub loading: bool,
    pub style: ListStyle,
}

impl ListView {
    pub fn build<R: TableRow>(
        columns: &[ColumnSpec],
        rows: &[R],
        sort: &SortState,
        selection: &SelectionSet<R::Key>,
        options: &ListOptions,
        tokens: &ThemeTokens,
    ) -> Self {
        let header = columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                label: column.label.clone(),
                align: column.align,
                sort_glyph: column.sortable.then(|| sort.glyph(&column.key)),
            })
            .collect();

        let keys: Vec<R::Key> = rows.iter().map(TableRow::row_key).collect();
        let row_views = rows
            .iter()
            .zip(&keys)
            .map(|(row, key)| RowView {
                key: key.to_string(),
                selected: options.selectable && selection.is_selected(key),
                cells: columns
                    .iter()
                    .map(|column| row.cell(&column.key).to_string())
                    .collect(),
            })
            .collect();

        Self {
            variant: options.variant,
            header,
            select_all: options
                .selectable
                .then(|| selection.all_selected(&keys)),
            rows: row_views,
            empty_message: (rows.is_empty() && !options.loading)
                .then(|| options.empty_message.clone()),
            loading: options.loading,
            style: list_style(tokens, options.variant, options.size),
        }
    }

    /// Plain-text table with padded columns.
    pub fn to_text(&self) -> String {
        if let Some(message) = &self.empty_message {
            return message.clone();
        }

        let mark = |checked: bool| if checked { "[x]" } else { "[ ]" };
        let mut lines: Vec<Vec<String>> = Vec::with_capacity(self.rows.len() + 1);

        let mut head: Vec<String> = Vec::new();
        if let Some(all) = self.select_all {
            head.push(mark(all).to_string());
        }
        head.extend(self.header.iter().map(|cell| match cell.sort_glyph {
            Some(glyph) => format!("{} {glyph}", cell.label),
            None => cell.label.clone(),
        }));
        lines.push(head);

        for row in &self.rows {
            let mut line = Vec::with_capacity(row.cells.len() + 1);
            if self.select_all.is_some() {
                line.push(mark(row.selected).to_string());
            }
            line.extend(row.cells.iter().cloned());
            lines.push(line);
        }

        let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
        let widths: Vec<usize> = (0..columns)
            .map(|i| {
                lines
                    .iter()
                    .filter_map(|line| line.get(i))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = lines
            .iter()
            .map(|line| {
                line.iter()
                    .zip(&widths)
                    .map(|(cell, width)| {
                        let pad = width.saturating_sub(cell.chars().count());
                        format!("{cell}{}", " ".repeat(pad))
                    })
                    .collect::<Vec<_>>()
                    .join("  ")
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n");
        if self.loading {
            out.push_str("\n(loading...)");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use vitrine_model::UserStatus;

    use super::*;

    fn user(id: u32, name: &str, status: UserStatus) -> DemoUser {
        DemoUser {
            id,
            name: name.to_string(),
            email: format!("user{id}@example.com"),
            department: "Design".to_string(),
            status,
            last_login: "2024-12-02".to_string(),
        }
    }

    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("name", "Name").sortable(),
            ColumnSpec::new("status", "Status"),
        ]
    }

    #[test]
    fn empty_list_shows_message_unless_loading() {
        let tokens = ThemeTokens::default();
        let selection = SelectionSet::new();
        let view = ListView::build::<DemoUser>(
            &columns(),
            &[],
            &SortState::default(),
            &selection,
            &ListOptions::default(),
            &tokens,
        );
        assert_eq!(view.empty_message.as_deref(), Some("No items to display"));
        assert_eq!(view.to_text(), "No items to display");

        let loading = ListView::build::<DemoUser>(
            &columns(),
            &[],
            &SortState::default(),
            &selection,
            &ListOptions {
                loading: true,
                ..ListOptions::default()
            },
            &tokens,
        );
        assert!(loading.empty_message.is_none());
        assert!(loading.loading);
    }

    #[test]
    fn selection_and_sort_glyphs_render() {
        let rows = vec![
            user(1, "User 1", UserStatus::Active),
            user(2, "User 2", UserStatus::Inactive),
        ];
        let mut selection = SelectionSet::new();
        selection.set(2, true);

        let view = ListView::build(
            &columns(),
            &rows,
            &SortState::by("name", vitrine_model::SortDirection::Descending),
            &selection,
            &ListOptions {
                selectable: true,
                ..ListOptions::default()
            },
            &ThemeTokens::default(),
        );

        assert_eq!(view.select_all, Some(false));
        assert_eq!(view.header[0].sort_glyph, Some("↓"));
        assert_eq!(view.header[1].sort_glyph, None);
        assert!(!view.rows[0].selected);
        assert!(view.rows[1].selected);
        assert_eq!(
            view.to_text(),
            "[ ]  Name ↓  Status\n[ ]  User 1  active\n[x]  User 2  inactive"
        );
    }

    #[test]
    fn demo_user_cells() {
        let row = user(7, "User 7", UserStatus::Inactive);
        assert_eq!(row.cell("id"), CellValue::Number(7.0));
        assert_eq!(row.cell("status"), CellValue::Text("inactive".into()));
        assert_eq!(row.cell("missing"), CellValue::Empty);
        assert_eq!(row.row_key(), 7);
    }
}
