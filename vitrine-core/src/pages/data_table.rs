//! The "complete data table" demo: generated users, sorting, selection and
//! a pagination bar that owns the page size.

use serde::Serialize;
use tracing::debug;
use vitrine_config::{PaginationDisplay, TableConfig};
use vitrine_model::{
    CellAlign, ColumnSpec, ControlSize, DemoUser, ListVariant,
    PaginationVariant,
};

use super::widgets::Widget;
use crate::catalog::CatalogProvider;
use crate::error::Result;
use crate::pagination::{PaginationController, PaginationView, page_slice};
use crate::table::{
    ListOptions, ListView, SelectionSet, SortState, TableRow, sort_rows,
};
use crate::theme::ThemeTokens;

fn user_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("name", "Name").sortable(),
        ColumnSpec::new("email", "Email"),
        ColumnSpec::new("department", "Department").sortable(),
        ColumnSpec::new("status", "Status"),
        ColumnSpec::new("last_login", "Last Login")
            .sortable()
            .aligned(CellAlign::Right),
    ]
}

/// Live state of the data table demo.
#[derive(Debug)]
pub struct DataTableDemo {
    users: Vec<DemoUser>,
    columns: Vec<ColumnSpec>,
    sort: SortState,
    selection: SelectionSet<u32>,
    pagination: PaginationController,
}

/// Rendered table plus its pagination bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataTableView {
    pub list: ListView,
    pub pagination: Option<PaginationView>,
}

impl DataTableDemo {
    pub fn new(
        provider: &dyn CatalogProvider,
        config: &TableConfig,
    ) -> Result<Self> {
        let users = provider.demo_users(config.row_count)?;
        let pagination =
            PaginationController::for_items(users.len(), config.page_size)
                .with_items_per_page_options(config.page_size_options.clone())
                .on_items_per_page_change(|size| {
                    debug!(size, "data table page size changed");
                });

        Ok(Self {
            users,
            columns: user_columns(),
            sort: SortState::default(),
            selection: SelectionSet::new(),
            pagination,
        })
    }

    pub fn users(&self) -> &[DemoUser] {
        &self.users
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn selection(&self) -> &SelectionSet<u32> {
        &self.selection
    }

    pub fn pagination(&self) -> &PaginationController {
        &self.pagination
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.pagination.go_to(page)
    }

    /// Changing the page size always lands on the first page.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        self.pagination.set_items_per_page(size)
    }

    /// Header click on `column`. Unknown and unsortable columns are ignored.
    pub fn toggle_sort(&mut self, column: &str) -> bool {
        let sortable = self
            .columns
            .iter()
            .any(|col| col.key == column && col.sortable);
        if !sortable {
            return false;
        }
        self.sort.toggle(column);
        sort_rows(&mut self.users, &self.sort);
        true
    }

    pub fn toggle_row(&mut self, id: u32) -> bool {
        self.selection.toggle(id)
    }

    /// Header checkbox: selects or clears the rows of the visible page.
    pub fn select_page(&mut self, checked: bool) {
        let keys: Vec<u32> =
            self.page_rows().iter().map(TableRow::row_key).collect();
        self.selection.select_all(keys, checked);
    }

    pub fn page_rows(&self) -> &[DemoUser] {
        page_slice(
            &self.users,
            self.pagination.current_page(),
            self.pagination.items_per_page(),
        )
    }

    pub fn view(&self, tokens: &ThemeTokens) -> DataTableView {
        let options = ListOptions {
            variant: ListVariant::Default,
            size: ControlSize::Medium,
            selectable: true,
            ..ListOptions::default()
        };
        let display = PaginationDisplay {
            show_page_info: true,
            show_items_per_page: true,
            ..PaginationDisplay::default()
        };

        DataTableView {
            list: ListView::build(
                &self.columns,
                self.page_rows(),
                &self.sort,
                &self.selection,
                &options,
                tokens,
            ),
            pagination: PaginationView::build(
                &self.pagination,
                PaginationVariant::Default,
                ControlSize::Medium,
                &display,
                tokens,
            ),
        }
    }

    pub fn widgets(&self, tokens: &ThemeTokens) -> Vec<Widget> {
        let view = self.view(tokens);
        vec![
            Widget::List { view: view.list },
            Widget::Pagination {
                view: view.pagination,
            },
        ]
    }
}
