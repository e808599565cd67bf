//! Pagination: page window calculation, the navigation controller and the
//! bar layout derived from both.

pub mod controller;
pub mod view;
pub mod window;

pub use controller::{ChangeCallback, PaginationController};
pub use view::{NavButton, NavKind, PageButton, PageSizeSelector, PaginationView};
pub use window::{PageWindowCalculator, compute_page_window};

/// Rows of `items` on `page` (1-based) at `per_page` rows per page. Pages
/// past the end, page zero and a zero page size yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_slice_bounds() {
        let rows: Vec<u32> = (1..=12).collect();
        assert_eq!(page_slice(&rows, 1, 5), &[1, 2, 3, 4, 5]);
        assert_eq!(page_slice(&rows, 3, 5), &[11, 12]);
        assert!(page_slice(&rows, 4, 5).is_empty());
        assert!(page_slice(&rows, 0, 5).is_empty());
        assert!(page_slice(&rows, 1, 0).is_empty());
        assert!(page_slice(&rows, usize::MAX, usize::MAX).is_empty());
    }
}
