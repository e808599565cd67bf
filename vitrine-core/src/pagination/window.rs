//! Page window calculation.
//!
//! Produces the labels a pagination bar shows for a given position. The first
//! and last page are always present once there is at least one page; the
//! pages around the current one fill the window and gaps collapse into an
//! ellipsis.

use vitrine_config::models::pagination::DEFAULT_MAX_VISIBLE_PAGES;
use vitrine_model::PageLabel;

/// Computes page windows for a fixed window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindowCalculator {
    max_visible_pages: usize,
}

impl Default for PageWindowCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VISIBLE_PAGES)
    }
}

impl PageWindowCalculator {
    pub fn new(max_visible_pages: usize) -> Self {
        Self { max_visible_pages }
    }

    pub fn max_visible_pages(&self) -> usize {
        self.max_visible_pages
    }

    pub fn compute(
        &self,
        current_page: usize,
        total_pages: usize,
    ) -> Vec<PageLabel> {
        compute_page_window(current_page, total_pages, self.max_visible_pages)
    }
}

/// Labels for `current_page` out of `total_pages`, showing at most
/// `max_visible_pages` pages around the current one plus both ends.
///
/// `current_page` is not validated. Out-of-range input still yields an
/// increasing sequence bounded by `1` and `total_pages`.
pub fn compute_page_window(
    current_page: usize,
    total_pages: usize,
    max_visible_pages: usize,
) -> Vec<PageLabel> {
    if total_pages == 0 {
        return Vec::new();
    }

    if total_pages <= max_visible_pages {
        return (1..=total_pages).map(PageLabel::Page).collect();
    }

    let half = max_visible_pages / 2;
    let start = current_page.saturating_sub(half).max(1);
    let end = current_page.saturating_add(half).min(total_pages);

    let mut labels = Vec::with_capacity(max_visible_pages.saturating_add(4));
    labels.push(PageLabel::Page(1));

    if start > 2 {
        labels.push(PageLabel::Ellipsis);
    }

    labels.extend(
        (start..=end)
            .filter(|page| *page != 1 && *page != total_pages)
            .map(PageLabel::Page),
    );

    if end < total_pages - 1 {
        labels.push(PageLabel::Ellipsis);
    }

    if total_pages > 1 {
        labels.push(PageLabel::Page(total_pages));
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLabel::{Ellipsis, Page};

    fn numbers(labels: &[PageLabel]) -> Vec<usize> {
        labels.iter().filter_map(PageLabel::page).collect()
    }

    #[test]
    fn middle_of_a_long_range() {
        assert_eq!(
            compute_page_window(10, 50, 5),
            vec![
                Page(1),
                Ellipsis,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Ellipsis,
                Page(50)
            ]
        );
    }

    #[test]
    fn short_range_lists_every_page() {
        assert_eq!(
            compute_page_window(1, 5, 7),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert_eq!(compute_page_window(3, 7, 7).len(), 7);
    }

    #[test]
    fn zero_pages_is_empty() {
        assert!(compute_page_window(1, 0, 7).is_empty());
        assert!(compute_page_window(0, 0, 0).is_empty());
    }

    #[test]
    fn first_page_keeps_last_page() {
        assert_eq!(
            compute_page_window(1, 20, 7),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn last_page_keeps_first_page() {
        assert_eq!(
            compute_page_window(20, 20, 7),
            vec![Page(1), Ellipsis, Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn no_ellipsis_when_the_gap_is_a_single_page() {
        // start == 2 and end == total - 1
        assert_eq!(
            compute_page_window(5, 9, 7),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Page(8),
                Page(9)
            ]
        );
    }

    #[test]
    fn out_of_range_input_does_not_panic() {
        for (current, total, max) in
            [(0, 10, 3), (99, 10, 3), (usize::MAX, 10, 3), (4, 10, 0), (1, 1, 0)]
        {
            let labels = compute_page_window(current, total, max);
            let pages = numbers(&labels);
            assert_eq!(pages.first(), Some(&1));
            assert_eq!(pages.last(), Some(&total));
            assert!(pages.windows(2).all(|w| w[0] < w[1]), "{labels:?}");
        }
    }

    #[test]
    fn pages_are_increasing_and_bounded_across_a_grid() {
        for total in 1..=30 {
            for max in 1..=9 {
                for current in 1..=total {
                    let labels = compute_page_window(current, total, max);
                    let pages = numbers(&labels);

                    assert!(pages.windows(2).all(|w| w[0] < w[1]));
                    assert!(pages.iter().all(|p| (1..=total).contains(p)));
                    assert_eq!(pages.first(), Some(&1));
                    assert_eq!(pages.last(), Some(&total));
                    assert!(pages.contains(&current));
                    assert!(
                        labels.windows(2).all(|w| !(w[0].is_ellipsis()
                            && w[1].is_ellipsis()))
                    );
                    if total <= max {
                        assert_eq!(pages, (1..=total).collect::<Vec<_>>());
                        assert!(!labels.iter().any(PageLabel::is_ellipsis));
                    }
                }
            }
        }
    }

    #[test]
    fn calculator_defaults_to_seven() {
        let calculator = PageWindowCalculator::default();
        assert_eq!(calculator.max_visible_pages(), 7);
        assert_eq!(calculator.compute(10, 50), compute_page_window(10, 50, 7));
    }
}
