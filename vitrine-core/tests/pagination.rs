use std::sync::Arc;

use parking_lot::Mutex;
use vitrine_core::pagination::{
    PaginationController, compute_page_window, page_slice,
};
use vitrine_model::PageLabel;

fn numbers(labels: &[PageLabel]) -> Vec<usize> {
    labels.iter().filter_map(PageLabel::page).collect()
}

#[test]
fn window_numbers_are_increasing_and_bounded() {
    for total in 0..=40 {
        for max in 1..=11 {
            for current in 1..=total.max(1) {
                let labels = compute_page_window(current, total, max);
                let pages = numbers(&labels);
                assert!(
                    pages.windows(2).all(|pair| pair[0] < pair[1]),
                    "not increasing: {current}/{total}/{max} -> {pages:?}"
                );
                assert!(pages.iter().all(|p| (1..=total).contains(p)));
                if total > 0 {
                    assert_eq!(pages.first(), Some(&1));
                    assert_eq!(pages.last(), Some(&total));
                } else {
                    assert!(labels.is_empty());
                }
            }
        }
    }
}

#[test]
fn small_totals_list_every_page() {
    let labels = compute_page_window(1, 5, 7);
    assert_eq!(numbers(&labels), [1, 2, 3, 4, 5]);
    assert!(labels.iter().all(|label| !label.is_ellipsis()));
}

#[test]
fn limited_window_collapses_both_sides() {
    let labels = compute_page_window(10, 50, 5);
    assert_eq!(
        labels,
        [
            PageLabel::Page(1),
            PageLabel::Ellipsis,
            PageLabel::Page(8),
            PageLabel::Page(9),
            PageLabel::Page(10),
            PageLabel::Page(11),
            PageLabel::Page(12),
            PageLabel::Ellipsis,
            PageLabel::Page(50),
        ]
    );
}

#[test]
fn controller_walks_a_result_set() {
    let rows: Vec<u32> = (1..=23).collect();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut pager = PaginationController::for_items(rows.len(), 10)
        .on_page_change(move |page| sink.lock().push(page));

    assert_eq!(pager.total_pages(), 3);
    assert!(!pager.go_to(1));
    assert!(pager.next());
    assert!(pager.last());
    assert!(!pager.next());
    assert!(!pager.can_go_last());
    assert_eq!(
        page_slice(&rows, pager.current_page(), pager.items_per_page()),
        &[21, 22, 23]
    );
    assert_eq!(pager.page_info().as_deref(), Some("Showing 21-23 of 23 items"));

    assert!(pager.jump_to("1st"));
    assert!(!pager.jump_to("page two"));
    assert_eq!(*seen.lock(), [2, 3, 1]);
}
