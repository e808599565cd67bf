use std::fmt;

use tracing::{debug, trace};
use vitrine_config::PaginationConfig;
use vitrine_model::PageLabel;

use super::window::PageWindowCalculator;

/// Owner notification. Receives the new page number or page size.
pub type ChangeCallback = Box<dyn FnMut(usize) + Send>;

/// Stateful wrapper around the page window: tracks the current page, guards
/// navigation and notifies the owner of accepted changes.
pub struct PaginationController {
    current_page: usize,
    total_pages: usize,
    total_items: Option<usize>,
    items_per_page: usize,
    items_per_page_options: Vec<usize>,
    calculator: PageWindowCalculator,
    on_page_change: Option<ChangeCallback>,
    on_items_per_page_change: Option<ChangeCallback>,
}

impl fmt::Debug for PaginationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationController")
            .field("current_page", &self.current_page)
            .field("total_pages", &self.total_pages)
            .field("total_items", &self.total_items)
            .field("items_per_page", &self.items_per_page)
            .field("calculator", &self.calculator)
            .finish_non_exhaustive()
    }
}

fn page_count(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

impl PaginationController {
    pub fn new(total_pages: usize) -> Self {
        let defaults = PaginationConfig::default();
        Self {
            current_page: 1,
            total_pages,
            total_items: None,
            items_per_page: defaults.items_per_page,
            items_per_page_options: defaults.items_per_page_options,
            calculator: PageWindowCalculator::new(defaults.max_visible_pages),
            on_page_change: None,
            on_items_per_page_change: None,
        }
    }

    /// Paginate a known number of items. The page count follows the page
    /// size.
    pub fn for_items(total_items: usize, items_per_page: usize) -> Self {
        let mut controller = Self::new(page_count(total_items, items_per_page));
        controller.total_items = Some(total_items);
        controller.items_per_page = items_per_page;
        controller
    }

    pub fn from_config(config: &PaginationConfig, total_pages: usize) -> Self {
        Self {
            items_per_page: config.items_per_page,
            items_per_page_options: config.items_per_page_options.clone(),
            calculator: PageWindowCalculator::new(config.max_visible_pages),
            ..Self::new(total_pages)
        }
    }

    /// Start on `page`, clamped into `1..=total_pages`.
    #[must_use]
    pub fn with_current_page(mut self, page: usize) -> Self {
        self.current_page = page.clamp(1, self.total_pages.max(1));
        self
    }

    #[must_use]
    pub fn with_total_items(mut self, total_items: usize) -> Self {
        self.total_items = Some(total_items);
        self
    }

    #[must_use]
    pub fn with_max_visible_pages(mut self, max_visible_pages: usize) -> Self {
        self.calculator = PageWindowCalculator::new(max_visible_pages);
        self
    }

    #[must_use]
    pub fn with_items_per_page_options(mut self, options: Vec<usize>) -> Self {
        self.items_per_page_options = options;
        self
    }

    #[must_use]
    pub fn on_page_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize) + Send + 'static,
    {
        self.on_page_change = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_items_per_page_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(usize) + Send + 'static,
    {
        self.on_items_per_page_change = Some(Box::new(callback));
        self
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn total_items(&self) -> Option<usize> {
        self.total_items
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn items_per_page_options(&self) -> &[usize] {
        &self.items_per_page_options
    }

    pub fn has_items_per_page_handler(&self) -> bool {
        self.on_items_per_page_change.is_some()
    }

    pub fn max_visible_pages(&self) -> usize {
        self.calculator.max_visible_pages()
    }

    /// Labels for the current position.
    pub fn labels(&self) -> Vec<PageLabel> {
        self.calculator.compute(self.current_page, self.total_pages)
    }

    /// Whether `go_to(page)` would change anything.
    pub fn accepts(&self, page: usize) -> bool {
        page >= 1 && page <= self.total_pages && page != self.current_page
    }

    /// Move to `page` and notify the owner. Out-of-range pages and the
    /// current page are ignored. Returns whether the page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        if !self.accepts(page) {
            trace!(page, current = self.current_page, "page change ignored");
            return false;
        }

        debug!(from = self.current_page, to = page, "page changed");
        self.current_page = page;
        if let Some(callback) = self.on_page_change.as_mut() {
            callback(page);
        }
        true
    }

    pub fn first(&mut self) -> bool {
        self.go_to(1)
    }

    pub fn previous(&mut self) -> bool {
        self.go_to(self.current_page.saturating_sub(1))
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.current_page.saturating_add(1))
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.total_pages)
    }

    pub fn can_go_first(&self) -> bool {
        self.accepts(1)
    }

    pub fn can_go_previous(&self) -> bool {
        self.accepts(self.current_page.saturating_sub(1))
    }

    pub fn can_go_next(&self) -> bool {
        self.accepts(self.current_page.saturating_add(1))
    }

    pub fn can_go_last(&self) -> bool {
        self.accepts(self.total_pages)
    }

    /// Quick-jump input. Leading digits are parsed the way a browser's
    /// `parseInt` would; anything without them is ignored.
    pub fn jump_to(&mut self, input: &str) -> bool {
        match parse_leading_page(input) {
            Some(page) => self.go_to(page),
            None => {
                trace!(input, "quick jump input ignored");
                false
            }
        }
    }

    /// Change the page size. The owner is notified, the page count is
    /// recomputed when the item count is known, and the view returns to the
    /// first page (notifying the page callback if that moved it).
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> bool {
        if items_per_page == 0 || items_per_page == self.items_per_page {
            return false;
        }

        debug!(
            from = self.items_per_page,
            to = items_per_page,
            "items per page changed"
        );
        self.items_per_page = items_per_page;
        if let Some(callback) = self.on_items_per_page_change.as_mut() {
            callback(items_per_page);
        }

        if let Some(total_items) = self.total_items {
            self.total_pages = page_count(total_items, items_per_page);
        }

        if self.current_page != 1 {
            self.current_page = 1;
            if let Some(callback) = self.on_page_change.as_mut() {
                callback(1);
            }
        }
        true
    }

    /// Replace the page count, keeping the current page in range.
    pub fn set_total_pages(&mut self, total_pages: usize) {
        self.total_pages = total_pages;
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }

    /// `(start, end)` of the items shown on the current page, 1-based and
    /// inclusive. `None` without a known, non-zero item count.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        let total = self.total_items.filter(|total| *total > 0)?;
        let start = (self.current_page - 1)
            .saturating_mul(self.items_per_page)
            .saturating_add(1);
        let end = self
            .current_page
            .saturating_mul(self.items_per_page)
            .min(total);
        Some((start, end))
    }

    /// "Showing 11-20 of 195 items".
    pub fn page_info(&self) -> Option<String> {
        let (start, end) = self.item_range()?;
        let total = self.total_items?;
        Some(format!("Showing {start}-{end} of {total} items"))
    }
}

fn parse_leading_page(input: &str) -> Option<usize> {
    let trimmed = input.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if unsigned.starts_with('-') {
        return None;
    }
    let digits: String =
        unsigned.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    // Values too large for usize are past any real page count.
    Some(digits.parse().unwrap_or(usize::MAX))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<usize>>>, impl FnMut(usize) + Send + 'static)
    {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |value| sink.lock().push(value))
    }

    #[test]
    fn go_to_current_page_does_not_notify() {
        let (seen, callback) = recorder();
        let mut controller = PaginationController::new(10)
            .with_current_page(4)
            .on_page_change(callback);

        assert!(!controller.go_to(4));
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn out_of_range_pages_are_ignored() {
        let (seen, callback) = recorder();
        let mut controller =
            PaginationController::new(5).on_page_change(callback);

        assert!(!controller.go_to(0));
        assert!(!controller.go_to(6));
        assert_eq!(controller.current_page(), 1);
        assert!(seen.lock().is_empty());

        assert!(controller.go_to(5));
        assert_eq!(*seen.lock(), vec![5]);
    }

    #[test]
    fn buttons_disable_exactly_when_navigation_would_no_op() {
        let mut controller = PaginationController::new(3);
        assert!(!controller.can_go_first());
        assert!(!controller.can_go_previous());
        assert!(controller.can_go_next());
        assert!(controller.can_go_last());

        controller.last();
        assert!(controller.can_go_first());
        assert!(controller.can_go_previous());
        assert!(!controller.can_go_next());
        assert!(!controller.can_go_last());

        let empty = PaginationController::new(0);
        assert!(!empty.can_go_first());
        assert!(!empty.can_go_previous());
        assert!(!empty.can_go_next());
        assert!(!empty.can_go_last());
    }

    #[test]
    fn step_navigation_walks_pages() {
        let mut controller = PaginationController::new(3);
        assert!(controller.next());
        assert!(controller.next());
        assert!(!controller.next());
        assert_eq!(controller.current_page(), 3);
        assert!(controller.previous());
        assert!(controller.first());
        assert!(!controller.previous());
    }

    #[test]
    fn quick_jump_parses_like_parse_int() {
        let mut controller = PaginationController::new(20);
        assert!(controller.jump_to(" 12abc"));
        assert_eq!(controller.current_page(), 12);
        assert!(!controller.jump_to("abc"));
        assert!(!controller.jump_to("-3"));
        assert!(!controller.jump_to("99999999999999999999999"));
        assert!(controller.jump_to("+2"));
        assert_eq!(controller.current_page(), 2);
    }

    #[test]
    fn page_info_matches_item_range() {
        let controller =
            PaginationController::for_items(195, 10).with_current_page(20);
        assert_eq!(controller.total_pages(), 20);
        assert_eq!(
            controller.page_info().as_deref(),
            Some("Showing 191-195 of 195 items")
        );

        assert_eq!(PaginationController::new(4).page_info(), None);
        assert_eq!(PaginationController::for_items(0, 10).page_info(), None);
    }

    #[test]
    fn changing_page_size_resets_to_first_page() {
        let (pages, on_page) = recorder();
        let (sizes, on_size) = recorder();
        let mut controller = PaginationController::for_items(50, 5)
            .with_current_page(7)
            .on_page_change(on_page)
            .on_items_per_page_change(on_size);

        assert!(controller.set_items_per_page(20));
        assert_eq!(controller.total_pages(), 3);
        assert_eq!(controller.current_page(), 1);
        assert_eq!(*sizes.lock(), vec![20]);
        assert_eq!(*pages.lock(), vec![1]);

        assert!(!controller.set_items_per_page(20));
        assert!(!controller.set_items_per_page(0));
        assert_eq!(*sizes.lock(), vec![20]);
    }

    #[test]
    fn config_supplies_window_and_options() {
        let config = PaginationConfig {
            max_visible_pages: 5,
            ..PaginationConfig::default()
        };
        let controller =
            PaginationController::from_config(&config, 50).with_current_page(10);
        assert_eq!(controller.max_visible_pages(), 5);
        assert_eq!(controller.items_per_page_options(), &[10, 20, 50, 100]);
        assert_eq!(controller.labels().len(), 9);
    }

    #[test]
    fn shrinking_total_pages_clamps_current() {
        let mut controller = PaginationController::new(10).with_current_page(9);
        controller.set_total_pages(4);
        assert_eq!(controller.current_page(), 4);
        controller.set_total_pages(0);
        assert_eq!(controller.current_page(), 1);
    }
}
