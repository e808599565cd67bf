//! Select dropdown state.

use std::fmt;

use serde::Serialize;
use tracing::debug;

pub const DEFAULT_PLACEHOLDER: &str = "Select an option";

/// Receives the value of the option the user picked.
pub type SelectCallback = Box<dyn FnMut(&str) + Send>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Open/closed flag and selected value of a single select.
pub struct SelectState {
    options: Vec<SelectOption>,
    selected: Option<String>,
    open: bool,
    disabled: bool,
    placeholder: String,
    on_change: Option<SelectCallback>,
}

impl fmt::Debug for SelectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectState")
            .field("options", &self.options.len())
            .field("selected", &self.selected)
            .field("open", &self.open)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

impl SelectState {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            selected: None,
            open: false,
            disabled: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            on_change: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.selected = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn value(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Open or close the dropdown. Ignored while disabled.
    pub fn toggle(&mut self) -> bool {
        if self.disabled {
            return self.open;
        }
        self.open = !self.open;
        self.open
    }

    pub fn close_on_outside_click(&mut self) {
        self.open = false;
    }

    /// Pick the option carrying `value`. Unknown and disabled options are
    /// ignored; otherwise the dropdown closes and the owner is notified.
    pub fn choose(&mut self, value: &str) -> bool {
        let Some(option) = self
            .options
            .iter()
            .find(|option| option.value == value && !option.disabled)
        else {
            debug!(value, "select option ignored");
            return false;
        };

        self.selected = Some(option.value.clone());
        self.open = false;
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
        true
    }

    /// Controlled value sync from the owner. Does not notify.
    pub fn sync_value(&mut self, value: Option<&str>) {
        self.selected = value.map(str::to_string);
    }

    /// Label of the selected option, or the placeholder.
    pub fn display_text(&self) -> &str {
        self.selected
            .as_deref()
            .and_then(|value| {
                self.options.iter().find(|option| option.value == value)
            })
            .map_or(self.placeholder.as_str(), |option| option.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("option1", "Option 1"),
            SelectOption::new("option2", "Option 2"),
            SelectOption::new("option3", "Option 3 (Disabled)").disabled(),
        ]
    }

    #[test]
    fn shows_placeholder_until_chosen() {
        let mut select = SelectState::new(options());
        assert_eq!(select.display_text(), "Select an option");

        assert!(select.toggle());
        assert!(select.choose("option2"));
        assert_eq!(select.display_text(), "Option 2");
        assert!(!select.is_open());
    }

    #[test]
    fn disabled_option_is_ignored() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut select = SelectState::new(options())
            .on_change(move |value| sink.lock().push(value.to_string()));

        select.toggle();
        assert!(!select.choose("option3"));
        assert!(!select.choose("missing"));
        assert!(select.is_open());
        assert!(select.choose("option1"));
        assert_eq!(*seen.lock(), vec!["option1".to_string()]);
    }

    #[test]
    fn disabled_select_never_opens() {
        let mut select = SelectState::new(options()).disabled(true);
        assert!(!select.toggle());
        assert!(!select.is_open());
    }

    #[test]
    fn outside_click_and_sync() {
        let mut select = SelectState::new(options()).with_value("option1");
        select.toggle();
        select.close_on_outside_click();
        assert!(!select.is_open());

        select.sync_value(Some("option2"));
        assert_eq!(select.value(), Some("option2"));
        select.sync_value(None);
        assert_eq!(select.display_text(), DEFAULT_PLACEHOLDER);
    }
}
