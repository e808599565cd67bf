use thiserror::Error;

use super::models::ShowcaseConfig;

/// Shortest autoplay period accepted from configuration.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 100;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("pagination.{field} must be at least 1")]
    ZeroPaginationValue { field: &'static str },
    #[error("pagination.items_per_page_options must not be empty")]
    EmptyItemsPerPageOptions,
    #[error(
        "carousel.autoplay_interval_ms must be at least {MIN_AUTOPLAY_INTERVAL_MS} (got {value})"
    )]
    AutoplayIntervalTooShort { value: u64 },
    #[error("table page sizes must be at least 1")]
    ZeroTablePageSize,
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Reject values the controllers cannot work with and collect the ones that
/// are merely odd.
pub fn apply_guard_rails(
    config: &ShowcaseConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();
    let pagination = &config.pagination;

    if pagination.max_visible_pages == 0 {
        return Err(ConfigGuardRailError::ZeroPaginationValue {
            field: "max_visible_pages",
        });
    }
    if pagination.items_per_page == 0 {
        return Err(ConfigGuardRailError::ZeroPaginationValue {
            field: "items_per_page",
        });
    }
    if pagination.items_per_page_options.is_empty() {
        return Err(ConfigGuardRailError::EmptyItemsPerPageOptions);
    }
    if pagination.items_per_page_options.contains(&0) {
        return Err(ConfigGuardRailError::ZeroPaginationValue {
            field: "items_per_page_options",
        });
    }

    if config.carousel.autoplay_interval_ms < MIN_AUTOPLAY_INTERVAL_MS {
        return Err(ConfigGuardRailError::AutoplayIntervalTooShort {
            value: config.carousel.autoplay_interval_ms,
        });
    }

    if config.table.page_size == 0 || config.table.page_size_options.contains(&0)
    {
        return Err(ConfigGuardRailError::ZeroTablePageSize);
    }

    if !pagination
        .items_per_page_options
        .contains(&pagination.items_per_page)
    {
        warnings.push_with_hint(
            format!(
                "pagination.items_per_page ({}) is not one of items_per_page_options",
                pagination.items_per_page
            ),
            "The page size selector will show no selected entry until the user picks one",
        );
    }

    if pagination.max_visible_pages % 2 == 0 {
        warnings.push(format!(
            "pagination.max_visible_pages ({}) is even; the current page cannot be centred",
            pagination.max_visible_pages
        ));
    }

    if !config.table.page_size_options.contains(&config.table.page_size) {
        warnings.push(format!(
            "table.page_size ({}) is not offered by the page size selector",
            config.table.page_size
        ));
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_without_warnings() {
        let config = ShowcaseConfig::default();
        let warnings = apply_guard_rails(&config).expect("defaults are valid");
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn zero_window_is_rejected() {
        let mut config = ShowcaseConfig::default();
        config.pagination.max_visible_pages = 0;
        let err = apply_guard_rails(&config).unwrap_err();
        assert!(matches!(
            err,
            ConfigGuardRailError::ZeroPaginationValue {
                field: "max_visible_pages"
            }
        ));
    }

    #[test]
    fn short_autoplay_interval_is_rejected() {
        let mut config = ShowcaseConfig::default();
        config.carousel.autoplay_interval_ms = 10;
        let err = apply_guard_rails(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "carousel.autoplay_interval_ms must be at least 100 (got 10)"
        );
    }

    #[test]
    fn unlisted_page_size_warns() {
        let mut config = ShowcaseConfig::default();
        config.pagination.items_per_page = 15;
        let warnings = apply_guard_rails(&config).expect("still valid");
        assert!(
            warnings
                .items
                .iter()
                .any(|w| w.message.contains("items_per_page (15)"))
        );
    }

    #[test]
    fn even_window_warns() {
        let mut config = ShowcaseConfig::default();
        config.pagination.max_visible_pages = 6;
        let warnings = apply_guard_rails(&config).expect("still valid");
        assert!(warnings.items.iter().any(|w| w.message.contains("even")));
    }
}
