//! Shared configuration library for Vitrine.
//!
//! This crate centralizes the showcase defaults (pagination window size,
//! autoplay cadence, demo table sizing, token scale), the loader that merges
//! them with files and environment overrides, and the guard rails that reject
//! values the controllers cannot work with. The `vitrine-showcase` binary and
//! `vitrine-core` both consume these types so there is a single source of
//! truth for component defaults.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, ConfigSource, EnvOverrides,
    error::ConfigLoadError,
};
pub use models::carousel::CarouselConfig;
pub use models::pagination::{PaginationConfig, PaginationDisplay};
pub use models::{ShowcaseConfig, TableConfig, ThemeConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
