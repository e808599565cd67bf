//! # Vitrine Core
//!
//! Headless behavior of the Vitrine storefront component kit: state holders,
//! pure calculators and style tables that a renderer (web, desktop or
//! terminal) turns into markup.
//!
//! ## Overview
//!
//! - **Pagination**: the page window calculator, a navigation controller
//!   with page-size and quick-jump handling, and the bar layout per variant
//! - **Carousel**: slide index state with wrap-around or saturating
//!   navigation, plus an autoplay timer running as a tokio task
//! - **Lists**: sort state, row sorting, selection and the rendered table
//! - **Select / Navbar**: disclosure and scroll state
//! - **Theme / Styles**: the static dark token set and the variant-to-style
//!   lookup tables
//! - **Catalog / Pages**: sample data behind a provider trait and the two
//!   demo pages assembled from it
//!
//! ## Examples
//!
//! ```
//! use vitrine_core::pagination::compute_page_window;
//!
//! let labels: Vec<String> = compute_page_window(10, 50, 5)
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! assert_eq!(labels, ["1", "...", "8", "9", "10", "11", "12", "...", "50"]);
//! ```

pub mod carousel;
pub mod catalog;
pub mod error;
pub mod navbar;
pub mod pages;
pub mod pagination;
pub mod select;
pub mod styles;
pub mod table;
pub mod theme;

pub use carousel::{
    AutoplayTimer, Carousel, CarouselOptions, CarouselView,
    SlideIndexController,
};
pub use catalog::{CatalogProvider, StaticCatalog};
pub use error::{CoreError, Result};
pub use navbar::NavbarState;
pub use pages::{PageKind, RenderedPage, assemble};
pub use pagination::{
    PageWindowCalculator, PaginationController, PaginationView,
    compute_page_window,
};
pub use select::{SelectOption, SelectState};
pub use table::{ListView, SelectionSet, SortState, TableRow};
pub use theme::ThemeTokens;
