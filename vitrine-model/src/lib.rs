//! Core data model definitions shared across Vitrine crates.
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod page;
pub mod slide;
pub mod table;
pub mod variants;

// Intentionally curated re-exports for downstream consumers.
pub use catalog::{
    Banner, DemoUser, FooterLink, FooterSection, Highlight, NavLink, Price,
    Product, ProductBadge, Promo, UserStatus,
};
pub use error::{ModelError, Result as ModelResult};
pub use page::PageLabel;
pub use slide::{LoopMode, PlaybackState, Slide, SlideKey};
pub use table::{CellAlign, CellValue, ColumnSpec, SortDirection};
pub use variants::{
    AvatarShape, AvatarSize, BadgeSize, BadgeVariant, ButtonVariant,
    CardPadding, CardVariant, ControlSize, FooterVariant, ListVariant,
    PaginationVariant, PresenceStatus, ScalePreset,
};
