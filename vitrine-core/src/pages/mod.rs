//! Demo page assembly.
//!
//! Pages are snapshots: every component is resolved against the theme
//! tokens and the catalog data, then handed out as serializable data with a
//! plain-text rendering for terminals.

pub mod components;
pub mod data_table;
pub mod home;
pub mod widgets;

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use vitrine_config::ShowcaseConfig;

pub use components::ComponentsPage;
pub use data_table::{DataTableDemo, DataTableView};
pub use home::HomePage;
pub use widgets::{Demo, Section, Widget};

use crate::catalog::CatalogProvider;
use crate::error::{CoreError, Result};
use crate::theme::ThemeTokens;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    Components,
}

impl PageKind {
    pub const ALL: [PageKind; 2] = [PageKind::Home, PageKind::Components];

    pub fn as_str(self) -> &'static str {
        match self {
            PageKind::Home => "home",
            PageKind::Components => "components",
        }
    }
}

impl Display for PageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "index" => Ok(PageKind::Home),
            "components" => Ok(PageKind::Components),
            other => Err(CoreError::UnknownPage(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum RenderedPage {
    Home(HomePage),
    Components(ComponentsPage),
}

impl RenderedPage {
    pub fn kind(&self) -> PageKind {
        match self {
            RenderedPage::Home(_) => PageKind::Home,
            RenderedPage::Components(_) => PageKind::Components,
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            RenderedPage::Home(page) => page.to_text(),
            RenderedPage::Components(page) => page.to_text(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Assemble `kind` with tokens scaled by the configured preset. Must run
/// inside a tokio runtime (both pages mount autoplaying carousels).
pub fn assemble(
    kind: PageKind,
    provider: &dyn CatalogProvider,
    config: &ShowcaseConfig,
) -> Result<RenderedPage> {
    let tokens = ThemeTokens::for_preset(config.theme.scale_preset);
    Ok(match kind {
        PageKind::Home => {
            RenderedPage::Home(HomePage::assemble(provider, &tokens)?)
        }
        PageKind::Components => RenderedPage::Components(
            ComponentsPage::assemble(provider, config, &tokens)?,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_kind_parses() {
        assert_eq!("home".parse::<PageKind>().unwrap(), PageKind::Home);
        assert_eq!(
            " Components ".parse::<PageKind>().unwrap(),
            PageKind::Components
        );
        let err = "checkout".parse::<PageKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown page: checkout");
    }
}
