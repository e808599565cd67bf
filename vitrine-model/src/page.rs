use std::fmt::{self, Display, Formatter};

/// One entry of a pagination window: either a concrete page number or a
/// marker standing in for a run of elided pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

impl PageLabel {
    /// Page number, or `None` for an ellipsis marker.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageLabel::Page(page) => Some(*page),
            PageLabel::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageLabel::Ellipsis)
    }
}

impl Display for PageLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PageLabel::Page(page) => write!(f, "{page}"),
            PageLabel::Ellipsis => write!(f, "..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_numbers_and_dots() {
        assert_eq!(PageLabel::Page(12).to_string(), "12");
        assert_eq!(PageLabel::Ellipsis.to_string(), "...");
    }

    #[test]
    fn page_accessor_skips_markers() {
        assert_eq!(PageLabel::Page(3).page(), Some(3));
        assert_eq!(PageLabel::Ellipsis.page(), None);
        assert!(PageLabel::Ellipsis.is_ellipsis());
    }
}
