//! Storefront catalog records consumed by the demo pages

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Price in whole won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Price(pub u64);

impl Price {
    /// Thousands-grouped amount without the currency sign, e.g. `2,290,000`.
    pub fn grouped(&self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "₩{}", self.grouped())
    }
}

impl FromStr for Price {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s
            .trim()
            .trim_start_matches('₩')
            .chars()
            .filter(|c| *c != ',')
            .collect();
        cleaned
            .parse::<u64>()
            .map(Price)
            .map_err(|_| ModelError::InvalidPrice(s.to_string()))
    }
}

/// Merchandising badge printed on a product card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ProductBadge {
    Hot,
    New,
    Best,
    Sale,
    Custom(String),
}

impl Display for ProductBadge {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ProductBadge::Hot => f.write_str("HOT"),
            ProductBadge::New => f.write_str("NEW"),
            ProductBadge::Best => f.write_str("BEST"),
            ProductBadge::Sale => f.write_str("SALE"),
            ProductBadge::Custom(label) => f.write_str(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: Price,
    pub original_price: Price,
    pub rating: f32,
    pub badge: Option<ProductBadge>,
    pub image_url: String,
}

impl Product {
    /// Discount against the original price, in whole percent (rounded).
    /// Zero when there is no markdown.
    pub fn discount_percent(&self) -> u32 {
        if self.original_price.0 == 0 || self.price >= self.original_price {
            return 0;
        }
        let saved = (self.original_price.0 - self.price.0) as f64;
        (saved / self.original_price.0 as f64 * 100.0).round() as u32
    }

    /// Discount label in the `-12%` form used on the cards.
    pub fn discount_label(&self) -> Option<String> {
        match self.discount_percent() {
            0 => None,
            pct => Some(format!("-{pct}%")),
        }
    }
}

/// Hero banner slide.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Banner {
    pub title: String,
    pub subtitle: String,
    pub action_label: String,
    pub image_url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub badge: Option<String>,
    pub active: bool,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            badge: None,
            active: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<FooterLink>,
}

/// Promotional call-out between the hero and the product grids.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Promo {
    pub headline: String,
    pub body: String,
    pub action_label: String,
}

/// Selling point shown in the "why us" grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Highlight {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UserStatus {
    Active,
    Inactive,
}

impl Display for UserStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            UserStatus::Active => f.write_str("active"),
            UserStatus::Inactive => f.write_str("inactive"),
        }
    }
}

/// Row of the data-table demo.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemoUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub department: String,
    pub status: UserStatus,
    /// ISO date (`YYYY-MM-DD`).
    pub last_login: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: u64, original: u64) -> Product {
        Product {
            id: 1,
            name: "MacBook Pro 14\"".into(),
            price: Price(price),
            original_price: Price(original),
            rating: 4.8,
            badge: Some(ProductBadge::Hot),
            image_url: String::new(),
        }
    }

    #[test]
    fn price_groups_thousands() {
        assert_eq!(Price(2_290_000).to_string(), "₩2,290,000");
        assert_eq!(Price(329_000).grouped(), "329,000");
        assert_eq!(Price(999).grouped(), "999");
        assert_eq!(Price(0).grouped(), "0");
    }

    #[test]
    fn price_parses_grouped_input() {
        assert_eq!("2,590,000".parse::<Price>().unwrap(), Price(2_590_000));
        assert_eq!("₩399,000".parse::<Price>().unwrap(), Price(399_000));
        assert!("twelve".parse::<Price>().is_err());
    }

    #[test]
    fn discount_rounds_to_whole_percent() {
        assert_eq!(product(2_290_000, 2_590_000).discount_label().as_deref(), Some("-12%"));
        assert_eq!(product(329_000, 399_000).discount_percent(), 18);
        assert_eq!(product(399_000, 499_000).discount_percent(), 20);
    }

    #[test]
    fn no_discount_without_markdown() {
        assert_eq!(product(100, 100).discount_label(), None);
        assert_eq!(product(100, 0).discount_percent(), 0);
    }
}
