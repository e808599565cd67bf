//! The storefront home page.

use std::time::Duration;

use serde::Serialize;
use tracing::info;
use vitrine_model::{
    Banner, BadgeSize, BadgeVariant, ButtonVariant, CardPadding, CardVariant,
    ControlSize, FooterSection, FooterVariant, LoopMode, Product,
    ProductBadge, Promo, Slide,
};

use super::widgets::Widget;
use crate::carousel::{Carousel, CarouselOptions, CarouselView};
use crate::catalog::CatalogProvider;
use crate::error::Result;
use crate::navbar::NavbarState;
use crate::theme::ThemeTokens;

pub const HERO_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5_000);
pub const HERO_HEIGHT: &str = "500px";
pub const SEARCH_PLACEHOLDER: &str = "검색...";
pub const ADD_TO_CART_LABEL: &str = "장바구니 담기";

/// Badge color for a merchandising label.
pub fn product_badge_variant(badge: &ProductBadge) -> BadgeVariant {
    match badge {
        ProductBadge::Hot | ProductBadge::Sale => BadgeVariant::Danger,
        ProductBadge::New => BadgeVariant::Success,
        _ => BadgeVariant::Warning,
    }
}

/// Hero carousel options: wraps around and advances every five seconds.
pub fn hero_options() -> CarouselOptions {
    CarouselOptions::default()
        .autoplay(HERO_AUTOPLAY_INTERVAL)
        .loop_mode(LoopMode::Infinite)
        .height(HERO_HEIGHT)
}

/// Mount the hero carousel over the provider's banners. Starts playing, so a
/// tokio runtime must be available.
pub fn hero_carousel(
    provider: &dyn CatalogProvider,
) -> Result<Carousel<Banner>> {
    let slides = provider
        .banners()?
        .into_iter()
        .enumerate()
        .map(|(i, banner)| Slide::new(i, banner))
        .collect();
    Carousel::mount(slides, hero_options())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavbarSection {
    pub bar: Widget,
    pub search: Widget,
    pub actions: Vec<Widget>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroSlide {
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    pub alt: String,
    pub action: Widget,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroSection {
    pub slides: Vec<HeroSlide>,
    pub autoplay_interval_ms: u64,
    pub view: CarouselView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromoSection {
    pub headline: String,
    pub body: String,
    /// Inline email field, newsletter only.
    pub input: Option<Widget>,
    pub action: Widget,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: u32,
    pub name: String,
    pub image_url: String,
    pub badge: Option<Widget>,
    pub original_price: String,
    pub discount: Option<Widget>,
    pub price: String,
    pub rating: f32,
    pub action: Widget,
}

impl ProductCard {
    pub fn new(tokens: &ThemeTokens, product: &Product) -> Self {
        let card_badge = |label: String, variant: BadgeVariant| {
            Widget::badge(tokens, label, variant, BadgeSize::Medium, false)
        };
        Self {
            id: product.id,
            name: product.name.clone(),
            image_url: product.image_url.clone(),
            badge: product.badge.as_ref().map(|badge| {
                card_badge(badge.to_string(), product_badge_variant(badge))
            }),
            original_price: product.original_price.to_string(),
            discount: product
                .discount_label()
                .map(|label| card_badge(label, BadgeVariant::Danger)),
            price: product.price.to_string(),
            rating: product.rating,
            action: Widget::button(
                tokens,
                ADD_TO_CART_LABEL,
                ButtonVariant::Primary,
                ControlSize::Medium,
            )
            .with_button_state(false, false, true),
        }
    }

    fn to_text(&self) -> String {
        let mut line = format!("{} {} ", self.name, self.price);
        if let Some(badge) = &self.badge {
            line = format!("{} {line}", badge.to_text());
        }
        line.push_str(&format!("(was {}", self.original_price));
        if let Some(discount) = &self.discount {
            line.push_str(&format!(" {}", discount.to_text()));
        }
        line.push_str(&format!(") ★ {}", self.rating));
        line
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductGrid {
    pub title: String,
    pub cards: Vec<ProductCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterView {
    pub variant: FooterVariant,
    pub sections: Vec<FooterSection>,
    pub bottom_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomePage {
    pub store_name: String,
    pub navbar: NavbarSection,
    pub hero: HeroSection,
    pub promo: PromoSection,
    pub best_sellers: ProductGrid,
    pub new_products: ProductGrid,
    pub highlights_title: String,
    pub highlights: Vec<Widget>,
    pub newsletter: PromoSection,
    pub footer: FooterView,
}

fn promo_section(
    tokens: &ThemeTokens,
    promo: Promo,
    input: Option<Widget>,
) -> PromoSection {
    let size = if input.is_some() {
        ControlSize::Medium
    } else {
        ControlSize::Large
    };
    PromoSection {
        headline: promo.headline,
        body: promo.body,
        input,
        action: Widget::button(
            tokens,
            promo.action_label,
            ButtonVariant::Primary,
            size,
        ),
    }
}

fn grid(
    tokens: &ThemeTokens,
    title: &str,
    products: &[Product],
) -> ProductGrid {
    ProductGrid {
        title: title.to_string(),
        cards: products
            .iter()
            .map(|product| ProductCard::new(tokens, product))
            .collect(),
    }
}

impl HomePage {
    /// Assemble the page from `provider`. Mounts the hero carousel, so a
    /// tokio runtime must be available.
    pub fn assemble(
        provider: &dyn CatalogProvider,
        tokens: &ThemeTokens,
    ) -> Result<Self> {
        let store_name = provider.store_name().to_string();
        let navbar_state = NavbarState::new(true, false);

        let hero_carousel = hero_carousel(provider)?;
        let hero = HeroSection {
            slides: hero_carousel
                .slides()
                .iter()
                .map(|slide| HeroSlide {
                    title: slide.content.title.clone(),
                    subtitle: slide.content.subtitle.clone(),
                    image_url: slide.content.image_url.clone(),
                    alt: slide.content.alt.clone(),
                    action: Widget::button(
                        tokens,
                        slide.content.action_label.clone(),
                        ButtonVariant::Primary,
                        ControlSize::Large,
                    ),
                })
                .collect(),
            autoplay_interval_ms: u64::try_from(
                hero_carousel.options().autoplay_interval.as_millis(),
            )
            .unwrap_or(u64::MAX),
            view: hero_carousel.view(),
        };
        drop(hero_carousel);

        let best_sellers = provider.best_sellers()?;
        let new_products = provider.new_products()?;

        let page = Self {
            navbar: NavbarSection {
                bar: Widget::navbar(
                    tokens,
                    store_name.clone(),
                    provider.nav_links()?,
                    &navbar_state,
                ),
                search: Widget::input(SEARCH_PLACEHOLDER),
                actions: vec![
                    Widget::button(
                        tokens,
                        "로그인",
                        ButtonVariant::Ghost,
                        ControlSize::Medium,
                    ),
                    Widget::button(
                        tokens,
                        "장바구니",
                        ButtonVariant::Primary,
                        ControlSize::Medium,
                    ),
                ],
            },
            hero,
            promo: promo_section(tokens, provider.promo()?, None),
            best_sellers: grid(tokens, "🔥 베스트셀러", &best_sellers),
            new_products: grid(tokens, "✨ 신제품", &new_products),
            highlights_title: format!("왜 {store_name}인가요?"),
            highlights: provider
                .highlights()?
                .into_iter()
                .map(|highlight| {
                    Widget::card(
                        tokens,
                        highlight.title,
                        Some(highlight.body),
                        CardVariant::Elevated,
                        CardPadding::Large,
                    )
                })
                .collect(),
            newsletter: promo_section(
                tokens,
                provider.newsletter()?,
                Some(Widget::input("이메일 주소")),
            ),
            footer: FooterView {
                variant: FooterVariant::Default,
                sections: provider.footer_sections()?,
                bottom_text: provider.footer_note()?,
            },
            store_name,
        };

        info!(
            store = %page.store_name,
            banners = page.hero.slides.len(),
            products = page.best_sellers.cards.len()
                + page.new_products.cards.len(),
            "home page assembled"
        );
        Ok(page)
    }

    pub fn to_text(&self) -> String {
        let mut out = Vec::new();

        let actions: Vec<String> =
            self.navbar.actions.iter().map(Widget::to_text).collect();
        out.push(format!(
            "{}  {}  {}",
            self.navbar.bar.to_text(),
            self.navbar.search.to_text(),
            actions.join(" ")
        ));
        out.push(String::new());

        out.push(format!(
            "## Hero ({}ms, {})",
            self.hero.autoplay_interval_ms, self.hero.view.height
        ));
        for (i, slide) in self.hero.slides.iter().enumerate() {
            let marker = if i == self.hero.view.current_index {
                "▸"
            } else {
                " "
            };
            out.push(format!(
                "{marker} {} / {} {}",
                slide.title,
                slide.subtitle,
                slide.action.to_text()
            ));
        }
        out.push(self.hero.view.to_text());
        out.push(String::new());

        push_promo(&mut out, &self.promo);

        for grid in [&self.best_sellers, &self.new_products] {
            out.push(format!("## {}", grid.title));
            for card in &grid.cards {
                out.push(format!("  {}", card.to_text()));
            }
            out.push(String::new());
        }

        out.push(format!("## {}", self.highlights_title));
        for card in &self.highlights {
            out.push(format!("  {}", card.to_text()));
        }
        out.push(String::new());

        push_promo(&mut out, &self.newsletter);

        for section in &self.footer.sections {
            let labels: Vec<&str> = section
                .links
                .iter()
                .map(|link| link.label.as_str())
                .collect();
            out.push(format!("{}: {}", section.title, labels.join(", ")));
        }
        out.push(self.footer.bottom_text.clone());
        out.join("\n")
    }
}

fn push_promo(out: &mut Vec<String>, promo: &PromoSection) {
    out.push(format!("## {}", promo.headline));
    out.push(format!("  {}", promo.body));
    let mut line = String::from("  ");
    if let Some(input) = &promo.input {
        line.push_str(&input.to_text());
        line.push(' ');
    }
    line.push_str(&promo.action.to_text());
    out.push(line);
    out.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;

    #[test]
    fn badge_variants() {
        assert_eq!(
            product_badge_variant(&ProductBadge::Hot),
            BadgeVariant::Danger
        );
        assert_eq!(
            product_badge_variant(&ProductBadge::Sale),
            BadgeVariant::Danger
        );
        assert_eq!(
            product_badge_variant(&ProductBadge::New),
            BadgeVariant::Success
        );
        assert_eq!(
            product_badge_variant(&ProductBadge::Best),
            BadgeVariant::Warning
        );
    }

    #[test]
    fn hero_mount_without_runtime_fails() {
        let err = hero_carousel(&StaticCatalog::new()).unwrap_err();
        assert!(matches!(err, crate::CoreError::NoRuntime));
    }

    #[tokio::test(start_paused = true)]
    async fn assembled_page_wires_every_section() {
        let tokens = ThemeTokens::default();
        let page = HomePage::assemble(&StaticCatalog::new(), &tokens).unwrap();

        assert_eq!(page.hero.slides.len(), 3);
        assert_eq!(page.hero.autoplay_interval_ms, 5_000);
        assert_eq!(page.hero.view.height, "500px");
        assert_eq!(page.hero.view.to_text(), "‹ ● ○ ○ › ⏸");

        let first = &page.best_sellers.cards[0];
        assert_eq!(first.price, "₩2,290,000");
        assert_eq!(first.original_price, "₩2,590,000");
        assert!(matches!(
            first.badge,
            Some(Widget::Badge {
                variant: BadgeVariant::Danger,
                ..
            })
        ));
        assert!(page.best_sellers.cards[3].badge.is_none());

        assert_eq!(page.highlights.len(), 4);
        assert_eq!(page.highlights_title, "왜 TechStore인가요?");
        assert_eq!(page.footer.sections.len(), 3);

        let text = page.to_text();
        assert!(text.contains("TechStore | 노트북 · 스마트폰"));
        assert!(text.contains("(HOT) MacBook Pro 14\" ₩2,290,000"));
        assert!(text.ends_with("© 2024 TechStore. All rights reserved."));
    }
}
