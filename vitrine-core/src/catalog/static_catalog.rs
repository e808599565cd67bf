use vitrine_model::{
    Banner, FooterLink, FooterSection, Highlight, NavLink, Price, Product,
    ProductBadge, Promo,
};

use super::CatalogProvider;
use crate::error::Result;

const STORE_NAME: &str = "TechStore";
const PRODUCT_IMAGE_BASE: &str =
    "https://via.placeholder.com/280x200/1c1c1f/8a8f98?text=";
const BANNER_IMAGE: &str =
    "https://via.placeholder.com/1200x400/5e6ad2/ffffff?text=Black+Friday";

/// The TechStore sample data set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl StaticCatalog {
    pub fn new() -> Self {
        Self
    }
}

fn product(
    id: u32,
    name: &str,
    price: u64,
    original_price: u64,
    rating: f32,
    badge: Option<ProductBadge>,
) -> Product {
    let label = name.split_whitespace().next().unwrap_or(name);
    Product {
        id,
        name: name.to_string(),
        price: Price(price),
        original_price: Price(original_price),
        rating,
        badge,
        image_url: format!("{PRODUCT_IMAGE_BASE}{label}"),
    }
}

fn banner(title: &str, subtitle: &str, action: &str, alt: &str) -> Banner {
    Banner {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        action_label: action.to_string(),
        image_url: BANNER_IMAGE.to_string(),
        alt: alt.to_string(),
    }
}

fn section(title: &str, labels: &[&str]) -> FooterSection {
    FooterSection {
        title: title.to_string(),
        links: labels
            .iter()
            .map(|label| FooterLink {
                label: (*label).to_string(),
                href: "#".to_string(),
            })
            .collect(),
    }
}

fn highlight(title: &str, body: &str) -> Highlight {
    Highlight {
        title: title.to_string(),
        body: body.to_string(),
    }
}

impl CatalogProvider for StaticCatalog {
    fn store_name(&self) -> &str {
        STORE_NAME
    }

    fn nav_links(&self) -> Result<Vec<NavLink>> {
        Ok(["노트북", "스마트폰", "태블릿", "액세서리", "할인상품"]
            .into_iter()
            .map(|label| NavLink::new(label, "#"))
            .collect())
    }

    fn best_sellers(&self) -> Result<Vec<Product>> {
        Ok(vec![
            product(
                1,
                "MacBook Pro 14\"",
                2_290_000,
                2_590_000,
                4.8,
                Some(ProductBadge::Hot),
            ),
            product(
                2,
                "iPhone 15 Pro Max",
                1_590_000,
                1_730_000,
                4.9,
                Some(ProductBadge::Best),
            ),
            product(
                3,
                "Galaxy Tab S9 Ultra",
                1_290_000,
                1_490_000,
                4.7,
                Some(ProductBadge::New),
            ),
            product(4, "AirPods Pro 2", 329_000, 359_000, 4.8, None),
        ])
    }

    fn new_products(&self) -> Result<Vec<Product>> {
        Ok(vec![
            product(
                5,
                "Dell XPS 13 Plus",
                1_890_000,
                2_090_000,
                4.6,
                Some(ProductBadge::New),
            ),
            product(
                6,
                "Sony WH-1000XM5",
                399_000,
                499_000,
                4.9,
                Some(ProductBadge::Sale),
            ),
            product(7, "iPad Air 5", 890_000, 990_000, 4.7, None),
            product(
                8,
                "Samsung Galaxy Watch 6",
                329_000,
                399_000,
                4.5,
                Some(ProductBadge::New),
            ),
        ])
    }

    fn banners(&self) -> Result<Vec<Banner>> {
        Ok(vec![
            banner(
                "블랙프라이데이 특가",
                "최대 50% 할인",
                "지금 쇼핑하기",
                "블랙프라이데이 최대 50% 할인",
            ),
            banner(
                "iPhone 15 시리즈",
                "지금 사전예약 하세요",
                "자세히 보기",
                "신제품 iPhone 15 시리즈",
            ),
            banner(
                "Galaxy 신제품",
                "혁신적인 기술의 완성",
                "구매하기",
                "갤럭시 신제품 출시",
            ),
        ])
    }

    fn promo(&self) -> Result<Promo> {
        Ok(Promo {
            headline: "🎉 연말 특별 할인".to_string(),
            body: "모든 전자제품 최대 30% 할인 + 무료배송".to_string(),
            action_label: "할인 상품 보기".to_string(),
        })
    }

    fn highlights(&self) -> Result<Vec<Highlight>> {
        Ok(vec![
            highlight("🚚 무료 배송", "5만원 이상 구매시 전국 무료배송"),
            highlight("💳 안전한 결제", "다양한 결제 수단과 보안 시스템"),
            highlight("🔄 30일 반품", "구매 후 30일 이내 무료 반품 가능"),
            highlight("📞 24/7 고객지원", "언제든지 도움을 받으실 수 있습니다"),
        ])
    }

    fn newsletter(&self) -> Result<Promo> {
        Ok(Promo {
            headline: "📧 뉴스레터 구독".to_string(),
            body: "최신 제품과 특별 할인 정보를 받아보세요".to_string(),
            action_label: "구독하기".to_string(),
        })
    }

    fn footer_sections(&self) -> Result<Vec<FooterSection>> {
        Ok(vec![
            section("고객 서비스", &["문의하기", "배송 정보", "반품/교환", "FAQ"]),
            section(
                "회사 정보",
                &["회사 소개", "채용 정보", "이용약관", "개인정보처리방침"],
            ),
            section(
                "쇼핑 안내",
                &["할인/이벤트", "멤버십 혜택", "기프트 카드", "제휴 카드"],
            ),
        ])
    }

    fn footer_note(&self) -> Result<String> {
        Ok(format!("© 2024 {STORE_NAME}. All rights reserved."))
    }
}
