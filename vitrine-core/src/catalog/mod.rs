//! Sample data for the demo pages.
//!
//! Pages never hard-code their content; they pull it from a
//! [`CatalogProvider`]. [`StaticCatalog`] is the built-in TechStore data set.

mod static_catalog;

use vitrine_model::{
    Banner, DemoUser, FooterSection, Highlight, NavLink, Product, Promo,
    UserStatus,
};

pub use static_catalog::StaticCatalog;

use crate::error::Result;

const DEPARTMENTS: [&str; 4] = ["Engineering", "Design", "Marketing", "Sales"];

pub trait CatalogProvider: Send + Sync {
    /// Storefront name shown in the navbar and the footer.
    fn store_name(&self) -> &str;

    fn nav_links(&self) -> Result<Vec<NavLink>>;

    fn best_sellers(&self) -> Result<Vec<Product>>;

    fn new_products(&self) -> Result<Vec<Product>>;

    /// Hero carousel slides, in display order.
    fn banners(&self) -> Result<Vec<Banner>>;

    fn promo(&self) -> Result<Promo>;

    fn highlights(&self) -> Result<Vec<Highlight>>;

    fn newsletter(&self) -> Result<Promo>;

    fn footer_sections(&self) -> Result<Vec<FooterSection>>;

    fn footer_note(&self) -> Result<String>;

    /// Rows for the data table demo.
    fn demo_users(&self, count: usize) -> Result<Vec<DemoUser>> {
        Ok(generate_demo_users(count))
    }
}

/// `count` users: departments cycle, every third user (starting with the
/// first) is inactive and logins spread over December 2024.
pub fn generate_demo_users(count: usize) -> Vec<DemoUser> {
    (0..count)
        .map(|i| {
            let id = u32::try_from(i + 1).unwrap_or(u32::MAX);
            DemoUser {
                id,
                name: format!("User {id}"),
                email: format!("user{id}@example.com"),
                department: DEPARTMENTS[i % DEPARTMENTS.len()].to_string(),
                status: if i % 3 == 0 {
                    UserStatus::Inactive
                } else {
                    UserStatus::Active
                },
                last_login: format!("2024-12-{:02}", 1 + i % 30),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_users_follow_the_cycle() {
        let users = generate_demo_users(50);
        assert_eq!(users.len(), 50);

        let first = &users[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.name, "User 1");
        assert_eq!(first.email, "user1@example.com");
        assert_eq!(first.department, "Engineering");
        assert_eq!(first.status, UserStatus::Inactive);
        assert_eq!(first.last_login, "2024-12-01");

        assert_eq!(users[1].department, "Design");
        assert_eq!(users[1].status, UserStatus::Active);
        assert_eq!(users[3].department, "Sales");
        assert_eq!(users[3].status, UserStatus::Inactive);
        assert_eq!(users[30].last_login, "2024-12-01");
        assert_eq!(users[49].last_login, "2024-12-20");

        let inactive = users
            .iter()
            .filter(|u| u.status == UserStatus::Inactive)
            .count();
        assert_eq!(inactive, 17);
    }

    #[test]
    fn zero_users() {
        assert!(generate_demo_users(0).is_empty());
    }
}
