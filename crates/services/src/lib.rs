//! `grocery-services` — reporting over the grocery repositories.
//!
//! Two reports combine several entity collections:
//! - best sellers: items grouped per product, summed and ranked
//! - bought products: every client/list that has a given product on it
//!
//! Services only read from repositories (apart from the item pass-through
//! operations) and propagate repository errors unchanged.

pub mod bought_products;
pub mod config;
pub mod enrichment;
pub mod grocery_list_items;
pub mod reports;

pub use bought_products::BoughtProductsService;
pub use config::ReportConfig;
pub use enrichment::enrich_items;
pub use grocery_infra::{RepositoryError, RepositoryResult};
pub use grocery_list_items::GroceryListItemsService;
pub use reports::{BestSellingProducts, BoughtProducts};
