//! Products domain module.
//!
//! This crate contains the product catalog entity, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod product;

pub use grocery_core::ProductId;
pub use product::Product;
