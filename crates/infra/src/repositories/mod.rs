//! Repository capabilities consumed by the reporting services.
//!
//! Each entity type has its own trait; lookups by id return `Ok(None)` when
//! nothing is stored. The in-memory implementations wrap an [`InMemoryStore`]
//! and are what tests and fixtures use.
//!
//! [`InMemoryStore`]: crate::read_model::InMemoryStore

pub mod clients;
pub mod grocery_list_items;
pub mod grocery_lists;
pub mod products;

pub use clients::{ClientRepository, InMemoryClientRepository};
pub use grocery_list_items::{GroceryListItemRepository, InMemoryGroceryListItemRepository};
pub use grocery_lists::{GroceryListRepository, InMemoryGroceryListRepository};
pub use products::{InMemoryProductRepository, ProductRepository};
