//! Grocery lists domain module.
//!
//! A grocery list belongs to one client and holds items, each linking the list
//! to a product with a signed amount.

pub mod item;
pub mod list;

pub use grocery_core::{GroceryListId, GroceryListItemId};
pub use item::GroceryListItem;
pub use list::GroceryList;
