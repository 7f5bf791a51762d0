//! Infrastructure layer: entity repositories and seed fixtures.

pub mod error;
pub mod read_model;
pub mod repositories;
pub mod seed;

pub use error::{RepositoryError, RepositoryResult};
pub use read_model::InMemoryStore;
pub use repositories::{
    ClientRepository, GroceryListItemRepository, GroceryListRepository, InMemoryClientRepository,
    InMemoryGroceryListItemRepository, InMemoryGroceryListRepository, InMemoryProductRepository,
    ProductRepository,
};
pub use seed::SeededRepositories;
