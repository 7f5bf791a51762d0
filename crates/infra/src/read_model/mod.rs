//! Entity storage backing the in-memory repositories.

pub mod entity_store;

pub use entity_store::InMemoryStore;
