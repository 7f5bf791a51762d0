use std::sync::Arc;

use grocery_core::{Entity, ProductId};
use grocery_products::Product;

use crate::error::RepositoryResult;
use crate::read_model::InMemoryStore;

/// Product catalog storage.
pub trait ProductRepository: Send + Sync {
    fn get(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    fn get_all(&self) -> RepositoryResult<Vec<Product>>;
    /// Store new values for an existing product; `None` if it does not exist.
    fn update(&self, product: Product) -> RepositoryResult<Option<Product>>;
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn get(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        (**self).get(id)
    }

    fn get_all(&self) -> RepositoryResult<Vec<Product>> {
        (**self).get_all()
    }

    fn update(&self, product: Product) -> RepositoryResult<Option<Product>> {
        (**self).update(product)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    store: InMemoryStore<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            store: InMemoryStore::with_entities(products),
        }
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn get(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        self.store.get(id)
    }

    fn get_all(&self) -> RepositoryResult<Vec<Product>> {
        self.store.list()
    }

    fn update(&self, product: Product) -> RepositoryResult<Option<Product>> {
        let id = product.id();
        let updated = self.store.replace(product)?;
        match &updated {
            Some(p) => tracing::debug!(product_id = %id, stock = p.stock(), "product updated"),
            None => tracing::debug!(product_id = %id, "update skipped: unknown product"),
        }
        Ok(updated)
    }
}
