use std::sync::Arc;

use grocery_core::GroceryListId;
use grocery_lists::GroceryList;

use crate::error::RepositoryResult;
use crate::read_model::InMemoryStore;

/// Grocery list storage.
pub trait GroceryListRepository: Send + Sync {
    fn get(&self, id: GroceryListId) -> RepositoryResult<Option<GroceryList>>;
    fn get_all(&self) -> RepositoryResult<Vec<GroceryList>>;
}

impl<R> GroceryListRepository for Arc<R>
where
    R: GroceryListRepository + ?Sized,
{
    fn get(&self, id: GroceryListId) -> RepositoryResult<Option<GroceryList>> {
        (**self).get(id)
    }

    fn get_all(&self) -> RepositoryResult<Vec<GroceryList>> {
        (**self).get_all()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryGroceryListRepository {
    store: InMemoryStore<GroceryList>,
}

impl InMemoryGroceryListRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lists(lists: impl IntoIterator<Item = GroceryList>) -> Self {
        Self {
            store: InMemoryStore::with_entities(lists),
        }
    }
}

impl GroceryListRepository for InMemoryGroceryListRepository {
    fn get(&self, id: GroceryListId) -> RepositoryResult<Option<GroceryList>> {
        self.store.get(id)
    }

    fn get_all(&self) -> RepositoryResult<Vec<GroceryList>> {
        self.store.list()
    }
}
