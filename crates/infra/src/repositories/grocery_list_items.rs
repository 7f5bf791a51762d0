use std::sync::Arc;

use grocery_core::{Entity, GroceryListItemId};
use grocery_lists::GroceryListItem;
use grocery_products::Product;

use crate::error::{RepositoryError, RepositoryResult};
use crate::read_model::InMemoryStore;

/// Grocery list item storage.
///
/// Items are raw rows: the transient `product` field is not persisted and
/// comes back as `Product::PLACEHOLDER`.
pub trait GroceryListItemRepository: Send + Sync {
    fn get(&self, id: GroceryListItemId) -> RepositoryResult<Option<GroceryListItem>>;
    fn get_all(&self) -> RepositoryResult<Vec<GroceryListItem>>;
    /// Store a new item under a freshly allocated id (the caller's id is ignored).
    fn add(&self, item: GroceryListItem) -> RepositoryResult<GroceryListItem>;
    /// Overwrite an existing item; `None` if no item with that id exists.
    ///
    /// An amount of zero is stored like any other value: the item is not removed.
    fn update(&self, item: GroceryListItem) -> RepositoryResult<Option<GroceryListItem>>;
}

impl<R> GroceryListItemRepository for Arc<R>
where
    R: GroceryListItemRepository + ?Sized,
{
    fn get(&self, id: GroceryListItemId) -> RepositoryResult<Option<GroceryListItem>> {
        (**self).get(id)
    }

    fn get_all(&self) -> RepositoryResult<Vec<GroceryListItem>> {
        (**self).get_all()
    }

    fn add(&self, item: GroceryListItem) -> RepositoryResult<GroceryListItem> {
        (**self).add(item)
    }

    fn update(&self, item: GroceryListItem) -> RepositoryResult<Option<GroceryListItem>> {
        (**self).update(item)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryGroceryListItemRepository {
    store: InMemoryStore<GroceryListItem>,
}

impl InMemoryGroceryListItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: impl IntoIterator<Item = GroceryListItem>) -> Self {
        Self {
            store: InMemoryStore::with_entities(items.into_iter().map(detach_product)),
        }
    }
}

fn detach_product(mut item: GroceryListItem) -> GroceryListItem {
    item.product = Product::PLACEHOLDER;
    item
}

impl GroceryListItemRepository for InMemoryGroceryListItemRepository {
    fn get(&self, id: GroceryListItemId) -> RepositoryResult<Option<GroceryListItem>> {
        self.store.get(id)
    }

    fn get_all(&self) -> RepositoryResult<Vec<GroceryListItem>> {
        self.store.list()
    }

    fn add(&self, item: GroceryListItem) -> RepositoryResult<GroceryListItem> {
        let item = detach_product(item);
        let stored = self.store.insert_with(|last| {
            let id = match last {
                None => GroceryListItemId::new(1),
                Some(last) => last
                    .next()
                    .ok_or(RepositoryError::IdsExhausted("grocery list item"))?,
            };
            Ok(GroceryListItem { id, ..item })
        })?;
        tracing::debug!(
            item_id = %stored.id(),
            grocery_list_id = %stored.grocery_list_id,
            product_id = %stored.product_id,
            amount = stored.amount,
            "grocery list item added"
        );
        Ok(stored)
    }

    fn update(&self, item: GroceryListItem) -> RepositoryResult<Option<GroceryListItem>> {
        let id = item.id();
        let updated = self.store.replace(detach_product(item))?;
        match &updated {
            Some(i) => tracing::debug!(item_id = %id, amount = i.amount, "grocery list item updated"),
            None => tracing::debug!(item_id = %id, "update skipped: unknown grocery list item"),
        }
        Ok(updated)
    }
}
