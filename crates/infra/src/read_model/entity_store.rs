use std::collections::BTreeMap;
use std::sync::RwLock;

use grocery_core::Entity;

use crate::error::{RepositoryError, RepositoryResult};

/// In-memory entity store for tests/dev.
///
/// Records are keyed by entity id and iterate in ascending id order, so every
/// `list()` over unchanged data returns the same sequence.
#[derive(Debug)]
pub struct InMemoryStore<V: Entity> {
    inner: RwLock<BTreeMap<V::Id, V>>,
}

impl<V: Entity> InMemoryStore<V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    pub fn with_entities(entities: impl IntoIterator<Item = V>) -> Self {
        Self {
            inner: RwLock::new(entities.into_iter().map(|e| (e.id(), e)).collect()),
        }
    }

    fn poisoned() -> RepositoryError {
        RepositoryError::Poisoned(core::any::type_name::<V>())
    }
}

impl<V: Entity> Default for InMemoryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> InMemoryStore<V>
where
    V: Entity + Clone,
{
    pub fn get(&self, id: V::Id) -> RepositoryResult<Option<V>> {
        let map = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(map.get(&id).cloned())
    }

    pub fn list(&self) -> RepositoryResult<Vec<V>> {
        let map = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(map.values().cloned().collect())
    }

    pub fn len(&self) -> RepositoryResult<usize> {
        let map = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(map.len())
    }

    pub fn is_empty(&self) -> RepositoryResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Find the first record (in id order) matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&V) -> bool) -> RepositoryResult<Option<V>> {
        let map = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(map.values().find(|v| predicate(*v)).cloned())
    }

    /// Overwrite an existing record. Returns `None` (and stores nothing) when
    /// no record with that id exists.
    pub fn replace(&self, value: V) -> RepositoryResult<Option<V>> {
        let mut map = self.inner.write().map_err(|_| Self::poisoned())?;
        match map.get_mut(&value.id()) {
            Some(slot) => {
                *slot = value.clone();
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Build and insert a record under the write lock.
    ///
    /// `build` receives the highest id currently stored, so id allocation and
    /// insertion happen atomically. Nothing is stored when `build` fails.
    pub fn insert_with(
        &self,
        build: impl FnOnce(Option<V::Id>) -> RepositoryResult<V>,
    ) -> RepositoryResult<V> {
        let mut map = self.inner.write().map_err(|_| Self::poisoned())?;
        let last = map.keys().next_back().copied();
        let value = build(last)?;
        map.insert(value.id(), value.clone());
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocery_core::ProductId;
    use grocery_products::Product;

    fn product(id: u64, name: &str) -> Product {
        Product::new(ProductId::new(id), name, 10).unwrap()
    }

    #[test]
    fn list_iterates_in_id_order() {
        let store = InMemoryStore::with_entities(vec![
            product(3, "Brood"),
            product(1, "Melk"),
            product(2, "Kaas"),
        ]);
        let ids: Vec<u64> = store.list().unwrap().iter().map(|p| p.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn replace_only_touches_existing_records() {
        let store = InMemoryStore::with_entities(vec![product(1, "Melk")]);

        let mut melk = store.get(ProductId::new(1)).unwrap().unwrap();
        melk.set_stock(5);
        assert_eq!(store.replace(melk).unwrap().map(|p| p.stock()), Some(5));
        assert_eq!(store.get(ProductId::new(1)).unwrap().unwrap().stock(), 5);

        assert!(store.replace(product(9, "Onbekend")).unwrap().is_none());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn insert_with_sees_highest_id() {
        let store = InMemoryStore::with_entities(vec![product(1, "Melk"), product(4, "Cornflakes")]);
        let inserted = store
            .insert_with(|last| {
                let next = last.and_then(|id| id.next()).unwrap_or(ProductId::new(1));
                Ok(product(next.get(), "Eieren"))
            })
            .unwrap();
        assert_eq!(inserted.id(), ProductId::new(5));
        assert_eq!(store.len().unwrap(), 3);
    }

    #[test]
    fn empty_store_reports_no_last_id() {
        let store: InMemoryStore<Product> = InMemoryStore::new();
        assert!(store.is_empty().unwrap());
        let inserted = store
            .insert_with(|last| {
                assert!(last.is_none());
                Ok(product(1, "Melk"))
            })
            .unwrap();
        assert_eq!(inserted.id(), ProductId::new(1));
    }

    #[test]
    fn failed_build_stores_nothing() {
        let store = InMemoryStore::with_entities(vec![product(1, "Melk")]);
        let err = store
            .insert_with(|_| Err(RepositoryError::backend("rejected")))
            .unwrap_err();
        assert_eq!(err, RepositoryError::backend("rejected"));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn find_returns_first_match() {
        let store = InMemoryStore::with_entities(vec![product(1, "Melk"), product(2, "Kaas")]);
        let found = store.find(|p| p.name() == "Kaas").unwrap();
        assert_eq!(found.map(|p| p.id().get()), Some(2));
        assert!(store.find(|p| p.name() == "Thee").unwrap().is_none());
    }
}
