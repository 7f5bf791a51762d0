use std::sync::Arc;

use grocery_clients::Client;
use grocery_core::ClientId;

use crate::error::RepositoryResult;
use crate::read_model::InMemoryStore;

/// Client storage. Email addresses act as an alternate key.
pub trait ClientRepository: Send + Sync {
    fn get(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
    /// Exact, case-sensitive match on the email address.
    fn get_by_email(&self, email: &str) -> RepositoryResult<Option<Client>>;
    fn get_all(&self) -> RepositoryResult<Vec<Client>>;
}

impl<R> ClientRepository for Arc<R>
where
    R: ClientRepository + ?Sized,
{
    fn get(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        (**self).get(id)
    }

    fn get_by_email(&self, email: &str) -> RepositoryResult<Option<Client>> {
        (**self).get_by_email(email)
    }

    fn get_all(&self) -> RepositoryResult<Vec<Client>> {
        (**self).get_all()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryClientRepository {
    store: InMemoryStore<Client>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clients(clients: impl IntoIterator<Item = Client>) -> Self {
        Self {
            store: InMemoryStore::with_entities(clients),
        }
    }
}

impl ClientRepository for InMemoryClientRepository {
    fn get(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        self.store.get(id)
    }

    fn get_by_email(&self, email: &str) -> RepositoryResult<Option<Client>> {
        self.store.find(|c| c.email_address == email)
    }

    fn get_all(&self) -> RepositoryResult<Vec<Client>> {
        self.store.list()
    }
}
