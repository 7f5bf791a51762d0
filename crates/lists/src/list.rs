use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use grocery_core::{ClientId, DomainError, DomainResult, Entity, GroceryListId};

/// Entity: GroceryList.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryList {
    pub id: GroceryListId,
    pub name: String,
    /// Day the shopping is planned for.
    pub date: NaiveDate,
    /// Display colour tag, e.g. `#FF6A00`.
    pub color: String,
    pub client_id: ClientId,
}

impl GroceryList {
    pub fn new(
        id: GroceryListId,
        name: impl Into<String>,
        date: NaiveDate,
        color: impl Into<String>,
        client_id: ClientId,
    ) -> DomainResult<Self> {
        let name = name.into();
        if !id.is_assigned() {
            return Err(DomainError::validation("grocery list id must be positive"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            date,
            color: color.into(),
            client_id,
        })
    }

    pub fn is_owned_by(&self, client_id: ClientId) -> bool {
        self.client_id == client_id
    }
}

impl Entity for GroceryList {
    type Id = GroceryListId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
