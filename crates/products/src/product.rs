use serde::{Deserialize, Serialize};

use grocery_core::{DomainError, DomainResult, Entity, ProductId};

/// Entity: Product.
///
/// Stock is signed: a negative value represents a backorder and is not
/// rejected here. Deserialization goes through [`Product::new`], so a decoded
/// product always has an assigned id and a non-blank name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    stock: i64,
}

impl Product {
    /// Stand-in attached to a grocery list item whose product cannot be
    /// resolved. Never stored in a repository.
    pub const PLACEHOLDER: Product = Product {
        id: ProductId::new(0),
        name: String::new(),
        stock: 0,
    };

    pub fn new(id: ProductId, name: impl Into<String>, stock: i64) -> DomainResult<Self> {
        let name = name.into();
        if !id.is_assigned() {
            return Err(DomainError::validation("product id must be positive"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self { id, name, stock })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn set_stock(&mut self, stock: i64) {
        self.stock = stock;
    }

    /// Add `delta` (possibly negative) to the current stock.
    pub fn adjust_stock(&mut self, delta: i64) {
        self.stock = self.stock.saturating_add(delta);
    }

    pub fn is_placeholder(&self) -> bool {
        *self == Self::PLACEHOLDER
    }
}

#[derive(Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    stock: i64,
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let record = ProductRecord::deserialize(deserializer)?;
        Self::new(record.id, record.name, record.stock).map_err(serde::de::Error::custom)
    }
}

impl Default for Product {
    fn default() -> Self {
        Self::PLACEHOLDER
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
