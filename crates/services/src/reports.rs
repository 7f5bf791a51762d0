//! Derived report records. Built on demand, never persisted.

use serde::{Deserialize, Serialize};

use grocery_clients::Client;
use grocery_core::{Entity, ProductId};
use grocery_lists::GroceryList;
use grocery_products::Product;

/// One row of the best-sellers ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestSellingProducts {
    pub id: ProductId,
    pub name: String,
    /// Current stock of the product at report time.
    pub stock: i64,
    /// Sum of item amounts for this product across all lists.
    pub nr_of_sells: i64,
    /// 1-based position in the report.
    pub ranking: usize,
}

impl BestSellingProducts {
    pub fn new(product: &Product, nr_of_sells: i64, ranking: usize) -> Self {
        Self {
            id: product.id(),
            name: product.name().to_string(),
            stock: product.stock(),
            nr_of_sells,
            ranking,
        }
    }
}

/// One purchase line of a product: who bought it, on which list, how many.
///
/// The client's password hash is not serialized (see [`Client`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoughtProducts {
    pub client: Client,
    pub grocery_list: GroceryList,
    pub product: Product,
    pub amount: i64,
}

impl BoughtProducts {
    pub fn new(client: Client, grocery_list: GroceryList, product: Product, amount: i64) -> Self {
        Self {
            client,
            grocery_list,
            product,
            amount,
        }
    }
}
