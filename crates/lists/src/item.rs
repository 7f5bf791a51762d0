use serde::{Deserialize, Serialize};

use grocery_core::{Entity, GroceryListId, GroceryListItemId, ProductId};
use grocery_products::Product;

/// Entity: one line on a grocery list.
///
/// `amount` is signed and independent of the item's existence: an item with
/// amount zero stays stored and addressable.
///
/// `product` is a transient copy attached at read time from the product
/// repository. It is not authoritative, is never serialized, and defaults to
/// `Product::PLACEHOLDER`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryListItem {
    pub id: GroceryListItemId,
    pub grocery_list_id: GroceryListId,
    pub product_id: ProductId,
    pub amount: i64,
    #[serde(skip)]
    pub product: Product,
}

impl GroceryListItem {
    /// Build an item row without validating its ids.
    ///
    /// An unassigned `id` (0) marks an item that has not been stored yet; the
    /// repository allocates the real id on `add` and ignores the one given
    /// here. The list and product references are not checked either: readers
    /// skip or placeholder dangling references.
    pub fn new(
        id: GroceryListItemId,
        grocery_list_id: GroceryListId,
        product_id: ProductId,
        amount: i64,
    ) -> Self {
        Self {
            id,
            grocery_list_id,
            product_id,
            amount,
            product: Product::PLACEHOLDER,
        }
    }

    /// Whether the attached product matches the referenced one.
    pub fn is_enriched(&self) -> bool {
        self.product.id_typed() == self.product_id
    }
}

impl Entity for GroceryListItem {
    type Id = GroceryListItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
