//! Attaching products to grocery list items at read time.

use grocery_infra::{ProductRepository, RepositoryResult};
use grocery_lists::GroceryListItem;
use grocery_products::Product;

/// Resolve each item's product reference and attach the result in place.
///
/// Unresolvable references get `Product::PLACEHOLDER` instead of failing.
/// Ids and amounts are untouched and nothing is written back to a repository.
pub fn enrich_items<P>(products: &P, items: &mut [GroceryListItem]) -> RepositoryResult<()>
where
    P: ProductRepository + ?Sized,
{
    for item in items.iter_mut() {
        item.product = match products.get(item.product_id)? {
            Some(product) => product,
            None => {
                tracing::warn!(
                    item_id = %item.id,
                    product_id = %item.product_id,
                    "grocery list item references unknown product; attaching placeholder"
                );
                Product::PLACEHOLDER
            }
        };
    }
    Ok(())
}
