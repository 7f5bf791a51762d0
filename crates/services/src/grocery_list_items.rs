//! Grocery list item operations and the best-sellers report.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::instrument;

use grocery_core::{GroceryListId, GroceryListItemId, ProductId};
use grocery_infra::{GroceryListItemRepository, ProductRepository, RepositoryResult};
use grocery_lists::GroceryListItem;

use crate::config::ReportConfig;
use crate::enrichment::enrich_items;
use crate::reports::BestSellingProducts;

#[derive(Debug, Clone)]
pub struct GroceryListItemsService<I, P>
where
    I: GroceryListItemRepository,
    P: ProductRepository,
{
    items: I,
    products: P,
    config: ReportConfig,
}

impl<I, P> GroceryListItemsService<I, P>
where
    I: GroceryListItemRepository,
    P: ProductRepository,
{
    pub fn new(items: I, products: P) -> Self {
        Self {
            items,
            products,
            config: ReportConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// All items, with their products attached.
    pub fn get_all(&self) -> RepositoryResult<Vec<GroceryListItem>> {
        let mut items = self.items.get_all()?;
        enrich_items(&self.products, &mut items)?;
        Ok(items)
    }

    /// Items of one grocery list, with their products attached.
    pub fn get_all_on_grocery_list_id(
        &self,
        grocery_list_id: GroceryListId,
    ) -> RepositoryResult<Vec<GroceryListItem>> {
        let mut items: Vec<GroceryListItem> = self
            .items
            .get_all()?
            .into_iter()
            .filter(|item| item.grocery_list_id == grocery_list_id)
            .collect();
        enrich_items(&self.products, &mut items)?;
        Ok(items)
    }

    pub fn get(&self, id: GroceryListItemId) -> RepositoryResult<Option<GroceryListItem>> {
        self.items.get(id)
    }

    pub fn add(&self, item: GroceryListItem) -> RepositoryResult<GroceryListItem> {
        self.items.add(item)
    }

    pub fn update(&self, item: GroceryListItem) -> RepositoryResult<Option<GroceryListItem>> {
        self.items.update(item)
    }

    /// Best sellers with the configured length.
    pub fn best_selling_products_default(&self) -> RepositoryResult<Vec<BestSellingProducts>> {
        self.best_selling_products(self.config.best_sellers_top_n)
    }

    /// Rank products by the summed amount of every item referencing them.
    ///
    /// Totals include zero and negative amounts. Equal totals keep the order
    /// in which their product first appears in the item repository. The first
    /// `top_n` groups are kept; groups whose product no longer exists are then
    /// dropped without taking a rank, so fewer than `top_n` rows may come back.
    #[instrument(level = "debug", skip(self), err)]
    pub fn best_selling_products(&self, top_n: usize) -> RepositoryResult<Vec<BestSellingProducts>> {
        if top_n == 0 {
            return Ok(Vec::new());
        }

        let items = self.items.get_all()?;

        // Summed in i128 so the result does not depend on item order.
        let mut sums: Vec<(ProductId, i128)> = Vec::new();
        let mut positions: HashMap<ProductId, usize> = HashMap::new();
        for item in &items {
            match positions.entry(item.product_id) {
                Entry::Occupied(slot) => sums[*slot.get()].1 += i128::from(item.amount),
                Entry::Vacant(slot) => {
                    slot.insert(sums.len());
                    sums.push((item.product_id, i128::from(item.amount)));
                }
            }
        }
        let mut totals: Vec<(ProductId, i64)> = sums
            .into_iter()
            .map(|(product_id, sum)| (product_id, clamp_to_i64(sum)))
            .collect();

        // Stable sort: ties stay in first-seen order.
        totals.sort_by(|a, b| b.1.cmp(&a.1));
        let groups = totals.len();

        let mut ranking = Vec::with_capacity(top_n.min(groups));
        for (product_id, total) in totals.into_iter().take(top_n) {
            match self.products.get(product_id)? {
                Some(product) => {
                    let rank = ranking.len() + 1;
                    ranking.push(BestSellingProducts::new(&product, total, rank));
                }
                None => tracing::warn!(
                    product_id = %product_id,
                    total,
                    "best sellers: skipping unknown product"
                ),
            }
        }

        tracing::debug!(items = items.len(), groups, ranked = ranking.len(), "best sellers computed");
        Ok(ranking)
    }
}

fn clamp_to_i64(sum: i128) -> i64 {
    i64::try_from(sum).unwrap_or(if sum < 0 { i64::MIN } else { i64::MAX })
}
