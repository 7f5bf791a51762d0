//! Who bought a product: joins items with their list, the list's owner and
//! the product itself.

use tracing::instrument;

use grocery_core::ProductId;
use grocery_infra::{
    ClientRepository, GroceryListItemRepository, GroceryListRepository, ProductRepository,
    RepositoryResult,
};

use crate::reports::BoughtProducts;

#[derive(Debug, Clone)]
pub struct BoughtProductsService<I, L, C, P>
where
    I: GroceryListItemRepository,
    L: GroceryListRepository,
    C: ClientRepository,
    P: ProductRepository,
{
    items: I,
    grocery_lists: L,
    clients: C,
    products: P,
}

impl<I, L, C, P> BoughtProductsService<I, L, C, P>
where
    I: GroceryListItemRepository,
    L: GroceryListRepository,
    C: ClientRepository,
    P: ProductRepository,
{
    pub fn new(items: I, grocery_lists: L, clients: C, products: P) -> Self {
        Self {
            items,
            grocery_lists,
            clients,
            products,
        }
    }

    /// One record per item referencing `product_id`, in item order.
    ///
    /// `None`, an unknown product and a product nobody has on a list all give
    /// an empty result. Items whose list or list owner cannot be resolved are
    /// dropped; no placeholder list or client is made up.
    #[instrument(level = "debug", skip(self), err)]
    pub fn get(&self, product_id: Option<ProductId>) -> RepositoryResult<Vec<BoughtProducts>> {
        let Some(product_id) = product_id else {
            return Ok(Vec::new());
        };

        let matching: Vec<_> = self
            .items
            .get_all()?
            .into_iter()
            .filter(|item| item.product_id == product_id)
            .collect();
        if matching.is_empty() {
            return Ok(Vec::new());
        }

        let Some(product) = self.products.get(product_id)? else {
            tracing::warn!(
                product_id = %product_id,
                items = matching.len(),
                "bought products: product referenced by items does not exist"
            );
            return Ok(Vec::new());
        };

        let mut records = Vec::with_capacity(matching.len());
        for item in matching {
            let Some(grocery_list) = self.grocery_lists.get(item.grocery_list_id)? else {
                tracing::warn!(
                    item_id = %item.id,
                    grocery_list_id = %item.grocery_list_id,
                    "bought products: skipping item on unknown grocery list"
                );
                continue;
            };
            let Some(client) = self.clients.get(grocery_list.client_id)? else {
                tracing::warn!(
                    item_id = %item.id,
                    client_id = %grocery_list.client_id,
                    "bought products: skipping item on list of unknown client"
                );
                continue;
            };
            records.push(BoughtProducts::new(client, grocery_list, product.clone(), item.amount));
        }

        tracing::debug!(product_id = %product_id, records = records.len(), "bought products computed");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use grocery_clients::Client;
    use grocery_core::{ClientId, GroceryListId, GroceryListItemId};
    use grocery_infra::{
        InMemoryClientRepository, InMemoryGroceryListItemRepository, InMemoryGroceryListRepository,
        InMemoryProductRepository, RepositoryError, seed,
    };
    use grocery_lists::{GroceryList, GroceryListItem};
    use grocery_products::Product;

    type Service = BoughtProductsService<
        Arc<InMemoryGroceryListItemRepository>,
        Arc<InMemoryGroceryListRepository>,
        Arc<InMemoryClientRepository>,
        Arc<InMemoryProductRepository>,
    >;

    fn item(id: u64, list: u64, product: u64, amount: i64) -> GroceryListItem {
        GroceryListItem::new(
            GroceryListItemId::new(id),
            GroceryListId::new(list),
            ProductId::new(product),
            amount,
        )
    }

    fn list(id: u64, client: u64) -> GroceryList {
        let mut list = seed::grocery_lists().unwrap().remove(0);
        list.id = GroceryListId::new(id);
        list.client_id = ClientId::new(client);
        list
    }

    fn client(id: u64) -> Client {
        Client::new(ClientId::new(id), format!("Client {id}"), format!("user{id}@mail.com"), "hash")
            .unwrap()
    }

    fn product(id: u64, name: &str) -> Product {
        Product::new(ProductId::new(id), name, 10).unwrap()
    }

    fn service(
        items: Vec<GroceryListItem>,
        lists: Vec<GroceryList>,
        clients: Vec<Client>,
        products: Vec<Product>,
    ) -> Service {
        BoughtProductsService::new(
            Arc::new(InMemoryGroceryListItemRepository::with_items(items)),
            Arc::new(InMemoryGroceryListRepository::with_lists(lists)),
            Arc::new(InMemoryClientRepository::with_clients(clients)),
            Arc::new(InMemoryProductRepository::with_products(products)),
        )
    }

    fn example() -> Service {
        service(
            vec![item(1, 1, 1, 5), item(2, 2, 1, 3), item(3, 3, 2, 2)],
            vec![list(1, 1), list(2, 2), list(3, 1)],
            vec![client(1), client(2)],
            vec![product(1, "Melk"), product(2, "Kaas")],
        )
    }

    #[test]
    fn one_record_per_purchase_line() {
        let result = example().get(Some(ProductId::new(1))).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].grocery_list.id, GroceryListId::new(1));
        assert_eq!(result[0].client.id, ClientId::new(1));
        assert_eq!(result[0].amount, 5);
        assert_eq!(result[1].grocery_list.id, GroceryListId::new(2));
        assert_eq!(result[1].client.id, ClientId::new(2));
        assert_eq!(result[1].amount, 3);
        assert!(result.iter().all(|r| r.product.id_typed() == ProductId::new(1)));
    }

    #[test]
    fn none_selector_is_empty() {
        assert!(example().get(None).unwrap().is_empty());
    }

    #[test]
    fn unbought_and_unknown_products_are_empty() {
        let svc = service(
            vec![item(1, 1, 1, 5)],
            vec![list(1, 1)],
            vec![client(1)],
            vec![product(1, "Melk"), product(4, "Cornflakes")],
        );
        assert!(svc.get(Some(ProductId::new(4))).unwrap().is_empty());
        assert!(svc.get(Some(ProductId::new(99))).unwrap().is_empty());
    }

    #[test]
    fn items_on_unknown_lists_are_dropped() {
        let svc = service(
            vec![item(1, 1, 1, 5), item(2, 7, 1, 3)],
            vec![list(1, 1)],
            vec![client(1)],
            vec![product(1, "Melk")],
        );
        let result = svc.get(Some(ProductId::new(1))).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].grocery_list.id, GroceryListId::new(1));
    }

    #[test]
    fn items_of_unknown_clients_are_dropped() {
        let svc = service(
            vec![item(1, 1, 1, 5), item(2, 2, 1, 3)],
            vec![list(1, 1), list(2, 8)],
            vec![client(1)],
            vec![product(1, "Melk")],
        );
        let result = svc.get(Some(ProductId::new(1))).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].client.id, ClientId::new(1));
    }

    #[test]
    fn referenced_but_deleted_product_is_empty() {
        let svc = service(vec![item(1, 1, 3, 5)], vec![list(1, 1)], vec![client(1)], vec![]);
        assert!(svc.get(Some(ProductId::new(3))).unwrap().is_empty());
    }

    #[test]
    fn zero_and_negative_amounts_are_copied_verbatim() {
        let svc = service(
            vec![item(1, 1, 1, 0), item(2, 1, 1, -2)],
            vec![list(1, 1)],
            vec![client(1)],
            vec![product(1, "Melk")],
        );
        let amounts: Vec<i64> = svc
            .get(Some(ProductId::new(1)))
            .unwrap()
            .iter()
            .map(|r| r.amount)
            .collect();
        assert_eq!(amounts, vec![0, -2]);
    }

    struct FailingItems;

    impl GroceryListItemRepository for FailingItems {
        fn get(&self, _id: GroceryListItemId) -> RepositoryResult<Option<GroceryListItem>> {
            Err(RepositoryError::backend("connection reset"))
        }

        fn get_all(&self) -> RepositoryResult<Vec<GroceryListItem>> {
            Err(RepositoryError::backend("connection reset"))
        }

        fn add(&self, _item: GroceryListItem) -> RepositoryResult<GroceryListItem> {
            Err(RepositoryError::backend("connection reset"))
        }

        fn update(&self, _item: GroceryListItem) -> RepositoryResult<Option<GroceryListItem>> {
            Err(RepositoryError::backend("connection reset"))
        }
    }

    #[test]
    fn repository_failures_propagate_unchanged() {
        let svc = BoughtProductsService::new(
            FailingItems,
            InMemoryGroceryListRepository::new(),
            InMemoryClientRepository::new(),
            InMemoryProductRepository::new(),
        );
        let err = svc.get(Some(ProductId::new(1))).unwrap_err();
        assert_eq!(err, RepositoryError::backend("connection reset"));

        // A `None` selector never reaches the repository.
        assert!(svc.get(None).unwrap().is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: records only ever describe the requested product,
            /// on lists that really contain it, with the item's own amount.
            #[test]
            fn records_match_their_items(
                rows in prop::collection::vec((1u64..6, 1u64..5, -3i64..20), 0..40),
                wanted in 1u64..5,
            ) {
                let items: Vec<GroceryListItem> = rows
                    .iter()
                    .enumerate()
                    .map(|(i, (l, p, a))| item(i as u64 + 1, *l, *p, *a))
                    .collect();
                // List 5 is missing; list 4 belongs to a missing client.
                let svc = service(
                    items.clone(),
                    vec![list(1, 1), list(2, 1), list(3, 2), list(4, 9)],
                    vec![client(1), client(2)],
                    (1..5).map(|id| product(id, "P")).collect(),
                );

                let result = svc.get(Some(ProductId::new(wanted))).unwrap();
                let expected: Vec<&GroceryListItem> = items
                    .iter()
                    .filter(|i| i.product_id.get() == wanted && i.grocery_list_id.get() <= 3)
                    .collect();

                prop_assert_eq!(result.len(), expected.len());
                for (record, item) in result.iter().zip(expected) {
                    prop_assert_eq!(record.product.id_typed(), ProductId::new(wanted));
                    prop_assert_eq!(record.grocery_list.id, item.grocery_list_id);
                    prop_assert_eq!(record.amount, item.amount);
                    prop_assert_eq!(record.client.id, record.grocery_list.client_id);
                }
            }
        }
    }
}
