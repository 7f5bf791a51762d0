//! Canonical fixture dataset.
//!
//! Four products, three clients (only `user3@mail.com` is an admin), three
//! grocery lists and five items. Product 4 ("Cornflakes") is on no list;
//! product 1 ("Melk") is on lists 1 and 2.

use std::sync::Arc;

use chrono::NaiveDate;

use grocery_clients::{Client, Role};
use grocery_core::{ClientId, DomainError, DomainResult, GroceryListId, GroceryListItemId, ProductId};
use grocery_lists::{GroceryList, GroceryListItem};
use grocery_products::Product;

use crate::repositories::{
    InMemoryClientRepository, InMemoryGroceryListItemRepository, InMemoryGroceryListRepository,
    InMemoryProductRepository,
};

pub fn products() -> DomainResult<Vec<Product>> {
    Ok(vec![
        Product::new(ProductId::new(1), "Melk", 300)?,
        Product::new(ProductId::new(2), "Kaas", 100)?,
        Product::new(ProductId::new(3), "Brood", 400)?,
        Product::new(ProductId::new(4), "Cornflakes", 0)?,
    ])
}

pub fn clients() -> DomainResult<Vec<Client>> {
    Ok(vec![
        Client::new(
            ClientId::new(1),
            "M.J. Curie",
            "user1@mail.com",
            "IunRhDKa+fWo8+4/Qfj7Pg==.kDxZnUQHCZun6gLIE6d9oeULLRIuRmxmH2QKJv2IM08=",
        )?,
        Client::new(
            ClientId::new(2),
            "H.H. Hermans",
            "user2@mail.com",
            "dOk+X+wt+MA9uIniRGKDFg==.QLvy72hdG8nWj1FyL75KoKeu4DUgu5B/HAHqTD2UFLU=",
        )?,
        Client::new(
            ClientId::new(3),
            "A.J. Kwak",
            "user3@mail.com",
            "sxnIcZdYt8wC8MYWcQVQjQ==.FKd5Z/jwxPv3a63lX+uvQ0+P7EuNYZybvkmdhbnkIHA=",
        )?
        .with_role(Role::Admin),
    ])
}

pub fn grocery_lists() -> DomainResult<Vec<GroceryList>> {
    Ok(vec![
        GroceryList::new(
            GroceryListId::new(1),
            "Boodschappen familieweekend",
            date(2024, 12, 14)?,
            "#FF6A00",
            ClientId::new(1),
        )?,
        GroceryList::new(
            GroceryListId::new(2),
            "Kerstboodschappen",
            date(2024, 12, 7)?,
            "#626262",
            ClientId::new(1),
        )?,
        GroceryList::new(
            GroceryListId::new(3),
            "Weekend boodschappen",
            date(2024, 11, 30)?,
            "#003300",
            ClientId::new(2),
        )?,
    ])
}

pub fn grocery_list_items() -> Vec<GroceryListItem> {
    [(1, 1, 1, 3), (2, 1, 2, 1), (3, 1, 3, 4), (4, 2, 1, 2), (5, 2, 2, 5)]
        .into_iter()
        .map(|(id, list, product, amount)| {
            GroceryListItem::new(
                GroceryListItemId::new(id),
                GroceryListId::new(list),
                ProductId::new(product),
                amount,
            )
        })
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> DomainResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| DomainError::validation(format!("invalid date {year}-{month}-{day}")))
}

/// One in-memory repository per entity type, pre-populated with the fixtures.
#[derive(Debug, Clone)]
pub struct SeededRepositories {
    pub products: Arc<InMemoryProductRepository>,
    pub clients: Arc<InMemoryClientRepository>,
    pub grocery_lists: Arc<InMemoryGroceryListRepository>,
    pub grocery_list_items: Arc<InMemoryGroceryListItemRepository>,
}

impl SeededRepositories {
    pub fn new() -> DomainResult<Self> {
        Ok(Self {
            products: Arc::new(InMemoryProductRepository::with_products(products()?)),
            clients: Arc::new(InMemoryClientRepository::with_clients(clients()?)),
            grocery_lists: Arc::new(InMemoryGroceryListRepository::with_lists(grocery_lists()?)),
            grocery_list_items: Arc::new(InMemoryGroceryListItemRepository::with_items(
                grocery_list_items(),
            )),
        })
    }
}
