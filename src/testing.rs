//! In-memory repositories for service and handler tests.

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use bigdecimal::BigDecimal;
use chrono::{NaiveDate, TimeZone, Utc};

use crate::domain::errors::DomainError;
use crate::domain::listing::{Customer, Order, OrderItem, OrderListing, Payment, Review};
use crate::domain::ports::{ListingRepository, ProductRepository};
use crate::domain::product::{Product, ProductChanges, ProductDraft};
use crate::domain::search::SearchTerm;

fn keep(search: Option<&SearchTerm>, fields: &[&str]) -> bool {
    search.map_or(true, |term| fields.iter().any(|f| term.matches(f)))
}

#[derive(Clone, Default)]
pub struct InMemoryProducts {
    rows: Arc<Mutex<Vec<Product>>>,
}

impl ProductRepository for InMemoryProducts {
    fn exists(&self, id: i32) -> Result<bool, DomainError> {
        Ok(self.rows.lock().expect("poisoned").iter().any(|p| p.id == id))
    }

    fn list(&self, search: Option<&SearchTerm>) -> Result<Vec<Product>, DomainError> {
        let rows = self.rows.lock().expect("poisoned");
        Ok(rows
            .iter()
            .filter(|p| keep(search, &[p.name.as_str(), p.id.to_string().as_str()]))
            .cloned()
            .collect())
    }

    fn create(&self, draft: ProductDraft) -> Result<Product, DomainError> {
        let mut rows = self.rows.lock().expect("poisoned");
        let id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let product = Product {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            stock: draft.stock,
            category_id: draft.category_id,
        };
        rows.push(product.clone());
        Ok(product)
    }

    fn update(&self, id: i32, changes: ProductChanges) -> Result<Product, DomainError> {
        let mut rows = self.rows.lock().expect("poisoned");
        let product = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Product {}", id)))?;
        product.name = changes.name;
        product.description = changes.description;
        product.price = changes.price;
        product.stock = changes.stock;
        Ok(product.clone())
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut rows = self.rows.lock().expect("poisoned");
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(DomainError::NotFound(format!("Product {}", id)));
        }
        Ok(())
    }
}

/// Every call fails the way a lost database connection would.
pub struct BrokenStorage;

impl ProductRepository for BrokenStorage {
    fn exists(&self, _id: i32) -> Result<bool, DomainError> {
        Err(broken())
    }

    fn list(&self, _search: Option<&SearchTerm>) -> Result<Vec<Product>, DomainError> {
        Err(broken())
    }

    fn create(&self, _draft: ProductDraft) -> Result<Product, DomainError> {
        Err(broken())
    }

    fn update(&self, _id: i32, _changes: ProductChanges) -> Result<Product, DomainError> {
        Err(broken())
    }

    fn delete(&self, _id: i32) -> Result<(), DomainError> {
        Err(broken())
    }
}

fn broken() -> DomainError {
    DomainError::Storage("connection refused".to_string())
}

#[derive(Clone, Default)]
pub struct InMemoryListings {
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    pub items: Vec<OrderItem>,
    pub payments: Vec<Payment>,
    pub reviews: Vec<Review>,
}

impl ListingRepository for InMemoryListings {
    fn customers(&self, search: Option<&SearchTerm>) -> Result<Vec<Customer>, DomainError> {
        Ok(self
            .customers
            .iter()
            .filter(|c| {
                keep(
                    search,
                    &[
                        c.id.to_string().as_str(),
                        c.first_name.as_str(),
                        c.last_name.as_str(),
                    ],
                )
            })
            .cloned()
            .collect())
    }

    fn orders_with_items(&self, search: Option<&SearchTerm>) -> Result<OrderListing, DomainError> {
        let orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| keep(search, &[o.id.to_string().as_str()]))
            .cloned()
            .collect();
        let items = self
            .items
            .iter()
            .filter(|i| orders.iter().any(|o| o.id == i.order_id))
            .cloned()
            .collect();
        Ok(OrderListing { orders, items })
    }

    fn payments(&self, search: Option<&SearchTerm>) -> Result<Vec<Payment>, DomainError> {
        Ok(self
            .payments
            .iter()
            .filter(|p| keep(search, &[p.id.to_string().as_str()]))
            .cloned()
            .collect())
    }

    fn reviews(&self, search: Option<&SearchTerm>) -> Result<Vec<Review>, DomainError> {
        Ok(self
            .reviews
            .iter()
            .filter(|r| keep(search, &[r.rating.to_string().as_str()]))
            .cloned()
            .collect())
    }
}

fn money(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).expect("valid decimal")
}

/// Two customers, two orders (one item on the first, two on the second),
/// two payments and two reviews.
pub fn sample_listings() -> InMemoryListings {
    let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    let day = NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date");

    let customer = |id: i32, first: &str, last: &str| Customer {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        password: "secret".to_string(),
        phone: None,
        address: Some("1 Main St".to_string()),
        created_at: at,
        updated_at: at,
    };
    let order = |id: i32, customer_id: i32, total: &str| Order {
        id,
        customer_id,
        order_date: day,
        total_amount: money(total),
        status: "PENDING".to_string(),
        shipping_address: "1 Main St".to_string(),
        created_at: at,
        updated_at: at,
    };
    let item = |id: i32, order_id: i32, product_id: i32| OrderItem {
        id,
        order_id,
        product_id,
        quantity: 1,
        price: money("4.00"),
    };
    let payment = |id: i32, order_id: i32| Payment {
        id,
        order_id,
        payment_date: day,
        amount: money("4.00"),
        payment_method: "card".to_string(),
        status: "PAID".to_string(),
    };
    let review = |id: i32, rating: i32| Review {
        id,
        product_id: 1,
        customer_id: 1,
        rating,
        comment: None,
        created_at: at,
    };

    InMemoryListings {
        customers: vec![customer(1, "Ada", "Lovelace"), customer(2, "Grace", "Hopper")],
        orders: vec![order(1, 1, "4.00"), order(2, 2, "8.00")],
        items: vec![item(1, 1, 1), item(2, 2, 1), item(3, 2, 2)],
        payments: vec![payment(1, 1), payment(2, 2)],
        reviews: vec![review(1, 5), review(2, 3)],
    }
}
