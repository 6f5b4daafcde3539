use std::sync::Arc;

use super::errors::DomainError;
use super::listing::{Customer, OrderListing, Payment, Review};
use super::product::{Product, ProductChanges, ProductDraft};
use super::search::SearchTerm;

pub trait ProductRepository: Send + Sync + 'static {
    fn exists(&self, id: i32) -> Result<bool, DomainError>;
    fn list(&self, search: Option<&SearchTerm>) -> Result<Vec<Product>, DomainError>;
    fn create(&self, draft: ProductDraft) -> Result<Product, DomainError>;
    fn update(&self, id: i32, changes: ProductChanges) -> Result<Product, DomainError>;
    fn delete(&self, id: i32) -> Result<(), DomainError>;
}

/// Read-only access to the entities the admin screens only display.
pub trait ListingRepository: Send + Sync + 'static {
    /// Matches on id, first name or last name.
    fn customers(&self, search: Option<&SearchTerm>) -> Result<Vec<Customer>, DomainError>;
    /// Matches on order id; items are limited to the matched orders.
    fn orders_with_items(&self, search: Option<&SearchTerm>) -> Result<OrderListing, DomainError>;
    /// Matches on payment id.
    fn payments(&self, search: Option<&SearchTerm>) -> Result<Vec<Payment>, DomainError>;
    /// Matches on rating.
    fn reviews(&self, search: Option<&SearchTerm>) -> Result<Vec<Review>, DomainError>;
}

impl<R: ProductRepository + ?Sized> ProductRepository for Arc<R> {
    fn exists(&self, id: i32) -> Result<bool, DomainError> {
        (**self).exists(id)
    }

    fn list(&self, search: Option<&SearchTerm>) -> Result<Vec<Product>, DomainError> {
        (**self).list(search)
    }

    fn create(&self, draft: ProductDraft) -> Result<Product, DomainError> {
        (**self).create(draft)
    }

    fn update(&self, id: i32, changes: ProductChanges) -> Result<Product, DomainError> {
        (**self).update(id, changes)
    }

    fn delete(&self, id: i32) -> Result<(), DomainError> {
        (**self).delete(id)
    }
}

impl<R: ListingRepository + ?Sized> ListingRepository for Arc<R> {
    fn customers(&self, search: Option<&SearchTerm>) -> Result<Vec<Customer>, DomainError> {
        (**self).customers(search)
    }

    fn orders_with_items(&self, search: Option<&SearchTerm>) -> Result<OrderListing, DomainError> {
        (**self).orders_with_items(search)
    }

    fn payments(&self, search: Option<&SearchTerm>) -> Result<Vec<Payment>, DomainError> {
        (**self).payments(search)
    }

    fn reviews(&self, search: Option<&SearchTerm>) -> Result<Vec<Review>, DomainError> {
        (**self).reviews(search)
    }
}
