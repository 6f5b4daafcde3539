use crate::domain::errors::DomainError;
use crate::domain::listing::{Customer, OrderListing, Payment, Review};
use crate::domain::ports::ListingRepository;
use crate::domain::search::SearchTerm;

pub struct ListingService<R> {
    repo: R,
}

impl<R: ListingRepository> ListingService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn customers(&self, search: Option<&str>) -> Result<Vec<Customer>, DomainError> {
        self.repo.customers(SearchTerm::parse(search).as_ref())
    }

    pub fn orders(&self, search: Option<&str>) -> Result<OrderListing, DomainError> {
        self.repo.orders_with_items(SearchTerm::parse(search).as_ref())
    }

    pub fn payments(&self, search: Option<&str>) -> Result<Vec<Payment>, DomainError> {
        self.repo.payments(SearchTerm::parse(search).as_ref())
    }

    pub fn reviews(&self, search: Option<&str>) -> Result<Vec<Review>, DomainError> {
        self.repo.reviews(SearchTerm::parse(search).as_ref())
    }
}
