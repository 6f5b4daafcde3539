use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{Dashboard, Product, ProductChanges, ProductDraft};
use crate::domain::search::SearchTerm;

/// Raw product fields as they arrive from the admin form.
#[derive(Debug, Clone)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub category: String,
}

pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// The count is taken from the listed products so the two always agree.
    pub fn dashboard(&self) -> Result<Dashboard, DomainError> {
        let products = self.repo.list(None)?;
        Ok(Dashboard {
            product_count: products.len() as i64,
            products,
        })
    }

    /// Fails with `NotFound` when no product has this id.
    pub fn ensure_exists(&self, id: i32) -> Result<(), DomainError> {
        if self.repo.exists(id)? {
            Ok(())
        } else {
            Err(DomainError::NotFound(format!("Product {}", id)))
        }
    }

    pub fn list_products(&self, search: Option<&str>) -> Result<Vec<Product>, DomainError> {
        self.repo.list(SearchTerm::parse(search).as_ref())
    }

    /// Validates the form fields before anything reaches storage.
    pub fn create_product(&self, fields: &ProductFields) -> Result<Product, DomainError> {
        let draft = ProductDraft::parse(
            &fields.name,
            &fields.description,
            &fields.price,
            &fields.stock,
            &fields.category,
        )?;
        self.repo.create(draft)
    }

    /// `fields.category` is ignored.
    pub fn update_product(&self, id: i32, fields: &ProductFields) -> Result<Product, DomainError> {
        let changes = ProductChanges::parse(
            &fields.name,
            &fields.description,
            &fields.price,
            &fields.stock,
        )?;
        self.repo.update(id, changes)
    }

    pub fn delete_product(&self, id: i32) -> Result<(), DomainError> {
        self.repo.delete(id)
    }
}
