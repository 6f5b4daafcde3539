use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{Product, ProductChanges, ProductDraft};
use crate::domain::search::SearchTerm;
use crate::schema::products;

use super::as_text;
use super::models::{NewProductRow, ProductChangeset, ProductRow};

fn not_found(id: i32) -> DomainError {
    DomainError::NotFound(format!("Product {}", id))
}

pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for DieselProductRepository {
    fn exists(&self, id: i32) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;
        let found = diesel::select(diesel::dsl::exists(products::table.find(id)))
            .get_result(&mut conn)?;
        Ok(found)
    }

    fn list(&self, search: Option<&SearchTerm>) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let mut query = products::table
            .select(ProductRow::as_select())
            .order(products::id.asc())
            .into_boxed();

        if let Some(term) = search {
            let pattern = term.like_pattern();
            query = query.filter(
                products::name
                    .ilike(pattern.clone())
                    .or(as_text("products.id").ilike(pattern)),
            );
        }

        let rows = query.load(&mut conn)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn create(&self, draft: ProductDraft) -> Result<Product, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let row = diesel::insert_into(products::table)
                .values(&NewProductRow::from(draft))
                .returning(ProductRow::as_returning())
                .get_result(conn)?;
            Ok(Product::from(row))
        })
    }

    fn update(&self, id: i32, changes: ProductChanges) -> Result<Product, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let row = diesel::update(products::table.find(id))
                .set(&ProductChangeset::from(changes))
                .returning(ProductRow::as_returning())
                .get_result(conn)
                .optional()?
                .ok_or_else(|| not_found(id))?;
            Ok(Product::from(row))
        })
    }

    /// Rows in `order_items` and `reviews` that reference the product are
    /// left untouched.
    fn delete(&self, id: i32) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let deleted = diesel::delete(products::table.find(id)).execute(conn)?;
            if deleted == 0 {
                return Err(not_found(id));
            }
            Ok(())
        })
    }
}
