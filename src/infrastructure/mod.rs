pub mod listing_repo;
pub mod models;
pub mod product_repo;

#[cfg(test)]
pub(crate) mod test_db;

use diesel::dsl::sql;
use diesel::expression::SqlLiteral;
use diesel::sql_types::Text;

use crate::domain::errors::DomainError;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

// ── Query helpers ────────────────────────────────────────────────────────────

/// `column` rendered as text so numeric columns can take part in `ILIKE`
/// substring searches. Only ever called with fixed column names; the search
/// pattern itself is always a bound parameter.
pub(crate) fn as_text(column: &'static str) -> SqlLiteral<Text> {
    sql::<Text>(&format!("CAST({} AS TEXT)", column))
}
