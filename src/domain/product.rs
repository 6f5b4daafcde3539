use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::Serialize;

use super::errors::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
    pub category_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub product_count: i64,
    pub products: Vec<Product>,
}

/// A validated product that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
    pub category_id: i32,
}

/// Fields replaced by an edit. The category is not editable from the admin screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductChanges {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
}

impl ProductDraft {
    pub fn parse(
        name: &str,
        description: &str,
        price: &str,
        stock: &str,
        category: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            name: name.to_string(),
            description: non_empty(description),
            price: parse_price(price)?,
            stock: parse_stock(stock)?,
            category_id: parse_integer("category", category)?,
        })
    }
}

impl ProductChanges {
    pub fn parse(
        name: &str,
        description: &str,
        price: &str,
        stock: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            name: name.to_string(),
            description: non_empty(description),
            price: parse_price(price)?,
            stock: parse_stock(stock)?,
        })
    }
}

/// Parses a product identifier coming from a form field.
pub fn parse_product_id(raw: &str) -> Result<i32, DomainError> {
    parse_integer("product id", raw)
}

fn parse_price(raw: &str) -> Result<BigDecimal, DomainError> {
    let price = BigDecimal::from_str(raw.trim())
        .map_err(|_| DomainError::Validation(format!("price '{}' is not a number", raw)))?;
    if price < BigDecimal::from(0) {
        return Err(DomainError::Validation(format!(
            "price '{}' must not be negative",
            raw
        )));
    }
    // Stored as NUMERIC(10, 2); anything finer would be rounded silently.
    if price.with_scale(2) != price {
        return Err(DomainError::Validation(format!(
            "price '{}' has more than 2 decimal places",
            raw
        )));
    }
    Ok(price)
}

fn parse_stock(raw: &str) -> Result<i32, DomainError> {
    let stock = parse_integer("stock", raw)?;
    if stock < 0 {
        return Err(DomainError::Validation(format!(
            "stock '{}' must not be negative",
            raw
        )));
    }
    Ok(stock)
}

fn parse_integer(field: &str, raw: &str) -> Result<i32, DomainError> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::Validation(format!("{} '{}' is not an integer", field, raw)))
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
