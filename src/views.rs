//! Hand-off to the presentation layer.
//!
//! Templates are rendered outside this service. Each screen answers with the
//! template it wants and the context that template consumes; context keys match
//! the template variable names.

use actix_web::http::header;
use actix_web::HttpResponse;
use serde::Serialize;

use crate::domain::listing::{Customer, Order, OrderItem, Payment, Review};
use crate::domain::product::Product;

pub const DASHBOARD: &str = "admin/dashboard.html";
pub const PRODUCTS: &str = "admin/product.html";
pub const REVIEWS: &str = "admin/review.html";
pub const CUSTOMERS: &str = "admin/customer.html";
pub const ORDERS: &str = "admin/order.html";
pub const TRANSACTIONS: &str = "admin/transaction.html";

#[derive(Debug, Serialize)]
pub struct Page<C> {
    pub template: &'static str,
    pub context: C,
}

#[derive(Debug, Serialize)]
pub struct DashboardContext {
    pub product_count: i64,
    pub product: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct ProductContext {
    pub product: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct ReviewContext {
    pub review: Vec<Review>,
}

#[derive(Debug, Serialize)]
pub struct CustomerContext {
    pub customer: Vec<Customer>,
}

#[derive(Debug, Serialize)]
pub struct OrderContext {
    pub order: Vec<Order>,
    #[serde(rename = "orderItem")]
    pub order_item: Vec<OrderItem>,
}

#[derive(Debug, Serialize)]
pub struct TransactionContext {
    pub payment: Vec<Payment>,
}

pub fn render<C: Serialize>(template: &'static str, context: C) -> HttpResponse {
    HttpResponse::Ok().json(Page { template, context })
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
