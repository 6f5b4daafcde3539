use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

use crate::domain::listing::{Customer, Order, OrderItem, Payment, Review};
use crate::domain::product::{Product, ProductChanges, ProductDraft};
use crate::schema::{customers, order_items, orders, payments, products, reviews};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
    pub category_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = products)]
pub struct NewProductRow {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
    pub category_id: i32,
}

/// Clearing the description on edit must write NULL, not skip the column.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = products)]
#[diesel(treat_none_as_null = true)]
pub struct ProductChangeset {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = customers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = orders)]
#[diesel(belongs_to(CustomerRow, foreign_key = customer_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i32,
    pub customer_id: i32,
    pub order_date: NaiveDate,
    pub total_amount: BigDecimal,
    pub status: String,
    pub shipping_address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderItemRow {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: BigDecimal,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = payments)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PaymentRow {
    pub id: i32,
    pub order_id: i32,
    pub payment_date: NaiveDate,
    pub amount: BigDecimal,
    pub payment_method: String,
    pub status: String,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = reviews)]
#[diesel(belongs_to(CustomerRow, foreign_key = customer_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReviewRow {
    pub id: i32,
    pub product_id: i32,
    pub customer_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ── Row ⇄ domain conversions ─────────────────────────────────────────────────

impl From<ProductDraft> for NewProductRow {
    fn from(d: ProductDraft) -> Self {
        Self {
            name: d.name,
            description: d.description,
            price: d.price,
            stock: d.stock,
            category_id: d.category_id,
        }
    }
}

impl From<ProductChanges> for ProductChangeset {
    fn from(c: ProductChanges) -> Self {
        Self {
            name: c.name,
            description: c.description,
            price: c.price,
            stock: c.stock,
        }
    }
}

impl From<ProductRow> for Product {
    fn from(r: ProductRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            price: r.price,
            stock: r.stock,
            category_id: r.category_id,
        }
    }
}

impl From<CustomerRow> for Customer {
    fn from(r: CustomerRow) -> Self {
        Self {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            password: r.password,
            phone: r.phone,
            address: r.address,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<OrderRow> for Order {
    fn from(r: OrderRow) -> Self {
        Self {
            id: r.id,
            customer_id: r.customer_id,
            order_date: r.order_date,
            total_amount: r.total_amount,
            status: r.status,
            shipping_address: r.shipping_address,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

impl From<OrderItemRow> for OrderItem {
    fn from(r: OrderItemRow) -> Self {
        Self {
            id: r.id,
            order_id: r.order_id,
            product_id: r.product_id,
            quantity: r.quantity,
            price: r.price,
        }
    }
}

impl From<PaymentRow> for Payment {
    fn from(r: PaymentRow) -> Self {
        Self {
            id: r.id,
            order_id: r.order_id,
            payment_date: r.payment_date,
            amount: r.amount,
            payment_method: r.payment_method,
            status: r.status,
        }
    }
}

impl From<ReviewRow> for Review {
    fn from(r: ReviewRow) -> Self {
        Self {
            id: r.id,
            product_id: r.product_id,
            customer_id: r.customer_id,
            rating: r.rating,
            comment: r.comment,
            created_at: r.created_at,
        }
    }
}
