use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Opaque credential; never rendered.
    #[serde(skip_serializing)]
    pub password: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub order_date: NaiveDate,
    pub total_amount: BigDecimal,
    pub status: String,
    pub shipping_address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    /// Unit price at the time of sale.
    pub price: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payment {
    pub id: i32,
    pub order_id: i32,
    pub payment_date: NaiveDate,
    pub amount: BigDecimal,
    pub payment_method: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub id: i32,
    pub product_id: i32,
    pub customer_id: i32,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Orders together with every item that belongs to one of them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderListing {
    pub orders: Vec<Order>,
    pub items: Vec<OrderItem>,
}
