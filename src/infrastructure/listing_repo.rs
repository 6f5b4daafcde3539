use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::listing::{Customer, Order, OrderItem, OrderListing, Payment, Review};
use crate::domain::ports::ListingRepository;
use crate::domain::search::SearchTerm;
use crate::schema::{customers, order_items, orders, payments, reviews};

use super::as_text;
use super::models::{CustomerRow, OrderItemRow, OrderRow, PaymentRow, ReviewRow};

pub struct DieselListingRepository {
    pool: DbPool,
}

impl DieselListingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ListingRepository for DieselListingRepository {
    fn customers(&self, search: Option<&SearchTerm>) -> Result<Vec<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let mut query = customers::table
            .select(CustomerRow::as_select())
            .order(customers::id.asc())
            .into_boxed();

        if let Some(term) = search {
            let pattern = term.like_pattern();
            query = query.filter(
                as_text("customers.id")
                    .ilike(pattern.clone())
                    .or(customers::first_name.ilike(pattern.clone()))
                    .or(customers::last_name.ilike(pattern)),
            );
        }

        let rows = query.load(&mut conn)?;
        Ok(rows.into_iter().map(Customer::from).collect())
    }

    fn orders_with_items(&self, search: Option<&SearchTerm>) -> Result<OrderListing, DomainError> {
        let mut conn = self.pool.get()?;

        // Orders and items are read from the same snapshot.
        conn.build_transaction()
            .read_only()
            .run::<_, DomainError, _>(|conn| {
                let mut query = orders::table
                    .select(OrderRow::as_select())
                    .order(orders::id.asc())
                    .into_boxed();

                if let Some(term) = search {
                    query = query.filter(as_text("orders.id").ilike(term.like_pattern()));
                }

                let order_rows: Vec<OrderRow> = query.load(conn)?;

                let item_rows: Vec<OrderItemRow> = if search.is_some() {
                    OrderItemRow::belonging_to(&order_rows)
                        .select(OrderItemRow::as_select())
                        .order(order_items::id.asc())
                        .load(conn)?
                } else {
                    order_items::table
                        .select(OrderItemRow::as_select())
                        .order(order_items::id.asc())
                        .load(conn)?
                };

                Ok(OrderListing {
                    orders: order_rows.into_iter().map(Order::from).collect(),
                    items: item_rows.into_iter().map(OrderItem::from).collect(),
                })
            })
    }

    fn payments(&self, search: Option<&SearchTerm>) -> Result<Vec<Payment>, DomainError> {
        let mut conn = self.pool.get()?;

        let mut query = payments::table
            .select(PaymentRow::as_select())
            .order(payments::id.asc())
            .into_boxed();

        if let Some(term) = search {
            query = query.filter(as_text("payments.id").ilike(term.like_pattern()));
        }

        let rows = query.load(&mut conn)?;
        Ok(rows.into_iter().map(Payment::from).collect())
    }

    fn reviews(&self, search: Option<&SearchTerm>) -> Result<Vec<Review>, DomainError> {
        let mut conn = self.pool.get()?;

        let mut query = reviews::table
            .select(ReviewRow::as_select())
            .order(reviews::id.asc())
            .into_boxed();

        if let Some(term) = search {
            query = query.filter(as_text("reviews.rating").ilike(term.like_pattern()));
        }

        let rows = query.load(&mut conn)?;
        Ok(rows.into_iter().map(Review::from).collect())
    }
}
