use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::errors::AppError;
use crate::state::AppState;
use crate::views::{self, CustomerContext, OrderContext, ReviewContext, TransactionContext};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReviewSearchParams {
    /// Substring of the rating, e.g. `5`.
    pub rating: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CustomerSearchParams {
    /// Substring of the customer id, first name or last name.
    #[serde(rename = "searchCust")]
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderSearchParams {
    /// Substring of the order id.
    #[serde(rename = "searchOrder")]
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaymentSearchParams {
    /// Substring of the payment id.
    #[serde(rename = "searchPayment")]
    pub search: Option<String>,
}

/// GET /admin/review
#[utoipa::path(
    get,
    path = "/admin/review",
    params(ReviewSearchParams),
    responses(
        (status = 200, description = "Review list page context"),
        (status = 500, description = "Storage failure"),
    ),
    tag = "listings"
)]
pub async fn list_reviews(
    state: web::Data<AppState>,
    query: web::Query<ReviewSearchParams>,
) -> Result<HttpResponse, AppError> {
    let search = query.into_inner().rating;

    let reviews = web::block(move || state.listings.reviews(search.as_deref()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(views::render(views::REVIEWS, ReviewContext { review: reviews }))
}

/// GET /admin/customer
#[utoipa::path(
    get,
    path = "/admin/customer",
    params(CustomerSearchParams),
    responses(
        (status = 200, description = "Customer list page context"),
        (status = 500, description = "Storage failure"),
    ),
    tag = "listings"
)]
pub async fn list_customers(
    state: web::Data<AppState>,
    query: web::Query<CustomerSearchParams>,
) -> Result<HttpResponse, AppError> {
    let search = query.into_inner().search;

    let customers = web::block(move || state.listings.customers(search.as_deref()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(views::render(
        views::CUSTOMERS,
        CustomerContext {
            customer: customers,
        },
    ))
}

/// GET /admin/order
///
/// Orders matching the filter plus every order item belonging to them.
#[utoipa::path(
    get,
    path = "/admin/order",
    params(OrderSearchParams),
    responses(
        (status = 200, description = "Order list page context with order items"),
        (status = 500, description = "Storage failure"),
    ),
    tag = "listings"
)]
pub async fn list_orders(
    state: web::Data<AppState>,
    query: web::Query<OrderSearchParams>,
) -> Result<HttpResponse, AppError> {
    let search = query.into_inner().search;

    let listing = web::block(move || state.listings.orders(search.as_deref()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(views::render(
        views::ORDERS,
        OrderContext {
            order: listing.orders,
            order_item: listing.items,
        },
    ))
}

/// GET /admin/transaction
#[utoipa::path(
    get,
    path = "/admin/transaction",
    params(PaymentSearchParams),
    responses(
        (status = 200, description = "Payment list page context"),
        (status = 500, description = "Storage failure"),
    ),
    tag = "listings"
)]
pub async fn list_payments(
    state: web::Data<AppState>,
    query: web::Query<PaymentSearchParams>,
) -> Result<HttpResponse, AppError> {
    let search = query.into_inner().search;

    let payments = web::block(move || state.listings.payments(search.as_deref()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(views::render(
        views::TRANSACTIONS,
        TransactionContext { payment: payments },
    ))
}
