use actix_web::{web, HttpResponse};
use log::{error, info, warn};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::application::product_service::ProductFields;
use crate::domain::errors::DomainError;
use crate::domain::product::parse_product_id;
use crate::errors::AppError;
use crate::state::AppState;
use crate::views::{self, DashboardContext, ProductContext};

/// Where every product mutation sends the browser afterwards.
pub const PRODUCT_SCREEN: &str = "/admin/product";

// ── Request DTOs ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductSearchParams {
    /// Case-insensitive substring of the product name or identifier.
    #[serde(rename = "searchProduct")]
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddProductForm {
    #[serde(rename = "p_name")]
    pub name: String,
    #[serde(rename = "p_desc", default)]
    pub description: String,
    /// Decimal price, e.g. "1.50".
    #[serde(rename = "p_price")]
    pub price: String,
    #[serde(rename = "p_stock")]
    pub stock: String,
    #[serde(rename = "p_category")]
    pub category: String,
}

/// One form drives both edit and delete; the submit button that was pressed
/// (`btnedit` or `btndelete`) decides which.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductForm {
    #[serde(rename = "p_ID")]
    pub id: Option<String>,
    #[serde(rename = "p_name")]
    pub name: Option<String>,
    #[serde(rename = "p_desc")]
    pub description: Option<String>,
    #[serde(rename = "p_price")]
    pub price: Option<String>,
    #[serde(rename = "p_stock")]
    pub stock: Option<String>,
    #[serde(rename = "btnedit")]
    pub edit: Option<String>,
    #[serde(rename = "btndelete")]
    pub delete: Option<String>,
}

impl UpdateProductForm {
    fn edited_fields(self) -> Result<ProductFields, DomainError> {
        Ok(ProductFields {
            name: required(self.name, "p_name")?,
            description: self.description.unwrap_or_default(),
            price: required(self.price, "p_price")?,
            stock: required(self.stock, "p_stock")?,
            category: String::new(),
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, DomainError> {
    value.ok_or_else(|| DomainError::Validation(format!("missing form field '{}'", field)))
}

fn report(action: &str, e: DomainError) -> AppError {
    match &e {
        DomainError::NotFound(_) => warn!("{}: {}", action, e),
        _ => error!("Error while {}: {}", action, e),
    }
    AppError::failed(action, e)
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /admin/dashboard
///
/// Product count plus the full product list.
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    responses(
        (status = 200, description = "Dashboard page context"),
        (status = 500, description = "Storage failure"),
    ),
    tag = "products"
)]
pub async fn dashboard(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let dashboard = web::block(move || state.products.dashboard())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(views::render(
        views::DASHBOARD,
        DashboardContext {
            product_count: dashboard.product_count,
            product: dashboard.products,
        },
    ))
}

/// GET /admin/product
#[utoipa::path(
    get,
    path = "/admin/product",
    params(ProductSearchParams),
    responses(
        (status = 200, description = "Product list page context"),
        (status = 500, description = "Storage failure"),
    ),
    tag = "products"
)]
pub async fn list_products(
    state: web::Data<AppState>,
    query: web::Query<ProductSearchParams>,
) -> Result<HttpResponse, AppError> {
    let search = query.into_inner().search;

    let products = web::block(move || state.products.list_products(search.as_deref()))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(views::render(
        views::PRODUCTS,
        ProductContext { product: products },
    ))
}

/// GET /add
///
/// The add form lives on the product screen.
#[utoipa::path(
    get,
    path = "/add",
    responses((status = 302, description = "Redirect to the product screen")),
    tag = "products"
)]
pub async fn add_product_form() -> HttpResponse {
    views::redirect(PRODUCT_SCREEN)
}

/// POST /add
///
/// Price, stock and category must parse as numbers; nothing is stored otherwise.
#[utoipa::path(
    post,
    path = "/add",
    request_body(content = AddProductForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Product created, redirect to the product screen"),
        (status = 500, description = "Invalid numeric field or storage failure", content_type = "text/plain"),
    ),
    tag = "products"
)]
pub async fn add_product(
    state: web::Data<AppState>,
    form: web::Form<AddProductForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();
    let fields = ProductFields {
        name: form.name,
        description: form.description,
        price: form.price,
        stock: form.stock,
        category: form.category,
    };

    let product = web::block(move || state.products.create_product(&fields))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(|e| report("adding the product", e))?;

    info!("Created product {} ({})", product.id, product.name);
    Ok(views::redirect(PRODUCT_SCREEN))
}

/// POST /update
///
/// The product must exist before anything else in the form is looked at.
/// Deletes the product when `btndelete` is present, otherwise edits it when
/// `btnedit` is present. The category is never changed by an edit.
#[utoipa::path(
    post,
    path = "/update",
    request_body(content = UpdateProductForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Product changed, redirect to the product screen"),
        (status = 400, description = "Missing or malformed product id, or no action", content_type = "text/plain"),
        (status = 404, description = "Product not found", content_type = "text/plain"),
        (status = 500, description = "Invalid numeric field or storage failure", content_type = "text/plain"),
    ),
    tag = "products"
)]
pub async fn update_product(
    state: web::Data<AppState>,
    form: web::Form<UpdateProductForm>,
) -> Result<HttpResponse, AppError> {
    let form = form.into_inner();

    let Some(raw_id) = form.id.as_deref().filter(|id| !id.is_empty()) else {
        warn!("Product update submitted without an id");
        return Err(AppError::BadRequest("Product ID not provided".to_string()));
    };
    let id = parse_product_id(raw_id).map_err(|e| {
        warn!("Rejected product update: {}", e);
        AppError::BadRequest(e.to_string())
    })?;

    // An unknown product is a 404 whatever else the form carries.
    let lookup = state.clone();
    web::block(move || lookup.products.ensure_exists(id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .map_err(|e| report("looking up the product", e))?;

    if form.delete.is_some() {
        web::block(move || state.products.delete_product(id))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
            .map_err(|e| report("deleting the product", e))?;

        info!("Deleted product {}", id);
        return Ok(views::redirect(PRODUCT_SCREEN));
    }

    if form.edit.is_some() {
        let fields = form
            .edited_fields()
            .map_err(|e| report("updating the product", e))?;

        web::block(move || state.products.update_product(id, &fields))
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
            .map_err(|e| report("updating the product", e))?;

        info!("Updated product {}", id);
        return Ok(views::redirect(PRODUCT_SCREEN));
    }

    warn!("Product update for {} named no action", id);
    Err(AppError::BadRequest(
        "Expected either btnedit or btndelete".to_string(),
    ))
}
