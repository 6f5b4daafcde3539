use utoipa::OpenApi;

use crate::handlers::{listings, products};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "shop_admin",
        description = "Back-office screens for products, customers, orders, payments and reviews."
    ),
    paths(
        products::dashboard,
        products::list_products,
        products::add_product_form,
        products::add_product,
        products::update_product,
        listings::list_reviews,
        listings::list_customers,
        listings::list_orders,
        listings::list_payments,
    ),
    components(schemas(products::AddProductForm, products::UpdateProductForm)),
    tags(
        (name = "products", description = "Product management"),
        (name = "listings", description = "Read-only listing screens"),
    )
)]
pub struct ApiDoc;
