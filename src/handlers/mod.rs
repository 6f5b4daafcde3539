pub mod listings;
pub mod products;

use actix_web::web;

/// Registers every admin route. Shared by the server and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin/dashboard", web::get().to(products::dashboard))
        .route("/admin/product", web::get().to(products::list_products))
        .service(
            web::resource("/add")
                .route(web::get().to(products::add_product_form))
                .route(web::post().to(products::add_product)),
        )
        .route("/update", web::post().to(products::update_product))
        .route("/admin/review", web::get().to(listings::list_reviews))
        .route("/admin/customer", web::get().to(listings::list_customers))
        .route("/admin/order", web::get().to(listings::list_orders))
        .route("/admin/transaction", web::get().to(listings::list_payments));
}
