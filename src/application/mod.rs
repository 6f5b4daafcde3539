pub mod listing_service;
pub mod product_service;
