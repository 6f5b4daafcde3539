use std::sync::Arc;

use crate::application::listing_service::ListingService;
use crate::application::product_service::ProductService;
use crate::db::DbPool;
use crate::domain::ports::{ListingRepository, ProductRepository};
use crate::infrastructure::listing_repo::DieselListingRepository;
use crate::infrastructure::product_repo::DieselProductRepository;

/// Shared by every worker; repositories are type-erased so tests can swap in
/// in-memory ones.
pub struct AppState {
    pub products: ProductService<Arc<dyn ProductRepository>>,
    pub listings: ListingService<Arc<dyn ListingRepository>>,
}

impl AppState {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        listings: Arc<dyn ListingRepository>,
    ) -> Self {
        Self {
            products: ProductService::new(products),
            listings: ListingService::new(listings),
        }
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self::new(
            Arc::new(DieselProductRepository::new(pool.clone())),
            Arc::new(DieselListingRepository::new(pool)),
        )
    }
}
