pub mod errors;
pub mod listing;
pub mod ports;
pub mod product;
pub mod search;
