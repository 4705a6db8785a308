pub mod menu;
pub mod restaurant;

pub use menu::{Menu, MenuCategory, MenuItem};
pub use restaurant::{Restaurant, RestaurantDirectory};

/// Catalog lookup failures
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Menu item not found: {0}")]
    ItemNotFound(String),

    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    #[error("Duplicate catalog entry: {0}")]
    DuplicateItem(String),

    #[error("Negative price for catalog entry: {0}")]
    NegativePrice(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
