use rango_catalog::CatalogError;
use rango_order::OrderError;
use rango_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Restaurant {0} has no menu")]
    MenuMissing(String),
}

pub type AppResult<T> = Result<T, AppError>;
