pub mod app_config;
pub mod seed;

pub use app_config::Config;
pub use seed::{SeedData, SeedMenu};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type StoreResult<T> = Result<T, StoreError>;
