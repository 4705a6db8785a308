pub mod lifecycle;
pub mod models;
pub mod labels;
pub mod manager;
pub mod kitchen;
pub mod dispatch;

pub use lifecycle::{HoldReason, Lifecycle, TerminalPolicy, TrackedOrder, Transition};
pub use models::{DeliveryOrder, DeliveryStatus, OrderStatus, RestaurantOrder};
pub use labels::{StatusPresentation, Tone};
pub use manager::OrderManager;
pub use kitchen::KitchenBoard;
pub use dispatch::DispatchBoard;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Order {id} is already {status}; no further transition")]
    InvalidTransition {
        id: String,
        status: &'static str,
    },

    #[error("Duplicate order id: {0}")]
    Duplicate(String),
}

pub type OrderResult<T> = Result<T, OrderError>;
