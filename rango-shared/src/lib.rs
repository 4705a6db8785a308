pub mod events;
pub mod money;
pub mod pii;

pub use events::{Role, StatusChangedEvent};
pub use money::Amount;
pub use pii::Masked;
