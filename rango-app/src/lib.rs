pub mod error;
pub mod session;
pub mod state;

pub use error::{AppError, AppResult};
pub use session::CustomerSession;
pub use state::AppState;
