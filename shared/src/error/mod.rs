//! Error codes and structured errors

mod codes;
mod conflict;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use conflict::AssignmentError;
pub use types::{AppError, AppResult};
