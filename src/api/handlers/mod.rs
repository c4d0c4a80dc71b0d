//! HTTP request handlers.

pub mod admission_handler;
pub mod contact_handler;
pub mod health_handler;

pub use admission_handler::admission_routes;
pub use contact_handler::contact_routes;
pub use health_handler::health;

use crate::errors::AppError;

/// Known path, unsupported method: same error envelope as other failures
pub(crate) async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
