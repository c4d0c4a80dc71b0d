//! School intake API
//!
//! Two independent intake resources, admission inquiries and contact
//! messages, each with a submit and a list endpoint over its own store.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Record types
//! - **infra**: Database, migrations and record stores
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server against PostgreSQL
//! cargo run -- serve
//!
//! # Start the server without a database
//! cargo run -- serve --in-memory
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::{Config, CorsPolicy};
pub use domain::{Admission, Contact, NewAdmission, NewContact};
pub use errors::{AppError, AppResult};
