//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Record stores (relational and in-memory)

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    AdmissionRepository, AdmissionStore, ContactRepository, ContactStore, MemoryAdmissionStore,
    MemoryContactStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockAdmissionRepository, MockContactRepository};
