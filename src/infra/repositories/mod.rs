//! Repository layer - Data access abstraction
//!
//! Each record type has one storage accessor trait with a relational
//! (SeaORM) implementation and an in-memory one.

mod admission_repository;
mod base;
mod contact_repository;
pub(crate) mod entities;
mod memory;

pub use admission_repository::{AdmissionRepository, AdmissionStore};
pub use base::{ReadRepository, WriteRepository};
pub use contact_repository::{ContactRepository, ContactStore};
pub use memory::{MemoryAdmissionStore, MemoryContactStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use admission_repository::MockAdmissionRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use contact_repository::MockContactRepository;
