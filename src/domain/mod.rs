//! Domain layer - Intake records
//!
//! Plain record types for the two independent intake resources.
//! A `New*` record is what a visitor submits (no identity yet); the
//! persisted record carries the identity assigned by its store.
//!
//! DDD: Domain layer has NO external dependencies beyond serialization.

pub mod admission;
pub mod contact;

pub use admission::{Admission, NewAdmission};
pub use contact::{Contact, NewContact};
