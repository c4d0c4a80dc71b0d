//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod admission;
pub mod contact;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use admission::{
    ActiveModel as AdmissionActiveModel, Entity as AdmissionEntity, Model as AdmissionModel,
};
#[allow(unused_imports)]
pub use contact::{ActiveModel as ContactActiveModel, Entity as ContactEntity, Model as ContactModel};
