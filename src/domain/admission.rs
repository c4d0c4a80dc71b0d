//! Admission inquiry record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Admission inquiry as submitted by a visitor.
///
/// Every field is optional and free text. An `id` in the request body is
/// not part of this type and is dropped during decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewAdmission {
    /// Applicant's full name
    #[schema(example = "Jo Lee")]
    pub full_name: Option<String>,
    /// Class or program applied for
    #[schema(example = "Grade 5")]
    pub class_applying: Option<String>,
    #[schema(example = "jo@x.com")]
    pub email: Option<String>,
    #[schema(example = "555-2000")]
    pub phone: Option<String>,
    #[schema(example = "1 Main St")]
    pub address: Option<String>,
    /// Free-form message to the admissions office
    #[schema(example = "Please admit")]
    pub message: Option<String>,
}

/// Persisted admission inquiry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Admission {
    /// Store-assigned identity
    #[schema(example = 1)]
    pub id: i64,
    pub full_name: Option<String>,
    pub class_applying: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub message: Option<String>,
}

impl Admission {
    /// Attach an identity to a submitted inquiry.
    pub fn from_new(id: i64, new: NewAdmission) -> Self {
        Self {
            id,
            full_name: new.full_name,
            class_applying: new.class_applying,
            email: new.email,
            phone: new.phone,
            address: new.address,
            message: new.message,
        }
    }

    /// The submitted fields, without identity.
    pub fn fields(&self) -> NewAdmission {
        NewAdmission {
            full_name: self.full_name.clone(),
            class_applying: self.class_applying.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            message: self.message.clone(),
        }
    }
}

// Persisted records are the same record iff they share an identity.
impl PartialEq for Admission {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Admission {}
