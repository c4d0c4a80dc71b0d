//! Contact message record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Longest message the contact table is sized for.
///
/// Only a storage hint: submissions are not checked against it.
pub const CONTACT_MESSAGE_MAX_LEN: u32 = 1000;

/// Contact message as submitted by a visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NewContact {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "jane@x.com")]
    pub email: Option<String>,
    #[schema(example = "555-1000")]
    pub phone: Option<String>,
    #[schema(example = "Hello")]
    pub message: Option<String>,
}

/// Persisted contact message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Contact {
    /// Store-assigned identity
    #[schema(example = 1)]
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl Contact {
    pub fn from_new(id: i64, new: NewContact) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            message: new.message,
        }
    }

    pub fn fields(&self) -> NewContact {
        NewContact {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        }
    }
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Contact {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_partial_body() {
        let new: NewContact = serde_json::from_str(r#"{"name":"Jane Doe","message":"Hello"}"#).unwrap();

        assert_eq!(new.name.as_deref(), Some("Jane Doe"));
        assert_eq!(new.message.as_deref(), Some("Hello"));
        assert!(new.email.is_none());
        assert!(new.phone.is_none());
    }

    #[test]
    fn test_long_message_is_not_rejected() {
        let message = "x".repeat(CONTACT_MESSAGE_MAX_LEN as usize + 500);
        let body = serde_json::json!({ "message": message });
        let new: NewContact = serde_json::from_value(body).unwrap();

        assert_eq!(new.message.map(|m| m.len()), Some(1500));
    }

    #[test]
    fn test_round_trips_fields() {
        let new = NewContact {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@x.com".to_string()),
            phone: Some("555-1000".to_string()),
            message: Some("Hello".to_string()),
        };
        let contact = Contact::from_new(3, new.clone());

        assert_eq!(contact.id, 3);
        assert_eq!(contact.fields(), new);
    }
}
