//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{admission_handler, contact_handler};
use crate::domain::{Admission, Contact, NewAdmission, NewContact};

/// OpenAPI documentation for the intake endpoints
#[derive(OpenApi)]
#[openapi(
    info(
        title = "School Intake API",
        version = "0.1.0",
        description = "Admission inquiries and contact messages. \
            `/api/admission` and `/api/contacts` are aliases of the documented paths.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        admission_handler::submit_admission,
        admission_handler::list_admissions,
        contact_handler::submit_contact,
        contact_handler::list_contacts,
    ),
    components(
        schemas(NewAdmission, Admission, NewContact, Contact)
    ),
    tags(
        (name = "Admissions", description = "Admission inquiries"),
        (name = "Contact", description = "Contact messages")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_both_resources() {
        let doc = ApiDoc::openapi();

        let admissions = doc.paths.paths.get("/api/admissions").unwrap();
        assert_eq!(admissions.operations.len(), 2);
        assert!(doc.paths.paths.contains_key("/api/contact"));
    }
}
