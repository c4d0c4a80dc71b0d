//! Contact message handlers.
//!
//! Both path spellings are served by this single handler set.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use super::method_not_allowed;
use crate::api::extractors::AppJson;
use crate::api::AppState;
use crate::config::CONTACT_PATHS;
use crate::domain::{Contact, NewContact};
use crate::errors::AppResult;

/// Create contact routes, one registration per path spelling
pub fn contact_routes() -> Router<AppState> {
    CONTACT_PATHS.iter().fold(Router::new(), |router, path| {
        router.route(
            path,
            get(list_contacts).post(submit_contact).fallback(method_not_allowed),
        )
    })
}

/// Submit a contact message
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Contact",
    request_body = NewContact,
    responses(
        (status = 201, description = "Message stored", body = Contact),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewContact>,
) -> AppResult<(StatusCode, Json<Contact>)> {
    let contact = state.contacts.create(payload).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// List all contact messages
#[utoipa::path(
    get,
    path = "/api/contact",
    tag = "Contact",
    responses(
        (status = 200, description = "Every stored message", body = Vec<Contact>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_contacts(State(state): State<AppState>) -> AppResult<Json<Vec<Contact>>> {
    let contacts = state.contacts.list_all().await?;
    Ok(Json(contacts))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sea_orm::DbErr;

    use super::*;
    use crate::errors::AppError;
    use crate::infra::{MemoryAdmissionStore, MockContactRepository};

    fn state_with(repo: MockContactRepository) -> AppState {
        AppState::new(Arc::new(MemoryAdmissionStore::new()), Arc::new(repo))
    }

    #[tokio::test]
    async fn test_list_returns_store_order() {
        let mut repo = MockContactRepository::new();
        repo.expect_list_all().times(1).returning(|| {
            Ok(vec![
                Contact::from_new(1, NewContact::default()),
                Contact::from_new(2, NewContact::default()),
            ])
        });

        let Json(contacts) = list_contacts(State(state_with(repo))).await.unwrap();

        let ids: Vec<i64> = contacts.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_submit_storage_fault_propagates() {
        let mut repo = MockContactRepository::new();
        repo.expect_create()
            .returning(|_| Err(AppError::Database(DbErr::Custom("disk full".into()))));

        let result = submit_contact(State(state_with(repo)), AppJson(NewContact::default())).await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
