//! Admission inquiry handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Router};

use super::method_not_allowed;
use crate::api::extractors::AppJson;
use crate::api::AppState;
use crate::config::ADMISSION_PATHS;
use crate::domain::{Admission, NewAdmission};
use crate::errors::AppResult;

/// Create admission routes, one registration per path spelling
pub fn admission_routes() -> Router<AppState> {
    ADMISSION_PATHS.iter().fold(Router::new(), |router, path| {
        router.route(
            path,
            get(list_admissions).post(submit_admission).fallback(method_not_allowed),
        )
    })
}

/// Submit an admission inquiry
#[utoipa::path(
    post,
    path = "/api/admissions",
    tag = "Admissions",
    request_body = NewAdmission,
    responses(
        (status = 201, description = "Inquiry stored", body = Admission),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn submit_admission(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewAdmission>,
) -> AppResult<(StatusCode, Json<Admission>)> {
    let admission = state.admissions.create(payload).await?;
    Ok((StatusCode::CREATED, Json(admission)))
}

/// List all admission inquiries
#[utoipa::path(
    get,
    path = "/api/admissions",
    tag = "Admissions",
    responses(
        (status = 200, description = "Every stored inquiry", body = Vec<Admission>),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_admissions(State(state): State<AppState>) -> AppResult<Json<Vec<Admission>>> {
    let admissions = state.admissions.list_all().await?;
    Ok(Json(admissions))
}
