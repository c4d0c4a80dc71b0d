//! Cross-origin policy.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::CorsPolicy;

/// Build the CORS layer for a policy, or `None` when CORS is disabled.
///
/// Origins that are not valid header values are skipped with a warning.
pub fn cors_layer(policy: &CorsPolicy) -> Option<CorsLayer> {
    let allow_origin = match policy {
        CorsPolicy::Disabled => return None,
        CorsPolicy::AnyOrigin => AllowOrigin::from(Any),
        CorsPolicy::Origins(origins) => {
            let values: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            AllowOrigin::list(values)
        }
    };

    Some(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
