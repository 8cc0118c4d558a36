use crate::api::query_params;
use crate::error::ServiceError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

/// Header carrying the function key
pub const FUNCTION_KEY_HEADER: &str = "x-functions-key";

/// Query parameter carrying the function key
pub const FUNCTION_KEY_PARAM: &str = "code";

/// Function key authentication; a no-op when no key is configured
pub async fn function_key_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ServiceError> {
    let Some(expected) = state.config.auth.function_key.as_deref() else {
        return Ok(next.run(request).await);
    };

    let from_header = headers
        .get(FUNCTION_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let presented =
        from_header.or_else(|| query_params(request.uri()).remove(FUNCTION_KEY_PARAM));

    if presented.as_deref() != Some(expected) {
        tracing::warn!("Rejected request to {} without a valid function key", request.uri().path());
        return Err(ServiceError::Unauthorized);
    }

    Ok(next.run(request).await)
}
