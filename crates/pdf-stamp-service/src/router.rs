use crate::{api, middleware::function_key_auth, state::AppState};
use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

/// Bind the stamping handler to its route.
///
/// The stamping route sits behind function key auth; `/health` does not.
pub fn build_router(state: AppState) -> Router {
    let stamp_routes = Router::new()
        .route(&state.config.route, get(api::stamp).post(api::stamp))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            function_key_auth,
        ));

    Router::new()
        .route("/health", get(api::health_check))
        .merge(stamp_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
