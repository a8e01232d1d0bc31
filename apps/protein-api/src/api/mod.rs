use axum::{Router, routing::get};

pub mod health;
pub mod proteins;

/// All API routes, mounted at their full paths. State is applied per domain.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().merge(proteins::router(state))
}

/// `/ready` with real dependency checks, merged next to the stateless app router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
