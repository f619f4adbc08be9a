use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers;

/// Routes mounted under `/appointments`.
pub fn appointment_routes(state: Arc<AppConfig>) -> Router {
    // The request form is submitted by patients without a token
    let public_routes = Router::new()
        .route("/", get(handlers::list_appointments))
        .route("/create", post(handlers::create_appointment_request));

    let protected_routes = Router::new()
        .route("/{appointment_id}/complete", patch(handlers::complete_appointment))
        .route("/{appointment_id}", delete(handlers::delete_appointment))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}

/// Routes mounted under `/actual-appointments`: the admin booking form
/// writes through the same appointment entity with an `admin_direct` source.
pub fn direct_appointment_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", post(handlers::create_direct_appointment))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state)
}
