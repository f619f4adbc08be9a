use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers;

pub fn availability_routes(state: Arc<AppConfig>) -> Router {
    // Reads are public; patients browse open windows without a token
    let public_routes = Router::new()
        .route("/", get(handlers::list_availability))
        .route("/{availability_id}", get(handlers::get_availability));

    // Mutations require a doctor or admin token
    let protected_routes = Router::new()
        .route("/", post(handlers::create_availability))
        .route("/{availability_id}", put(handlers::update_availability))
        .route("/{availability_id}", delete(handlers::delete_availability))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}
