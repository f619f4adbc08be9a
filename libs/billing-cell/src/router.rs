use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};

use shared_config::AppConfig;
use shared_utils::extractor::auth_middleware;

use crate::handlers;

/// Routes mounted under `/bills`. Path names keep the shapes the browser
/// client has always called.
pub fn bill_routes(state: Arc<AppConfig>) -> Router {
    let public_routes = Router::new()
        .route("/", get(handlers::list_bills))
        .route("/getBill/{bill_id}", get(handlers::get_bill))
        .route("/user/{user_id}", get(handlers::get_bills_by_user));

    let protected_routes = Router::new()
        .route("/addBill", post(handlers::add_bill))
        .route("/update/{bill_id}", put(handlers::update_bill))
        .route("/updatePayment/{bill_id}", put(handlers::update_bill_payment))
        .route("/deleteBill/{bill_id}", delete(handlers::delete_bill))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}

/// Routes mounted under `/payment`.
pub fn payment_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/history/{user_id}", get(handlers::payment_history))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
        .with_state(state)
}
