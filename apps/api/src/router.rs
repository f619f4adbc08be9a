use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use appointment_cell::router::{appointment_routes, direct_appointment_routes};
use availability_cell::router::availability_routes;
use billing_cell::router::{bill_routes, payment_routes};
use chat_cell::router::chat_routes;
use shared_config::AppConfig;
use user_cell::router::user_routes;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "Server is running!" }))
        .nest("/user", user_routes(state.clone()))
        .nest("/doctor-availability", availability_routes(state.clone()))
        .nest("/appointments", appointment_routes(state.clone()))
        .nest("/actual-appointments", direct_appointment_routes(state.clone()))
        .nest("/bills", bill_routes(state.clone()))
        .nest("/payment", payment_routes(state.clone()))
        .nest("/chat", chat_routes(state.clone()))
        // Attachments are served straight off the uploads directory
        .nest_service("/uploads", ServeDir::new(&state.uploads_dir))
}
