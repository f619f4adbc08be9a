use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::auth::{AuthUser, TokenResponse};
use shared_models::error::AppError;

use crate::models::{LoginRequest, PublicUser, RegisterRequest, SetupRequest};
use crate::services::AccountService;

pub async fn register(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = AccountService::new(&state);

    let user = service.register(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "msg": "User registered successfully",
            "id": user.id
        })),
    ))
}

pub async fn login(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let service = AccountService::new(&state);

    let token = service.login(request).await?;
    Ok(Json(TokenResponse { token }))
}

pub async fn setup(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<SetupRequest>,
) -> Result<Json<PublicUser>, AppError> {
    let service = AccountService::new(&state);

    let updated = service.setup(&user.id, request).await?;
    Ok(Json(updated))
}

pub async fn me(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<PublicUser>, AppError> {
    let service = AccountService::new(&state);

    let account = service.get_by_id(&user.id).await?;
    Ok(Json(account))
}
