use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    Json,
};

use shared_config::AppConfig;
use shared_models::auth::{AuthUser, Role};
use shared_models::error::AppError;
use shared_utils::extractor::require_role;

use crate::models::{CreateAvailabilityRequest, DoctorAvailability, UpdateAvailabilityRequest};
use crate::services::AvailabilityService;

pub async fn list_availability(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Vec<DoctorAvailability>>, AppError> {
    let service = AvailabilityService::new(&state);

    let availabilities = service.list_all().await?;
    Ok(Json(availabilities))
}

pub async fn get_availability(
    State(state): State<Arc<AppConfig>>,
    Path(availability_id): Path<String>,
) -> Result<Json<DoctorAvailability>, AppError> {
    let service = AvailabilityService::new(&state);

    let availability = service.get_by_id(&availability_id).await?;
    Ok(Json(availability))
}

pub async fn create_availability(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateAvailabilityRequest>,
) -> Result<Json<DoctorAvailability>, AppError> {
    require_role(&user, &[Role::Doctor, Role::Admin])?;

    let service = AvailabilityService::new(&state);

    let availability = service.create(request).await?;
    Ok(Json(availability))
}

pub async fn update_availability(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Path(availability_id): Path<String>,
    Json(request): Json<UpdateAvailabilityRequest>,
) -> Result<Json<DoctorAvailability>, AppError> {
    require_role(&user, &[Role::Doctor, Role::Admin])?;

    let service = AvailabilityService::new(&state);

    let availability = service.update(&availability_id, request).await?;
    Ok(Json(availability))
}

pub async fn delete_availability(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Path(availability_id): Path<String>,
) -> Result<Json<DoctorAvailability>, AppError> {
    require_role(&user, &[Role::Doctor, Role::Admin])?;

    let service = AvailabilityService::new(&state);

    let availability = service.delete(&availability_id).await?;
    Ok(Json(availability))
}
