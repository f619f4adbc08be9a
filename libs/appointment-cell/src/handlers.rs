use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::auth::{AuthUser, Role};
use shared_models::error::AppError;
use shared_utils::extractor::require_role;

use crate::models::{Appointment, CreateAppointmentRequest, CreateDirectAppointmentRequest};
use crate::services::AppointmentService;

pub async fn list_appointments(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let service = AppointmentService::new(&state);

    let appointments = service.list_all().await?;
    Ok(Json(appointments))
}

pub async fn create_appointment_request(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    let service = AppointmentService::new(&state);

    let appointment = service.create_request(request).await?;
    Ok(Json(appointment))
}

pub async fn create_direct_appointment(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateDirectAppointmentRequest>,
) -> Result<Json<Appointment>, AppError> {
    require_role(&user, &[Role::Admin])?;

    let service = AppointmentService::new(&state);

    let appointment = service.create_direct(request).await?;
    Ok(Json(appointment))
}

pub async fn complete_appointment(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Appointment>, AppError> {
    require_role(&user, &[Role::Doctor, Role::Admin])?;

    let service = AppointmentService::new(&state);

    let appointment = service.complete(&appointment_id).await?;
    Ok(Json(appointment))
}

pub async fn delete_appointment(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[Role::Admin])?;

    let service = AppointmentService::new(&state);

    let appointment = service.delete_by_id(&appointment_id).await?;
    Ok(Json(json!({
        "msg": "Appointment deleted",
        "id": appointment.id
    })))
}
