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

use crate::models::{CreateBillRequest, MedicalBill, UpdateBillRequest, UpdatePaymentRequest};
use crate::services::BillingService;

pub async fn list_bills(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Vec<MedicalBill>>, AppError> {
    let service = BillingService::new(&state);

    let bills = service.get_all().await?;
    Ok(Json(bills))
}

pub async fn get_bill(
    State(state): State<Arc<AppConfig>>,
    Path(bill_id): Path<String>,
) -> Result<Json<MedicalBill>, AppError> {
    let service = BillingService::new(&state);

    let bill = service.get_by_id(&bill_id).await?;
    Ok(Json(bill))
}

pub async fn get_bills_by_user(
    State(state): State<Arc<AppConfig>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<MedicalBill>>, AppError> {
    let service = BillingService::new(&state);

    let bills = service.get_by_user(&user_id).await?;
    Ok(Json(bills))
}

pub async fn add_bill(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateBillRequest>,
) -> Result<Json<MedicalBill>, AppError> {
    require_role(&user, &[Role::Admin])?;

    let service = BillingService::new(&state);

    let bill = service.create(request).await?;
    Ok(Json(bill))
}

pub async fn update_bill(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Path(bill_id): Path<String>,
    Json(request): Json<UpdateBillRequest>,
) -> Result<Json<MedicalBill>, AppError> {
    require_role(&user, &[Role::Admin])?;

    let service = BillingService::new(&state);

    let bill = service.update(&bill_id, request).await?;
    Ok(Json(bill))
}

pub async fn update_bill_payment(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Path(bill_id): Path<String>,
    Json(request): Json<UpdatePaymentRequest>,
) -> Result<Json<MedicalBill>, AppError> {
    require_role(&user, &[Role::Admin])?;

    let service = BillingService::new(&state);

    let bill = service.update_payment(&bill_id, request).await?;
    Ok(Json(bill))
}

pub async fn delete_bill(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
    Path(bill_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    require_role(&user, &[Role::Admin])?;

    let service = BillingService::new(&state);

    service.delete(&bill_id).await?;
    Ok(Json(json!({ "msg": "Bill deleted" })))
}

/// Settled and partially settled bills for one patient; errors when the
/// patient has none.
pub async fn payment_history(
    State(state): State<Arc<AppConfig>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<MedicalBill>>, AppError> {
    let service = BillingService::new(&state);

    let bills = service.payment_history(&user_id).await?;
    Ok(Json(bills))
}
