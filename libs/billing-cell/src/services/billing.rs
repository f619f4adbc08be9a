use chrono::Utc;
use serde_json::json;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::store::StoreClient;

use crate::error::BillingError;
use crate::models::{
    CreateBillRequest, MedicalBill, PaidStatus, UpdateBillRequest, UpdatePaymentRequest,
};

const COLLECTION: &str = "medical_bills";

pub struct BillingService {
    store: StoreClient,
}

impl BillingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: StoreClient::new(config),
        }
    }

    /// Persist a new bill exactly as supplied. `balance_amount` is taken
    /// from the caller, not recomputed.
    pub async fn create(&self, request: CreateBillRequest) -> Result<MedicalBill, BillingError> {
        debug!("Creating bill for patient: {}", request.patient_id);

        for (field, value) in [
            ("patient_name", &request.patient_name),
            ("patient_id", &request.patient_id),
            ("appointment_id", &request.appointment_id),
        ] {
            if value.trim().is_empty() {
                return Err(BillingError::Validation(format!("{} is required", field)));
            }
        }

        let document = json!({
            "patient_name": request.patient_name,
            "patient_id": request.patient_id,
            "appointment_id": request.appointment_id,
            "total_amount": request.total_amount,
            "paid_amount": request.paid_amount,
            "balance_amount": request.balance_amount,
            "paid_status": request.paid_status,
            "created_at": Utc::now().to_rfc3339(),
            "updated_at": Utc::now().to_rfc3339()
        });

        let stored = self.store.insert(COLLECTION, document).await?;

        let bill: MedicalBill = serde_json::from_value(stored)?;
        debug!("Bill created with ID: {}", bill.id);

        Ok(bill)
    }

    /// All bills, newest first.
    pub async fn get_all(&self) -> Result<Vec<MedicalBill>, BillingError> {
        let result = self.store.find(COLLECTION, "order=created_at.desc").await?;

        let bills = result
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<MedicalBill>, _>>()?;

        Ok(bills)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<MedicalBill, BillingError> {
        let result = self
            .store
            .find_by_id(COLLECTION, id)
            .await?
            .ok_or(BillingError::NotFound)?;

        let bill: MedicalBill = serde_json::from_value(result)?;
        Ok(bill)
    }

    /// Bills for one patient. An empty list is a valid answer here.
    pub async fn get_by_user(&self, patient_id: &str) -> Result<Vec<MedicalBill>, BillingError> {
        let query = format!("patient_id=eq.{}", patient_id);
        let result = self.store.find(COLLECTION, &query).await?;

        let bills = result
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<MedicalBill>, _>>()?;

        Ok(bills)
    }

    /// Bills for one patient with a settled or partially settled status.
    /// A patient with no matching bills gets an error, not an empty list.
    pub async fn payment_history(
        &self,
        patient_id: &str,
    ) -> Result<Vec<MedicalBill>, BillingError> {
        if patient_id.trim().is_empty() {
            return Err(BillingError::Validation("Invalid user ID".to_string()));
        }

        let query = format!(
            "patient_id=eq.{}&paid_status=in.(\"{}\",\"{}\")",
            patient_id,
            PaidStatus::Paid,
            PaidStatus::PartiallyPaid
        );
        let result = self.store.find(COLLECTION, &query).await?;

        if result.is_empty() {
            return Err(BillingError::NoPaymentHistory);
        }

        let bills = result
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<MedicalBill>, _>>()?;

        Ok(bills)
    }

    /// Set the settlement status, leaving amounts untouched.
    pub async fn update_payment(
        &self,
        id: &str,
        request: UpdatePaymentRequest,
    ) -> Result<MedicalBill, BillingError> {
        debug!("Updating payment status for bill: {}", id);

        let patch = json!({
            "paid_status": request.paid_status,
            "updated_at": Utc::now().to_rfc3339()
        });

        let updated = self
            .store
            .update_by_id(COLLECTION, id, patch)
            .await?
            .ok_or(BillingError::NotFound)?;

        let bill: MedicalBill = serde_json::from_value(updated)?;
        Ok(bill)
    }

    /// Replace the editable fields of a bill. Amounts, including the
    /// balance, are written as supplied.
    pub async fn update(
        &self,
        id: &str,
        request: UpdateBillRequest,
    ) -> Result<MedicalBill, BillingError> {
        debug!("Updating bill: {}", id);

        let patch = json!({
            "patient_name": request.patient_name,
            "total_amount": request.total_amount,
            "paid_amount": request.paid_amount,
            "balance_amount": request.balance_amount,
            "paid_status": request.paid_status,
            "updated_at": Utc::now().to_rfc3339()
        });

        let updated = self
            .store
            .update_by_id(COLLECTION, id, patch)
            .await?
            .ok_or(BillingError::NotFound)?;

        let bill: MedicalBill = serde_json::from_value(updated)?;
        Ok(bill)
    }

    pub async fn delete(&self, id: &str) -> Result<MedicalBill, BillingError> {
        debug!("Deleting bill: {}", id);

        let deleted = self
            .store
            .delete_by_id(COLLECTION, id)
            .await?
            .ok_or(BillingError::NotFound)?;

        let bill: MedicalBill = serde_json::from_value(deleted)?;
        Ok(bill)
    }
}
