use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalBill {
    pub id: Uuid,
    pub patient_name: String,
    pub patient_id: String,
    pub appointment_id: String,
    pub total_amount: f64,
    pub paid_amount: f64,
    /// Supplied by the caller and persisted as given; never derived from
    /// `total_amount - paid_amount` server-side.
    pub balance_amount: f64,
    pub paid_status: PaidStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Settlement state of a bill. The stored strings match the historical
/// values, including the embedded space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaidStatus {
    #[serde(rename = "unpaid")]
    Unpaid,
    #[serde(rename = "partially paid")]
    PartiallyPaid,
    #[serde(rename = "paid")]
    Paid,
}

impl fmt::Display for PaidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaidStatus::Unpaid => write!(f, "unpaid"),
            PaidStatus::PartiallyPaid => write!(f, "partially paid"),
            PaidStatus::Paid => write!(f, "paid"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBillRequest {
    pub patient_name: String,
    pub patient_id: String,
    pub appointment_id: String,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub balance_amount: f64,
    pub paid_status: PaidStatus,
}

/// Full-field replace used by the admin edit form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBillRequest {
    pub patient_name: String,
    pub total_amount: f64,
    pub paid_amount: f64,
    pub balance_amount: f64,
    pub paid_status: PaidStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePaymentRequest {
    pub paid_status: PaidStatus,
}
