use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single appointment entity covers both intake paths: patient-submitted
/// requests and admin-entered direct bookings, told apart by `source`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub source: AppointmentSource,
    pub status: AppointmentStatus,
    pub patient_id: String,
    pub patient_name: String,
    pub email: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: Option<String>,
    pub hospital_name: Option<String>,
    pub doctor_name: Option<String>,
    pub specialization: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentSource {
    PatientRequest,
    AdminDirect,
}

impl fmt::Display for AppointmentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentSource::PatientRequest => write!(f, "patient_request"),
            AppointmentSource::AdminDirect => write!(f, "admin_direct"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Completed,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Patient-submitted request form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub patient_id: String,
    pub patient_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub reason: String,
}

/// Admin-entered direct booking form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDirectAppointmentRequest {
    pub patient_id: String,
    pub patient_name: String,
    pub email: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub hospital_name: String,
    pub doctor_name: String,
    pub specialization: String,
}
