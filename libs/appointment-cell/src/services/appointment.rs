use chrono::Utc;
use serde_json::json;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::store::StoreClient;

use crate::error::AppointmentError;
use crate::models::{
    Appointment, AppointmentSource, AppointmentStatus, CreateAppointmentRequest,
    CreateDirectAppointmentRequest,
};

const COLLECTION: &str = "appointments";

pub struct AppointmentService {
    store: StoreClient,
}

impl AppointmentService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: StoreClient::new(config),
        }
    }

    /// Persist a patient-submitted request. No capacity check against
    /// availability windows is performed.
    pub async fn create_request(
        &self,
        request: CreateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Creating appointment request for patient: {}", request.patient_id);

        for (field, value) in [
            ("patient_id", &request.patient_id),
            ("patient_name", &request.patient_name),
            ("reason", &request.reason),
        ] {
            if value.trim().is_empty() {
                return Err(AppointmentError::Validation(format!(
                    "{} is required",
                    field
                )));
            }
        }

        let document = json!({
            "source": AppointmentSource::PatientRequest,
            "status": AppointmentStatus::Pending,
            "patient_id": request.patient_id,
            "patient_name": request.patient_name,
            "email": null,
            "date": request.date,
            "time": request.time.format("%H:%M:%S").to_string(),
            "reason": request.reason,
            "hospital_name": null,
            "doctor_name": null,
            "specialization": null,
            "created_at": Utc::now().to_rfc3339(),
            "updated_at": Utc::now().to_rfc3339()
        });

        let stored = self.store.insert(COLLECTION, document).await?;

        let appointment: Appointment = serde_json::from_value(stored)?;
        debug!("Appointment request created with ID: {}", appointment.id);

        Ok(appointment)
    }

    /// Persist an admin-entered, already-scheduled booking.
    pub async fn create_direct(
        &self,
        request: CreateDirectAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Creating direct appointment for patient: {}", request.patient_id);

        for (field, value) in [
            ("patient_id", &request.patient_id),
            ("patient_name", &request.patient_name),
            ("email", &request.email),
            ("hospital_name", &request.hospital_name),
            ("doctor_name", &request.doctor_name),
            ("specialization", &request.specialization),
        ] {
            if value.trim().is_empty() {
                return Err(AppointmentError::Validation(format!(
                    "{} is required",
                    field
                )));
            }
        }

        let document = json!({
            "source": AppointmentSource::AdminDirect,
            "status": AppointmentStatus::Pending,
            "patient_id": request.patient_id,
            "patient_name": request.patient_name,
            "email": request.email,
            "date": request.date,
            "time": request.time.format("%H:%M:%S").to_string(),
            "reason": null,
            "hospital_name": request.hospital_name,
            "doctor_name": request.doctor_name,
            "specialization": request.specialization,
            "created_at": Utc::now().to_rfc3339(),
            "updated_at": Utc::now().to_rfc3339()
        });

        let stored = self.store.insert(COLLECTION, document).await?;

        let appointment: Appointment = serde_json::from_value(stored)?;
        Ok(appointment)
    }

    /// All appointments in natural insertion order.
    pub async fn list_all(&self) -> Result<Vec<Appointment>, AppointmentError> {
        let result = self.store.find(COLLECTION, "").await?;

        let appointments = result
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<Appointment>, _>>()?;

        Ok(appointments)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Appointment, AppointmentError> {
        let result = self
            .store
            .find_by_id(COLLECTION, id)
            .await?
            .ok_or(AppointmentError::NotFound)?;

        let appointment: Appointment = serde_json::from_value(result)?;
        Ok(appointment)
    }

    /// Transition `pending -> completed` as one conditional write. The
    /// status filter makes the store reject the patch when the record is
    /// no longer pending, so there is no read-modify-write window.
    pub async fn complete(&self, id: &str) -> Result<Appointment, AppointmentError> {
        debug!("Completing appointment: {}", id);

        let filter = format!("id=eq.{}&status=eq.{}", id, AppointmentStatus::Pending);
        let patch = json!({
            "status": AppointmentStatus::Completed,
            "updated_at": Utc::now().to_rfc3339()
        });

        let result = self.store.update(COLLECTION, &filter, patch).await?;

        match result.into_iter().next() {
            Some(updated) => {
                let appointment: Appointment = serde_json::from_value(updated)?;
                Ok(appointment)
            }
            // Nothing matched: either the id is unknown or the record has
            // already left the pending state.
            None => match self.store.find_by_id(COLLECTION, id).await? {
                Some(_) => Err(AppointmentError::AlreadyCompleted),
                None => Err(AppointmentError::NotFound),
            },
        }
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<Appointment, AppointmentError> {
        debug!("Deleting appointment: {}", id);

        let deleted = self
            .store
            .delete_by_id(COLLECTION, id)
            .await?
            .ok_or(AppointmentError::NotFound)?;

        let appointment: Appointment = serde_json::from_value(deleted)?;
        Ok(appointment)
    }
}
