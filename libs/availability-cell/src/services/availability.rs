use chrono::Utc;
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_database::store::StoreClient;

use crate::error::AvailabilityError;
use crate::models::{CreateAvailabilityRequest, DoctorAvailability, UpdateAvailabilityRequest};

const COLLECTION: &str = "doctor_availability";

pub struct AvailabilityService {
    store: StoreClient,
}

impl AvailabilityService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            store: StoreClient::new(config),
        }
    }

    /// Create a new availability window and return the stored record,
    /// including the generated id.
    ///
    /// Overlapping windows for the same doctor and date are accepted;
    /// there is no conflict detection.
    pub async fn create(
        &self,
        request: CreateAvailabilityRequest,
    ) -> Result<DoctorAvailability, AvailabilityError> {
        debug!("Creating availability for doctor: {}", request.doctor_id);

        for (field, value) in [
            ("doctor_id", &request.doctor_id),
            ("doctor_name", &request.doctor_name),
            ("specialization", &request.specialization),
        ] {
            if value.trim().is_empty() {
                return Err(AvailabilityError::Validation(format!(
                    "{} is required",
                    field
                )));
            }
        }

        let document = json!({
            "doctor_id": request.doctor_id,
            "doctor_name": request.doctor_name,
            "specialization": request.specialization,
            "date": request.date,
            "start_time": request.start_time.format("%H:%M:%S").to_string(),
            "end_time": request.end_time.format("%H:%M:%S").to_string(),
            "is_available": request.is_available.unwrap_or(true),
            "created_at": Utc::now().to_rfc3339(),
            "updated_at": Utc::now().to_rfc3339()
        });

        let stored = self.store.insert(COLLECTION, document).await?;

        let availability: DoctorAvailability = serde_json::from_value(stored)?;
        debug!("Availability created with ID: {}", availability.id);

        Ok(availability)
    }

    /// All availability windows, newest date first, earlier start times
    /// first within a date. No pagination.
    pub async fn list_all(&self) -> Result<Vec<DoctorAvailability>, AvailabilityError> {
        let result = self
            .store
            .find(COLLECTION, "order=date.desc,start_time.asc")
            .await?;

        let availabilities = result
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<DoctorAvailability>, _>>()?;

        Ok(availabilities)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<DoctorAvailability, AvailabilityError> {
        let result = self
            .store
            .find_by_id(COLLECTION, id)
            .await?
            .ok_or(AvailabilityError::NotFound)?;

        let availability: DoctorAvailability = serde_json::from_value(result)?;
        Ok(availability)
    }

    /// Patch the provided fields; unpatched fields keep their values.
    pub async fn update(
        &self,
        id: &str,
        request: UpdateAvailabilityRequest,
    ) -> Result<DoctorAvailability, AvailabilityError> {
        debug!("Updating availability: {}", id);

        let mut patch = serde_json::Map::new();

        if let Some(doctor_name) = request.doctor_name {
            patch.insert("doctor_name".to_string(), json!(doctor_name));
        }
        if let Some(specialization) = request.specialization {
            patch.insert("specialization".to_string(), json!(specialization));
        }
        if let Some(date) = request.date {
            patch.insert("date".to_string(), json!(date));
        }
        if let Some(start_time) = request.start_time {
            patch.insert(
                "start_time".to_string(),
                json!(start_time.format("%H:%M:%S").to_string()),
            );
        }
        if let Some(end_time) = request.end_time {
            patch.insert(
                "end_time".to_string(),
                json!(end_time.format("%H:%M:%S").to_string()),
            );
        }
        if let Some(is_available) = request.is_available {
            patch.insert("is_available".to_string(), json!(is_available));
        }

        patch.insert("updated_at".to_string(), json!(Utc::now().to_rfc3339()));

        let updated = self
            .store
            .update_by_id(COLLECTION, id, Value::Object(patch))
            .await?
            .ok_or(AvailabilityError::NotFound)?;

        let availability: DoctorAvailability = serde_json::from_value(updated)?;
        Ok(availability)
    }

    /// Physical delete. No cascade to appointment records.
    pub async fn delete(&self, id: &str) -> Result<DoctorAvailability, AvailabilityError> {
        debug!("Deleting availability: {}", id);

        let deleted = self
            .store
            .delete_by_id(COLLECTION, id)
            .await?
            .ok_or(AvailabilityError::NotFound)?;

        let availability: DoctorAvailability = serde_json::from_value(deleted)?;
        Ok(availability)
    }
}
