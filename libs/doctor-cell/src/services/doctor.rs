use tracing::{debug, info};

use shared_database::ClinicDatabase;

use crate::models::{Doctor, DoctorError};

pub struct DoctorService {
    db: ClinicDatabase,
}

impl DoctorService {
    pub fn new(db: &ClinicDatabase) -> Self {
        Self { db: db.clone() }
    }

    /// Register a doctor. Registration order decides who gets assigned first.
    pub async fn create_doctor(&self, doctor: Doctor) -> Result<Doctor, DoctorError> {
        debug!("Registering doctor: {}", doctor.id);

        let mut data = self.db.write().await;
        let created = data.doctors.insert(doctor)?;

        info!(
            doctor_id = created.id,
            is_available = created.is_available,
            "Doctor registered"
        );
        Ok(created)
    }

    pub async fn list_doctors(&self) -> Vec<Doctor> {
        self.db.read().await.doctors.list_all()
    }

    pub async fn get_doctor(&self, doctor_id: i64) -> Result<Doctor, DoctorError> {
        debug!("Fetching doctor: {}", doctor_id);

        Ok(self.db.read().await.doctors.get(doctor_id)?)
    }

    /// Full replace, including the availability flag.
    pub async fn update_doctor(&self, doctor_id: i64, doctor: Doctor) -> Result<Doctor, DoctorError> {
        debug!("Updating doctor: {}", doctor_id);

        let mut data = self.db.write().await;
        let updated = data.doctors.replace(doctor_id, doctor)?;

        info!(doctor_id, "Doctor updated");
        Ok(updated)
    }

    pub async fn delete_doctor(&self, doctor_id: i64) -> Result<(), DoctorError> {
        debug!("Deleting doctor: {}", doctor_id);

        let mut data = self.db.write().await;
        data.doctors.remove(doctor_id)?;

        info!(doctor_id, "Doctor deleted");
        Ok(())
    }
}
