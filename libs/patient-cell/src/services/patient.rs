use tracing::{debug, info};

use shared_database::ClinicDatabase;

use crate::models::{Patient, PatientError};

pub struct PatientService {
    db: ClinicDatabase,
}

impl PatientService {
    pub fn new(db: &ClinicDatabase) -> Self {
        Self { db: db.clone() }
    }

    pub async fn create_patient(&self, patient: Patient) -> Result<Patient, PatientError> {
        debug!("Registering patient: {}", patient.id);

        let mut data = self.db.write().await;
        let created = data.patients.insert(patient)?;

        info!(patient_id = created.id, "Patient registered");
        Ok(created)
    }

    pub async fn list_patients(&self) -> Vec<Patient> {
        self.db.read().await.patients.list_all()
    }

    pub async fn get_patient(&self, patient_id: i64) -> Result<Patient, PatientError> {
        debug!("Fetching patient: {}", patient_id);

        Ok(self.db.read().await.patients.get(patient_id)?)
    }

    /// Replaces every field of the patient; nothing is merged from the old record.
    pub async fn update_patient(
        &self,
        patient_id: i64,
        patient: Patient,
    ) -> Result<Patient, PatientError> {
        debug!("Updating patient: {}", patient_id);

        let mut data = self.db.write().await;
        let updated = data.patients.replace(patient_id, patient)?;

        info!(patient_id, "Patient updated");
        Ok(updated)
    }

    pub async fn delete_patient(&self, patient_id: i64) -> Result<(), PatientError> {
        debug!("Deleting patient: {}", patient_id);

        let mut data = self.db.write().await;
        data.patients.remove(patient_id)?;

        info!(patient_id, "Patient deleted");
        Ok(())
    }
}
