use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_models::{Appointment, Doctor, Patient};

use crate::store::RecordStore;

/// All clinic state for the lifetime of the process.
#[derive(Debug)]
pub struct ClinicData {
    pub patients: RecordStore<Patient>,
    pub doctors: RecordStore<Doctor>,
    pub appointments: RecordStore<Appointment>,
    last_appointment_id: i64,
}

impl ClinicData {
    pub fn new(reject_duplicate_ids: bool) -> Self {
        let (patients, doctors) = if reject_duplicate_ids {
            (RecordStore::with_unique_ids(), RecordStore::with_unique_ids())
        } else {
            (RecordStore::new(), RecordStore::new())
        };

        Self {
            patients,
            doctors,
            appointments: RecordStore::new(),
            last_appointment_id: 0,
        }
    }

    /// Allocates the next appointment id. Ids are never handed out twice,
    /// even after appointments are removed.
    pub fn next_appointment_id(&mut self) -> i64 {
        self.last_appointment_id += 1;
        self.last_appointment_id
    }

    fn clear(&mut self) {
        self.patients.clear();
        self.doctors.clear();
        self.appointments.clear();
        self.last_appointment_id = 0;
    }
}

impl Default for ClinicData {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Shared handle to the clinic state.
///
/// Every operation takes this one lock, so a multi-step operation such as
/// booking an appointment is never interleaved with another writer.
#[derive(Debug, Clone, Default)]
pub struct ClinicDatabase {
    inner: Arc<RwLock<ClinicData>>,
}

impl ClinicDatabase {
    pub fn new(data: ClinicData) -> Self {
        Self {
            inner: Arc::new(RwLock::new(data)),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        info!(
            reject_duplicate_ids = config.reject_duplicate_ids,
            "Initialising in-memory clinic database"
        );
        Self::new(ClinicData::new(config.reject_duplicate_ids))
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, ClinicData> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, ClinicData> {
        self.inner.write().await
    }

    /// Drops every patient, doctor and appointment and restarts appointment ids at 1.
    pub async fn reset(&self) {
        debug!("Resetting clinic database");
        self.inner.write().await.clear();
    }
}
