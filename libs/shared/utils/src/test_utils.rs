use axum::{body::Body, http::Request, response::Response};
use serde_json::Value;

use shared_config::AppConfig;
use shared_database::{ClinicData, ClinicDatabase};
use shared_models::{Doctor, Patient};

pub struct TestConfig {
    pub reject_duplicate_ids: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            reject_duplicate_ids: false,
        }
    }
}

impl TestConfig {
    pub fn strict() -> Self {
        Self {
            reject_duplicate_ids: true,
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            reject_duplicate_ids: self.reject_duplicate_ids,
            ..AppConfig::default()
        }
    }

    /// A fresh, empty database. Each test should build its own.
    pub fn database(&self) -> ClinicDatabase {
        ClinicDatabase::new(ClinicData::new(self.reject_duplicate_ids))
    }
}

pub struct TestPatient;

impl TestPatient {
    pub fn with_id(id: i64) -> Patient {
        Patient {
            id,
            name: format!("Patient {}", id),
            age: 42,
            sex: "M".to_string(),
            weight: 80.2,
            height: 181.0,
            phone: format!("555-01{:02}", id % 100),
        }
    }
}

pub struct TestDoctor;

impl TestDoctor {
    pub fn with_id(id: i64) -> Doctor {
        Doctor {
            id,
            name: format!("Dr. {}", id),
            specialization: "General Practice".to_string(),
            phone: format!("555-02{:02}", id % 100),
            is_available: true,
        }
    }

    pub fn unavailable(id: i64) -> Doctor {
        Doctor {
            is_available: false,
            ..Self::with_id(id)
        }
    }
}

/// Seeds `db` with the given patients and doctors, in order.
pub async fn seed(db: &ClinicDatabase, patients: Vec<Patient>, doctors: Vec<Doctor>) {
    let mut data = db.write().await;
    for patient in patients {
        data.patients.add(patient);
    }
    for doctor in doctors {
        data.doctors.add(doctor);
    }
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Reads the response body as JSON, yielding `Value::Null` for an empty body.
pub async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap()
}
