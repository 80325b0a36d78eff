use serde::{Deserialize, Serialize};

/// A registered patient. The id is assigned by the caller, not the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub sex: String,
    pub weight: f64,
    pub height: f64,
    pub phone: String,
}
