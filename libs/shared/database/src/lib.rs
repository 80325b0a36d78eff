pub mod clinic;
pub mod store;

pub use clinic::{ClinicData, ClinicDatabase};
pub use store::{Record, RecordStore};
