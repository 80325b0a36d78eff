use assert_matches::assert_matches;

use doctor_cell::{AvailabilityService, DoctorError, DoctorService};
use shared_utils::test_utils::{TestConfig, TestDoctor};

#[tokio::test]
async fn test_create_doctor_keeps_registration_order() {
    let db = TestConfig::default().database();
    let service = DoctorService::new(&db);

    for id in [3, 1, 2] {
        service.create_doctor(TestDoctor::with_id(id)).await.unwrap();
    }

    let ids: Vec<i64> = service.list_doctors().await.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[tokio::test]
async fn test_update_doctor_replaces_all_fields() {
    let db = TestConfig::default().database();
    let service = DoctorService::new(&db);
    service.create_doctor(TestDoctor::with_id(1)).await.unwrap();

    let mut replacement = TestDoctor::unavailable(1);
    replacement.specialization = "Dermatology".to_string();
    service.update_doctor(1, replacement.clone()).await.unwrap();

    assert_eq!(service.get_doctor(1).await.unwrap(), replacement);
}

#[tokio::test]
async fn test_missing_doctor_is_not_found() {
    let db = TestConfig::default().database();
    let service = DoctorService::new(&db);
    let availability = AvailabilityService::new(&db);

    assert_matches!(service.get_doctor(42).await, Err(DoctorError::NotFound(42)));
    assert_matches!(service.delete_doctor(42).await, Err(DoctorError::NotFound(42)));
    assert_matches!(
        availability.set_availability(42, false).await,
        Err(DoctorError::NotFound(42))
    );
}

#[tokio::test]
async fn test_set_availability_overwrites_flag() {
    let db = TestConfig::default().database();
    let service = DoctorService::new(&db);
    let availability = AvailabilityService::new(&db);
    service.create_doctor(TestDoctor::with_id(1)).await.unwrap();
    service.create_doctor(TestDoctor::with_id(2)).await.unwrap();

    let updated = availability.set_availability(1, false).await.unwrap();
    assert!(!updated.is_available);
    assert!(!service.get_doctor(1).await.unwrap().is_available);

    let free: Vec<i64> = availability.available_doctors().await.iter().map(|d| d.id).collect();
    assert_eq!(free, vec![2]);

    availability.set_availability(1, true).await.unwrap();
    assert!(service.get_doctor(1).await.unwrap().is_available);
}

#[tokio::test]
async fn test_duplicate_doctor_rejected_when_strict() {
    let db = TestConfig::strict().database();
    let service = DoctorService::new(&db);
    service.create_doctor(TestDoctor::with_id(1)).await.unwrap();
    service.create_doctor(TestDoctor::with_id(2)).await.unwrap();

    assert_matches!(
        service.create_doctor(TestDoctor::with_id(1)).await,
        Err(DoctorError::AlreadyExists(1))
    );
    assert_matches!(
        service.update_doctor(2, TestDoctor::with_id(1)).await,
        Err(DoctorError::AlreadyExists(1))
    );
}
