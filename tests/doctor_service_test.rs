//! Integration tests for the doctor service
//!
//! Runs the service against the in-memory store, covering the full create,
//! read, update, delete cycle plus the validation and duplicate-key paths.

mod common;

use common::{sample_doctor, services};
use medrec::domain::{Doctor, MedrecError};

#[tokio::test]
async fn test_create_then_get_round_trips_all_fields() {
    let (services, _stores) = services();

    let created = services.doctors.create(&sample_doctor()).await.unwrap();
    assert!(created);

    let fetched = services.doctors.get("D100").await.unwrap();
    assert_eq!(fetched.id, "D100");
    assert_eq!(fetched.name, "Grace Hopper");
}

#[tokio::test]
async fn test_create_duplicate_id_is_rejected() {
    let (services, stores) = services();

    services.doctors.create(&sample_doctor()).await.unwrap();
    let result = services
        .doctors
        .create(&Doctor::new("D100", "Someone Else"))
        .await;

    match result {
        Err(MedrecError::InvalidInput { field, reason }) => {
            assert_eq!(field, "id");
            assert_eq!(reason, "A doctor with ID 'D100' already exists");
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    assert_eq!(stores.doctors.len(), 1);
}

#[tokio::test]
async fn test_create_invalid_doctor_writes_nothing() {
    let (services, stores) = services();

    let result = services.doctors.create(&Doctor::new("", "Smith")).await;

    assert!(matches!(result, Err(MedrecError::InvalidInput { .. })));
    assert_eq!(stores.doctors.len(), 0);
}

#[tokio::test]
async fn test_get_missing_doctor_is_not_found() {
    let (services, _stores) = services();

    let result = services.doctors.get("ZZZ").await;

    match result {
        Err(MedrecError::NotFound { entity, key }) => {
            assert_eq!(entity, "Doctor");
            assert_eq!(key, "ZZZ");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_returns_every_doctor() {
    let (services, _stores) = services();

    services.doctors.create(&sample_doctor()).await.unwrap();
    services
        .doctors
        .create(&Doctor::new("D101", "John Snow"))
        .await
        .unwrap();

    let all = services.doctors.list().await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn test_list_is_empty_without_records() {
    let (services, _stores) = services();

    let all = services.doctors.list().await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_update_changes_the_stored_name() {
    let (services, _stores) = services();

    services.doctors.create(&sample_doctor()).await.unwrap();
    let updated = services
        .doctors
        .update(&Doctor::new("D100", "Grace Murray Hopper"))
        .await
        .unwrap();
    assert!(updated);

    let fetched = services.doctors.get("D100").await.unwrap();
    assert_eq!(fetched.name, "Grace Murray Hopper");
}

#[tokio::test]
async fn test_update_missing_doctor_is_not_found() {
    let (services, _stores) = services();

    let result = services.doctors.update(&Doctor::new("D999", "Nobody")).await;

    assert!(matches!(
        result,
        Err(MedrecError::NotFound { entity: "Doctor", .. })
    ));
}

#[tokio::test]
async fn test_update_still_validates_fields() {
    let (services, _stores) = services();

    services.doctors.create(&sample_doctor()).await.unwrap();
    let result = services.doctors.update(&Doctor::new("D100", "")).await;

    assert!(matches!(result, Err(MedrecError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_delete_removes_the_doctor() {
    let (services, _stores) = services();

    services.doctors.create(&sample_doctor()).await.unwrap();
    let deleted = services.doctors.delete("D100").await.unwrap();
    assert!(deleted);

    assert!(!services.doctors.exists("D100").await.unwrap());
    assert!(matches!(
        services.doctors.get("D100").await,
        Err(MedrecError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_delete_missing_doctor_is_not_found() {
    let (services, _stores) = services();

    let result = services.doctors.delete("D999").await;

    assert!(matches!(
        result,
        Err(MedrecError::NotFound { entity: "Doctor", .. })
    ));
}

#[tokio::test]
async fn test_storage_outage_surfaces_as_storage_error() {
    let (services, stores) = services();

    stores.doctors.set_failing(true);
    let result = services.doctors.list().await;

    assert!(matches!(result, Err(MedrecError::Storage { .. })));
}
