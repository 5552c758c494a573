//! Integration tests for the procedure service
//!
//! Runs the service against in-memory stores. Procedures reference a doctor,
//! so these tests cover the reference check on create and update alongside
//! the usual CRUD cycle.

mod common;

use common::{sample_doctor, sample_procedure, services};
use medrec::domain::{MedrecError, Procedure};

#[tokio::test]
async fn test_create_then_get_round_trips_all_fields() {
    let (services, _stores) = services();

    services.doctors.create(&sample_doctor()).await.unwrap();
    let created = services
        .procedures
        .create(&sample_procedure())
        .await
        .unwrap();
    assert!(created);

    let fetched = services.procedures.get("P200").await.unwrap();
    assert_eq!(fetched.id, "P200");
    assert_eq!(fetched.name, "Annual physical");
    assert_eq!(fetched.description, "Routine yearly examination");
    assert_eq!(fetched.duration, 30);
    assert_eq!(fetched.doctor_id, "D100");
}

#[tokio::test]
async fn test_create_with_unknown_doctor_writes_nothing() {
    let (services, stores) = services();

    let result = services.procedures.create(&sample_procedure()).await;

    match result {
        Err(MedrecError::InvalidInput { field, reason }) => {
            assert_eq!(field, "doctor_id");
            assert_eq!(reason, "Doctor with ID 'D100' does not exist");
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    assert_eq!(stores.procedures.len(), 0);
}

#[tokio::test]
async fn test_create_duplicate_id_is_rejected() {
    let (services, stores) = services();

    services.doctors.create(&sample_doctor()).await.unwrap();
    services
        .procedures
        .create(&sample_procedure())
        .await
        .unwrap();

    let result = services
        .procedures
        .create(&Procedure::new("P200", "X-Ray", "Chest imaging", 15, "D100"))
        .await;

    match result {
        Err(MedrecError::InvalidInput { field, reason }) => {
            assert_eq!(field, "id");
            assert_eq!(reason, "A procedure with ID 'P200' already exists");
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
    assert_eq!(stores.procedures.len(), 1);
}

#[tokio::test]
async fn test_create_rejects_out_of_range_duration() {
    let (services, stores) = services();

    services.doctors.create(&sample_doctor()).await.unwrap();

    let mut procedure = sample_procedure();
    procedure.duration = 0;
    assert!(matches!(
        services.procedures.create(&procedure).await,
        Err(MedrecError::InvalidInput { .. })
    ));

    procedure.duration = 1441;
    assert!(matches!(
        services.procedures.create(&procedure).await,
        Err(MedrecError::InvalidInput { .. })
    ));

    assert_eq!(stores.procedures.len(), 0);
}

#[tokio::test]
async fn test_create_accepts_duration_boundaries() {
    let (services, _stores) = services();

    services.doctors.create(&sample_doctor()).await.unwrap();

    let mut shortest = sample_procedure();
    shortest.duration = 1;
    assert!(services.procedures.create(&shortest).await.unwrap());

    let mut longest = sample_procedure();
    longest.id = "P201".to_string();
    longest.duration = 1440;
    assert!(services.procedures.create(&longest).await.unwrap());
}

#[tokio::test]
async fn test_get_missing_procedure_is_not_found() {
    let (services, _stores) = services();

    let result = services.procedures.get("P999").await;

    match result {
        Err(MedrecError::NotFound { entity, key }) => {
            assert_eq!(entity, "Procedure");
            assert_eq!(key, "P999");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_changes_the_stored_fields() {
    let (services, _stores) = services();

    services.doctors.create(&sample_doctor()).await.unwrap();
    services
        .procedures
        .create(&sample_procedure())
        .await
        .unwrap();

    let mut longer = sample_procedure();
    longer.duration = 45;
    longer.description = "Extended yearly examination".to_string();
    assert!(services.procedures.update(&longer).await.unwrap());

    let fetched = services.procedures.get("P200").await.unwrap();
    assert_eq!(fetched.duration, 45);
    assert_eq!(fetched.description, "Extended yearly examination");
}

#[tokio::test]
async fn test_update_to_unknown_doctor_is_rejected() {
    let (services, _stores) = services();

    services.doctors.create(&sample_doctor()).await.unwrap();
    services
        .procedures
        .create(&sample_procedure())
        .await
        .unwrap();

    let mut moved = sample_procedure();
    moved.doctor_id = "D999".to_string();
    let result = services.procedures.update(&moved).await;

    match result {
        Err(MedrecError::InvalidInput { field, .. }) => assert_eq!(field, "doctor_id"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    let fetched = services.procedures.get("P200").await.unwrap();
    assert_eq!(fetched.doctor_id, "D100");
}

#[tokio::test]
async fn test_update_missing_procedure_is_not_found() {
    let (services, _stores) = services();

    services.doctors.create(&sample_doctor()).await.unwrap();

    let mut procedure = sample_procedure();
    procedure.id = "P999".to_string();
    let result = services.procedures.update(&procedure).await;

    assert!(matches!(
        result,
        Err(MedrecError::NotFound { entity: "Procedure", .. })
    ));
}

#[tokio::test]
async fn test_delete_removes_the_procedure() {
    let (services, _stores) = services();

    services.doctors.create(&sample_doctor()).await.unwrap();
    services
        .procedures
        .create(&sample_procedure())
        .await
        .unwrap();

    assert!(services.procedures.delete("P200").await.unwrap());
    assert!(!services.procedures.exists("P200").await.unwrap());
}

#[tokio::test]
async fn test_delete_missing_procedure_is_not_found() {
    let (services, _stores) = services();

    let result = services.procedures.delete("P999").await;

    assert!(matches!(
        result,
        Err(MedrecError::NotFound { entity: "Procedure", .. })
    ));
}
