use std::sync::Arc;

use assetledger_core::persons::{
    NewPerson, PersonRepository, PersonService, PersonServiceTrait, PersonUpdate,
};
use assetledger_core::Error;

mod common;

fn person_service(pool: Arc<assetledger_core::db::DbPool>) -> PersonService {
    PersonService::new(Arc::new(PersonRepository::new(pool)))
}

fn new_person(name: &str, email: &str, phone: Option<&str>) -> NewPerson {
    NewPerson {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.map(str::to_string),
    }
}

#[test]
fn create_then_get_returns_identical_fields() {
    let (_tmp, pool) = common::setup_pool();
    let service = person_service(pool);

    let created = service
        .create_person(new_person("Alice", "alice@example.com", Some("555-0100")))
        .unwrap();

    assert!(created.id >= 1);
    assert_eq!(created.name, "Alice");
    assert_eq!(created.email, "alice@example.com");
    assert_eq!(created.phone.as_deref(), Some("555-0100"));

    let fetched = service.get_person(created.id).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn duplicate_email_is_a_conflict_and_first_row_survives() {
    let (_tmp, pool) = common::setup_pool();
    let service = person_service(pool);

    let first = service
        .create_person(new_person("Alice", "alice@example.com", None))
        .unwrap();

    let err = service
        .create_person(new_person("Impostor", "alice@example.com", None))
        .unwrap_err();
    assert!(matches!(err, Error::ConstraintViolation(_)));

    let fetched = service.get_person(first.id).unwrap();
    assert_eq!(fetched.name, "Alice");
    assert_eq!(service.list_persons().unwrap().len(), 1);
}

#[test]
fn list_on_empty_store_returns_empty_vec() {
    let (_tmp, pool) = common::setup_pool();
    let service = person_service(pool);

    assert!(service.list_persons().unwrap().is_empty());
}

#[test]
fn get_missing_person_is_not_found() {
    let (_tmp, pool) = common::setup_pool();
    let service = person_service(pool);

    let err = service.get_person(42).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn update_replaces_all_mutable_fields() {
    let (_tmp, pool) = common::setup_pool();
    let service = person_service(pool);

    let created = service
        .create_person(new_person("Alice", "alice@example.com", Some("555-0100")))
        .unwrap();

    let updated = service
        .update_person(
            created.id,
            PersonUpdate {
                name: "Alice Smith".to_string(),
                email: "alice.smith@example.com".to_string(),
                phone: None,
            },
        )
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Alice Smith");
    assert_eq!(updated.email, "alice.smith@example.com");
    // A missing phone clears the stored value
    assert_eq!(updated.phone, None);
    // Creation timestamp is immutable
    assert_eq!(updated.created_at, created.created_at);
}

#[test]
fn update_missing_person_is_not_found() {
    let (_tmp, pool) = common::setup_pool();
    let service = person_service(pool);

    let err = service
        .update_person(
            42,
            PersonUpdate {
                name: "Ghost".to_string(),
                email: "ghost@example.com".to_string(),
                phone: None,
            },
        )
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn update_to_taken_email_is_a_conflict() {
    let (_tmp, pool) = common::setup_pool();
    let service = person_service(pool);

    service
        .create_person(new_person("Alice", "alice@example.com", None))
        .unwrap();
    let bob = service
        .create_person(new_person("Bob", "bob@example.com", None))
        .unwrap();

    let err = service
        .update_person(
            bob.id,
            PersonUpdate {
                name: "Bob".to_string(),
                email: "alice@example.com".to_string(),
                phone: None,
            },
        )
        .unwrap_err();
    assert!(matches!(err, Error::ConstraintViolation(_)));
}

#[test]
fn delete_missing_person_is_not_found() {
    let (_tmp, pool) = common::setup_pool();
    let service = person_service(pool);

    let err = service.delete_person(42).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn empty_name_or_email_is_rejected() {
    let (_tmp, pool) = common::setup_pool();
    let service = person_service(pool);

    let err = service
        .create_person(new_person("  ", "alice@example.com", None))
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = service
        .create_person(new_person("Alice", "", None))
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    assert!(service.list_persons().unwrap().is_empty());
}
