use std::sync::Arc;

use assetledger_core::assets::{
    AssetRepository, AssetService, AssetServiceTrait, AssetUpdate, NewAsset,
};
use assetledger_core::db::DbPool;
use assetledger_core::persons::{NewPerson, Person, PersonRepository, PersonService, PersonServiceTrait};
use assetledger_core::Error;
use chrono::NaiveDate;

mod common;

fn services(pool: Arc<DbPool>) -> (PersonService, AssetService) {
    let persons = PersonService::new(Arc::new(PersonRepository::new(pool.clone())));
    let assets = AssetService::new(Arc::new(AssetRepository::new(pool)));
    (persons, assets)
}

fn create_person(service: &PersonService, name: &str, email: &str) -> Person {
    service
        .create_person(NewPerson {
            name: name.to_string(),
            email: email.to_string(),
            phone: None,
        })
        .unwrap()
}

fn new_asset(person_id: i32, name: &str, value: f64) -> NewAsset {
    NewAsset {
        person_id,
        name: name.to_string(),
        description: None,
        value,
        acquired_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    }
}

#[test]
fn create_then_get_carries_owner_name() {
    let (_tmp, pool) = common::setup_pool();
    let (persons, assets) = services(pool);

    let alice = create_person(&persons, "Alice", "alice@example.com");
    let created = assets.create_asset(new_asset(alice.id, "Laptop", 1000.0)).unwrap();

    assert!(created.id >= 1);
    assert_eq!(created.person_id, alice.id);
    assert_eq!(created.person_name, "Alice");
    assert_eq!(created.value, 1000.0);

    let fetched = assets.get_asset(created.id).unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn create_with_unknown_owner_fails_and_persists_nothing() {
    let (_tmp, pool) = common::setup_pool();
    let (_persons, assets) = services(pool);

    let err = assets.create_asset(new_asset(42, "Laptop", 1000.0)).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(assets.list_assets().unwrap().is_empty());
}

#[test]
fn deleting_a_person_cascades_to_their_assets() {
    let (_tmp, pool) = common::setup_pool();
    let (persons, assets) = services(pool);

    let alice = create_person(&persons, "Alice", "alice@example.com");
    let bob = create_person(&persons, "Bob", "bob@example.com");
    let alices = assets.create_asset(new_asset(alice.id, "Laptop", 1000.0)).unwrap();
    let bobs = assets.create_asset(new_asset(bob.id, "Bike", 250.0)).unwrap();

    persons.delete_person(alice.id).unwrap();

    let err = assets.get_asset(alices.id).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));

    let remaining = assets.list_assets().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, bobs.id);
}

#[test]
fn reassigning_the_owner_changes_person_name_on_next_read() {
    let (_tmp, pool) = common::setup_pool();
    let (persons, assets) = services(pool);

    let alice = create_person(&persons, "Alice", "alice@example.com");
    let bob = create_person(&persons, "Bob", "bob@example.com");
    let asset = assets.create_asset(new_asset(alice.id, "Laptop", 1000.0)).unwrap();
    assert_eq!(asset.person_name, "Alice");

    let updated = assets
        .update_asset(
            asset.id,
            AssetUpdate {
                person_id: bob.id,
                name: asset.name.clone(),
                description: Some("handed down".to_string()),
                value: 800.0,
                acquired_date: asset.acquired_date,
            },
        )
        .unwrap();

    assert_eq!(updated.person_id, bob.id);
    assert_eq!(updated.person_name, "Bob");
    assert_eq!(updated.value, 800.0);
    assert_eq!(updated.description.as_deref(), Some("handed down"));

    let fetched = assets.get_asset(asset.id).unwrap();
    assert_eq!(fetched.person_name, "Bob");
}

#[test]
fn update_to_unknown_owner_is_not_found() {
    let (_tmp, pool) = common::setup_pool();
    let (persons, assets) = services(pool);

    let alice = create_person(&persons, "Alice", "alice@example.com");
    let asset = assets.create_asset(new_asset(alice.id, "Laptop", 1000.0)).unwrap();

    let err = assets
        .update_asset(
            asset.id,
            AssetUpdate {
                person_id: 42,
                name: asset.name.clone(),
                description: None,
                value: asset.value,
                acquired_date: asset.acquired_date,
            },
        )
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn list_by_person_only_returns_their_assets() {
    let (_tmp, pool) = common::setup_pool();
    let (persons, assets) = services(pool);

    let alice = create_person(&persons, "Alice", "alice@example.com");
    let bob = create_person(&persons, "Bob", "bob@example.com");
    assets.create_asset(new_asset(alice.id, "Laptop", 1000.0)).unwrap();
    assets.create_asset(new_asset(alice.id, "Camera", 450.0)).unwrap();
    assets.create_asset(new_asset(bob.id, "Bike", 250.0)).unwrap();

    let alices = assets.list_assets_by_person(alice.id).unwrap();
    assert_eq!(alices.len(), 2);
    assert!(alices.iter().all(|a| a.person_id == alice.id));

    let bobs = assets.list_assets_by_person(bob.id).unwrap();
    assert_eq!(bobs.len(), 1);
    assert_eq!(bobs[0].name, "Bike");
}

#[test]
fn list_on_empty_store_returns_empty_vec() {
    let (_tmp, pool) = common::setup_pool();
    let (_persons, assets) = services(pool);

    assert!(assets.list_assets().unwrap().is_empty());
}

#[test]
fn negative_or_non_finite_value_is_rejected() {
    let (_tmp, pool) = common::setup_pool();
    let (persons, assets) = services(pool);

    let alice = create_person(&persons, "Alice", "alice@example.com");

    let err = assets
        .create_asset(new_asset(alice.id, "Laptop", -1.0))
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let err = assets
        .create_asset(new_asset(alice.id, "Laptop", f64::NAN))
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    assert!(assets.list_assets().unwrap().is_empty());
}

#[test]
fn delete_missing_asset_is_not_found() {
    let (_tmp, pool) = common::setup_pool();
    let (_persons, assets) = services(pool);

    let err = assets.delete_asset(42).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}
