//! Tests for pet HTTP handlers.

use super::*;
use crate::domain::Owner;
use crate::domain::ports::{
    FixtureOwnerRepository, MockOwnerRepository, MockPetRepository, OwnerRepository, PetRepository,
};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::NaiveDate;
use mockall::predicate::eq;
use serde_json::Value;
use std::sync::Arc;

// Pet lookups never touch the owner port, so those tests hand it the
// fixture.
fn test_app(
    owners: impl OwnerRepository + 'static,
    pets: impl PetRepository + 'static,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(owners), Arc::new(pets));
    App::new()
        .app_data(web::Data::new(state))
        .service(list_pet_types)
        .service(get_pet)
        .service(create_pet)
        .service(update_pet)
}

fn dog() -> PetType {
    PetType {
        id: 6,
        name: "dog".to_owned(),
    }
}

fn george() -> Owner {
    let mut owner = Owner::new("George", "Bush", "110 W. Liberty St.", "Madison", "6085551023");
    owner.id = Some(2);
    owner
}

/// Basil, persisted as pet 2 under owner 2.
fn basil() -> Pet {
    let mut pet = Pet::new("Basil", NaiveDate::from_ymd_opt(2023, 1, 1), dog());
    pet.id = Some(2);
    george().add_pet(pet)
}

#[actix_web::test]
async fn get_pet_returns_pet_with_nested_type() {
    let mut pets = MockPetRepository::new();
    pets.expect_find_by_id()
        .with(eq(2))
        .returning(|_| Ok(Some(basil())));

    let app = actix_test::init_service(test_app(FixtureOwnerRepository, pets)).await;
    let request = actix_test::TestRequest::get()
        .uri("/owners/2/pets/2")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("id").and_then(Value::as_i64), Some(2));
    assert_eq!(body.get("name").and_then(Value::as_str), Some("Basil"));
    assert_eq!(body.pointer("/type/id").and_then(Value::as_i64), Some(6));
    assert_eq!(
        body.get("birthDate").and_then(Value::as_str),
        Some("2023-01-01")
    );
}

#[actix_web::test]
async fn get_pet_signals_not_found_for_absent_id() {
    let mut pets = MockPetRepository::new();
    pets.expect_find_by_id()
        .with(eq(999))
        .returning(|_| Ok(None));

    let app = actix_test::init_service(test_app(FixtureOwnerRepository, pets)).await;
    let request = actix_test::TestRequest::get()
        .uri("/owners/2/pets/999")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn list_pet_types_returns_reference_data() {
    let mut pets = MockPetRepository::new();
    pets.expect_find_pet_types().returning(|| {
        Ok(vec![
            PetType {
                id: 1,
                name: "cat".to_owned(),
            },
            PetType {
                id: 2,
                name: "dog".to_owned(),
            },
        ])
    });

    let app = actix_test::init_service(test_app(FixtureOwnerRepository, pets)).await;
    let request = actix_test::TestRequest::get().uri("/petTypes").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let items = body.as_array().expect("array body");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].get("name").and_then(Value::as_str), Some("cat"));
    assert_eq!(items[1].get("id").and_then(Value::as_i64), Some(2));
}

#[actix_web::test]
async fn create_pet_attaches_the_pet_to_its_owner() {
    let mut owners = MockOwnerRepository::new();
    owners
        .expect_find_by_id()
        .with(eq(1))
        .returning(|_| {
            let mut owner = Owner::new("John", "Doe", "123 Main St", "Springfield", "1234567890");
            owner.id = Some(1);
            Ok(Some(owner))
        });
    let mut pets = MockPetRepository::new();
    pets.expect_find_pet_type_by_id()
        .with(eq(6))
        .returning(|_| Ok(Some(dog())));
    pets.expect_save()
        .times(1)
        .withf(|pet| pet.id.is_none() && pet.owner() == Some(1) && pet.name == "Max")
        .returning(|mut pet| {
            pet.id = Some(8);
            Ok(pet)
        });

    let app = actix_test::init_service(test_app(owners, pets)).await;
    let request = actix_test::TestRequest::post()
        .uri("/owners/1/pets")
        .set_json(serde_json::json!({
            "name": "Max",
            "birthDate": "2021-04-17",
            "typeId": 6
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("id").and_then(Value::as_i64), Some(8));
    assert_eq!(body.get("name").and_then(Value::as_str), Some("Max"));
    assert_eq!(
        body.pointer("/type/name").and_then(Value::as_str),
        Some("dog")
    );
}

#[actix_web::test]
async fn create_pet_signals_not_found_when_owner_is_absent() {
    let mut owners = MockOwnerRepository::new();
    owners
        .expect_find_by_id()
        .with(eq(999))
        .returning(|_| Ok(None));
    let mut pets = MockPetRepository::new();
    pets.expect_save().times(0);

    let app = actix_test::init_service(test_app(owners, pets)).await;
    let request = actix_test::TestRequest::post()
        .uri("/owners/999/pets")
        .set_json(serde_json::json!({
            "name": "Max",
            "birthDate": "2021-04-17",
            "typeId": 6
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.pointer("/details/ownerId").and_then(Value::as_i64),
        Some(999)
    );
}

#[actix_web::test]
async fn create_pet_signals_not_found_when_type_does_not_resolve() {
    let mut owners = MockOwnerRepository::new();
    owners.expect_find_by_id().with(eq(1)).returning(|_| {
        let mut owner = Owner::new("John", "Doe", "123 Main St", "Springfield", "1234567890");
        owner.id = Some(1);
        Ok(Some(owner))
    });
    let mut pets = MockPetRepository::new();
    pets.expect_find_pet_type_by_id()
        .with(eq(99))
        .returning(|_| Ok(None));
    pets.expect_save().times(0);

    let app = actix_test::init_service(test_app(owners, pets)).await;
    let request = actix_test::TestRequest::post()
        .uri("/owners/1/pets")
        .set_json(serde_json::json!({
            "name": "Max",
            "typeId": 99
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.pointer("/details/typeId").and_then(Value::as_i64),
        Some(99)
    );
}

#[actix_web::test]
async fn create_pet_rejects_malformed_birth_dates() {
    let mut owners = MockOwnerRepository::new();
    owners.expect_find_by_id().with(eq(1)).returning(|_| {
        let mut owner = Owner::new("John", "Doe", "123 Main St", "Springfield", "1234567890");
        owner.id = Some(1);
        Ok(Some(owner))
    });
    let mut pets = MockPetRepository::new();
    pets.expect_save().times(0);

    let app = actix_test::init_service(test_app(owners, pets)).await;
    let request = actix_test::TestRequest::post()
        .uri("/owners/1/pets")
        .set_json(serde_json::json!({
            "name": "Max",
            "birthDate": "17/04/2021",
            "typeId": 6
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn update_pet_mutates_fields_in_place_and_saves_once() {
    let mut pets = MockPetRepository::new();
    pets.expect_find_by_id()
        .with(eq(2))
        .returning(|_| Ok(Some(basil())));
    pets.expect_find_pet_type_by_id()
        .with(eq(6))
        .returning(|_| Ok(Some(dog())));
    pets.expect_save()
        .times(1)
        .withf(|pet| {
            pet.id == Some(2)
                && pet.owner() == Some(2)
                && pet.name == "UpdatedBasil"
                && pet.birth_date == NaiveDate::from_ymd_opt(2023, 2, 2)
        })
        .returning(Ok);

    let app = actix_test::init_service(test_app(FixtureOwnerRepository, pets)).await;
    let request = actix_test::TestRequest::put()
        .uri("/owners/2/pets/2")
        .set_json(serde_json::json!({
            "id": 2,
            "name": "UpdatedBasil",
            "birthDate": "2023-02-02",
            "typeId": 6
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn update_pet_on_absent_id_is_not_found_and_never_saves() {
    let mut pets = MockPetRepository::new();
    pets.expect_find_by_id()
        .with(eq(999))
        .returning(|_| Ok(None));
    pets.expect_save().times(0);

    let app = actix_test::init_service(test_app(FixtureOwnerRepository, pets)).await;
    let request = actix_test::TestRequest::put()
        .uri("/owners/2/pets/999")
        .set_json(serde_json::json!({
            "name": "Ghost",
            "typeId": 6
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn update_pet_signals_not_found_when_type_does_not_resolve() {
    let mut pets = MockPetRepository::new();
    pets.expect_find_by_id()
        .with(eq(2))
        .returning(|_| Ok(Some(basil())));
    pets.expect_find_pet_type_by_id()
        .with(eq(77))
        .returning(|_| Ok(None));
    pets.expect_save().times(0);

    let app = actix_test::init_service(test_app(FixtureOwnerRepository, pets)).await;
    let request = actix_test::TestRequest::put()
        .uri("/owners/2/pets/2")
        .set_json(serde_json::json!({
            "name": "Basil",
            "typeId": 77
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
