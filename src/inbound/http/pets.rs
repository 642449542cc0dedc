//! Pet HTTP handlers.
//!
//! ```text
//! GET  /petTypes
//! GET  /owners/{owner_id}/pets/{pet_id}
//! POST /owners/{owner_id}/pets
//! PUT  /owners/{owner_id}/pets/{pet_id}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, Pet, PetType};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{
    ApiError, map_owner_repository_error, map_pet_repository_error,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, missing_field_error, parse_optional_birth_date,
};

/// Wire representation of a pet type.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PetTypeBody {
    pub id: i32,
    pub name: String,
}

impl From<PetType> for PetTypeBody {
    fn from(value: PetType) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

/// Request payload for creating or updating a pet.
///
/// An `id` field is tolerated on input and ignored; the path identifies the
/// pet being updated.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetFieldsBody {
    pub id: Option<i32>,
    pub name: Option<String>,
    #[schema(format = "date", example = "2021-04-17")]
    pub birth_date: Option<String>,
    pub type_id: Option<i32>,
}

/// Response payload for a single pet, type nested.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PetResponseBody {
    pub id: Option<i32>,
    pub name: String,
    #[schema(format = "date", example = "2021-04-17")]
    pub birth_date: Option<String>,
    #[serde(rename = "type")]
    pub pet_type: PetTypeBody,
}

impl From<&Pet> for PetResponseBody {
    fn from(value: &Pet) -> Self {
        Self {
            id: value.id,
            name: value.name.clone(),
            birth_date: value
                .birth_date
                .map(|date| date.format("%Y-%m-%d").to_string()),
            pet_type: PetTypeBody::from(value.pet_type.clone()),
        }
    }
}

/// Validated pet fields after parsing the wire payload.
#[derive(Debug)]
struct PetFields {
    name: String,
    birth_date: Option<NaiveDate>,
    type_id: i32,
}

fn parse_pet_fields(payload: PetFieldsBody) -> Result<PetFields, Error> {
    let name = payload
        .name
        .ok_or_else(|| missing_field_error(FieldName::new("name")))?;
    let type_id = payload
        .type_id
        .ok_or_else(|| missing_field_error(FieldName::new("typeId")))?;
    Ok(PetFields {
        name,
        birth_date: parse_optional_birth_date(payload.birth_date, FieldName::new("birthDate"))?,
        type_id,
    })
}

/// Overwrite a pet's mutable fields in place; identifier and owner
/// back-reference survive untouched.
fn apply_pet_fields(pet: &mut Pet, fields: PetFields, pet_type: PetType) {
    pet.name = fields.name;
    pet.birth_date = fields.birth_date;
    pet.pet_type = pet_type;
}

fn pet_not_found(pet_id: i32) -> ApiError {
    ApiError::from(
        Error::not_found(format!("pet {pet_id} not found"))
            .with_details(json!({ "petId": pet_id })),
    )
}

fn owner_not_found(owner_id: i32) -> ApiError {
    ApiError::from(
        Error::not_found(format!("owner {owner_id} not found"))
            .with_details(json!({ "ownerId": owner_id })),
    )
}

fn pet_type_not_found(type_id: i32) -> ApiError {
    ApiError::from(
        Error::not_found(format!("pet type {type_id} not found"))
            .with_details(json!({ "typeId": type_id })),
    )
}

async fn resolve_pet_type(state: &HttpState, type_id: i32) -> Result<PetType, ApiError> {
    state
        .pets
        .find_pet_type_by_id(type_id)
        .await
        .map_err(map_pet_repository_error)?
        .ok_or_else(|| pet_type_not_found(type_id))
}

/// List the pet type reference data.
#[utoipa::path(
    get,
    path = "/petTypes",
    responses(
        (status = 200, description = "Known pet types", body = [PetTypeBody]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["pets"],
    operation_id = "listPetTypes"
)]
#[get("/petTypes")]
pub async fn list_pet_types(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<PetTypeBody>>> {
    let types = state
        .pets
        .find_pet_types()
        .await
        .map_err(map_pet_repository_error)?;
    Ok(web::Json(types.into_iter().map(PetTypeBody::from).collect()))
}

/// Fetch a single pet with its nested type.
#[utoipa::path(
    get,
    path = "/owners/{owner_id}/pets/{pet_id}",
    params(
        ("owner_id" = i32, Path, description = "Owner identifier"),
        ("pet_id" = i32, Path, description = "Pet identifier")
    ),
    responses(
        (status = 200, description = "Pet", body = PetResponseBody),
        (status = 404, description = "No such pet", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["pets"],
    operation_id = "getPet"
)]
#[get("/owners/{owner_id}/pets/{pet_id}")]
pub async fn get_pet(
    state: web::Data<HttpState>,
    path: web::Path<(i32, i32)>,
) -> ApiResult<web::Json<PetResponseBody>> {
    // Lookup is by pet id alone; the routed owner id is not cross-checked.
    let (_owner_id, pet_id) = path.into_inner();
    let pet = state
        .pets
        .find_by_id(pet_id)
        .await
        .map_err(map_pet_repository_error)?
        .ok_or_else(|| pet_not_found(pet_id))?;
    Ok(web::Json(PetResponseBody::from(&pet)))
}

/// Create a pet under an owner.
#[utoipa::path(
    post,
    path = "/owners/{owner_id}/pets",
    params(("owner_id" = i32, Path, description = "Owner identifier")),
    request_body = PetFieldsBody,
    responses(
        (status = 201, description = "Pet created", body = PetResponseBody),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "No such owner or pet type", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["pets"],
    operation_id = "createPet"
)]
#[post("/owners/{owner_id}/pets")]
pub async fn create_pet(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<PetFieldsBody>,
) -> ApiResult<HttpResponse> {
    let owner_id = path.into_inner();
    let mut owner = state
        .owners
        .find_by_id(owner_id)
        .await
        .map_err(map_owner_repository_error)?
        .ok_or_else(|| owner_not_found(owner_id))?;

    let fields = parse_pet_fields(payload.into_inner())?;
    let pet_type = resolve_pet_type(&state, fields.type_id).await?;

    let pet = owner.add_pet(Pet::new(fields.name, fields.birth_date, pet_type));
    let saved = state
        .pets
        .save(pet)
        .await
        .map_err(map_pet_repository_error)?;

    Ok(HttpResponse::Created().json(PetResponseBody::from(&saved)))
}

/// Update a pet's mutable fields in place.
#[utoipa::path(
    put,
    path = "/owners/{owner_id}/pets/{pet_id}",
    params(
        ("owner_id" = i32, Path, description = "Owner identifier"),
        ("pet_id" = i32, Path, description = "Pet identifier")
    ),
    request_body = PetFieldsBody,
    responses(
        (status = 204, description = "Pet updated"),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "No such pet or pet type", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["pets"],
    operation_id = "updatePet"
)]
#[put("/owners/{owner_id}/pets/{pet_id}")]
pub async fn update_pet(
    state: web::Data<HttpState>,
    path: web::Path<(i32, i32)>,
    payload: web::Json<PetFieldsBody>,
) -> ApiResult<HttpResponse> {
    // Lookup is by pet id alone; the routed owner id is not cross-checked.
    let (_owner_id, pet_id) = path.into_inner();
    let mut pet = state
        .pets
        .find_by_id(pet_id)
        .await
        .map_err(map_pet_repository_error)?
        .ok_or_else(|| pet_not_found(pet_id))?;

    let fields = parse_pet_fields(payload.into_inner())?;
    let pet_type = resolve_pet_type(&state, fields.type_id).await?;

    apply_pet_fields(&mut pet, fields, pet_type);
    state
        .pets
        .save(pet)
        .await
        .map_err(map_pet_repository_error)?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "pets_tests.rs"]
mod tests;
