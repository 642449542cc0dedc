//! Owner HTTP handlers.
//!
//! ```text
//! GET  /owners
//! POST /owners
//! GET  /owners/{owner_id}
//! PUT  /owners/{owner_id}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, Owner};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{ApiError, map_owner_repository_error};
use crate::inbound::http::pets::PetResponseBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, missing_field_error};

/// Request payload carrying an owner's mutable scalar fields.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerFieldsBody {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub telephone: Option<String>,
}

/// Response payload for a single owner, pets sorted by name.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponseBody {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
    pub pets: Vec<PetResponseBody>,
}

impl From<&Owner> for OwnerResponseBody {
    fn from(value: &Owner) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name.clone(),
            last_name: value.last_name.clone(),
            address: value.address.clone(),
            city: value.city.clone(),
            telephone: value.telephone.clone(),
            pets: value.pets().into_iter().map(PetResponseBody::from).collect(),
        }
    }
}

/// Validated owner fields after parsing the wire payload.
#[derive(Debug)]
struct OwnerFields {
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    telephone: String,
}

fn parse_owner_fields(payload: OwnerFieldsBody) -> Result<OwnerFields, Error> {
    let require = |value: Option<String>, name: &'static str| {
        value.ok_or_else(|| missing_field_error(FieldName::new(name)))
    };
    Ok(OwnerFields {
        first_name: require(payload.first_name, "firstName")?,
        last_name: require(payload.last_name, "lastName")?,
        address: require(payload.address, "address")?,
        city: require(payload.city, "city")?,
        telephone: require(payload.telephone, "telephone")?,
    })
}

/// Map validated fields to a fresh, unpersisted owner entity.
fn owner_from_fields(fields: OwnerFields) -> Owner {
    Owner::new(
        fields.first_name,
        fields.last_name,
        fields.address,
        fields.city,
        fields.telephone,
    )
}

/// Overwrite an owner's scalar fields in place; identifier and pet
/// associations survive untouched.
fn apply_owner_fields(owner: &mut Owner, fields: OwnerFields) {
    owner.first_name = fields.first_name;
    owner.last_name = fields.last_name;
    owner.address = fields.address;
    owner.city = fields.city;
    owner.telephone = fields.telephone;
}

fn owner_not_found(owner_id: i32) -> ApiError {
    ApiError::from(
        Error::not_found(format!("owner {owner_id} not found"))
            .with_details(json!({ "ownerId": owner_id })),
    )
}

/// Create a new owner.
#[utoipa::path(
    post,
    path = "/owners",
    request_body = OwnerFieldsBody,
    responses(
        (status = 201, description = "Owner created", body = OwnerResponseBody),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["owners"],
    operation_id = "createOwner"
)]
#[post("/owners")]
pub async fn create_owner(
    state: web::Data<HttpState>,
    payload: web::Json<OwnerFieldsBody>,
) -> ApiResult<HttpResponse> {
    let fields = parse_owner_fields(payload.into_inner())?;
    let owner = owner_from_fields(fields);
    let saved = state
        .owners
        .save(owner)
        .await
        .map_err(map_owner_repository_error)?;
    Ok(HttpResponse::Created().json(OwnerResponseBody::from(&saved)))
}

/// Fetch a single owner with their pets.
#[utoipa::path(
    get,
    path = "/owners/{owner_id}",
    params(("owner_id" = i32, Path, description = "Owner identifier")),
    responses(
        (status = 200, description = "Owner", body = OwnerResponseBody),
        (status = 404, description = "No such owner", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["owners"],
    operation_id = "getOwner"
)]
#[get("/owners/{owner_id}")]
pub async fn get_owner(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<OwnerResponseBody>> {
    let owner_id = path.into_inner();
    let owner = state
        .owners
        .find_by_id(owner_id)
        .await
        .map_err(map_owner_repository_error)?
        .ok_or_else(|| owner_not_found(owner_id))?;
    Ok(web::Json(OwnerResponseBody::from(&owner)))
}

/// Overwrite an existing owner's scalar fields.
#[utoipa::path(
    put,
    path = "/owners/{owner_id}",
    params(("owner_id" = i32, Path, description = "Owner identifier")),
    request_body = OwnerFieldsBody,
    responses(
        (status = 204, description = "Owner updated"),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "No such owner", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["owners"],
    operation_id = "updateOwner"
)]
#[put("/owners/{owner_id}")]
pub async fn update_owner(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<OwnerFieldsBody>,
) -> ApiResult<HttpResponse> {
    let owner_id = path.into_inner();
    let mut owner = state
        .owners
        .find_by_id(owner_id)
        .await
        .map_err(map_owner_repository_error)?
        .ok_or_else(|| owner_not_found(owner_id))?;

    let fields = parse_owner_fields(payload.into_inner())?;
    apply_owner_fields(&mut owner, fields);
    state
        .owners
        .save(owner)
        .await
        .map_err(map_owner_repository_error)?;

    Ok(HttpResponse::NoContent().finish())
}

/// List every known owner.
#[utoipa::path(
    get,
    path = "/owners",
    responses(
        (status = 200, description = "Owners", body = [OwnerResponseBody]),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["owners"],
    operation_id = "listOwners"
)]
#[get("/owners")]
pub async fn list_owners(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<OwnerResponseBody>>> {
    let owners = state
        .owners
        .find_all()
        .await
        .map_err(map_owner_repository_error)?;
    Ok(web::Json(
        owners.iter().map(OwnerResponseBody::from).collect(),
    ))
}

#[cfg(test)]
#[path = "owners_tests.rs"]
mod tests;
