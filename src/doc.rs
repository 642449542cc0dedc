//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API: the
//! owner and pet resource paths, the health probes, and the wire schemas.
//! The generated document backs Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::inbound::http::error::ApiError;
use crate::inbound::http::owners::{OwnerFieldsBody, OwnerResponseBody};
use crate::inbound::http::pets::{PetFieldsBody, PetResponseBody, PetTypeBody};

/// OpenAPI document for the customer REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pet clinic customers API",
        description = "CRUD interface over the owner/pet customer aggregate."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::owners::create_owner,
        crate::inbound::http::owners::get_owner,
        crate::inbound::http::owners::update_owner,
        crate::inbound::http::owners::list_owners,
        crate::inbound::http::pets::list_pet_types,
        crate::inbound::http::pets::get_pet,
        crate::inbound::http::pets::create_pet,
        crate::inbound::http::pets::update_pet,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        OwnerFieldsBody,
        OwnerResponseBody,
        PetFieldsBody,
        PetResponseBody,
        PetTypeBody,
        ApiError,
    )),
    tags(
        (name = "owners", description = "Operations on pet owners"),
        (name = "pets", description = "Operations on pets and pet types"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
