use utoipa::OpenApi;

use crate::health;
use crate::rest;

/// OpenAPI document for the access-resolution API.
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        rest::access::get_super_admin,
        rest::access::get_can_manage,
        rest::access::get_entitlement,
    ),
    components(schemas(
        shared_types::AppError,
        shared_types::AppErrorKind,
        shared_types::CanManageResponse,
        shared_types::Entitlement,
        shared_types::PlanType,
        shared_types::SuperAdminResponse,
        health::HealthResponse,
    )),
    tags(
        (name = "health", description = "Service health"),
        (name = "access", description = "Role and entitlement resolution")
    )
)]
pub struct ApiDoc;

/// Serialize the OpenAPI document as pretty JSON.
pub fn openapi_json() -> String {
    ApiDoc::openapi()
        .to_pretty_json()
        .expect("OpenAPI document serializes")
}
