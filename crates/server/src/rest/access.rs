use axum::extract::{Path, State};
use axum::Json;

use shared_types::{AppError, CanManageResponse, Entitlement, SuperAdminResponse, UserId};

use crate::access::evaluator::{can_manage_church, is_super_admin, ChurchRef};
use crate::access::resolve_entitlement;
use crate::db::AppState;

/// Is the user a platform super-admin?
#[utoipa::path(
    get,
    path = "/api/users/{id}/super-admin",
    responses(
        (status = 200, description = "Super-admin flag", body = SuperAdminResponse),
        (status = 500, description = "Store failure", body = AppError)
    ),
    tag = "access"
)]
pub async fn get_super_admin(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<SuperAdminResponse>, AppError> {
    let super_admin = is_super_admin(state.store.as_ref(), user_id).await?;
    Ok(Json(SuperAdminResponse { super_admin }))
}

/// May the user manage the referenced church? `{church}` accepts either
/// the internal id or the URL slug.
#[utoipa::path(
    get,
    path = "/api/users/{id}/can-manage/{church}",
    responses(
        (status = 200, description = "Management permission", body = CanManageResponse),
        (status = 500, description = "Store failure", body = AppError)
    ),
    tag = "access"
)]
pub async fn get_can_manage(
    State(state): State<AppState>,
    Path((user_id, church)): Path<(UserId, String)>,
) -> Result<Json<CanManageResponse>, AppError> {
    let church_ref = ChurchRef::parse(&church);
    let can_manage = can_manage_church(state.store.as_ref(), user_id, &church_ref).await?;
    Ok(Json(CanManageResponse { can_manage }))
}

/// The user's effective entitlement. Resolution gaps answer the default
/// no-access entitlement; only a store failure is an error.
#[utoipa::path(
    get,
    path = "/api/users/{id}/entitlement",
    responses(
        (status = 200, description = "Effective entitlement", body = Entitlement),
        (status = 500, description = "Store failure", body = AppError)
    ),
    tag = "access"
)]
pub async fn get_entitlement(
    State(state): State<AppState>,
    Path(user_id): Path<UserId>,
) -> Result<Json<Entitlement>, AppError> {
    let entitlement = resolve_entitlement(state.store.as_ref(), user_id).await?;
    Ok(Json(entitlement))
}
