pub mod access;

use axum::{routing::get, Router};

use crate::db::AppState;

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(crate::health::health_check))
        .route("/api/users/{id}/super-admin", get(access::get_super_admin))
        .route(
            "/api/users/{id}/can-manage/{church}",
            get(access::get_can_manage),
        )
        .route("/api/users/{id}/entitlement", get(access::get_entitlement))
}
