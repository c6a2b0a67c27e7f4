use serde::{Deserialize, Serialize};

/// Response for `GET /api/users/{id}/super-admin`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SuperAdminResponse {
    pub super_admin: bool,
}

/// Response for `GET /api/users/{id}/can-manage/{church}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CanManageResponse {
    pub can_manage: bool,
}
