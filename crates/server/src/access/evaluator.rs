use shared_types::{AppError, AppErrorKind, ChurchId, UserId};
use uuid::Uuid;

use crate::access::roles::get_roles;
use crate::access::tenant::resolve_church;
use crate::store::AccessStore;

/// A church referenced either by internal id or by URL slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChurchRef {
    Id(ChurchId),
    Slug(String),
}

impl ChurchRef {
    /// Parse a path segment: UUIDs are ids, anything else is a slug.
    pub fn parse(s: &str) -> Self {
        match Uuid::parse_str(s) {
            Ok(id) => ChurchRef::Id(id),
            Err(_) => ChurchRef::Slug(s.to_string()),
        }
    }
}

impl From<ChurchId> for ChurchRef {
    fn from(id: ChurchId) -> Self {
        ChurchRef::Id(id)
    }
}

impl From<&str> for ChurchRef {
    fn from(slug: &str) -> Self {
        ChurchRef::Slug(slug.to_string())
    }
}

/// True if the user holds a platform super-admin assignment.
pub async fn is_super_admin(store: &dyn AccessStore, user_id: UserId) -> Result<bool, AppError> {
    Ok(get_roles(store, user_id).await?.is_super_admin())
}

/// Decide whether `user_id` may manage the referenced church.
///
/// Super-admins manage every church; the check short-circuits before any
/// church lookup, so even a nonexistent slug answers `true` for them.
/// For everyone else an unknown church answers `false` — nothing exists
/// to manage, which is not an error. Store failures propagate.
pub async fn can_manage_church(
    store: &dyn AccessStore,
    user_id: UserId,
    church: &ChurchRef,
) -> Result<bool, AppError> {
    let roles = get_roles(store, user_id).await?;
    if roles.is_super_admin() {
        return Ok(true);
    }

    let church_id = match church {
        ChurchRef::Id(id) => *id,
        ChurchRef::Slug(slug) => match resolve_church(store, slug).await {
            Ok(id) => id,
            Err(err) if err.kind == AppErrorKind::NotFound => return Ok(false),
            Err(err) => return Err(err),
        },
    };

    Ok(roles.is_admin_of(church_id))
}
