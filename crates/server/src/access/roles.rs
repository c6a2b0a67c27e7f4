use shared_types::{AppError, RoleSet, UserId};

use crate::store::AccessStore;

/// Look up the full role set for a user.
///
/// An empty set means "plain member with no elevated role" — a valid,
/// non-error outcome. A store failure propagates; it is never collapsed
/// into an empty set, so callers can tell "no roles" from "could not ask".
pub async fn get_roles(store: &dyn AccessStore, user_id: UserId) -> Result<RoleSet, AppError> {
    let assignments = store.role_assignments(user_id).await?;
    Ok(RoleSet::new(assignments))
}
