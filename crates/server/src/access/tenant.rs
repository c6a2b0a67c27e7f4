use shared_types::{AppError, ChurchId};

use crate::store::AccessStore;

/// Resolve a church slug to its internal id.
///
/// Slug comparison is exact and case-sensitive, as stored; callers own
/// consistent casing. Returns `NotFound` when no church matches — a
/// distinct outcome from a store failure, which propagates unchanged.
pub async fn resolve_church(store: &dyn AccessStore, slug: &str) -> Result<ChurchId, AppError> {
    match store.church_by_slug(slug).await? {
        Some(church) => Ok(church.id),
        None => Err(AppError::not_found(format!("No church with slug '{}'", slug))),
    }
}
