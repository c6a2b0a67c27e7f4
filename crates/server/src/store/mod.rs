pub mod memory;

use async_trait::async_trait;
use shared_types::{
    AppError, Church, ChurchId, Plan, PlanId, RoleAssignment, Subscription, SubscriptionId,
    UserId, UserProfile,
};

/// The data-fetch boundary between the access core and the storage layer.
///
/// Implementations return `Ok(None)` for records that do not exist and
/// reserve `Err` for backend failures (connection loss, query errors).
/// The two must never be conflated: a missing row degrades a decision,
/// an outage has to propagate so it stays visible.
#[async_trait]
pub trait AccessStore: Send + Sync {
    /// All role assignments held by the user. Empty is a valid outcome.
    async fn role_assignments(&self, user_id: UserId) -> Result<Vec<RoleAssignment>, AppError>;

    /// Look up a church by its URL slug. Comparison is exact, as stored.
    async fn church_by_slug(&self, slug: &str) -> Result<Option<Church>, AppError>;

    async fn church_by_id(&self, id: ChurchId) -> Result<Option<Church>, AppError>;

    async fn user_profile(&self, user_id: UserId) -> Result<Option<UserProfile>, AppError>;

    async fn subscription(&self, id: SubscriptionId) -> Result<Option<Subscription>, AppError>;

    async fn plan(&self, id: PlanId) -> Result<Option<Plan>, AppError>;

    /// Cheap connectivity probe for the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}
