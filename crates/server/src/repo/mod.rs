pub mod church;
pub mod roles;
pub mod subscription;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use shared_types::{
    AppError, Church, ChurchId, Plan, PlanId, RoleAssignment, Subscription, SubscriptionId,
    UserId, UserProfile,
};

use crate::store::AccessStore;

/// Postgres-backed `AccessStore`.
#[derive(Clone)]
pub struct PgAccessStore {
    pool: Pool<Postgres>,
}

impl PgAccessStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessStore for PgAccessStore {
    async fn role_assignments(&self, user_id: UserId) -> Result<Vec<RoleAssignment>, AppError> {
        roles::role_assignments(&self.pool, user_id).await
    }

    async fn church_by_slug(&self, slug: &str) -> Result<Option<Church>, AppError> {
        church::church_by_slug(&self.pool, slug).await
    }

    async fn church_by_id(&self, id: ChurchId) -> Result<Option<Church>, AppError> {
        church::church_by_id(&self.pool, id).await
    }

    async fn user_profile(&self, user_id: UserId) -> Result<Option<UserProfile>, AppError> {
        church::user_profile(&self.pool, user_id).await
    }

    async fn subscription(&self, id: SubscriptionId) -> Result<Option<Subscription>, AppError> {
        subscription::subscription(&self.pool, id).await
    }

    async fn plan(&self, id: PlanId) -> Result<Option<Plan>, AppError> {
        subscription::plan(&self.pool, id).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::database(format!("ping: {}", e)))
    }
}
