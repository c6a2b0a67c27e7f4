use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_types::{
    AppError, Church, ChurchId, Plan, PlanId, PlanType, RoleAssignment, RoleName, Subscription,
    SubscriptionId, SubscriptionStatus, UserId, UserProfile,
};
use uuid::Uuid;

use super::AccessStore;

#[derive(Default)]
struct Inner {
    roles: HashMap<UserId, Vec<RoleAssignment>>,
    churches: HashMap<ChurchId, Church>,
    profiles: HashMap<UserId, UserProfile>,
    subscriptions: HashMap<SubscriptionId, Subscription>,
    plans: HashMap<PlanId, Plan>,
    failing: bool,
}

/// In-memory `AccessStore` used by the test suites.
///
/// Seed data through the `add_*` methods, then hand the store to a router
/// or call the access functions directly. `set_failing(true)` makes every
/// read return a backend error, for exercising the outage path.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_role(&self, user_id: UserId, role: RoleName, church_id: Option<ChurchId>) {
        self.inner
            .lock()
            .unwrap()
            .roles
            .entry(user_id)
            .or_default()
            .push(RoleAssignment { role, church_id });
    }

    pub fn add_church(
        &self,
        slug: &str,
        name: &str,
        subscription_id: Option<SubscriptionId>,
    ) -> ChurchId {
        let id = Uuid::new_v4();
        self.inner.lock().unwrap().churches.insert(
            id,
            Church {
                id,
                slug: slug.to_string(),
                name: name.to_string(),
                subscription_id,
            },
        );
        id
    }

    /// Attach a subscription to an existing church.
    pub fn set_church_subscription(&self, church_id: ChurchId, subscription_id: SubscriptionId) {
        if let Some(church) = self.inner.lock().unwrap().churches.get_mut(&church_id) {
            church.subscription_id = Some(subscription_id);
        }
    }

    pub fn add_profile(
        &self,
        user_id: UserId,
        church_id: Option<ChurchId>,
        subscription_id: Option<SubscriptionId>,
    ) {
        self.inner.lock().unwrap().profiles.insert(
            user_id,
            UserProfile {
                user_id,
                church_id,
                subscription_id,
            },
        );
    }

    pub fn add_subscription(
        &self,
        status: SubscriptionStatus,
        expires_at: Option<DateTime<Utc>>,
        plan_id: PlanId,
    ) -> SubscriptionId {
        let id = Uuid::new_v4();
        self.inner.lock().unwrap().subscriptions.insert(
            id,
            Subscription {
                id,
                status,
                expires_at,
                plan_id,
            },
        );
        id
    }

    pub fn add_plan(
        &self,
        plan_type: PlanType,
        max_members: Option<i32>,
        max_admins: Option<i32>,
    ) -> PlanId {
        let id = Uuid::new_v4();
        self.inner.lock().unwrap().plans.insert(
            id,
            Plan {
                id,
                plan_type,
                max_members,
                max_admins,
            },
        );
        id
    }

    /// When set, every read fails with a backend error.
    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().unwrap().failing = failing;
    }

    fn check_failing(inner: &Inner) -> Result<(), AppError> {
        if inner.failing {
            Err(AppError::database("memory store failing (test)"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AccessStore for MemoryStore {
    async fn role_assignments(&self, user_id: UserId) -> Result<Vec<RoleAssignment>, AppError> {
        let inner = self.inner.lock().unwrap();
        Self::check_failing(&inner)?;
        Ok(inner.roles.get(&user_id).cloned().unwrap_or_default())
    }

    async fn church_by_slug(&self, slug: &str) -> Result<Option<Church>, AppError> {
        let inner = self.inner.lock().unwrap();
        Self::check_failing(&inner)?;
        Ok(inner.churches.values().find(|c| c.slug == slug).cloned())
    }

    async fn church_by_id(&self, id: ChurchId) -> Result<Option<Church>, AppError> {
        let inner = self.inner.lock().unwrap();
        Self::check_failing(&inner)?;
        Ok(inner.churches.get(&id).cloned())
    }

    async fn user_profile(&self, user_id: UserId) -> Result<Option<UserProfile>, AppError> {
        let inner = self.inner.lock().unwrap();
        Self::check_failing(&inner)?;
        Ok(inner.profiles.get(&user_id).cloned())
    }

    async fn subscription(&self, id: SubscriptionId) -> Result<Option<Subscription>, AppError> {
        let inner = self.inner.lock().unwrap();
        Self::check_failing(&inner)?;
        Ok(inner.subscriptions.get(&id).cloned())
    }

    async fn plan(&self, id: PlanId) -> Result<Option<Plan>, AppError> {
        let inner = self.inner.lock().unwrap();
        Self::check_failing(&inner)?;
        Ok(inner.plans.get(&id).cloned())
    }

    async fn ping(&self) -> Result<(), AppError> {
        let inner = self.inner.lock().unwrap();
        Self::check_failing(&inner)
    }
}
