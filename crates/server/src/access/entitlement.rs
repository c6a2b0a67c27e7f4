use shared_types::{AppError, ChurchId, Entitlement, SubscriptionId, UserId};

use crate::store::AccessStore;

/// Why resolution fell through to the default entitlement.
///
/// Internal only: the public boundary collapses every reason to the same
/// no-access default, so callers cannot distinguish "explicitly free"
/// from "resolution failed partway" — deliberately so. The reason is
/// traced at debug level for operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnresolvedReason {
    NoProfile,
    NoSubscription,
    ChurchMissing,
    SubscriptionMissing,
    SubscriptionInactive,
    PlanMissing,
}

enum Resolution {
    Resolved(Entitlement),
    Unresolved(UnresolvedReason),
}

/// One candidate subscription chain, walked to its plan.
enum Candidate {
    Won(Entitlement),
    Skipped(UnresolvedReason),
}

/// Resolve the effective entitlement for a user.
///
/// Walks profile → church subscription, then profile → personal
/// subscription. A church entitlement wins outright when its chain
/// completes, even if a personal one also would — church always shadows
/// personal. Every missing link degrades silently to the no-access
/// default; only a store failure returns `Err`.
pub async fn resolve_entitlement(
    store: &dyn AccessStore,
    user_id: UserId,
) -> Result<Entitlement, AppError> {
    match resolve(store, user_id).await? {
        Resolution::Resolved(entitlement) => Ok(entitlement),
        Resolution::Unresolved(reason) => {
            tracing::debug!(user_id, ?reason, "entitlement fell back to default");
            Ok(Entitlement::no_access())
        }
    }
}

async fn resolve(store: &dyn AccessStore, user_id: UserId) -> Result<Resolution, AppError> {
    let Some(profile) = store.user_profile(user_id).await? else {
        return Ok(Resolution::Unresolved(UnresolvedReason::NoProfile));
    };

    let mut fallthrough = UnresolvedReason::NoSubscription;

    if let Some(church_id) = profile.church_id {
        match church_candidate(store, church_id).await? {
            Candidate::Won(entitlement) => return Ok(Resolution::Resolved(entitlement)),
            Candidate::Skipped(reason) => fallthrough = reason,
        }
    }

    if let Some(subscription_id) = profile.subscription_id {
        match subscription_candidate(store, subscription_id).await? {
            Candidate::Won(entitlement) => return Ok(Resolution::Resolved(entitlement)),
            Candidate::Skipped(reason) => fallthrough = reason,
        }
    }

    Ok(Resolution::Unresolved(fallthrough))
}

/// Walk church → subscription → plan.
async fn church_candidate(
    store: &dyn AccessStore,
    church_id: ChurchId,
) -> Result<Candidate, AppError> {
    let Some(church) = store.church_by_id(church_id).await? else {
        return Ok(Candidate::Skipped(UnresolvedReason::ChurchMissing));
    };
    let Some(subscription_id) = church.subscription_id else {
        return Ok(Candidate::Skipped(UnresolvedReason::NoSubscription));
    };
    subscription_candidate(store, subscription_id).await
}

/// Walk subscription → plan. Status is the only activity gate; the expiry
/// timestamp is carried into the entitlement but not consulted here.
async fn subscription_candidate(
    store: &dyn AccessStore,
    subscription_id: SubscriptionId,
) -> Result<Candidate, AppError> {
    let Some(subscription) = store.subscription(subscription_id).await? else {
        return Ok(Candidate::Skipped(UnresolvedReason::SubscriptionMissing));
    };
    if !subscription.is_active() {
        return Ok(Candidate::Skipped(UnresolvedReason::SubscriptionInactive));
    }
    let Some(plan) = store.plan(subscription.plan_id).await? else {
        return Ok(Candidate::Skipped(UnresolvedReason::PlanMissing));
    };
    Ok(Candidate::Won(Entitlement::for_plan(
        &plan,
        subscription.expires_at,
    )))
}
