use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Plan, PlanType};

/// Resolved feature access for one user, derived from whichever
/// subscription (church or personal) won priority.
///
/// Recomputed on every query and never persisted — the upstream
/// subscription rows are the only source of truth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Entitlement {
    pub plan_type: PlanType,
    pub active: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub can_access_tracks: bool,
    pub can_access_progress: bool,
    pub can_access_personal_devotionals: bool,
    pub can_access_public_content: bool,
    pub can_access_groups: bool,
    pub can_access_church_admin: bool,
    pub can_access_church_customization: bool,
    /// None = unlimited.
    pub max_members: Option<i32>,
    pub max_admins: Option<i32>,
}

impl Entitlement {
    /// The no-access entitlement: free plan, inactive, public content only.
    ///
    /// Returned whenever resolution finds no winning subscription, so a
    /// signed-out-of-billing user and a user on the free plan look identical.
    pub fn no_access() -> Self {
        Self {
            plan_type: PlanType::Free,
            active: false,
            expires_at: None,
            can_access_tracks: false,
            can_access_progress: false,
            can_access_personal_devotionals: false,
            can_access_public_content: true,
            can_access_groups: false,
            can_access_church_admin: false,
            can_access_church_customization: false,
            max_members: None,
            max_admins: None,
        }
    }

    /// Build the entitlement an active subscription on `plan` grants.
    ///
    /// Individual and above unlock the personal study features; church
    /// plans add groups and church administration; customization is
    /// plus/premium only. Seat limits carry over verbatim.
    pub fn for_plan(plan: &Plan, expires_at: Option<DateTime<Utc>>) -> Self {
        let paid = plan.plan_type != PlanType::Free;
        let church = matches!(
            plan.plan_type,
            PlanType::ChurchSimple | PlanType::ChurchPlus | PlanType::ChurchPremium
        );
        let customization = matches!(
            plan.plan_type,
            PlanType::ChurchPlus | PlanType::ChurchPremium
        );

        Self {
            plan_type: plan.plan_type,
            active: true,
            expires_at,
            can_access_tracks: paid,
            can_access_progress: paid,
            can_access_personal_devotionals: paid,
            can_access_public_content: true,
            can_access_groups: church,
            can_access_church_admin: church,
            can_access_church_customization: customization,
            max_members: plan.max_members,
            max_admins: plan.max_admins,
        }
    }
}

impl Default for Entitlement {
    fn default() -> Self {
        Self::no_access()
    }
}
