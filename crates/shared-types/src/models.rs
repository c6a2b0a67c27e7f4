use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User identifier as issued by the upstream auth layer.
pub type UserId = i64;

/// Internal church identifier — the stable foreign key used everywhere
/// except URL routing, which uses the slug.
pub type ChurchId = Uuid;

pub type SubscriptionId = Uuid;
pub type PlanId = Uuid;

/// Named role a user can hold.
///
/// - `Member` — baseline; no elevated access.
/// - `Admin` — manages one church; always church-scoped.
/// - `SuperAdmin` — platform operator; never church-scoped, manages every church.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum RoleName {
    #[default]
    Member,
    Admin,
    SuperAdmin,
}

impl RoleName {
    /// Parse from the stored role string. Unknown values default to Member.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "admin" => RoleName::Admin,
            "super_admin" => RoleName::SuperAdmin,
            _ => RoleName::Member,
        }
    }

    /// Lowercase string for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::Member => "member",
            RoleName::Admin => "admin",
            RoleName::SuperAdmin => "super_admin",
        }
    }
}

/// One role held by a user, optionally scoped to a church.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RoleAssignment {
    pub role: RoleName,
    /// Set for `Admin` assignments; `SuperAdmin` and `Member` carry none.
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Uuid>))]
    pub church_id: Option<ChurchId>,
}

/// The full set of role assignments held by one user.
///
/// An empty set is a valid outcome: a plain member with no elevated role.
/// Duplicate `super_admin` rows are idempotent — holding two grants nothing
/// beyond holding one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RoleSet {
    pub assignments: Vec<RoleAssignment>,
}

impl RoleSet {
    pub fn new(assignments: Vec<RoleAssignment>) -> Self {
        Self { assignments }
    }

    /// True if any assignment is `super_admin`.
    pub fn is_super_admin(&self) -> bool {
        self.assignments
            .iter()
            .any(|a| a.role == RoleName::SuperAdmin)
    }

    /// True if the user holds an `admin` assignment scoped to `church_id`.
    pub fn is_admin_of(&self, church_id: ChurchId) -> bool {
        self.assignments
            .iter()
            .any(|a| a.role == RoleName::Admin && a.church_id == Some(church_id))
    }
}

/// A church — the unit of multi-tenant isolation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Church {
    #[cfg_attr(feature = "openapi", schema(value_type = Uuid))]
    pub id: ChurchId,
    /// Immutable URL lookup key, unique across the platform.
    pub slug: String,
    pub name: String,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Uuid>))]
    pub subscription_id: Option<SubscriptionId>,
}

/// The slice of a user record the access core reads: which church they
/// belong to and which personal subscription they hold, if any.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserProfile {
    pub user_id: UserId,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Uuid>))]
    pub church_id: Option<ChurchId>,
    #[cfg_attr(feature = "openapi", schema(value_type = Option<Uuid>))]
    pub subscription_id: Option<SubscriptionId>,
}

/// Subscription lifecycle status as synced from the billing provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    PastDue,
    #[default]
    Incomplete,
}

impl SubscriptionStatus {
    /// Parse from the stored status string. Unknown values default to
    /// Incomplete, which never grants entitlement.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "active" => SubscriptionStatus::Active,
            "canceled" => SubscriptionStatus::Canceled,
            "past_due" => SubscriptionStatus::PastDue,
            _ => SubscriptionStatus::Incomplete,
        }
    }

    /// Lowercase string for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Canceled => "canceled",
            SubscriptionStatus::PastDue => "past_due",
            SubscriptionStatus::Incomplete => "incomplete",
        }
    }
}

/// A subscription row, church-owned or personal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Subscription {
    #[cfg_attr(feature = "openapi", schema(value_type = Uuid))]
    pub id: SubscriptionId,
    pub status: SubscriptionStatus,
    /// None = non-expiring.
    pub expires_at: Option<DateTime<Utc>>,
    #[cfg_attr(feature = "openapi", schema(value_type = Uuid))]
    pub plan_id: PlanId,
}

impl Subscription {
    /// Only the status field is consulted; expiry bookkeeping is owned by
    /// the billing sync upstream.
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }
}

/// Plan tier tag driving the entitlement feature table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    #[default]
    Free,
    Individual,
    ChurchSimple,
    ChurchPlus,
    ChurchPremium,
}

impl PlanType {
    /// Parse from the stored plan type string. Unknown values default to
    /// Free so a newly introduced upstream tier degrades to no access
    /// instead of breaking resolution.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "individual" => PlanType::Individual,
            "church_simple" => PlanType::ChurchSimple,
            "church_plus" => PlanType::ChurchPlus,
            "church_premium" => PlanType::ChurchPremium,
            _ => PlanType::Free,
        }
    }

    /// Lowercase string for database storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Free => "free",
            PlanType::Individual => "individual",
            PlanType::ChurchSimple => "church_simple",
            PlanType::ChurchPlus => "church_plus",
            PlanType::ChurchPremium => "church_premium",
        }
    }
}

/// A billing plan: tier tag plus seat limits (None = unlimited).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Plan {
    #[cfg_attr(feature = "openapi", schema(value_type = Uuid))]
    pub id: PlanId,
    pub plan_type: PlanType,
    pub max_members: Option<i32>,
    pub max_admins: Option<i32>,
}
