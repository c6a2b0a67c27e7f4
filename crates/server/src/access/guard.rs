use std::sync::Arc;

use shared_types::{AppError, GuardRoutes, UserId};

use crate::access::evaluator::{can_manage_church, is_super_admin, ChurchRef};
use crate::store::AccessStore;

/// Which guard is asking — selects the configured fallback route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    /// Platform super-admins only.
    SuperAdmin,
    /// Admins of the church named in the route.
    ChurchAdmin,
    /// Any authenticated user.
    Authenticated,
}

/// Externally observable guard state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardState {
    /// Check in flight; render a loading indicator.
    Loading,
    /// Render the protected content.
    Granted,
    /// Send the user to the contained route.
    Redirecting(String),
}

/// Result of evaluating a guard's policy for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Grant,
    Deny { notice: Option<String> },
}

/// Sink for user-facing denial notices. The UI's toast layer implements
/// this; tests record the messages.
pub trait AccessNotifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Notifier that drops every message.
pub struct NoopNotifier;

impl AccessNotifier for NoopNotifier {
    fn notify(&self, _message: &str) {}
}

/// Inputs a guard re-checks on every change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuardInput {
    pub user_id: Option<UserId>,
    /// Church slug parsed from the current route, for `ChurchAdmin`.
    pub church_slug: Option<String>,
}

/// Ticket tying an in-flight check to the input generation it was
/// started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckTicket(u64);

/// One route guard instance: a `Loading → {Granted, Redirecting}` state
/// machine re-armed whenever its inputs change.
///
/// Checks are asynchronous, so a result can arrive after the input that
/// produced it has been superseded. `begin` stamps each check with the
/// current input generation and `settle` discards any result whose
/// ticket is stale — "last request wins" is not enough, the result must
/// match the input the guard is currently showing.
pub struct Guard {
    kind: GuardKind,
    routes: GuardRoutes,
    notifier: Arc<dyn AccessNotifier>,
    state: GuardState,
    generation: u64,
}

impl Guard {
    pub fn new(kind: GuardKind, routes: GuardRoutes, notifier: Arc<dyn AccessNotifier>) -> Self {
        Self {
            kind,
            routes,
            notifier,
            state: GuardState::Loading,
            generation: 0,
        }
    }

    /// Construct with the process-wide configured fallback routes.
    pub fn with_configured_routes(kind: GuardKind, notifier: Arc<dyn AccessNotifier>) -> Self {
        Self::new(kind, crate::config::config().guards.clone(), notifier)
    }

    pub fn kind(&self) -> GuardKind {
        self.kind
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    /// Arm a new check: resets to `Loading`, invalidates any outstanding
    /// ticket, and returns the ticket for the new input.
    pub fn begin(&mut self) -> CheckTicket {
        self.generation += 1;
        self.state = GuardState::Loading;
        CheckTicket(self.generation)
    }

    /// Apply a completed check. Returns `false` (leaving the state
    /// untouched) when the ticket has been superseded by a newer `begin`.
    pub fn settle(&mut self, ticket: CheckTicket, outcome: GuardOutcome) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.state = match outcome {
            GuardOutcome::Grant => GuardState::Granted,
            GuardOutcome::Deny { notice } => {
                if let Some(message) = notice {
                    self.notifier.notify(&message);
                }
                GuardState::Redirecting(self.fallback().to_string())
            }
        };
        true
    }

    /// The configured fallback route for this guard kind.
    pub fn fallback(&self) -> &str {
        match self.kind {
            GuardKind::SuperAdmin => &self.routes.super_admin_fallback,
            GuardKind::ChurchAdmin => &self.routes.church_admin_fallback,
            GuardKind::Authenticated => &self.routes.sign_in,
        }
    }

    /// Run one full check cycle against the store.
    ///
    /// Store failures fail closed: the guard redirects and the user sees
    /// a notice, rather than the failure being swallowed as a denial.
    pub async fn run_check(&mut self, store: &dyn AccessStore, input: &GuardInput) -> &GuardState {
        let ticket = self.begin();
        let outcome = match evaluate(self.kind, store, input).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(kind = ?self.kind, %err, "guard check failed");
                GuardOutcome::Deny {
                    notice: Some("Access check failed. Please try again.".to_string()),
                }
            }
        };
        self.settle(ticket, outcome);
        &self.state
    }
}

/// Evaluate a guard kind's policy for one input.
pub async fn evaluate(
    kind: GuardKind,
    store: &dyn AccessStore,
    input: &GuardInput,
) -> Result<GuardOutcome, AppError> {
    match kind {
        GuardKind::SuperAdmin => check_super_admin(store, input).await,
        GuardKind::ChurchAdmin => check_church_admin(store, input).await,
        GuardKind::Authenticated => Ok(check_authenticated(input)),
    }
}

/// Super-admin guard policy: silent redirect for everyone else.
async fn check_super_admin(
    store: &dyn AccessStore,
    input: &GuardInput,
) -> Result<GuardOutcome, AppError> {
    match input.user_id {
        Some(user_id) if is_super_admin(store, user_id).await? => Ok(GuardOutcome::Grant),
        _ => Ok(GuardOutcome::Deny { notice: None }),
    }
}

/// Church-admin guard policy.
///
/// Super-admins short-circuit inside the evaluator. Tenant-not-found and
/// permission-denied both deny with a user-facing notice — the condition
/// is never silently swallowed.
async fn check_church_admin(
    store: &dyn AccessStore,
    input: &GuardInput,
) -> Result<GuardOutcome, AppError> {
    let Some(user_id) = input.user_id else {
        return Ok(GuardOutcome::Deny { notice: None });
    };
    let Some(slug) = input.church_slug.as_deref() else {
        return Ok(GuardOutcome::Deny {
            notice: Some("No church selected.".to_string()),
        });
    };

    if can_manage_church(store, user_id, &ChurchRef::Slug(slug.to_string())).await? {
        Ok(GuardOutcome::Grant)
    } else {
        Ok(GuardOutcome::Deny {
            notice: Some("You do not have permission to manage this church.".to_string()),
        })
    }
}

/// Authenticated guard policy: needs no store access.
fn check_authenticated(input: &GuardInput) -> GuardOutcome {
    if input.user_id.is_some() {
        GuardOutcome::Grant
    } else {
        GuardOutcome::Deny { notice: None }
    }
}
