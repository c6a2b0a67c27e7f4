pub mod entitlement;
pub mod evaluator;
pub mod guard;
pub mod roles;
pub mod tenant;

pub use entitlement::resolve_entitlement;
pub use evaluator::{can_manage_church, is_super_admin, ChurchRef};
pub use guard::{AccessNotifier, Guard, GuardKind, GuardState};
pub use roles::get_roles;
pub use tenant::resolve_church;
