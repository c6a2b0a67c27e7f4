use serde::{Deserialize, Serialize};

/// Fallback routes for the three route guards.
///
/// Injected into guard construction rather than hard-coded in each guard,
/// so tests can assert on redirects without rendering anything. Loaded
/// from `config.toml` at startup; every field has a working default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuardRoutes {
    /// Where the super-admin guard sends users who are not super-admins.
    #[serde(default = "default_super_admin_fallback")]
    pub super_admin_fallback: String,
    /// Where the church-admin guard sends users denied for a church.
    #[serde(default = "default_church_admin_fallback")]
    pub church_admin_fallback: String,
    /// Where the authenticated guard sends signed-out users.
    #[serde(default = "default_sign_in")]
    pub sign_in: String,
}

fn default_super_admin_fallback() -> String {
    "/dashboard".to_string()
}

fn default_church_admin_fallback() -> String {
    "/".to_string()
}

fn default_sign_in() -> String {
    "/auth".to_string()
}

impl Default for GuardRoutes {
    fn default() -> Self {
        Self {
            super_admin_fallback: default_super_admin_fallback(),
            church_admin_fallback: default_church_admin_fallback(),
            sign_in: default_sign_in(),
        }
    }
}

/// Feature flags controlling which optional integrations are active.
///
/// Every field defaults to `false` so a missing or incomplete config file
/// disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub guards: GuardRoutes,
    #[serde(default)]
    pub features: FeatureFlags,
}
