use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the process working directory.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and store the parsed config in the global
/// `OnceLock`. Safe to call multiple times — only the first call has
/// effect.
///
/// If the file is missing or unparseable, every setting falls back to
/// its default. Uses eprintln because this runs before telemetry is up.
pub fn load_config() {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
            eprintln!("[config] Failed to parse {CONFIG_PATH}: {e} — using defaults");
            AppConfig::default()
        }),
        Err(e) => {
            eprintln!("[config] {CONFIG_PATH} not found ({e}) — using defaults");
            AppConfig::default()
        }
    });
}

/// Get the loaded configuration. Returns defaults if `load_config()` has
/// not been called yet (safe fallback, but the file is then never read).
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}
