use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse config file contents. Missing or invalid input yields defaults.
pub fn parse_config(contents: Option<&str>) -> AppConfig {
    let Some(contents) = contents else {
        tracing::warn!(path = CONFIG_PATH, "config file not found, using defaults");
        return AppConfig::default();
    };
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, using defaults");
            AppConfig::default()
        }
    }
}

/// Read `config.toml` and store it in the global `OnceLock`.
/// Only the first call has effect.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let contents = std::fs::read_to_string(CONFIG_PATH).ok();
        let config = parse_config(contents.as_deref());
        tracing::info!(
            features = ?config.features,
            simulation = ?config.simulation,
            "configuration loaded"
        );
        config
    })
}

/// The loaded configuration, or defaults when `load_config()` has not run.
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}
