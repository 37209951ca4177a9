use serde::{Deserialize, Serialize};

/// Feature flags controlling optional behavior.
///
/// Loaded from `config.toml` at server startup. Missing fields take their
/// defaults: telemetry off, demo accounts shown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
    #[serde(default = "enabled")]
    pub demo_accounts: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            telemetry: false,
            demo_accounts: true,
        }
    }
}

fn enabled() -> bool {
    true
}

/// Artificial latencies, in milliseconds, for the simulated back-office calls.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimulationConfig {
    pub login_delay_ms: u64,
    pub register_delay_ms: u64,
    pub load_delay_ms: u64,
    pub submit_delay_ms: u64,
    pub save_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            login_delay_ms: 600,
            register_delay_ms: 1500,
            load_delay_ms: 1000,
            submit_delay_ms: 2000,
            save_delay_ms: 1500,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// The part of [`AppConfig`] the browser needs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    pub demo_accounts: bool,
    pub simulation: SimulationConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        AppConfig::default().client()
    }
}

impl AppConfig {
    pub fn client(&self) -> ClientConfig {
        ClientConfig {
            demo_accounts: self.features.demo_accounts,
            simulation: self.simulation,
        }
    }
}
