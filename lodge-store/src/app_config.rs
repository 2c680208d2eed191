use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default = "default_min_stay")]
    pub min_stay_nights: u32,
    #[serde(default)]
    pub allow_past_check_in: bool,
}

fn default_min_stay() -> u32 { 1 }

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            min_stay_nights: default_min_stay(),
            allow_past_check_in: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from("config", &run_mode)
    }

    /// Layered load: `{dir}/default`, optional `{dir}/{run_mode}` and
    /// `{dir}/local`, then `LODGE__SECTION__KEY` environment overrides.
    pub fn load_from(dir: &str, run_mode: &str) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", dir)))
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            .add_source(config::Environment::with_prefix("LODGE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
