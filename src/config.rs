use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub enrichment: EnrichmentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub dataset_path: PathBuf,
    pub probe_url: Option<String>,
    pub probe_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    pub raw_path: PathBuf,
    pub output_path: PathBuf,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::builder(&run_mode)?
            // Add in settings from environment variables, e.g. PL_STATS__SERVER__PORT=8080
            .add_source(Environment::with_prefix("PL_STATS").separator("__"))
            .build()?
            .try_deserialize()
    }

    fn builder(run_mode: &str) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("data.dataset_path", "data/dataset-enriched.json")?
            .set_default("data.probe_timeout_secs", 10)?
            .set_default("enrichment.raw_path", "data/dataset-incomplete.json")?
            .set_default("enrichment.output_path", "data/dataset-enriched.json")?
            // Add in settings from configuration file
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(File::with_name("config/local").required(false)))
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.data.probe_timeout_secs)
    }
}
