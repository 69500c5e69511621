use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{RuntimeConfig, StoreConfig};

use crate::config::validation::{validate_path, validate_port};

const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 10000;
const DEFAULT_DATABASE_PATH: &str = "data/obsidian_veil_cloud.db";
const DEFAULT_ARTIFACT_PATH: &str = "candidatos_extraterrestres.json";
const DEFAULT_PRODUCER: &str = "detector_extraterrestre.py";
const DEFAULT_SYSTEM_NAME: &str = "Atlas Obsidian Veil";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_host: String,
    pub port: u16,
    pub database_path: String,
    pub busy_timeout_ms: u64,
    pub candidate_artifact_path: String,
    pub candidate_producer: String,
    pub system_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_PORT,
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            busy_timeout_ms: 5000,
            candidate_artifact_path: DEFAULT_ARTIFACT_PATH.to_string(),
            candidate_producer: DEFAULT_PRODUCER.to_string(),
            system_name: DEFAULT_SYSTEM_NAME.to_string(),
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("VEIL_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        Self::load_from(Path::new(&path), |key| env::var(key).ok()).await
    }

    /// Loads `file_path` (defaults when absent), then applies overrides from `lookup`.
    pub async fn load_from(
        file_path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            toml::from_str(&content)?
        } else {
            warn!("{} not found, using defaults", file_path.display());
            AppConfig::default()
        };
        config.apply_overrides(lookup);
        config.normalize();
        config.resolve_paths(base_dir);
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if self.bind_host.trim().is_empty() {
            self.bind_host = DEFAULT_BIND_HOST.to_string();
        }
        if self.candidate_producer.trim().is_empty() {
            self.candidate_producer = DEFAULT_PRODUCER.to_string();
        }
        if self.system_name.trim().is_empty() {
            self.system_name = DEFAULT_SYSTEM_NAME.to_string();
        }
        if self.candidate_artifact_path.trim().is_empty() {
            self.candidate_artifact_path = DEFAULT_ARTIFACT_PATH.to_string();
        }
        self.bind_host = self.bind_host.trim().to_string();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.database_path = resolve_path(base, &self.database_path);
        self.candidate_artifact_path = resolve_path(base, &self.candidate_artifact_path);
    }

    pub fn validate(&self) -> Result<()> {
        validate_port(self.port)?;
        validate_path("database_path", &self.database_path)?;
        self.bind_addr()
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind address: {}", err))?;
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr(),
            system_name: self.system_name.clone(),
            candidate_artifact_path: PathBuf::from(&self.candidate_artifact_path),
            candidate_producer: self.candidate_producer.clone(),
        }
    }

    pub fn to_store_config(&self) -> StoreConfig {
        StoreConfig {
            database_path: PathBuf::from(&self.database_path),
            busy_timeout_ms: self.busy_timeout_ms,
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("PORT") {
            self.port = value.trim().parse().unwrap_or(self.port);
        }
        if let Some(value) = lookup("VEIL_BIND_HOST") {
            self.bind_host = value;
        }
        if let Some(value) = lookup("VEIL_DATABASE_PATH") {
            self.database_path = value;
        }
        if let Some(value) = lookup("VEIL_CANDIDATE_ARTIFACT_PATH") {
            self.candidate_artifact_path = value;
        }
        if let Some(value) = lookup("VEIL_SYSTEM_NAME") {
            self.system_name = value;
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
