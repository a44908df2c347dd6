//! Configuration management for the Sui submitter
//!
//! Loads configuration from TOML files with environment variable substitution.

use crate::types::ExecuteTransactionRequestType;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "SUI_SUBMITTER_CONFIG";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub network: NetworkConfig,
    pub signer: SignerConfig,
    #[serde(default)]
    pub execution: ExecutionConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    pub full_node_url: String,
    pub faucet_url: Option<String>,
    #[serde(default)]
    pub skip_data_validation: bool,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignerConfig {
    /// Name of the environment variable holding the hex or base64 private key
    pub private_key_env: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecutionConfig {
    #[serde(default)]
    pub request_type: ExecuteTransactionRequestType,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsConfig {
    #[serde(default)]
    pub enabled: bool,
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Settings {
    /// Load settings from `path`, or from the file named by
    /// `SUI_SUBMITTER_CONFIG`, or from `config/default.toml`
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => env::var(CONFIG_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("config/default.toml")),
        };

        let config_str = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::parse(&config_str)
    }

    /// Parse settings from TOML text
    pub fn parse(config_str: &str) -> Result<Self> {
        // Substitute environment variables
        let config_str = substitute_env_vars(config_str);

        let settings: Settings =
            toml::from_str(&config_str).with_context(|| "Failed to parse configuration")?;

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        let url = self.network.full_node_url.trim();
        if url.is_empty() {
            anyhow::bail!("network.full_node_url must be set");
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!("network.full_node_url must be an http(s) URL: {}", url);
        }

        if self.network.request_timeout_secs == 0 {
            anyhow::bail!("network.request_timeout_secs must be greater than zero");
        }

        if self.signer.private_key_env.is_empty() {
            anyhow::bail!("signer.private_key_env must name an environment variable");
        }

        if self.network.faucet_url.is_none() {
            tracing::warn!("No faucet URL configured - faucet requests will fail");
        }

        Ok(())
    }
}

/// Substitute environment variables in the format ${VAR_NAME}
fn substitute_env_vars(input: &str) -> String {
    lazy_static::lazy_static! {
        static ref ENV_VAR: regex::Regex =
            regex::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid env var pattern");
    }

    ENV_VAR
        .replace_all(input, |caps: &regex::Captures| {
            env::var(&caps[1]).unwrap_or_default()
        })
        .into_owned()
}
