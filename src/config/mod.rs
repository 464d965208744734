use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;

/// Log configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
  /// Log file path, if not set, logs will be printed to stdout
  pub file: Option<String>,
  /// Log level, default is "info"
  #[serde(default = "default_log_level")]
  pub level: String,
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      file: None,
      level: default_log_level(),
    }
  }
}

/// PriceDB configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
  /// Server listening address (HTTP)
  #[serde(default = "default_server_addr")]
  pub server_addr: String,

  /// Log configuration
  #[serde(default)]
  pub log: LogConfig,

  /// Initial catalogue, item name to whole-unit price
  #[serde(default = "default_seed")]
  pub seed: BTreeMap<String, u64>,
}

fn default_server_addr() -> String {
  "127.0.0.1:8000".to_string()
}

fn default_seed() -> BTreeMap<String, u64> {
  BTreeMap::from([("shoes".to_string(), 50), ("socks".to_string(), 5)])
}

impl Default for Config {
  fn default() -> Self {
    Self {
      server_addr: default_server_addr(),
      log: LogConfig::default(),
      seed: default_seed(),
    }
  }
}

impl Config {
  /// Load configuration from TOML file
  pub fn from_file(path: &str) -> anyhow::Result<Self> {
    let config_str = fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file '{}'", path))?;
    Self::parse(&config_str).with_context(|| format!("Failed to parse config file '{}'", path))
  }

  /// Parse configuration from TOML text
  pub fn parse(config_str: &str) -> anyhow::Result<Self> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
  }

  fn validate(&self) -> anyhow::Result<()> {
    if self.seed.keys().any(String::is_empty) {
      anyhow::bail!("seed item names must not be empty");
    }
    Ok(())
  }
}
