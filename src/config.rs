use serde::{Deserialize, Serialize};

use std::{env, fs, net::SocketAddr, path::Path};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                name: "host".to_string(),
                reason: format!("'{}' is not an IP address", self.host),
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

fn load_from_file(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}

fn load_from_env() -> Result<Config, ConfigError> {
    let host = env::var("NOTES_API_HOST").unwrap_or_else(|_| default_host());

    let port = match env::var("NOTES_API_PORT") {
        Ok(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
            name: "NOTES_API_PORT".to_string(),
            reason: e.to_string(),
        })?,
        Err(_) => default_port(),
    };

    Ok(Config { host, port })
}

pub fn load_config() -> Result<Config, ConfigError> {
    // Retrieve env variable
    let config_path = env::var("NOTES_API_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    load_config_in(Path::new("."), &config_path)
}

/// Walks the config cascade with relative file names resolved against `dir`.
fn load_config_in(dir: &Path, config_path: &str) -> Result<Config, ConfigError> {
    // Try env path
    let requested = dir.join(config_path);
    if requested.exists() {
        return load_from_file(&requested);
    }

    // Fallback to config.yaml
    let default_file = dir.join("config.yaml");
    if default_file.exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to 'config.yaml'",
            config_path
        );
        return load_from_file(&default_file);
    }

    // Fallback to config.example.yaml
    let example_file = dir.join("config.example.yaml");
    if example_file.exists() {
        tracing::warn!(
            "Config file '{}' and 'config.yaml' not found, falling back to 'config.example.yaml'\
             \n This file should only be used for local runs",
            config_path
        );
        return load_from_file(&example_file);
    }

    // Fallback to environment variables
    tracing::info!("No config file found, loading configuration from environment variables");
    load_from_env()
}
