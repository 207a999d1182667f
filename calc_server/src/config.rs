//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `--config <path>` on the command line
//! 2. `$CALC_SERVER_CONFIG` environment variable
//! 3. `./calc_server.toml`
//! 4. Built-in defaults (everything is optional)

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

const CONFIG_ENV: &str = "CALC_SERVER_CONFIG";
const CONFIG_FILE: &str = "calc_server.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind_addr: String,
    /// Allow cross-origin requests from any origin (browser front ends).
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:5000".into(),
            cors_permissive: true,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.bind_addr))
    }
}

/// Load config. An explicit path must exist; otherwise falls back to defaults
/// when no config file is found.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(p) = explicit {
        return load_from(p);
    }

    let path = config_path();
    if path.exists() {
        return load_from(&path);
    }

    Ok(Config::default())
}

fn load_from(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Resolve the implicit config file path.
fn config_path() -> PathBuf {
    match std::env::var(CONFIG_ENV) {
        Ok(p) => PathBuf::from(p),
        Err(_) => PathBuf::from(CONFIG_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.bind_addr, "127.0.0.1:5000");
        assert!(config.server.cors_permissive);
        assert_eq!(config.server.socket_addr().unwrap().port(), 5000);
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
[server]
bind_addr = "0.0.0.0:8080"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.bind_addr, "0.0.0.0:8080");
        // Other fields should be defaults
        assert!(config.server.cors_permissive);
    }

    #[test]
    fn test_parse_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.bind_addr, "127.0.0.1:5000");
    }

    #[test]
    fn test_invalid_bind_addr() {
        let server = ServerConfig {
            bind_addr: "not-an-address".into(),
            cors_permissive: false,
        };
        assert!(server.socket_addr().is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.toml");
        std::fs::write(&path, "[server]\ncors_permissive = false\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(!config.server.cors_permissive);
        assert_eq!(config.server.bind_addr, "127.0.0.1:5000");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
