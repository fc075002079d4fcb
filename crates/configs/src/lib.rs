use std::{fmt, path::Path, str::FromStr};

use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub scores: ScoresConfig,
}

/// Selects how client assets are served.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Serve the client sources directly, re-reading `index.html` per request.
    #[default]
    Development,
    /// Serve the prebuilt bundle from `assets.dist_dir`.
    Production,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            other => Err(anyhow!("unknown mode '{other}', expected development or production")),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Development => "development",
            Mode::Production => "production",
        })
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    #[serde(default)]
    pub mode: Mode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            worker_threads: None,
            mode: Mode::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AssetsConfig {
    /// Client source root used in development mode.
    #[serde(default = "default_client_dir")]
    pub client_dir: String,
    /// Built bundle served in production mode.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
    /// Entry script referenced from the client's `index.html`.
    #[serde(default = "default_dev_entry")]
    pub dev_entry: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            client_dir: default_client_dir(),
            dist_dir: default_dist_dir(),
            dev_entry: default_dev_entry(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScoresConfig {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

impl Default for ScoresConfig {
    fn default() -> Self {
        Self { default_limit: default_limit() }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3001
}

fn default_client_dir() -> String {
    "client".into()
}

fn default_dist_dir() -> String {
    "dist/public".into()
}

fn default_dev_entry() -> String {
    "/src/main.tsx".into()
}

fn default_limit() -> usize {
    10
}

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

/// Load `CONFIG_PATH` (default `config.toml`); a missing file yields defaults.
pub fn load_default() -> Result<AppConfig> {
    let path = config_path();
    if Path::new(&path).exists() {
        load_from_file(&path)
    } else {
        Ok(AppConfig::default())
    }
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content).map_err(|e| anyhow!("{path}: {e}"))
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// File (if any), then environment overrides, then validation.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.apply_env(|key| std::env::var(key).ok())?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Apply `SERVER_HOST`, `SERVER_PORT`, `APP_ENV` and `TOKIO_WORKER_THREADS`
    /// from `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port =
                port.trim().parse().map_err(|e| anyhow!("SERVER_PORT '{port}': {e}"))?;
        }
        if let Some(mode) = lookup("APP_ENV") {
            self.server.mode = mode.parse()?;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS") {
            let threads =
                w.trim().parse().map_err(|e| anyhow!("TOKIO_WORKER_THREADS '{w}': {e}"))?;
            self.server.worker_threads = Some(threads);
        }
        Ok(())
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.assets.validate()?;
        self.scores.validate()?;
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if self.worker_threads == Some(0) {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl AssetsConfig {
    fn validate(&self) -> Result<()> {
        if self.client_dir.trim().is_empty() || self.dist_dir.trim().is_empty() {
            return Err(anyhow!("assets.client_dir and assets.dist_dir must not be empty"));
        }
        if !self.dev_entry.starts_with('/') {
            return Err(anyhow!("assets.dev_entry must start with '/'"));
        }
        Ok(())
    }
}

impl ScoresConfig {
    fn validate(&self) -> Result<()> {
        if self.default_limit == 0 {
            return Err(anyhow!("scores.default_limit must be >= 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = load_from_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.server.port, 3001);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.mode, Mode::Development);
        assert_eq!(cfg.assets.dist_dir, "dist/public");
        assert_eq!(cfg.scores.default_limit, 10);
        assert_eq!(cfg.bind_addr(), "0.0.0.0:3001");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = load_from_str(
            r#"
            [server]
            port = 8080
            mode = "production"

            [scores]
            default_limit = 25
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.mode, Mode::Production);
        assert_eq!(cfg.assets.client_dir, "client");
        assert_eq!(cfg.scores.default_limit, 25);
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        assert!(load_from_str("[server]\nmode = \"staging\"").is_err());
    }

    #[test]
    fn env_overrides_file_values() {
        let mut cfg = AppConfig::default();
        cfg.apply_env(env(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "9000"),
            ("APP_ENV", "Production"),
        ]))
            .unwrap();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9000");
        assert_eq!(cfg.server.mode, Mode::Production);
    }

    #[test]
    fn bad_env_port_is_rejected() {
        let mut cfg = AppConfig::default();
        assert!(cfg.apply_env(env(&[("SERVER_PORT", "lots")])).is_err());
    }

    #[test]
    fn validation_rules() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.scores.default_limit = 0;
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.assets.dev_entry = "src/main.tsx".into();
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.server.host = "  ".into();
        cfg.server.worker_threads = Some(0);
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn mode_parses_short_forms() {
        assert_eq!("dev".parse::<Mode>().unwrap(), Mode::Development);
        assert_eq!(" PROD ".parse::<Mode>().unwrap(), Mode::Production);
        assert_eq!(Mode::Production.to_string(), "production");
    }
}
