use anyhow::{bail, Context};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalogs: CatalogsConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is not set
    pub filter: String,
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogsConfig {
    /// External catalog file; the embedded catalogs are used when absent
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Sessions untouched for this long are dropped
    pub idle_timeout_minutes: u32,
}

impl SessionConfig {
    pub fn idle_timeout(&self) -> anyhow::Result<chrono::Duration> {
        if self.idle_timeout_minutes == 0 {
            bail!("session.idle_timeout_minutes must be greater than zero");
        }
        chrono::Duration::try_minutes(i64::from(self.idle_timeout_minutes))
            .context("session.idle_timeout_minutes is out of range")
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            idle_timeout_minutes: 30,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[logging]
filter = "info"
dir = "logs"

[session]
idle_timeout_minutes = 30
"#;

/// Find config.toml next to the executable (for production)
pub fn find_config_file() -> Option<PathBuf> {
    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    config_path.exists().then_some(config_path)
}

/// Load configuration from the given config.toml
///
/// Falls back to the embedded default config when no file is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str(&contents)?
        }
        None => toml::from_str(DEFAULT_CONFIG)?,
    };
    Ok(config)
}

/// Resolve a configured path
/// Relative paths are resolved against the executable directory
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    // Fallback: use relative to current directory
    PathBuf::from(configured)
}
