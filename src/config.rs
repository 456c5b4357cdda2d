use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

use crate::error::{ShellError, ShellResult};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ShellConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EngineConfig {
    /// Upper bound for one hardware account-info request
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
    /// Drop results of cycles that finish after a newer one was published
    #[serde(default)]
    pub reject_stale_cycles: bool,
}

fn default_probe_timeout_ms() -> u64 {
    5_000
}

impl EngineConfig {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            probe_timeout_ms: default_probe_timeout_ms(),
            reject_stale_cycles: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ShellConfig {
    pub fn load(path: &str) -> ShellResult<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| ShellError::ConfigError(format!("cannot read {}: {}", path, e)))?;
        toml::from_str(&s).map_err(|e| ShellError::ConfigError(format!("{}: {}", path, e)))
    }

    pub fn load_or_default(path: &str) -> Self {
        if std::path::Path::new(path).exists() {
            match Self::load(path) {
                Ok(c) => {
                    info!("Config loaded from {}", path);
                    c
                }
                Err(e) => {
                    warn!("{}. Using defaults.", e);
                    Self::default()
                }
            }
        } else {
            info!("Config file not found at '{}'. Creating default.", path);
            let config = Self::default();
            if let Ok(s) = toml::to_string_pretty(&config) {
                let _ = std::fs::write(path, s);
            }
            config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ShellConfig = toml::from_str("[engine]\nreject_stale_cycles = true\n").unwrap();
        assert!(config.engine.reject_stale_cycles);
        assert_eq!(config.engine.probe_timeout_ms, 5_000);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_missing_file_writes_default() {
        let path = std::env::temp_dir().join(format!("wallet-shell-{}.toml", uuid::Uuid::new_v4()));
        let path = path.to_string_lossy().to_string();

        let config = ShellConfig::load_or_default(&path);
        assert!(!config.engine.reject_stale_cycles);
        assert!(std::path::Path::new(&path).exists());

        let reloaded = ShellConfig::load_or_default(&path);
        assert_eq!(reloaded.engine.probe_timeout(), Duration::from_millis(5_000));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let path = std::env::temp_dir().join(format!("wallet-shell-{}.toml", uuid::Uuid::new_v4()));
        let path = path.to_string_lossy().to_string();
        std::fs::write(&path, "[engine]\nprobe_timeout_ms = \"soon\"\n").unwrap();

        assert!(matches!(ShellConfig::load(&path), Err(ShellError::ConfigError(_))));
        let config = ShellConfig::load_or_default(&path);
        assert_eq!(config.engine.probe_timeout_ms, 5_000);
        let _ = std::fs::remove_file(&path);
    }
}
