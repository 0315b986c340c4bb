use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

/// Runtime settings, read from `USER_ACCOUNTS_*` environment variables.
///
/// | Variable | Default |
/// |----------|---------|
/// | `USER_ACCOUNTS_CHANNEL_BUFFER` | `32` |
/// | `USER_ACCOUNTS_LOG` | `info` |
/// | `USER_ACCOUNTS_SEED_DEMO` | `true` |
///
/// A `.env` file in the working directory is loaded first when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Capacity of each record actor's request channel.
    pub channel_buffer: usize,
    /// Filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Whether the demo binary seeds sample accounts on startup.
    pub seed_demo_data: bool,
    /// The `.env` file that was loaded, if any.
    pub env_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            log_filter: "info".into(),
            seed_demo_data: true,
            env_file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl Config {
    pub const CHANNEL_BUFFER: &'static str = "USER_ACCOUNTS_CHANNEL_BUFFER";
    pub const LOG: &'static str = "USER_ACCOUNTS_LOG";
    pub const SEED_DEMO: &'static str = "USER_ACCOUNTS_SEED_DEMO";

    pub fn from_env() -> Result<Self, ConfigError> {
        let env_file = match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "Loaded .env file");
                Some(path)
            }
            Err(e) if e.not_found() => {
                debug!("No .env file found");
                None
            }
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable .env file");
                None
            }
        };
        let mut cfg = Self::from_lookup(|var| std::env::var(var).ok())?;
        cfg.env_file = env_file;
        Ok(cfg)
    }

    /// Builds a config from any variable source; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Some(value) = lookup(Self::CHANNEL_BUFFER) {
            cfg.channel_buffer = match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: Self::CHANNEL_BUFFER,
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup(Self::LOG) {
            if !value.trim().is_empty() {
                cfg.log_filter = value.trim().to_string();
            }
        }

        if let Some(value) = lookup(Self::SEED_DEMO) {
            cfg.seed_demo_data = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: Self::SEED_DEMO,
                        value,
                    })
                }
            };
        }

        Ok(cfg)
    }
}
