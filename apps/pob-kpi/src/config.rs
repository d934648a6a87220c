//! # Server Configuration
//!
//! Settings are resolved in this order, first hit wins:
//!
//! 1. CLI flag (`--host`, `--port`)
//! 2. Environment variable (`POB_KPI_RATE_LIMIT`, `POB_KPI_CORS_ORIGINS`)
//! 3. TOML file passed with `--config`
//! 4. Built-in default
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 9000
//! rate_limit = 50
//! cors_origins = ["http://localhost:3000"]
//! ```

use pob_kpi_core::PobError;
use serde::Deserialize;
use std::path::Path;

/// Log output format: `text` (default) or `json`.
pub const ENV_LOG_FORMAT: &str = "POB_KPI_LOG_FORMAT";
/// Comma-separated allowed origins, or `*`.
pub const ENV_CORS_ORIGINS: &str = "POB_KPI_CORS_ORIGINS";
/// Requests per second; `0` disables limiting.
pub const ENV_RATE_LIMIT: &str = "POB_KPI_RATE_LIMIT";
/// Bearer key required on every route except `/health`.
pub const ENV_API_KEY: &str = "POB_KPI_API_KEY";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_RATE_LIMIT: u32 = 100;

/// Upper bound on a config file, in bytes.
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

// =============================================================================
// FILE CONFIG
// =============================================================================

/// Contents of the optional TOML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub rate_limit: Option<u32>,
    pub cors_origins: Option<Vec<String>>,
}

impl FileConfig {
    /// Parse TOML text.
    pub fn parse(text: &str) -> Result<Self, PobError> {
        toml::from_str(text).map_err(|e| PobError::Serialization(format!("Config: {}", e)))
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, PobError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            PobError::Io(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(PobError::Io(format!(
                "Config file {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            PobError::Io(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Self::parse(&text)
    }
}

// =============================================================================
// RESOLVED CONFIG
// =============================================================================

/// Fully resolved server settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Requests per second, `0` when disabled.
    pub rate_limit: u32,
    /// Raw origin list (`*` or comma-separated). `None` means localhost only.
    pub cors_origins: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            rate_limit: DEFAULT_RATE_LIMIT,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// Resolve against the process environment.
    #[must_use]
    pub fn resolve(host: Option<String>, port: Option<u16>, file: &FileConfig) -> Self {
        Self::resolve_with(host, port, file, |key| std::env::var(key).ok())
    }

    /// Resolve with an explicit environment lookup.
    #[must_use]
    pub fn resolve_with(
        host: Option<String>,
        port: Option<u16>,
        file: &FileConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let rate_limit = match env(ENV_RATE_LIMIT) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid {}={:?}", ENV_RATE_LIMIT, raw);
                file.rate_limit.unwrap_or(DEFAULT_RATE_LIMIT)
            }),
            None => file.rate_limit.unwrap_or(DEFAULT_RATE_LIMIT),
        };

        let cors_origins = env(ENV_CORS_ORIGINS)
            .filter(|s| !s.trim().is_empty())
            .or_else(|| {
                file.cors_origins
                    .as_ref()
                    .filter(|list| !list.is_empty())
                    .map(|list| list.join(","))
            });

        Self {
            host: host
                .or_else(|| file.host.clone())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: port.or(file.port).unwrap_or(DEFAULT_PORT),
            rate_limit,
            cors_origins,
        }
    }

    /// Socket address to bind.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// TESTS
// =============================================================================
