//! Configuration management for the bureau usage dashboard

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest page size a request may ask for
pub const MAX_PAGE_SIZE: usize = 1000;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Report data source configuration
    #[serde(default)]
    pub data: DataConfig,

    /// Report presentation configuration
    #[serde(default)]
    pub report: ReportConfig,

    /// Response cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Which report data source backs the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
    /// Built-in sample rows
    #[default]
    Stub,
    /// Remote reporting API
    Http,
}

/// Report data source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Source kind
    #[serde(default)]
    pub source: DataSourceKind,

    /// Base URL of the remote reporting API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: DataSourceKind::default(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Report presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Page heading
    #[serde(default = "default_title")]
    pub title: String,

    /// Rows per page when none is requested
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Page sizes offered by the page size selector
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            default_page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

/// Response cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache fetched reports per request
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,

    /// Most reports held at once; the oldest is evicted first
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: usize,

    /// Seconds a cached report stays fresh
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            max_entries: default_cache_max_entries(),
            ttl_secs: default_cache_ttl_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format (`json` or `text`)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_title() -> String {
    "Bureau Usage Report".to_string()
}

const fn default_page_size() -> usize {
    10
}

fn default_page_size_options() -> Vec<usize> {
    vec![10, 20, 30, 40, 50]
}

const fn default_cache_enabled() -> bool {
    true
}

const fn default_cache_max_entries() -> usize {
    256
}

const fn default_cache_ttl_secs() -> u64 {
    300
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Config {
    /// Load configuration from `config.*` in the working directory and
    /// `BUREAU_*` environment variables (`__` separates nested keys, e.g.
    /// `BUREAU_SERVER__PORT`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded, parsed or validated.
    pub fn load() -> crate::Result<Self> {
        Self::build(config::Config::builder().add_source(
            config::File::with_name("config").required(false),
        ))
    }

    /// Load configuration from an explicit file, still honoring the
    /// environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or invalid.
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        Self::build(
            config::Config::builder().add_source(config::File::from(path.as_ref()).required(true)),
        )
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> crate::Result<Self> {
        let config = builder
            .add_source(config::Environment::with_prefix("BUREAU").separator("__"))
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field.
    pub fn validate(&self) -> crate::Result<()> {
        let report = &self.report;
        if report
            .page_size_options
            .iter()
            .any(|&size| size == 0 || size > MAX_PAGE_SIZE)
        {
            return Err(crate::Error::Validation {
                field: "report.page_size_options".to_string(),
                message: format!("page sizes must be between 1 and {MAX_PAGE_SIZE}"),
            });
        }
        if !report.page_size_options.contains(&report.default_page_size) {
            return Err(crate::Error::Validation {
                field: "report.default_page_size".to_string(),
                message: format!(
                    "{} is not one of {:?}",
                    report.default_page_size, report.page_size_options
                ),
            });
        }
        if self.cache.enabled && self.cache.max_entries == 0 {
            return Err(crate::Error::Validation {
                field: "cache.max_entries".to_string(),
                message: "must be positive when the cache is enabled".to_string(),
            });
        }
        if self.data.source == DataSourceKind::Http
            && self.data.base_url.as_deref().is_none_or(str::is_empty)
        {
            return Err(crate::Error::Validation {
                field: "data.base_url".to_string(),
                message: "required when data.source is \"http\"".to_string(),
            });
        }
        Ok(())
    }

    /// Socket address string the server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
