use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::executor::{DEFAULT_ROOT_URL, DEFAULT_SERVICE_PATH};
use crate::client::upload::UploadProtocol;
use crate::oauth::DEFAULT_TOKEN_URL;

const LOCAL_CONFIG_FILE: &str = "youtube-partner.toml";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub timeouts: TimeoutsConfig,

    #[serde(default)]
    pub retry: RetryConfig,

    #[serde(default)]
    pub upload: UploadConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_root_url")]
    pub root_url: String,

    #[serde(default = "default_service_path")]
    pub service_path: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Content owner every call acts for unless it names one itself
    #[serde(default)]
    pub on_behalf_of_content_owner: Option<String>,

    #[serde(default)]
    pub proxy: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            root_url: default_root_url(),
            service_path: default_service_path(),
            user_agent: default_user_agent(),
            on_behalf_of_content_owner: None,
            proxy: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_credentials_file")]
    pub credentials_file: PathBuf,

    #[serde(default)]
    pub client_id: Option<String>,

    #[serde(default)]
    pub client_secret: Option<String>,

    #[serde(default = "default_token_url")]
    pub token_url: String,

    /// Static bearer token; disables refresh when set
    #[serde(default)]
    pub access_token: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            credentials_file: default_credentials_file(),
            client_id: None,
            client_secret: None,
            token_url: default_token_url(),
            access_token: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutsConfig {
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self {
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,

    #[serde(default = "default_multiplier")]
    pub multiplier: f64,

    #[serde(default = "default_max_elapsed_secs")]
    pub max_elapsed_secs: u64,

    #[serde(default = "default_true")]
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            multiplier: default_multiplier(),
            max_elapsed_secs: default_max_elapsed_secs(),
            jitter: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    #[serde(default)]
    pub protocol: UploadProtocol,

    #[serde(default = "default_resumable_threshold")]
    pub resumable_threshold_bytes: u64,

    #[serde(default = "default_chunk_size")]
    pub chunk_size_bytes: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            protocol: UploadProtocol::default(),
            resumable_threshold_bytes: default_resumable_threshold(),
            chunk_size_bytes: default_chunk_size(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_root_url() -> String { DEFAULT_ROOT_URL.to_string() }
fn default_service_path() -> String { DEFAULT_SERVICE_PATH.to_string() }
fn default_user_agent() -> String { format!("youtube-partner/{}", env!("CARGO_PKG_VERSION")) }
fn default_token_url() -> String { DEFAULT_TOKEN_URL.to_string() }
fn default_request_timeout() -> u64 { 60 }
fn default_connect_timeout() -> u64 { 20 }
fn default_max_retries() -> u32 { 5 }
fn default_initial_backoff_ms() -> u64 { 500 }
fn default_max_backoff_ms() -> u64 { 32_000 }
fn default_multiplier() -> f64 { 2.0 }
fn default_max_elapsed_secs() -> u64 { 300 }
fn default_true() -> bool { true }
fn default_resumable_threshold() -> u64 { 5 * 1024 * 1024 }
fn default_chunk_size() -> u64 { 8 * 1024 * 1024 }
fn default_log_level() -> String { "info".to_string() }

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("youtube-partner")
}

fn default_credentials_file() -> PathBuf {
    config_dir().join("credentials.json")
}

/// Get default config file path
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.toml")
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Load config from file, or return defaults if not found.
///
/// Loading order:
/// 1. Specified path (if provided)
/// 2. ./youtube-partner.toml (if exists)
/// 3. default_config_path() (usually ~/.config/youtube-partner/config.toml)
pub fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    load_config_with_source(path).map(|(config, _)| config)
}

/// Like [`load_config`], also returning the file the config came from
/// (`None` when built-in defaults are used).
pub fn load_config_with_source(path: Option<PathBuf>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    if let Some(config_path) = path {
        if !config_path.exists() {
            anyhow::bail!("Specified config file not found: {:?}", config_path);
        }
        let config = read_config(&config_path)?;
        tracing::info!("Loaded config from specified path {:?}", config_path);
        return Ok((config, Some(config_path)));
    }

    let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
    if local_config.exists() {
        match read_config(&local_config) {
            Ok(config) => {
                tracing::info!("Loaded config from current directory {:?}", local_config);
                return Ok((config, Some(local_config)));
            }
            Err(e) => {
                tracing::error!(
                    "Failed to load ./{}: {}. Falling back to default path.",
                    LOCAL_CONFIG_FILE,
                    e
                );
            }
        }
    }

    let default_path = default_config_path();
    if default_path.exists() {
        let config = read_config(&default_path)?;
        tracing::info!("Loaded config from default path {:?}", default_path);
        Ok((config, Some(default_path)))
    } else {
        tracing::info!("No config file found, using defaults");
        Ok((Config::default(), None))
    }
}

/// Expand ~ in path to home directory
pub fn expand_path(path: &Path) -> PathBuf {
    if let Some(rest) = path.to_str().and_then(|s| s.strip_prefix("~/")) {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
