//! Client module - the generic request engine behind every API method

pub mod descriptor;
pub mod error;
pub mod executor;
pub mod params;
pub mod retry;
pub mod token_manager;
pub mod transport;
pub mod upload;
pub mod url_template;

use std::sync::Arc;
use tokio::time::Duration;

pub use descriptor::{HttpMethod, MethodDescriptor};
pub use error::{ApiError, ErrorKind};
pub use executor::{Endpoints, Executor, ResolvedRequest};
pub use params::{CallParams, Media, ParamValue};
pub use retry::RetryPolicy;
pub use token_manager::{StaticToken, TokenManager, TokenProvider, TokenRefresher};
pub use transport::{ReqwestTransport, Transport, TransportOptions};
pub use upload::{UploadOptions, UploadProtocol};

use crate::config::{expand_path, Config};
use crate::credentials::load_credentials;
use crate::oauth::OAuthClient;

/// Build the token provider described by `config`.
///
/// A configured static access token wins; otherwise the credentials file is
/// loaded and wrapped in a refreshing [`TokenManager`].
pub fn token_provider_from_config(config: &Config) -> anyhow::Result<Arc<dyn TokenProvider>> {
    if let Some(token) = config.auth.access_token.as_deref().filter(|t| !t.is_empty()) {
        tracing::info!("Using static access token from config");
        return Ok(Arc::new(StaticToken::new(token)));
    }

    let path = expand_path(&config.auth.credentials_file);
    let credentials = load_credentials(&path)?;

    let client_id = config
        .auth
        .client_id
        .clone()
        .or(credentials.client_id)
        .ok_or_else(|| anyhow::anyhow!("No OAuth client_id in config or {:?}", path))?;
    let client_secret = config
        .auth
        .client_secret
        .clone()
        .or(credentials.client_secret)
        .ok_or_else(|| anyhow::anyhow!("No OAuth client_secret in config or {:?}", path))?;

    let oauth = OAuthClient::new(
        client_id,
        client_secret,
        Some(config.auth.token_url.clone()),
        config.timeouts.request_timeout,
    )?;

    tracing::debug!("Loaded credentials from {:?}", path);
    Ok(Arc::new(
        TokenManager::new(Arc::new(oauth), Some(credentials.token)).with_persistence(path),
    ))
}

/// Build a ready-to-use executor from configuration.
pub fn executor_from_config(config: &Config) -> anyhow::Result<Executor> {
    let transport = ReqwestTransport::new(&TransportOptions {
        user_agent: config.api.user_agent.clone(),
        connect_timeout: Duration::from_secs(config.timeouts.connect_timeout),
        request_timeout: Duration::from_secs(config.timeouts.request_timeout),
        proxy_url: config.api.proxy.clone(),
    })?;
    let tokens = token_provider_from_config(config)?;

    let retry = RetryPolicy {
        max_retries: config.retry.max_retries,
        initial_backoff: Duration::from_millis(config.retry.initial_backoff_ms),
        max_backoff: Duration::from_millis(config.retry.max_backoff_ms),
        multiplier: config.retry.multiplier,
        max_elapsed: Duration::from_secs(config.retry.max_elapsed_secs),
        jitter: config.retry.jitter,
    };

    let upload = UploadOptions {
        protocol: config.upload.protocol,
        resumable_threshold: config.upload.resumable_threshold_bytes,
        chunk_size: config.upload.chunk_size_bytes,
    };

    Ok(Executor::new(Arc::new(transport), tokens)
        .with_endpoints(Endpoints::new(&config.api.root_url, &config.api.service_path))
        .with_retry_policy(retry)
        .with_upload_options(upload)
        .with_timeout(Duration::from_secs(config.timeouts.request_timeout)))
}
