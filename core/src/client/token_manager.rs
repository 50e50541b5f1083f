//! Token Manager - shared, refresh-serialising credential cache

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use super::error::ApiError;
use crate::credentials::{store_refreshed_token, TokenData};

/// Seconds before expiry at which a cached token is considered stale.
const DEFAULT_EXPIRY_SKEW_SECS: i64 = 300;

/// Supplies bearer tokens to the executor.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn get_token(&self) -> Result<String, ApiError>;

    /// Drop the cached token so the next `get_token` obtains a new one.
    async fn invalidate(&self) {}
}

/// Obtains a new token, typically through an OAuth refresh grant.
#[async_trait]
pub trait TokenRefresher: Send + Sync {
    async fn refresh(&self, current: Option<&TokenData>) -> Result<TokenData, ApiError>;
}

/// A fixed bearer token that is never refreshed.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenProvider for StaticToken {
    async fn get_token(&self) -> Result<String, ApiError> {
        if self.0.is_empty() {
            return Err(ApiError::Auth("empty access token".to_string()));
        }
        Ok(self.0.clone())
    }
}

/// Caches one token and refreshes it at most once at a time.
///
/// Readers share the `RwLock`. A caller that finds the token stale takes
/// `refresh_lock` and re-checks the cache before refreshing, so callers that
/// queued behind an in-flight refresh reuse its result.
pub struct TokenManager {
    cached: RwLock<Option<TokenData>>,
    refresh_lock: Mutex<()>,
    refresher: Arc<dyn TokenRefresher>,
    persist_path: Option<PathBuf>,
    expiry_skew_secs: i64,
}

impl TokenManager {
    pub fn new(refresher: Arc<dyn TokenRefresher>, initial: Option<TokenData>) -> Self {
        Self {
            cached: RwLock::new(initial),
            refresh_lock: Mutex::new(()),
            refresher,
            persist_path: None,
            expiry_skew_secs: DEFAULT_EXPIRY_SKEW_SECS,
        }
    }

    /// Write refreshed tokens back to this credentials file.
    pub fn with_persistence(mut self, path: PathBuf) -> Self {
        self.persist_path = Some(path);
        self
    }

    pub fn with_expiry_skew(mut self, secs: i64) -> Self {
        self.expiry_skew_secs = secs;
        self
    }

    /// Snapshot of the cached token.
    pub async fn current(&self) -> Option<TokenData> {
        self.cached.read().await.clone()
    }

    async fn fresh_cached(&self) -> Option<String> {
        self.cached
            .read()
            .await
            .as_ref()
            .filter(|t| t.is_fresh(self.expiry_skew_secs))
            .map(|t| t.access_token.clone())
    }
}

#[async_trait]
impl TokenProvider for TokenManager {
    async fn get_token(&self) -> Result<String, ApiError> {
        if let Some(token) = self.fresh_cached().await {
            return Ok(token);
        }

        let _guard = self.refresh_lock.lock().await;

        if let Some(token) = self.fresh_cached().await {
            tracing::debug!("Token refreshed by a concurrent caller");
            return Ok(token);
        }

        let current = self.cached.read().await.clone();
        tracing::info!("Access token missing or expiring soon, refreshing...");

        let refreshed = match self.refresher.refresh(current.as_ref()).await {
            Ok(token) => token,
            Err(e) => {
                tracing::error!("Token refresh failed: {}", e);
                return Err(e);
            }
        };

        if let Some(path) = &self.persist_path {
            if let Err(e) = store_refreshed_token(path, &refreshed) {
                tracing::warn!("Failed to save refreshed token: {}", e);
            }
        }

        let access_token = refreshed.access_token.clone();
        *self.cached.write().await = Some(refreshed);
        Ok(access_token)
    }

    async fn invalidate(&self) {
        if let Some(token) = self.cached.write().await.as_mut() {
            token.expiry_timestamp = 0;
        }
    }
}
