//! Credential file management
//!
//! The credentials file is a small JSON document holding the OAuth client
//! identity and the current token pair. It is read at startup and rewritten
//! whenever the access token is refreshed.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Token data structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenData {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: i64,
    /// Unix timestamp (seconds) at which `access_token` stops being valid.
    #[serde(default)]
    pub expiry_timestamp: i64,
}

impl TokenData {
    pub fn new(access_token: String, refresh_token: Option<String>, expires_in: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            access_token,
            refresh_token,
            expires_in,
            expiry_timestamp: now + expires_in,
        }
    }

    /// True while the token stays valid for at least `skew_secs` more seconds.
    pub fn is_fresh(&self, skew_secs: i64) -> bool {
        self.expiry_timestamp > chrono::Utc::now().timestamp() + skew_secs
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    pub token: TokenData,
}

/// Load credentials from file path
pub fn load_credentials(path: &Path) -> anyhow::Result<Credentials> {
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read credentials {:?}: {}", path, e))?;
    let credentials: Credentials = serde_json::from_str(&content)?;
    Ok(credentials)
}

/// Save credentials to file, creating parent directories as needed
pub fn save_credentials(path: &Path, credentials: &Credentials) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let content = serde_json::to_string_pretty(credentials)?;
    fs::write(path, content)?;
    Ok(())
}

/// Rewrite only the token section of an existing credentials file.
///
/// Unknown fields in the file are preserved.
pub fn store_refreshed_token(path: &Path, token: &TokenData) -> anyhow::Result<()> {
    let mut content: serde_json::Value = serde_json::from_str(&fs::read_to_string(path)?)?;

    content["token"]["access_token"] = serde_json::Value::String(token.access_token.clone());
    content["token"]["expires_in"] = serde_json::Value::Number(token.expires_in.into());
    content["token"]["expiry_timestamp"] = serde_json::Value::Number(token.expiry_timestamp.into());
    if let Some(refresh) = &token.refresh_token {
        content["token"]["refresh_token"] = serde_json::Value::String(refresh.clone());
    }

    fs::write(path, serde_json::to_string_pretty(&content)?)?;
    Ok(())
}
