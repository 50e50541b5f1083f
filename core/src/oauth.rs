//! OAuth refresh-token grant against Google's token endpoint

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::error::ApiError;
use crate::client::token_manager::TokenRefresher;
use crate::credentials::TokenData;

pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i64,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// OAuth client identity used for refresh grants.
#[derive(Clone)]
pub struct OAuthClient {
    client_id: String,
    client_secret: String,
    token_url: String,
    http_client: reqwest::Client,
}

impl OAuthClient {
    pub fn new(
        client_id: String,
        client_secret: String,
        token_url: Option<String>,
        timeout_secs: u64,
    ) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client_id,
            client_secret,
            token_url: token_url.unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
            http_client,
        })
    }

    /// Refresh access token using refresh_token
    pub async fn refresh_access_token(&self, refresh_token: &str) -> anyhow::Result<TokenResponse> {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ];

        tracing::debug!("Refreshing token...");

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await?;

        if response.status().is_success() {
            let token_data = response.json::<TokenResponse>().await?;
            tracing::debug!("Token refresh successful, expires_in={}s", token_data.expires_in);
            Ok(token_data)
        } else {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Token refresh failed ({}): {}", status, error_text)
        }
    }
}

#[async_trait]
impl TokenRefresher for OAuthClient {
    async fn refresh(&self, current: Option<&TokenData>) -> Result<TokenData, ApiError> {
        let refresh_token = current
            .and_then(|t| t.refresh_token.clone())
            .ok_or_else(|| ApiError::Auth("no refresh token available".to_string()))?;

        let response = self
            .refresh_access_token(&refresh_token)
            .await
            .map_err(|e| ApiError::Auth(e.to_string()))?;

        // Google only rotates the refresh token occasionally.
        let refresh_token = response.refresh_token.or(Some(refresh_token));
        Ok(TokenData::new(
            response.access_token,
            refresh_token,
            response.expires_in,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_defaults() {
        let parsed: TokenResponse =
            serde_json::from_str(r#"{"access_token":"ya29.x","expires_in":3599}"#).unwrap();
        assert_eq!(parsed.access_token, "ya29.x");
        assert_eq!(parsed.expires_in, 3599);
        assert!(parsed.refresh_token.is_none());
        assert_eq!(parsed.token_type, "");
    }

    #[tokio::test]
    async fn test_refresh_without_refresh_token_is_auth_error() {
        let client = OAuthClient::new("id".into(), "secret".into(), None, 5).unwrap();
        let token = TokenData::new("expired".into(), None, 0);
        let err = client.refresh(Some(&token)).await.unwrap_err();
        assert!(matches!(err, ApiError::Auth(_)));
    }
}
