use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::Mutex;

pub const IBM_IAM_TOKEN_URL: &str = "https://iam.cloud.ibm.com/identity/token";
const API_KEY_GRANT: &str = "urn:ibm:params:oauth:grant-type:apikey";
// Tokens are refreshed this long before IBM says they expire.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, thiserror::Error)]
pub enum IamError {
    #[error("token request failed: {0}")]
    RequestFailed(String),
    #[error("token rejected: {0}")]
    Rejected(String),
    #[error("invalid token response: {0}")]
    InvalidResponse(String),
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

struct CachedToken {
    value: String,
    refresh_at: Instant,
}

/// Exchanges an IBM Cloud API key for a bearer token and caches it until
/// shortly before expiry. Concurrent callers share one refresh.
pub struct IamTokenProvider {
    client: reqwest::Client,
    token_url: String,
    api_key: String,
    cached: Mutex<Option<CachedToken>>,
}

impl IamTokenProvider {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self::with_token_url(client, api_key, IBM_IAM_TOKEN_URL)
    }

    pub fn with_token_url(
        client: reqwest::Client,
        api_key: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            token_url: token_url.into(),
            api_key: api_key.into(),
            cached: Mutex::new(None),
        }
    }

    pub async fn bearer_token(&self) -> Result<String, IamError> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.refresh_at {
                return Ok(token.value.clone());
            }
        }

        let response = self
            .client
            .post(&self.token_url)
            .header("Accept", "application/json")
            .form(&[("grant_type", API_KEY_GRANT), ("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| IamError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(IamError::Rejected(format!("HTTP {}: {}", status, body)));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| IamError::InvalidResponse(e.to_string()))?;

        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(REFRESH_MARGIN);
        tracing::debug!(expires_in = token.expires_in, "IAM token refreshed");

        *cached = Some(CachedToken {
            value: token.access_token.clone(),
            refresh_at: Instant::now() + lifetime,
        });
        Ok(token.access_token)
    }
}
