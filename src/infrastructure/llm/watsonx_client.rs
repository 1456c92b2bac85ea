use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationParams, LlmClient, LlmClientError};
use crate::infrastructure::auth::{IamError, IamTokenProvider};
use crate::infrastructure::observability::log_preview;

const API_VERSION: &str = "2023-05-29";

/// IBM watsonx.ai text generation (`/ml/v1/text/generation`) scoped to a
/// deployment space.
pub struct WatsonxClient {
    client: reqwest::Client,
    endpoint: String,
    model_id: String,
    space_id: String,
    tokens: Arc<IamTokenProvider>,
}

#[derive(Serialize)]
struct GenerationRequest<'a> {
    model_id: &'a str,
    input: &'a str,
    parameters: GenerationParameters,
    space_id: &'a str,
}

#[derive(Serialize)]
struct GenerationParameters {
    max_new_tokens: usize,
    temperature: f32,
    top_p: f32,
    stop_sequences: Vec<String>,
}

#[derive(Deserialize)]
struct GenerationResponse {
    results: Vec<GenerationResult>,
}

#[derive(Deserialize)]
struct GenerationResult {
    generated_text: String,
}

impl WatsonxClient {
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        model_id: impl Into<String>,
        space_id: impl Into<String>,
        tokens: Arc<IamTokenProvider>,
    ) -> Self {
        Self {
            client,
            endpoint: format!(
                "{}/ml/v1/text/generation?version={}",
                base_url.trim_end_matches('/'),
                API_VERSION
            ),
            model_id: model_id.into(),
            space_id: space_id.into(),
            tokens,
        }
    }
}

#[async_trait]
impl LlmClient for WatsonxClient {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, LlmClientError> {
        let token = self.tokens.bearer_token().await.map_err(|e| match e {
            IamError::Rejected(reason) => LlmClientError::AuthenticationFailed(reason),
            other => LlmClientError::ApiRequestFailed(other.to_string()),
        })?;

        let body = GenerationRequest {
            model_id: &self.model_id,
            input: prompt,
            parameters: GenerationParameters {
                max_new_tokens: params.max_tokens,
                temperature: params.temperature,
                top_p: params.top_p,
                stop_sequences: Vec::new(),
            },
            space_id: &self.space_id,
        };

        tracing::debug!(
            model = %self.model_id,
            prompt = %log_preview(prompt),
            "Calling watsonx.ai"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::AuthenticationFailed(body));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let generation: GenerationResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        generation
            .results
            .into_iter()
            .next()
            .map(|result| result.generated_text)
            .ok_or_else(|| LlmClientError::InvalidResponse("empty results".to_string()))
    }
}
