use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::infrastructure::auth::IamTokenProvider;
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::openai_client::{OPENAI_BASE_URL, OpenAiClient};
use super::watsonx_client::WatsonxClient;

pub const WATSONX_EU_DE_URL: &str = "https://eu-de.ml.cloud.ibm.com";

pub struct LlmClientFactory;

impl LlmClientFactory {
    /// `Ok(None)` means no language model is configured and every
    /// generation runs offline.
    pub fn create(
        settings: &LlmSettings,
        http: reqwest::Client,
    ) -> Result<Option<Arc<dyn LlmClient>>, LlmClientError> {
        let api_key = settings.api_key.clone().filter(|k| !k.trim().is_empty());

        match settings.provider {
            LlmProvider::None => Ok(None),
            LlmProvider::Watsonx => {
                let api_key = api_key.ok_or_else(|| {
                    LlmClientError::Configuration(
                        "api_key required for watsonx provider".to_string(),
                    )
                })?;
                let space_id = settings.space_id.as_deref().ok_or_else(|| {
                    LlmClientError::Configuration(
                        "space_id required for watsonx provider".to_string(),
                    )
                })?;
                let base_url = settings.base_url.as_deref().unwrap_or(WATSONX_EU_DE_URL);
                let tokens = Arc::new(IamTokenProvider::new(http.clone(), api_key));

                tracing::info!(
                    model = %settings.model,
                    base_url,
                    "Using watsonx.ai language model"
                );
                Ok(Some(Arc::new(WatsonxClient::new(
                    http,
                    base_url,
                    settings.model.clone(),
                    space_id,
                    tokens,
                ))))
            }
            LlmProvider::OpenAi => {
                let api_key = api_key.ok_or_else(|| {
                    LlmClientError::Configuration(
                        "api_key required for openai provider".to_string(),
                    )
                })?;
                let base_url = settings.base_url.as_deref().unwrap_or(OPENAI_BASE_URL);

                tracing::info!(model = %settings.model, "Using OpenAI language model");
                Ok(Some(Arc::new(OpenAiClient::new(
                    http,
                    base_url,
                    Some(api_key),
                    settings.model.clone(),
                ))))
            }
            LlmProvider::LmStudio => {
                let base_url = settings.base_url.as_deref().ok_or_else(|| {
                    LlmClientError::Configuration(
                        "base_url required for lmstudio provider".to_string(),
                    )
                })?;

                tracing::info!(model = %settings.model, base_url, "Using LM Studio language model");
                Ok(Some(Arc::new(OpenAiClient::new(
                    http,
                    base_url,
                    api_key,
                    settings.model.clone(),
                ))))
            }
        }
    }
}
