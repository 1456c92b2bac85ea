use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::LlmClientError;
use crate::application::services::ProviderGateway;
use crate::presentation::config::Settings;

use super::auth::IamTokenProvider;
use super::llm::LlmClientFactory;
use super::nlu::WatsonNluClient;
use super::speech::WatsonTtsClient;

/// Builds the gateway once at startup. NLU and TTS are enabled only when both
/// their API key and service URL are set.
pub fn build_provider_gateway(settings: &Settings) -> Result<ProviderGateway, LlmClientError> {
    let http = reqwest::Client::new();
    let mut gateway = ProviderGateway::offline()
        .with_timeout(Duration::from_secs(settings.generation.provider_timeout_secs.max(1)));

    if let Some(llm) = LlmClientFactory::create(&settings.llm, http.clone())? {
        gateway = gateway.with_llm(llm);
    }

    if let Some((api_key, url)) = credentials(&settings.nlu.api_key, &settings.nlu.url) {
        let tokens = Arc::new(IamTokenProvider::new(http.clone(), api_key));
        gateway = gateway.with_keyword_extractor(Arc::new(WatsonNluClient::new(
            http.clone(),
            url,
            tokens,
        )));
        tracing::info!("Watson NLU enabled");
    }

    if let Some((api_key, url)) = credentials(&settings.tts.api_key, &settings.tts.url) {
        let tokens = Arc::new(IamTokenProvider::new(http.clone(), api_key));
        gateway =
            gateway.with_speech_synthesizer(Arc::new(WatsonTtsClient::new(http, url, tokens)));
        tracing::info!("Watson Text to Speech enabled");
    }

    let status = gateway.status();
    tracing::info!(llm = status.llm, nlu = status.nlu, tts = status.tts, "Provider gateway ready");
    Ok(gateway)
}

fn credentials<'a>(
    api_key: &'a Option<String>,
    url: &'a Option<String>,
) -> Option<(&'a str, &'a str)> {
    let api_key = api_key.as_deref().filter(|k| !k.trim().is_empty())?;
    let url = url.as_deref().filter(|u| !u.trim().is_empty())?;
    Some((api_key, url))
}
