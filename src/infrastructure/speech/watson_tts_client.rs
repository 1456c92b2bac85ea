use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::application::ports::{AudioFormat, SpeechSynthesisError, SpeechSynthesizer};
use crate::domain::is_known_voice;
use crate::infrastructure::auth::IamTokenProvider;

pub struct WatsonTtsClient {
    client: reqwest::Client,
    endpoint: String,
    tokens: Arc<IamTokenProvider>,
}

#[derive(Serialize)]
struct SynthesizeRequest<'a> {
    text: &'a str,
}

impl WatsonTtsClient {
    pub fn new(client: reqwest::Client, service_url: &str, tokens: Arc<IamTokenProvider>) -> Self {
        Self {
            client,
            endpoint: format!("{}/v1/synthesize", service_url.trim_end_matches('/')),
            tokens,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for WatsonTtsClient {
    async fn synthesize(
        &self,
        text: &str,
        voice: &str,
        format: AudioFormat,
    ) -> Result<Vec<u8>, SpeechSynthesisError> {
        if !is_known_voice(voice) {
            return Err(SpeechSynthesisError::UnsupportedVoice(voice.to_string()));
        }

        let token = self
            .tokens
            .bearer_token()
            .await
            .map_err(|e| SpeechSynthesisError::ApiRequestFailed(e.to_string()))?;

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("voice", voice)])
            .header("Accept", format.mime())
            .bearer_auth(token)
            .json(&SynthesizeRequest { text })
            .send()
            .await
            .map_err(|e| SpeechSynthesisError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SpeechSynthesisError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SpeechSynthesisError::ApiRequestFailed(e.to_string()))?;

        if audio.is_empty() {
            return Err(SpeechSynthesisError::EmptyAudio);
        }

        tracing::debug!(voice, size_bytes = audio.len(), "Watson TTS segment synthesized");
        Ok(audio.to_vec())
    }
}
