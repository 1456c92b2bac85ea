use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    AudioFormat, GenerationParams, Keyword, KeywordExtractor, KeywordExtractorError, LlmClient,
    LlmClientError, SpeechSynthesisError, SpeechSynthesizer, TextAnalysis,
};

pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    LanguageModel,
    Nlu,
    Speech,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::LanguageModel => "language model",
            ProviderKind::Nlu => "nlu",
            ProviderKind::Speech => "text-to-speech",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{0} provider not configured")]
    NotConfigured(ProviderKind),
    #[error("{provider} provider timed out after {seconds}s")]
    Timeout { provider: ProviderKind, seconds: u64 },
    #[error("{provider} provider failed: {reason}")]
    Failed {
        provider: ProviderKind,
        reason: String,
    },
    #[error("{provider} provider returned an invalid response: {reason}")]
    InvalidResponse {
        provider: ProviderKind,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderStatus {
    pub llm: bool,
    pub nlu: bool,
    pub tts: bool,
}

/// The single boundary to language-model, NLU and TTS providers.
///
/// Every call is bounded by the configured timeout and returns a tagged
/// `Result`, so callers choose the offline fallback with an ordinary `match`.
/// A gateway without clients answers every call with `NotConfigured`.
#[derive(Clone)]
pub struct ProviderGateway {
    llm: Option<Arc<dyn LlmClient>>,
    keywords: Option<Arc<dyn KeywordExtractor>>,
    speech: Option<Arc<dyn SpeechSynthesizer>>,
    timeout: Duration,
}

impl Default for ProviderGateway {
    fn default() -> Self {
        Self::offline()
    }
}

impl ProviderGateway {
    pub fn offline() -> Self {
        Self {
            llm: None,
            keywords: None,
            speech: None,
            timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_llm(mut self, client: Arc<dyn LlmClient>) -> Self {
        self.llm = Some(client);
        self
    }

    pub fn with_keyword_extractor(mut self, extractor: Arc<dyn KeywordExtractor>) -> Self {
        self.keywords = Some(extractor);
        self
    }

    pub fn with_speech_synthesizer(mut self, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        self.speech = Some(synthesizer);
        self
    }

    pub fn status(&self) -> ProviderStatus {
        ProviderStatus {
            llm: self.llm.is_some(),
            nlu: self.keywords.is_some(),
            tts: self.speech.is_some(),
        }
    }

    pub async fn generate_text(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        let provider = ProviderKind::LanguageModel;
        let client = self
            .llm
            .as_ref()
            .ok_or(ProviderError::NotConfigured(provider))?;

        let text = self
            .bounded(provider, async {
                client
                    .generate(prompt, params)
                    .await
                    .map_err(|e| from_llm_error(provider, e))
            })
            .await?;

        let text = text.trim();
        if text.is_empty() {
            return Err(ProviderError::InvalidResponse {
                provider,
                reason: "empty text".to_string(),
            });
        }
        Ok(text.to_string())
    }

    pub async fn extract_keywords(
        &self,
        text: &str,
        limit: usize,
    ) -> Result<Vec<Keyword>, ProviderError> {
        let provider = ProviderKind::Nlu;
        let extractor = self
            .keywords
            .as_ref()
            .ok_or(ProviderError::NotConfigured(provider))?;

        self.bounded(provider, async {
            extractor
                .extract_keywords(text, limit)
                .await
                .map_err(|e| from_nlu_error(provider, e))
        })
        .await
    }

    /// Keywords, concepts, categories, sentiment and emotion in one NLU call.
    pub async fn analyze_text(
        &self,
        text: &str,
        keyword_limit: usize,
    ) -> Result<TextAnalysis, ProviderError> {
        let provider = ProviderKind::Nlu;
        let extractor = self
            .keywords
            .as_ref()
            .ok_or(ProviderError::NotConfigured(provider))?;

        self.bounded(provider, async {
            extractor
                .analyze(text, keyword_limit)
                .await
                .map_err(|e| from_nlu_error(provider, e))
        })
        .await
    }

    pub async fn synthesize_speech(
        &self,
        text: &str,
        voice: &str,
        format: AudioFormat,
    ) -> Result<Vec<u8>, ProviderError> {
        let provider = ProviderKind::Speech;
        let synthesizer = self
            .speech
            .as_ref()
            .ok_or(ProviderError::NotConfigured(provider))?;

        self.bounded(provider, async {
            synthesizer
                .synthesize(text, voice, format)
                .await
                .map_err(|e| match e {
                    SpeechSynthesisError::EmptyAudio => ProviderError::InvalidResponse {
                        provider,
                        reason: e.to_string(),
                    },
                    other => ProviderError::Failed {
                        provider,
                        reason: other.to_string(),
                    },
                })
        })
        .await
    }

    async fn bounded<T>(
        &self,
        provider: ProviderKind,
        call: impl Future<Output = Result<T, ProviderError>>,
    ) -> Result<T, ProviderError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout {
                provider,
                seconds: self.timeout.as_secs(),
            }),
        }
    }
}

fn from_llm_error(provider: ProviderKind, error: LlmClientError) -> ProviderError {
    match error {
        LlmClientError::InvalidResponse(reason) => {
            ProviderError::InvalidResponse { provider, reason }
        }
        other => ProviderError::Failed {
            provider,
            reason: other.to_string(),
        },
    }
}

fn from_nlu_error(provider: ProviderKind, error: KeywordExtractorError) -> ProviderError {
    match error {
        KeywordExtractorError::InvalidResponse(reason) => {
            ProviderError::InvalidResponse { provider, reason }
        }
        other => ProviderError::Failed {
            provider,
            reason: other.to_string(),
        },
    }
}
