#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use docstudy::application::ports::{
    AudioFormat, Category, Concept, DocumentRepository, GenerationParams, Keyword,
    KeywordExtractor, KeywordExtractorError, LlmClient, LlmClientError, Sentiment,
    SpeechSynthesisError, SpeechSynthesizer, TextAnalysis,
};
use docstudy::domain::{ContentType, Document};
use docstudy::infrastructure::storage::InMemoryDocumentRepository;

pub const PRODUCT_SHEET: &str = "Product Overview.\n\
• Lightweight aluminum frame weighing 1.24 kg.\n\
• Battery life of up to 18 hours.\n\
Display: 14 inch high resolution panel.\n\
The laptop is designed for students who travel often. \
The aluminum body resists scratches and keeps the device cool. \
Charging the battery takes about two hours with the included adapter.";

pub const LECTURE_NOTES: &str = "Photosynthesis converts light energy into chemical energy. \
Chlorophyll absorbs mostly blue and red light. \
The Calvin cycle fixes carbon dioxide into sugars. \
Oxygen is released as a byproduct of splitting water. \
Plants store surplus glucose as starch for later use. \
Stomata regulate the exchange of gases with the atmosphere.";

pub fn text_document(text: &str) -> Document {
    Document::new(
        "notes.txt".to_string(),
        ContentType::Text,
        text.len() as u64,
        text.to_string(),
        1,
    )
}

pub async fn repository_with(document: &Document) -> Arc<dyn DocumentRepository> {
    let repository = InMemoryDocumentRepository::new();
    repository
        .save(document)
        .await
        .expect("in-memory save cannot fail");
    Arc::new(repository)
}

pub struct StubLlm {
    response: String,
    pub calls: AtomicUsize,
}

impl StubLlm {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for StubLlm {
    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

pub struct FailingLlm;

#[async_trait::async_trait]
impl LlmClient for FailingLlm {
    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, LlmClientError> {
        Err(LlmClientError::ApiRequestFailed("503 Service Unavailable".to_string()))
    }
}

pub struct SlowLlm;

#[async_trait::async_trait]
impl LlmClient for SlowLlm {
    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, LlmClientError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok("too late".to_string())
    }
}

pub struct StubKeywords(pub Vec<(&'static str, f32)>);

#[async_trait::async_trait]
impl KeywordExtractor for StubKeywords {
    async fn extract_keywords(
        &self,
        _text: &str,
        limit: usize,
    ) -> Result<Vec<Keyword>, KeywordExtractorError> {
        Ok(self
            .0
            .iter()
            .take(limit)
            .map(|(text, relevance)| Keyword {
                text: text.to_string(),
                relevance: *relevance,
            })
            .collect())
    }

    // Echoes the keywords as concepts and reports mildly positive sentiment.
    async fn analyze(
        &self,
        text: &str,
        keyword_limit: usize,
    ) -> Result<TextAnalysis, KeywordExtractorError> {
        let keywords = self.extract_keywords(text, keyword_limit).await?;
        Ok(TextAnalysis {
            concepts: keywords
                .iter()
                .take(5)
                .map(|k| Concept {
                    text: k.text.clone(),
                    relevance: k.relevance,
                })
                .collect(),
            categories: vec![Category {
                label: "/science".to_string(),
                score: 0.8,
            }],
            sentiment: Sentiment {
                label: "positive".to_string(),
                score: 0.4,
            },
            emotion: None,
            keywords,
        })
    }
}

pub struct FailingKeywords;

#[async_trait::async_trait]
impl KeywordExtractor for FailingKeywords {
    async fn extract_keywords(
        &self,
        _text: &str,
        _limit: usize,
    ) -> Result<Vec<Keyword>, KeywordExtractorError> {
        Err(KeywordExtractorError::ApiRequestFailed("HTTP 500".to_string()))
    }

    async fn analyze(
        &self,
        _text: &str,
        _keyword_limit: usize,
    ) -> Result<TextAnalysis, KeywordExtractorError> {
        Err(KeywordExtractorError::InvalidResponse("truncated body".to_string()))
    }
}

pub struct StubSpeech;

#[async_trait::async_trait]
impl SpeechSynthesizer for StubSpeech {
    async fn synthesize(
        &self,
        text: &str,
        _voice: &str,
        _format: AudioFormat,
    ) -> Result<Vec<u8>, SpeechSynthesisError> {
        Ok(format!("AUDIO:{}", text).into_bytes())
    }
}

/// Succeeds for the first `successes` calls, then fails.
pub struct FlakySpeech {
    successes: usize,
    calls: AtomicUsize,
}

impl FlakySpeech {
    pub fn new(successes: usize) -> Self {
        Self {
            successes,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl SpeechSynthesizer for FlakySpeech {
    async fn synthesize(
        &self,
        _text: &str,
        _voice: &str,
        _format: AudioFormat,
    ) -> Result<Vec<u8>, SpeechSynthesisError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.successes {
            Ok(vec![1, 2, 3])
        } else {
            Err(SpeechSynthesisError::ApiRequestFailed("quota exceeded".to_string()))
        }
    }
}

pub struct EmptySpeech;

#[async_trait::async_trait]
impl SpeechSynthesizer for EmptySpeech {
    async fn synthesize(
        &self,
        _text: &str,
        _voice: &str,
        _format: AudioFormat,
    ) -> Result<Vec<u8>, SpeechSynthesisError> {
        Err(SpeechSynthesisError::EmptyAudio)
    }
}
