use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    Category, Concept, Emotion, Keyword, KeywordExtractor, KeywordExtractorError, Sentiment,
    TextAnalysis,
};
use crate::infrastructure::auth::IamTokenProvider;

const API_VERSION: &str = "2022-04-07";
// NLU rejects very large payloads; keywords from the head of a document are enough.
const MAX_ANALYZED_CHARS: usize = 50_000;
const CONCEPT_LIMIT: usize = 5;
const CATEGORY_LIMIT: usize = 3;

/// Keyword extraction and document analysis through Watson Natural Language
/// Understanding.
pub struct WatsonNluClient {
    client: reqwest::Client,
    endpoint: String,
    tokens: Arc<IamTokenProvider>,
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
    features: Features,
}

#[derive(Serialize, Default)]
struct Features {
    keywords: LimitOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    concepts: Option<LimitOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<LimitOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sentiment: Option<DocumentOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    emotion: Option<DocumentOptions>,
}

#[derive(Serialize, Default)]
struct LimitOptions {
    limit: usize,
}

#[derive(Serialize)]
struct DocumentOptions {
    document: bool,
}

#[derive(Deserialize)]
struct AnalyzeResponse {
    #[serde(default)]
    keywords: Vec<NluScoredText>,
    #[serde(default)]
    concepts: Vec<NluScoredText>,
    #[serde(default)]
    categories: Vec<NluCategory>,
    sentiment: Option<NluSentiment>,
    emotion: Option<NluEmotion>,
}

#[derive(Deserialize)]
struct NluScoredText {
    text: String,
    #[serde(default)]
    relevance: f32,
}

#[derive(Deserialize)]
struct NluCategory {
    label: String,
    #[serde(default)]
    score: f32,
}

#[derive(Deserialize)]
struct NluSentiment {
    document: NluDocumentSentiment,
}

#[derive(Deserialize)]
struct NluDocumentSentiment {
    label: String,
    #[serde(default)]
    score: f32,
}

#[derive(Deserialize)]
struct NluEmotion {
    document: NluDocumentEmotion,
}

#[derive(Deserialize)]
struct NluDocumentEmotion {
    emotion: NluEmotionScores,
}

#[derive(Deserialize)]
struct NluEmotionScores {
    #[serde(default)]
    anger: f32,
    #[serde(default)]
    disgust: f32,
    #[serde(default)]
    fear: f32,
    #[serde(default)]
    joy: f32,
    #[serde(default)]
    sadness: f32,
}

impl WatsonNluClient {
    pub fn new(client: reqwest::Client, service_url: &str, tokens: Arc<IamTokenProvider>) -> Self {
        Self {
            client,
            endpoint: format!(
                "{}/v1/analyze?version={}",
                service_url.trim_end_matches('/'),
                API_VERSION
            ),
            tokens,
        }
    }

    async fn post_analyze(
        &self,
        text: &str,
        features: Features,
    ) -> Result<AnalyzeResponse, KeywordExtractorError> {
        let token = self
            .tokens
            .bearer_token()
            .await
            .map_err(|e| KeywordExtractorError::ApiRequestFailed(e.to_string()))?;

        let text = match text.char_indices().nth(MAX_ANALYZED_CHARS) {
            Some((cut, _)) => &text[..cut],
            None => text,
        };
        let body = AnalyzeRequest { text, features };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| KeywordExtractorError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(KeywordExtractorError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| KeywordExtractorError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl KeywordExtractor for WatsonNluClient {
    async fn extract_keywords(
        &self,
        text: &str,
        limit: usize,
    ) -> Result<Vec<Keyword>, KeywordExtractorError> {
        let features = Features {
            keywords: LimitOptions { limit },
            ..Features::default()
        };
        let analysis = self.post_analyze(text, features).await?;

        tracing::debug!(keywords = analysis.keywords.len(), "Watson NLU keywords extracted");

        Ok(keywords(analysis.keywords, limit))
    }

    async fn analyze(
        &self,
        text: &str,
        keyword_limit: usize,
    ) -> Result<TextAnalysis, KeywordExtractorError> {
        let features = Features {
            keywords: LimitOptions {
                limit: keyword_limit,
            },
            concepts: Some(LimitOptions {
                limit: CONCEPT_LIMIT,
            }),
            categories: Some(LimitOptions {
                limit: CATEGORY_LIMIT,
            }),
            sentiment: Some(DocumentOptions { document: true }),
            emotion: Some(DocumentOptions { document: true }),
        };
        let analysis = self.post_analyze(text, features).await?;

        tracing::debug!(
            keywords = analysis.keywords.len(),
            concepts = analysis.concepts.len(),
            categories = analysis.categories.len(),
            "Watson NLU analysis completed"
        );

        Ok(TextAnalysis {
            keywords: keywords(analysis.keywords, keyword_limit),
            concepts: analysis
                .concepts
                .into_iter()
                .take(CONCEPT_LIMIT)
                .map(|c| Concept {
                    text: c.text,
                    relevance: c.relevance,
                })
                .collect(),
            categories: analysis
                .categories
                .into_iter()
                .take(CATEGORY_LIMIT)
                .map(|c| Category {
                    label: c.label,
                    score: c.score,
                })
                .collect(),
            sentiment: analysis
                .sentiment
                .map(|s| Sentiment {
                    label: s.document.label,
                    score: s.document.score,
                })
                .unwrap_or_else(Sentiment::neutral),
            emotion: analysis.emotion.map(|e| {
                let scores = e.document.emotion;
                Emotion {
                    anger: scores.anger,
                    disgust: scores.disgust,
                    fear: scores.fear,
                    joy: scores.joy,
                    sadness: scores.sadness,
                }
            }),
        })
    }
}

fn keywords(found: Vec<NluScoredText>, limit: usize) -> Vec<Keyword> {
    found
        .into_iter()
        .take(limit)
        .map(|k| Keyword {
            text: k.text,
            relevance: k.relevance,
        })
        .collect()
}
