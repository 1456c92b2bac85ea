use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    pub text: String,
    pub relevance: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Concept {
    pub text: String,
    pub relevance: f32,
}

/// A taxonomy path such as "/science/biology", scored 0..1.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub label: String,
    pub score: f32,
}

/// Document-level sentiment. Score runs from -1 (negative) to 1 (positive).
#[derive(Debug, Clone, PartialEq)]
pub struct Sentiment {
    pub label: String,
    pub score: f32,
}

impl Sentiment {
    pub fn neutral() -> Self {
        Self {
            label: "neutral".to_string(),
            score: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Emotion {
    pub anger: f32,
    pub disgust: f32,
    pub fear: f32,
    pub joy: f32,
    pub sadness: f32,
}

/// Everything one NLU analysis call returns for a document.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAnalysis {
    pub keywords: Vec<Keyword>,
    pub concepts: Vec<Concept>,
    pub categories: Vec<Category>,
    pub sentiment: Sentiment,
    /// Absent when the service cannot score emotion for the document language.
    pub emotion: Option<Emotion>,
}

#[async_trait]
pub trait KeywordExtractor: Send + Sync {
    async fn extract_keywords(
        &self,
        text: &str,
        limit: usize,
    ) -> Result<Vec<Keyword>, KeywordExtractorError>;

    async fn analyze(
        &self,
        text: &str,
        keyword_limit: usize,
    ) -> Result<TextAnalysis, KeywordExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum KeywordExtractorError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
