use std::sync::Arc;

use crate::application::ports::{
    Category, Concept, DocumentRepository, Emotion, GenerationParams, Sentiment,
};
use crate::domain::{ContentSource, DocumentId};

use super::content_error::{ContentError, load_document};
use super::prompt_text::{PROMPT_CONTEXT_CHARS, excerpt};
use super::provider_gateway::ProviderGateway;
use super::term_extractor::extract_frequent_terms;
use super::text_segmenter::segment_sentences;

const SUMMARY_SENTENCES: usize = 3;
const KEY_TERM_LIMIT: usize = 10;
const EMPTY_SUMMARY: &str = "The document does not contain enough readable text to summarize.";

#[derive(Debug, Clone, PartialEq)]
pub struct KeyTerm {
    pub text: String,
    pub relevance: f32,
}

#[derive(Debug, Clone)]
pub struct Summary {
    pub summary: String,
    pub original_length: usize,
    pub summary_length: usize,
    pub source: ContentSource,
    pub key_terms: Option<Vec<KeyTerm>>,
    pub analysis: Option<DocumentAnalysis>,
    pub filename: String,
}

/// NLU findings beyond key terms. Offline this is neutral sentiment with no
/// concepts, categories or emotion.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentAnalysis {
    pub concepts: Vec<Concept>,
    pub categories: Vec<Category>,
    pub sentiment: Sentiment,
    pub emotion: Option<Emotion>,
    pub source: ContentSource,
}

impl DocumentAnalysis {
    fn unavailable() -> Self {
        Self {
            concepts: Vec::new(),
            categories: Vec::new(),
            sentiment: Sentiment::neutral(),
            emotion: None,
            source: ContentSource::Fallback,
        }
    }
}

pub struct SummaryService {
    documents: Arc<dyn DocumentRepository>,
    gateway: Arc<ProviderGateway>,
}

impl SummaryService {
    pub fn new(documents: Arc<dyn DocumentRepository>, gateway: Arc<ProviderGateway>) -> Self {
        Self { documents, gateway }
    }

    pub async fn summarize(
        &self,
        document_id: DocumentId,
        include_key_terms: bool,
    ) -> Result<Summary, ContentError> {
        let document = load_document(self.documents.as_ref(), document_id).await?;
        let text = document.raw_text.as_str();

        let prompt = format!(
            "Please provide a concise summary of the following text:\n\n{}\n\nSummary:",
            excerpt(text, PROMPT_CONTEXT_CHARS)
        );
        let (summary, source) = match self
            .gateway
            .generate_text(&prompt, &GenerationParams::new(300, 0.3))
            .await
        {
            Ok(summary) => (summary, ContentSource::Provider),
            Err(e) => {
                tracing::warn!(error = %e, "Summary provider unavailable, using leading sentences");
                (leading_sentences_summary(text), ContentSource::Fallback)
            }
        };

        let (key_terms, analysis) = if include_key_terms {
            let (terms, analysis) = self.analyze(text).await;
            (Some(terms), Some(analysis))
        } else {
            (None, None)
        };

        tracing::info!(
            document_id = %document_id,
            source = source.as_str(),
            summary_length = summary.chars().count(),
            "Summary generated"
        );

        Ok(Summary {
            original_length: document.text_length(),
            summary_length: summary.chars().count(),
            summary,
            source,
            key_terms,
            analysis,
            filename: document.filename,
        })
    }

    async fn analyze(&self, text: &str) -> (Vec<KeyTerm>, DocumentAnalysis) {
        match self.gateway.analyze_text(text, KEY_TERM_LIMIT).await {
            Ok(found) => {
                let terms = if found.keywords.is_empty() {
                    frequent_key_terms(text)
                } else {
                    found
                        .keywords
                        .into_iter()
                        .map(|k| KeyTerm {
                            text: k.text,
                            relevance: k.relevance,
                        })
                        .collect()
                };
                let analysis = DocumentAnalysis {
                    concepts: found.concepts,
                    categories: found.categories,
                    sentiment: found.sentiment,
                    emotion: found.emotion,
                    source: ContentSource::Provider,
                };
                (terms, analysis)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Text analysis unavailable, ranking terms by frequency");
                (frequent_key_terms(text), DocumentAnalysis::unavailable())
            }
        }
    }
}

/// The first three sentences, joined as prose.
pub fn leading_sentences_summary(text: &str) -> String {
    let sentences: Vec<String> = segment_sentences(text, 1)
        .into_iter()
        .take(SUMMARY_SENTENCES)
        .map(|s| s.text)
        .collect();

    if sentences.is_empty() {
        return EMPTY_SUMMARY.to_string();
    }
    format!("{}.", sentences.join(". "))
}

// Relevance is the count relative to the most frequent term.
fn frequent_key_terms(text: &str) -> Vec<KeyTerm> {
    let terms = extract_frequent_terms(text, KEY_TERM_LIMIT);
    let top = terms.first().map(|t| t.frequency).unwrap_or(1).max(1) as f32;

    terms
        .into_iter()
        .map(|term| KeyTerm {
            relevance: term.frequency as f32 / top,
            text: term.text,
        })
        .collect()
}
