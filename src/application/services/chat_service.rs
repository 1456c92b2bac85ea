use std::sync::Arc;

use crate::application::ports::{DocumentRepository, GenerationParams};
use crate::domain::{ContentSource, DocumentId, Segment};

use super::content_error::{ContentError, load_document};
use super::prompt_text::{PROMPT_CONTEXT_CHARS, excerpt};
use super::provider_gateway::ProviderGateway;
use super::text_segmenter::segment_sentences;

pub const NO_ANSWER: &str =
    "I couldn't find relevant information in the document to answer your question.";
const MIN_KEYWORD_CHARS: usize = 3;

#[derive(Debug, Clone)]
pub struct ChatAnswer {
    pub question: String,
    pub answer: String,
    pub relevant_sentences: usize,
    pub source: ContentSource,
}

pub struct ChatService {
    documents: Arc<dyn DocumentRepository>,
    gateway: Arc<ProviderGateway>,
}

impl ChatService {
    pub fn new(documents: Arc<dyn DocumentRepository>, gateway: Arc<ProviderGateway>) -> Self {
        Self { documents, gateway }
    }

    pub async fn answer(
        &self,
        document_id: DocumentId,
        question: &str,
    ) -> Result<ChatAnswer, ContentError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ContentError::InvalidRequest("question is required".to_string()));
        }

        let document = load_document(self.documents.as_ref(), document_id).await?;
        let text = document.raw_text.as_str();
        let relevant = relevant_sentences(text, question);

        let prompt = format!(
            "Answer the question using only the document below. \
             If the document does not contain the answer, say so.\n\n\
             Document:\n{}\n\nQuestion: {}\n\nAnswer:",
            excerpt(text, PROMPT_CONTEXT_CHARS),
            question
        );

        let (answer, source) = match self
            .gateway
            .generate_text(&prompt, &GenerationParams::new(400, 0.3))
            .await
        {
            Ok(answer) => (answer, ContentSource::Provider),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Chat provider unavailable, answering from matching sentences"
                );
                let answer = relevant
                    .first()
                    .map(|s| format!("{}.", s.text))
                    .unwrap_or_else(|| NO_ANSWER.to_string());
                (answer, ContentSource::Fallback)
            }
        };

        tracing::info!(
            document_id = %document_id,
            relevant_sentences = relevant.len(),
            source = source.as_str(),
            "Question answered"
        );

        Ok(ChatAnswer {
            question: question.to_string(),
            answer,
            relevant_sentences: relevant.len(),
            source,
        })
    }
}

/// Sentences containing any question word of three or more characters.
pub fn relevant_sentences(text: &str, question: &str) -> Vec<Segment> {
    let keywords: Vec<String> = question
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| w.chars().count() >= MIN_KEYWORD_CHARS)
        .collect();

    if keywords.is_empty() {
        return Vec::new();
    }

    segment_sentences(text, 1)
        .into_iter()
        .filter(|sentence| keywords.iter().any(|k| sentence.contains_ignore_case(k)))
        .collect()
}
