use std::sync::Arc;

use serde::Deserialize;

use crate::application::ports::{DocumentRepository, GenerationParams};
use crate::domain::{ContentSource, DocumentId, QuizQuestion, QuizValidationError, validate_quiz};

use super::content_error::{ContentError, load_document, require_min_content};
use super::prompt_text::{PROMPT_CONTEXT_CHARS, excerpt};
use super::provider_gateway::ProviderGateway;
use super::quiz_generator::QuizFallbackGenerator;

#[derive(Debug, Clone)]
pub struct Quiz {
    pub questions: Vec<QuizQuestion>,
    pub source: ContentSource,
    pub filename: String,
}

pub struct QuizService {
    documents: Arc<dyn DocumentRepository>,
    gateway: Arc<ProviderGateway>,
    generator: QuizFallbackGenerator,
    min_content_chars: usize,
}

impl QuizService {
    pub fn new(
        documents: Arc<dyn DocumentRepository>,
        gateway: Arc<ProviderGateway>,
        generator: QuizFallbackGenerator,
        min_content_chars: usize,
    ) -> Self {
        Self {
            documents,
            gateway,
            generator,
            min_content_chars,
        }
    }

    pub async fn generate(
        &self,
        document_id: DocumentId,
        count: usize,
    ) -> Result<Quiz, ContentError> {
        let document = load_document(self.documents.as_ref(), document_id).await?;
        require_min_content(&document, self.min_content_chars)?;

        let prompt = quiz_prompt(&document.raw_text, count);
        let params = GenerationParams::new(800, 0.5);

        let provided = match self.gateway.generate_text(&prompt, &params).await {
            Ok(raw) => match parse_provider_quiz(&raw, count) {
                Ok(questions) => Some(questions),
                Err(e) => {
                    tracing::warn!(error = %e, "Provider quiz rejected, using offline generator");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Quiz provider unavailable, using offline generator");
                None
            }
        };

        let (questions, source) = match provided {
            Some(questions) => (questions, ContentSource::Provider),
            None => (
                self.generator.generate(&document.raw_text, count),
                ContentSource::Fallback,
            ),
        };

        tracing::info!(
            document_id = %document_id,
            count = questions.len(),
            source = source.as_str(),
            strategy = ?self.generator.strategy(),
            "Quiz generated"
        );

        Ok(Quiz {
            questions,
            source,
            filename: document.filename,
        })
    }
}

pub fn quiz_prompt(text: &str, count: usize) -> String {
    format!(
        "Based on the following text, create {count} multiple-choice questions with 4 options each. \
         Respond with a JSON array only. Each element must have the fields \
         \"question\", \"options\" (4 strings), \"correctIndex\" (0-3) and \"explanation\".\n\n\
         Text: {}\n\nQuestions:",
        excerpt(text, PROMPT_CONTEXT_CHARS)
    )
}

#[derive(Debug, thiserror::Error)]
pub enum QuizParseError {
    #[error("no JSON array in provider output")]
    NoJson,
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid quiz: {0}")]
    Invalid(#[from] QuizValidationError),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderQuestion {
    question: String,
    options: Vec<String>,
    #[serde(alias = "correct_index", alias = "correctAnswer", alias = "answerIndex")]
    correct_index: usize,
    #[serde(default)]
    explanation: String,
}

/// Language models wrap JSON in prose or code fences, so the outermost array
/// is cut out before parsing. Extra questions are dropped; too few, or any
/// structural defect, rejects the whole batch.
pub fn parse_provider_quiz(raw: &str, count: usize) -> Result<Vec<QuizQuestion>, QuizParseError> {
    let start = raw.find('[').ok_or(QuizParseError::NoJson)?;
    let end = raw.rfind(']').ok_or(QuizParseError::NoJson)?;
    if end < start {
        return Err(QuizParseError::NoJson);
    }

    let parsed: Vec<ProviderQuestion> = serde_json::from_str(&raw[start..=end])?;
    let questions: Vec<QuizQuestion> = parsed
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(index, q)| QuizQuestion {
            id: index + 1,
            question: q.question.trim().to_string(),
            options: q.options.into_iter().map(|o| o.trim().to_string()).collect(),
            correct_index: q.correct_index,
            explanation: q.explanation.trim().to_string(),
        })
        .collect();

    validate_quiz(&questions, count)?;
    Ok(questions)
}
