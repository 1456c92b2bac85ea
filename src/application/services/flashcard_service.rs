use std::collections::HashSet;
use std::sync::Arc;

use crate::application::ports::DocumentRepository;
use crate::domain::{CardType, ContentSource, DocumentId, Flashcard, renumber_flashcards};

use super::content_error::{ContentError, load_document, require_min_content};
use super::context_locator::find_context_for_term;
use super::flashcard_generator::FlashcardFallbackGenerator;
use super::provider_gateway::ProviderGateway;

#[derive(Debug, Clone)]
pub struct FlashcardSet {
    pub flashcards: Vec<Flashcard>,
    pub source: ContentSource,
    pub filename: String,
}

pub struct FlashcardService {
    documents: Arc<dyn DocumentRepository>,
    gateway: Arc<ProviderGateway>,
    generator: FlashcardFallbackGenerator,
    min_content_chars: usize,
}

impl FlashcardService {
    pub fn new(
        documents: Arc<dyn DocumentRepository>,
        gateway: Arc<ProviderGateway>,
        min_content_chars: usize,
    ) -> Self {
        Self {
            documents,
            gateway,
            generator: FlashcardFallbackGenerator::new(),
            min_content_chars,
        }
    }

    /// Keyword cards come first when NLU is requested and answers; a short
    /// batch is topped up from the offline generator without repeating answers.
    pub async fn generate(
        &self,
        document_id: DocumentId,
        count: usize,
        use_nlu: bool,
    ) -> Result<FlashcardSet, ContentError> {
        let document = load_document(self.documents.as_ref(), document_id).await?;
        require_min_content(&document, self.min_content_chars)?;
        let text = document.raw_text.as_str();

        let mut flashcards = if use_nlu {
            self.keyword_cards(text, count).await
        } else {
            Vec::new()
        };
        let source = if flashcards.is_empty() {
            ContentSource::Fallback
        } else {
            ContentSource::Provider
        };

        if flashcards.len() < count {
            let mut answers: HashSet<String> =
                flashcards.iter().map(|c| c.answer.to_lowercase()).collect();
            let missing = count - flashcards.len();
            let top_up = self
                .generator
                .generate(text, count)
                .into_iter()
                .filter(|card| answers.insert(card.answer.to_lowercase()))
                .take(missing);
            flashcards.extend(top_up);
        }
        renumber_flashcards(&mut flashcards);

        tracing::info!(
            document_id = %document_id,
            requested = count,
            generated = flashcards.len(),
            source = source.as_str(),
            "Flashcards generated"
        );

        Ok(FlashcardSet {
            flashcards,
            source,
            filename: document.filename,
        })
    }

    async fn keyword_cards(&self, text: &str, count: usize) -> Vec<Flashcard> {
        let keywords = match self.gateway.extract_keywords(text, count * 2).await {
            Ok(keywords) => keywords,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Keyword extraction unavailable, using offline flashcards"
                );
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        keywords
            .into_iter()
            .filter(|k| !k.text.trim().is_empty())
            .filter(|k| seen.insert(k.text.to_lowercase()))
            .take(count)
            .map(|keyword| {
                let question = format!(
                    "What is the significance of \"{}\" in this document?",
                    keyword.text
                );
                let answer = find_context_for_term(text, &keyword.text);
                Flashcard::new(question, answer, CardType::KeywordBased, ContentSource::Provider)
                    .with_keyword(keyword.text, keyword.relevance)
            })
            .collect()
    }
}
