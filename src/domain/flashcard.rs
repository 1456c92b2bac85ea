use serde::Serialize;

use super::ContentSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardType {
    KeywordBased,
    PhraseBased,
    TermBased,
    SentenceBased,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::KeywordBased => "keyword-based",
            CardType::PhraseBased => "phrase-based",
            CardType::TermBased => "term-based",
            CardType::SentenceBased => "sentence-based",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: usize,
    pub question: String,
    pub answer: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub source: ContentSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance: Option<f32>,
}

impl Flashcard {
    pub fn new(
        question: String,
        answer: String,
        card_type: CardType,
        source: ContentSource,
    ) -> Self {
        Self {
            id: 0,
            question,
            answer,
            card_type,
            source,
            keyword: None,
            relevance: None,
        }
    }

    pub fn with_keyword(mut self, keyword: String, relevance: f32) -> Self {
        self.keyword = Some(keyword);
        self.relevance = Some(relevance);
        self
    }
}

/// Reassigns ids so they run 1..=N in array order, whatever produced each card.
pub fn renumber_flashcards(cards: &mut [Flashcard]) {
    for (index, card) in cards.iter_mut().enumerate() {
        card.id = index + 1;
    }
}
