use std::collections::HashSet;

use crate::domain::{CardType, ContentSource, Flashcard, renumber_flashcards};

use super::context_locator::{find_context_for_phrase, find_context_for_term};
use super::term_extractor::extract_frequent_terms;
use super::text_segmenter::{
    CONTEXT_SENTENCE_MIN_CHARS, is_structured_line, segment_lines, segment_sentences,
    strip_line_marker,
};

pub const MAX_KEY_PHRASES: usize = 10;
pub const MAX_IMPORTANT_TERMS: usize = 10;

const MIN_PHRASE_CHARS: usize = 5;
const PHRASE_PREVIEW_WORDS: usize = 4;
const SENTENCE_PREVIEW_CHARS: usize = 50;

/// Builds flashcards from raw text without any provider.
///
/// Phrase cards (from bullet and definition lines) fill at most half of the
/// request, term cards fill the rest, and plain sentences top up whatever is
/// still missing. A card whose answer repeats an earlier answer is skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlashcardFallbackGenerator;

impl FlashcardFallbackGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, text: &str, count: usize) -> Vec<Flashcard> {
        let mut deck = Deck::new(count);
        if count == 0 || text.trim().is_empty() {
            return deck.finish();
        }

        let phrase_quota = count / 2;
        for phrase in extract_key_phrases(text, MAX_KEY_PHRASES) {
            if deck.len() >= phrase_quota {
                break;
            }
            let question = format!(
                "What does the document say about: \"{}...\"?",
                leading_words(&phrase, PHRASE_PREVIEW_WORDS)
            );
            deck.push(question, find_context_for_phrase(text, &phrase), CardType::PhraseBased);
        }

        for term in extract_frequent_terms(text, MAX_IMPORTANT_TERMS) {
            if deck.is_full() {
                break;
            }
            let question = format!(
                "Define or explain \"{}\" as mentioned in the document.",
                term.text
            );
            deck.push(question, find_context_for_term(text, &term.text), CardType::TermBased);
        }

        for sentence in segment_sentences(text, CONTEXT_SENTENCE_MIN_CHARS) {
            if deck.is_full() {
                break;
            }
            let question = format!(
                "What is the main idea of: \"{}\"?",
                preview(&sentence.text, SENTENCE_PREVIEW_CHARS)
            );
            deck.push(question, sentence.text, CardType::SentenceBased);
        }

        deck.finish()
    }
}

/// Bullet and `term: definition` lines with their list markers removed.
pub fn extract_key_phrases(text: &str, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();

    segment_lines(text)
        .into_iter()
        .filter(|line| is_structured_line(&line.text))
        .map(|line| strip_line_marker(&line.text).to_string())
        .filter(|phrase| phrase.chars().count() >= MIN_PHRASE_CHARS)
        .filter(|phrase| seen.insert(phrase.to_lowercase()))
        .take(limit)
        .collect()
}

struct Deck {
    cards: Vec<Flashcard>,
    answers: HashSet<String>,
    capacity: usize,
}

impl Deck {
    fn new(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
            answers: HashSet::new(),
            capacity,
        }
    }

    fn len(&self) -> usize {
        self.cards.len()
    }

    fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }

    fn push(&mut self, question: String, answer: String, card_type: CardType) {
        if self.is_full() || !self.answers.insert(answer.to_lowercase()) {
            return;
        }
        self.cards
            .push(Flashcard::new(question, answer, card_type, ContentSource::Fallback));
    }

    fn finish(mut self) -> Vec<Flashcard> {
        renumber_flashcards(&mut self.cards);
        self.cards
    }
}

fn leading_words(text: &str, count: usize) -> String {
    text.split_whitespace().take(count).collect::<Vec<_>>().join(" ")
}

fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}
