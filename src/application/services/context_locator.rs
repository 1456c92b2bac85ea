use super::text_segmenter::{
    CONTEXT_SENTENCE_MIN_CHARS, first_sentence, segment_sentences, split_paragraphs,
};

const PHRASE_MATCH_WORDS: usize = 3;

/// Best supporting sentence for `term`: the first sentence of at least ten
/// characters mentioning it, then the first sentence of the first paragraph
/// mentioning it, then a filler line.
pub fn find_context_for_term(text: &str, term: &str) -> String {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return filler(term);
    }

    locate(text, |unit| unit.contains(&needle)).unwrap_or_else(|| filler(term))
}

/// PDF text breaks multi-word phrases across irregular whitespace, so a unit
/// matches when it contains any of the phrase's first three words.
pub fn find_context_for_phrase(text: &str, phrase: &str) -> String {
    let words: Vec<String> = phrase
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| !w.is_empty())
        .take(PHRASE_MATCH_WORDS)
        .collect();

    if words.is_empty() {
        return filler(phrase);
    }

    locate(text, |unit| words.iter().any(|w| unit.contains(w.as_str())))
        .unwrap_or_else(|| filler(phrase))
}

fn locate(text: &str, matches: impl Fn(&str) -> bool) -> Option<String> {
    if let Some(sentence) = segment_sentences(text, CONTEXT_SENTENCE_MIN_CHARS)
        .into_iter()
        .find(|s| matches(&s.text.to_lowercase()))
    {
        return Some(sentence.text);
    }

    split_paragraphs(text)
        .into_iter()
        .find(|p| matches(&p.text.to_lowercase()))
        .and_then(|p| first_sentence(&p.text))
}

fn filler(term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        "This appears in the context of the document content.".to_string()
    } else {
        format!("\"{}\" appears in the context of the document content.", term)
    }
}
