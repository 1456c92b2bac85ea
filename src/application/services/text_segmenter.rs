//! Sentence, line and paragraph segmentation over raw document text.
//!
//! Everything here is pure: the same input always yields the same segments in
//! document order, and empty or whitespace-only input yields no segments.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Segment;

/// Minimum sentence length used for context lookup and flashcards.
pub const CONTEXT_SENTENCE_MIN_CHARS: usize = 10;
/// Minimum sentence length used when quiz options are built from sentences.
pub const QUIZ_SENTENCE_MIN_CHARS: usize = 20;
/// Colon lines at or above this length are prose, not definitions.
pub const STRUCTURED_LINE_MAX_CHARS: usize = 100;

const BULLET_MARKERS: [char; 6] = ['•', '◦', '▪', '‣', '-', '*'];

// A terminator run only closes a sentence when whitespace or the end of the
// text follows it, so "1.24 kg" stays in one piece.
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+(?:\s+|$)").unwrap());
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+[.)]\s+").unwrap());
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").unwrap());

pub fn segment_sentences(text: &str, min_chars: usize) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for terminator in SENTENCE_END.find_iter(text) {
        push_trimmed(&mut segments, text, cursor, terminator.start(), min_chars);
        cursor = terminator.end();
    }
    push_trimmed(&mut segments, text, cursor, text.len(), min_chars);

    segments
}

pub fn segment_lines(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for line in text.split('\n') {
        push_trimmed(&mut segments, text, cursor, cursor + line.len(), 1);
        cursor += line.len() + 1;
    }

    segments
}

pub fn split_paragraphs(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for separator in PARAGRAPH_BREAK.find_iter(text) {
        push_trimmed(&mut segments, text, cursor, separator.start(), 1);
        cursor = separator.end();
    }
    push_trimmed(&mut segments, text, cursor, text.len(), 1);

    segments
}

pub fn first_sentence(text: &str) -> Option<String> {
    segment_sentences(text, 1)
        .into_iter()
        .next()
        .map(|segment| segment.text)
}

/// Bullet, dash, asterisk or numbered lines, and short `term: definition` lines.
pub fn is_structured_line(line: &str) -> bool {
    let line = line.trim();
    if line.is_empty() {
        return false;
    }

    is_list_item(line) || (line.contains(':') && line.chars().count() < STRUCTURED_LINE_MAX_CHARS)
}

pub fn is_list_item(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with(&BULLET_MARKERS[..]) || LEADING_NUMBER.is_match(line)
}

pub fn strip_line_marker(line: &str) -> &str {
    let line = line.trim();
    let without_bullet = line.trim_start_matches(&BULLET_MARKERS[..]).trim_start();
    match LEADING_NUMBER.find(without_bullet) {
        Some(number) => without_bullet[number.end()..].trim(),
        None => without_bullet.trim(),
    }
}

fn push_trimmed(
    segments: &mut Vec<Segment>,
    text: &str,
    start: usize,
    end: usize,
    min_chars: usize,
) {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.chars().count() < min_chars {
        return;
    }

    let leading = raw.len() - raw.trim_start().len();
    segments.push(Segment::new(trimmed, start + leading));
}
