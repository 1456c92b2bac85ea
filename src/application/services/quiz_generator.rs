use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;

use crate::domain::{OPTIONS_PER_QUESTION, QuizQuestion, Segment};

use super::context_locator::find_context_for_term;
use super::term_extractor::extract_frequent_terms;
use super::text_segmenter::{
    QUIZ_SENTENCE_MIN_CHARS, is_list_item, segment_lines, segment_sentences, strip_line_marker,
};

pub const KEY_POINT_QUESTION: &str =
    "Which of the following is a key point from this section of the document?";

const PLACEHOLDER_DISTRACTORS: [&str; 3] = [
    "This topic is not covered in the document.",
    "The document does not discuss this point.",
    "This statement does not appear in the document.",
];

const PLACEHOLDER_QUESTION: &str = "What kind of content does this document contain?";
const PLACEHOLDER_ANSWER: &str = "Content without enough readable sentences to quote";
const PLACEHOLDER_OPTIONS: [&str; 3] = [
    "A detailed technical specification",
    "A collection of personal correspondence",
    "A financial statement with tables",
];
const PLACEHOLDER_EXPLANATION: &str =
    "The document did not provide enough readable sentences to build a content-based question.";

static MEASUREMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b\d+(?:\.\d+)?\s?(?:kg|lbs?|oz|mm|cm|km|m|inches|inch|tb|gb|mb|ghz|mhz|mah|hours?|hrs?|minutes?|w)\b|\b\d+(?:\.\d+)?%",
    )
    .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuizStrategy {
    /// Cycles through sentences; three neighbouring sentences act as distractors.
    #[default]
    Rotation,
    /// Asks about structural elements (first line, bullets, measurements) and pads
    /// with rotation questions. Texts without such markers fall back to rotation.
    ContentMarker,
}

/// Offline multiple-choice generation.
///
/// Always returns exactly `count` questions with four non-empty options, a
/// correct index in `0..4` and an explanation; with no usable sentences the
/// questions carry generic placeholder content. The correct slot is drawn from
/// the supplied RNG, so a seeded RNG gives a reproducible option order.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizFallbackGenerator {
    strategy: QuizStrategy,
}

impl QuizFallbackGenerator {
    pub fn new(strategy: QuizStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> QuizStrategy {
        self.strategy
    }

    pub fn generate(&self, text: &str, count: usize) -> Vec<QuizQuestion> {
        self.generate_with_rng(text, count, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        text: &str,
        count: usize,
        rng: &mut R,
    ) -> Vec<QuizQuestion> {
        let mut questions = match self.strategy {
            QuizStrategy::Rotation => Vec::new(),
            QuizStrategy::ContentMarker => content_marker_questions(text, rng),
        };
        questions.truncate(count);

        let sentences = segment_sentences(text, QUIZ_SENTENCE_MIN_CHARS);
        let mut rotation_index = 0;
        while questions.len() < count {
            let question = if sentences.is_empty() {
                placeholder_question(rng)
            } else {
                rotation_question(&sentences, rotation_index, rng)
            };
            questions.push(question);
            rotation_index += 1;
        }

        for (index, question) in questions.iter_mut().enumerate() {
            question.id = index + 1;
        }
        questions
    }
}

pub fn has_content_markers(text: &str) -> bool {
    segment_lines(text)
        .iter()
        .any(|line| is_list_item(&line.text))
}

fn rotation_question<R: Rng + ?Sized>(
    sentences: &[Segment],
    index: usize,
    rng: &mut R,
) -> QuizQuestion {
    let total = sentences.len();
    let main_index = index % total;
    let main = sentences[main_index].text.clone();

    let mut distractors: Vec<String> = Vec::with_capacity(OPTIONS_PER_QUESTION - 1);
    for (offset, placeholder) in (1..OPTIONS_PER_QUESTION).zip(PLACEHOLDER_DISTRACTORS) {
        let candidate_index = (index + offset) % total;
        let candidate = &sentences[candidate_index].text;
        let repeated = candidate_index == main_index
            || candidate == &main
            || distractors.iter().any(|d| d == candidate);

        distractors.push(if repeated {
            placeholder.to_string()
        } else {
            candidate.clone()
        });
    }

    let explanation = format!("The document states: \"{}\"", main);
    assemble(KEY_POINT_QUESTION.to_string(), main, distractors, explanation, rng)
}

fn placeholder_question<R: Rng + ?Sized>(rng: &mut R) -> QuizQuestion {
    assemble(
        PLACEHOLDER_QUESTION.to_string(),
        PLACEHOLDER_ANSWER.to_string(),
        PLACEHOLDER_OPTIONS.iter().map(|o| o.to_string()).collect(),
        PLACEHOLDER_EXPLANATION.to_string(),
        rng,
    )
}

fn content_marker_questions<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Vec<QuizQuestion> {
    if !has_content_markers(text) {
        return Vec::new();
    }

    let lines = segment_lines(text);
    let bullets: Vec<&str> = lines
        .iter()
        .filter(|line| is_list_item(&line.text))
        .map(|line| strip_line_marker(&line.text))
        .filter(|bullet| !bullet.is_empty())
        .collect();

    let mut questions = Vec::new();

    let topic = lines
        .iter()
        .map(|line| strip_line_marker(&line.text))
        .find(|line| !line.is_empty());
    if let Some(topic) = topic {
        let topic = topic.to_string();
        questions.push(assemble(
            "What is the main topic of this document?".to_string(),
            topic.clone(),
            synthetic(&[
                "Basic information only",
                "Generic features without specific details",
                "Unrelated technical specifications",
            ]),
            format!("The document opens with: \"{}\"", topic),
            rng,
        ));
    }

    if let Some(bullet) = bullets.first() {
        questions.push(assemble(
            "Which specific aspect does the document highlight?".to_string(),
            bullet.to_string(),
            synthetic(&[
                "General background information",
                "Generic features common to every product",
                "Pricing and availability details",
            ]),
            format!("The document lists: \"{}\"", bullet),
            rng,
        ));
    }

    if let Some(measurement) = MEASUREMENT.find(text) {
        let value = measurement.as_str().trim().to_string();
        questions.push(assemble(
            "Which measurement is mentioned in the document?".to_string(),
            value.clone(),
            synthetic(&[
                "No measurements are given",
                "Only approximate sizes are described",
                "Measurements are listed in a separate appendix",
            ]),
            format!(
                "The document states: \"{}\"",
                find_context_for_term(text, &value)
            ),
            rng,
        ));
    }

    if let Some(bullet) = bullets.get(1) {
        questions.push(assemble(
            "What additional characteristic does the document describe?".to_string(),
            bullet.to_string(),
            synthetic(&[
                "Only the basic design",
                "Generic features",
                "Unspecified accessories",
            ]),
            format!("The document lists: \"{}\"", bullet),
            rng,
        ));
    }

    let (purpose, evidence) = infer_purpose(text, bullets.len());
    questions.push(assemble(
        "What is the primary purpose of this document?".to_string(),
        purpose,
        synthetic(&[
            "To entertain the reader with fiction",
            "To advertise unrelated services",
            "To record personal opinions without facts",
        ]),
        evidence,
        rng,
    ));

    questions
}

// Purpose is inferred from wording and structure, so its explanation cites the
// evidence rather than a sentence.
fn infer_purpose(text: &str, bullet_count: usize) -> (String, String) {
    let lower = text.to_lowercase();
    let subject = extract_frequent_terms(text, 1)
        .into_iter()
        .next()
        .map(|term| term.text)
        .unwrap_or_else(|| "its subject".to_string());

    if lower.contains("how to") || lower.contains("step ") || lower.contains("install") {
        (
            "To provide step-by-step instructions".to_string(),
            "The document is written as a sequence of instructions.".to_string(),
        )
    } else if bullet_count >= 3 {
        (
            format!("To describe the features and characteristics of {}", subject),
            format!(
                "The document lists {} characteristics, most often mentioning \"{}\".",
                bullet_count, subject
            ),
        )
    } else {
        (
            format!("To inform the reader about {}", subject),
            format!("The most frequently mentioned term is \"{}\".", subject),
        )
    }
}

fn synthetic(options: &[&str; 3]) -> Vec<String> {
    options.iter().map(|o| o.to_string()).collect()
}

fn assemble<R: Rng + ?Sized>(
    question: String,
    correct: String,
    mut options: Vec<String>,
    explanation: String,
    rng: &mut R,
) -> QuizQuestion {
    let correct_index = rng.gen_range(0..OPTIONS_PER_QUESTION);
    options.truncate(OPTIONS_PER_QUESTION - 1);
    options.insert(correct_index, correct);

    QuizQuestion {
        id: 0,
        question,
        options,
        correct_index,
        explanation,
    }
}
