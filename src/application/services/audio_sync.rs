use crate::domain::{Coordinates, SyncPoint};

pub const DEFAULT_WORDS_PER_MINUTE: f64 = 150.0;
pub const DEFAULT_WORDS_PER_PAGE: usize = 100;
pub const DEFAULT_MAX_WORDS: usize = 200;

/// Estimates word timings for transcript highlighting during playback.
///
/// Uses a single uniform speaking rate: each word lasts `60 / words_per_minute`
/// seconds and starts exactly where the previous one ended. Pages are assigned
/// by word index, and coordinates are the zero placeholder from
/// [`Coordinates::unresolved`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioSyncSynthesizer {
    words_per_minute: f64,
    words_per_page: usize,
    max_words: usize,
}

impl Default for AudioSyncSynthesizer {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            words_per_page: DEFAULT_WORDS_PER_PAGE,
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

impl AudioSyncSynthesizer {
    pub fn new(words_per_minute: f64, words_per_page: usize, max_words: usize) -> Self {
        let words_per_minute = if words_per_minute.is_finite() && words_per_minute > 0.0 {
            words_per_minute
        } else {
            tracing::warn!(
                words_per_minute,
                fallback = DEFAULT_WORDS_PER_MINUTE,
                "Invalid speaking rate, using default"
            );
            DEFAULT_WORDS_PER_MINUTE
        };

        Self {
            words_per_minute,
            words_per_page: words_per_page.max(1),
            max_words,
        }
    }

    pub fn seconds_per_word(&self) -> f64 {
        60.0 / self.words_per_minute
    }

    /// Tokens made only of punctuation carry no spoken word and are skipped.
    pub fn synthesize(&self, text: &str) -> Vec<SyncPoint> {
        let step = self.seconds_per_word();
        let mut cursor = 0.0_f64;

        text.split_whitespace()
            .filter_map(|token| {
                let word = token.trim_matches(|c: char| !c.is_alphanumeric());
                (!word.is_empty()).then(|| (word, token))
            })
            .take(self.max_words)
            .enumerate()
            .map(|(index, (word, token))| {
                let start = cursor;
                let end = start + step;
                cursor = end;

                SyncPoint {
                    word: word.to_string(),
                    original_text: token.to_string(),
                    start,
                    end,
                    page: (index / self.words_per_page) as u32 + 1,
                    coordinates: Coordinates::unresolved(),
                }
            })
            .collect()
    }

    /// The words covered by [`Self::synthesize`], joined with single spaces.
    pub fn transcript(&self, text: &str) -> String {
        self.synthesize(text)
            .into_iter()
            .map(|point| point.original_text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn total_duration(points: &[SyncPoint]) -> f64 {
        points.last().map(|p| p.end).unwrap_or(0.0)
    }
}
