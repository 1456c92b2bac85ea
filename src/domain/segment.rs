/// A sentence or line cut from the source text. `source_offset` is the byte
/// offset of the trimmed text inside the original string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub source_offset: usize,
}

impl Segment {
    pub fn new(text: impl Into<String>, source_offset: usize) -> Self {
        Self {
            text: text.into(),
            source_offset,
        }
    }

    pub fn contains_ignore_case(&self, needle_lower: &str) -> bool {
        self.text.to_lowercase().contains(needle_lower)
    }
}
