#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub text: String,
    pub frequency: usize,
    pub normalized_form: String,
}

impl Term {
    pub fn new(
        text: impl Into<String>,
        frequency: usize,
        normalized_form: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            frequency,
            normalized_form: normalized_form.into(),
        }
    }
}
