use serde::Serialize;

/// Which path produced a generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Provider,
    Fallback,
}

impl ContentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentSource::Provider => "provider",
            ContentSource::Fallback => "fallback",
        }
    }
}
