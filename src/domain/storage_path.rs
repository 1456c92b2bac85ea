use std::fmt;

use super::ContentType;
use super::document_id::DocumentId;

const DOCUMENTS_PREFIX: &str = "documents";
const AUDIO_PREFIX: &str = "audio";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    pub fn for_document(document_id: &DocumentId, content_type: ContentType) -> Self {
        Self(format!(
            "{}/{}.{}",
            DOCUMENTS_PREFIX,
            document_id.as_uuid(),
            content_type.extension()
        ))
    }

    /// Returns `None` for names that could escape the audio directory.
    pub fn for_audio(file_name: &str) -> Option<Self> {
        let valid = !file_name.is_empty()
            && file_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !file_name.starts_with('.');

        valid.then(|| Self(format!("{}/{}", AUDIO_PREFIX, file_name)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
