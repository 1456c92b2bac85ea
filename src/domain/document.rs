use chrono::{DateTime, Utc};

use super::document_id::DocumentId;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub content_type: ContentType,
    pub size_bytes: u64,
    pub raw_text: String,
    pub page_count: u32,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Text,
}

impl ContentType {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            "text/plain" => Some(Self::Text),
            _ => None,
        }
    }

    /// Browsers often send `application/octet-stream`; the extension decides then.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = filename.rsplit_once('.')?.1.to_lowercase();
        match extension.as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" | "md" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Text => "text/plain",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Text => "txt",
        }
    }
}

impl Document {
    pub fn new(
        filename: String,
        content_type: ContentType,
        size_bytes: u64,
        raw_text: String,
        page_count: u32,
    ) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            content_type,
            size_bytes,
            raw_text,
            page_count,
            uploaded_at: Utc::now(),
        }
    }

    pub fn text_length(&self) -> usize {
        self.raw_text.chars().count()
    }

    pub fn has_min_content(&self, min_chars: usize) -> bool {
        self.raw_text.trim().chars().count() >= min_chars
    }
}
