use std::sync::Arc;

use bytes::Bytes;
use uuid::Uuid;

use crate::application::ports::{AudioFormat, DocumentRepository, FileStore, FileStoreError};
use crate::domain::{ContentSource, DocumentId, StoragePath, SyncPoint, is_known_voice};

use super::audio_sync::AudioSyncSynthesizer;
use super::content_error::{ContentError, load_document};
use super::provider_gateway::ProviderGateway;
use super::text_segmenter::segment_sentences;

/// Longest text sent to the speech provider in one request.
pub const MAX_SEGMENT_CHARS: usize = 2000;
const CHARS_PER_SECOND: usize = 10;
pub const AUDIO_ROUTE_PREFIX: &str = "/api/audio";

#[derive(Debug, Clone, PartialEq)]
pub struct AudioSegment {
    pub file_name: String,
    pub url: String,
    pub duration_secs: u64,
    pub size_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct Podcast {
    pub success: bool,
    pub segments: Vec<AudioSegment>,
    pub total_duration_secs: u64,
    pub voice: String,
    pub format: AudioFormat,
    pub transcript: String,
    pub sync_data: Vec<SyncPoint>,
    pub source: ContentSource,
    pub message: Option<String>,
    pub filename: String,
    pub original_text_length: usize,
}

pub struct PodcastService {
    documents: Arc<dyn DocumentRepository>,
    gateway: Arc<ProviderGateway>,
    files: Arc<dyn FileStore>,
    sync: AudioSyncSynthesizer,
}

impl PodcastService {
    pub fn new(
        documents: Arc<dyn DocumentRepository>,
        gateway: Arc<ProviderGateway>,
        files: Arc<dyn FileStore>,
        sync: AudioSyncSynthesizer,
    ) -> Self {
        Self {
            documents,
            gateway,
            files,
            sync,
        }
    }

    /// Transcript and sync data are always returned; audio only when every
    /// segment was synthesized and stored.
    pub async fn generate(
        &self,
        document_id: DocumentId,
        voice: &str,
        format: AudioFormat,
    ) -> Result<Podcast, ContentError> {
        if !is_known_voice(voice) {
            return Err(ContentError::InvalidRequest(format!("unknown voice: {}", voice)));
        }

        let document = load_document(self.documents.as_ref(), document_id).await?;
        let text = document.raw_text.as_str();

        let sync_data = self.sync.synthesize(text);
        let transcript = sync_data
            .iter()
            .map(|point| point.original_text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let mut podcast = Podcast {
            success: false,
            segments: Vec::new(),
            total_duration_secs: 0,
            voice: voice.to_string(),
            format,
            transcript,
            sync_data,
            source: ContentSource::Fallback,
            message: None,
            filename: document.filename.clone(),
            original_text_length: document.text_length(),
        };

        let chunks = split_into_audio_segments(text, MAX_SEGMENT_CHARS);
        if chunks.is_empty() {
            podcast.message = Some("The document has no readable text to narrate.".to_string());
            return Ok(podcast);
        }

        match self.synthesize_all(&chunks, voice, format).await {
            Ok(segments) => {
                podcast.total_duration_secs = segments.iter().map(|s| s.duration_secs).sum();
                podcast.segments = segments;
                podcast.success = true;
                podcast.source = ContentSource::Provider;
            }
            Err(reason) => {
                tracing::warn!(
                    document_id = %document_id,
                    error = %reason,
                    "Podcast audio unavailable"
                );
                podcast.message = Some(format!(
                    "Text-to-speech is not available ({}). The transcript and sync data are still provided.",
                    reason
                ));
            }
        }

        tracing::info!(
            document_id = %document_id,
            success = podcast.success,
            segments = podcast.segments.len(),
            total_duration_secs = podcast.total_duration_secs,
            voice = %podcast.voice,
            "Podcast generated"
        );
        Ok(podcast)
    }

    pub async fn audio_file(&self, file_name: &str) -> Result<(Bytes, &'static str), ContentError> {
        let path = StoragePath::for_audio(file_name).ok_or_else(|| {
            ContentError::InvalidRequest(format!("invalid audio file name: {}", file_name))
        })?;
        let data = self.files.get(&path).await?;
        Ok((data, audio_mime(file_name)))
    }

    async fn synthesize_all(
        &self,
        chunks: &[String],
        voice: &str,
        format: AudioFormat,
    ) -> Result<Vec<AudioSegment>, String> {
        let mut stored: Vec<AudioSegment> = Vec::with_capacity(chunks.len());

        for (index, chunk) in chunks.iter().enumerate() {
            tracing::debug!(
                segment = index + 1,
                total = chunks.len(),
                "Synthesizing podcast segment"
            );

            let outcome = match self.gateway.synthesize_speech(chunk, voice, format).await {
                Ok(audio) => self
                    .store_segment(chunk, audio, format)
                    .await
                    .map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };

            match outcome {
                Ok(segment) => stored.push(segment),
                Err(reason) => {
                    self.discard(&stored).await;
                    return Err(reason);
                }
            }
        }

        Ok(stored)
    }

    async fn store_segment(
        &self,
        chunk: &str,
        audio: Vec<u8>,
        format: AudioFormat,
    ) -> Result<AudioSegment, FileStoreError> {
        let file_name = format!("{}.{}", Uuid::new_v4(), format.extension());
        let path = StoragePath::for_audio(&file_name).ok_or_else(|| {
            FileStoreError::UploadFailed(format!("invalid file name {}", file_name))
        })?;
        let size_bytes = self.files.put(&path, Bytes::from(audio)).await?;

        Ok(AudioSegment {
            url: format!("{}/{}", AUDIO_ROUTE_PREFIX, file_name),
            file_name,
            duration_secs: estimated_duration_secs(chunk),
            size_bytes,
        })
    }

    async fn discard(&self, segments: &[AudioSegment]) {
        for segment in segments {
            if let Some(path) = StoragePath::for_audio(&segment.file_name) {
                if let Err(e) = self.files.delete(&path).await {
                    tracing::warn!(
                        path = %path,
                        error = %e,
                        "Failed to remove partial podcast audio"
                    );
                }
            }
        }
    }
}

pub fn estimated_duration_secs(text: &str) -> u64 {
    text.chars().count().div_ceil(CHARS_PER_SECOND) as u64
}

fn audio_mime(file_name: &str) -> &'static str {
    let extension = file_name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or_default();
    AudioFormat::parse(extension)
        .map(|format| format.mime())
        .unwrap_or("application/octet-stream")
}

/// Packs whole sentences into chunks of at most `max_chars` characters.
/// A sentence longer than the limit is split between words, and a single word
/// longer than the limit is cut.
pub fn split_into_audio_segments(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    let pieces = segment_sentences(text, 1)
        .into_iter()
        .flat_map(|sentence| split_long(&format!("{}.", sentence.text), max_chars));

    for piece in pieces {
        let piece_len = piece.chars().count();
        if current_len > 0 && current_len + 1 + piece_len > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(&piece);
        current_len += piece_len;
    }

    if current_len > 0 {
        chunks.push(current);
    }
    chunks
}

fn split_long(sentence: &str, max_chars: usize) -> Vec<String> {
    if sentence.chars().count() <= max_chars {
        return vec![sentence.to_string()];
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in sentence.split_whitespace() {
        let chars: Vec<char> = word.chars().collect();
        for fragment in chars.chunks(max_chars) {
            let fragment: String = fragment.iter().collect();
            let fragment_len = fragment.chars().count();
            if current_len > 0 && current_len + 1 + fragment_len > max_chars {
                parts.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(&fragment);
            current_len += fragment_len;
        }
    }

    if current_len > 0 {
        parts.push(current);
    }
    parts
}
