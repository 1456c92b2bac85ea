use std::sync::Arc;

use docstudy::application::ports::{AudioFormat, FileStoreError};
use docstudy::application::services::{
    AudioSyncSynthesizer, ContentError, PodcastService, ProviderGateway, estimated_duration_secs,
    split_into_audio_segments,
};
use docstudy::domain::{ContentSource, DEFAULT_VOICE, Document};
use docstudy::infrastructure::storage::ObjectFileStore;

use crate::helpers::{FlakySpeech, LECTURE_NOTES, StubSpeech, repository_with, text_document};

async fn service(document: &Document, gateway: ProviderGateway) -> PodcastService {
    PodcastService::new(
        repository_with(document).await,
        Arc::new(gateway),
        Arc::new(ObjectFileStore::in_memory()),
        AudioSyncSynthesizer::default(),
    )
}

fn long_text() -> String {
    (0..60)
        .map(|i| format!("Sentence number {} explains one more detail of the topic at hand.", i))
        .collect::<Vec<_>>()
        .join(" ")
}

#[tokio::test]
async fn given_no_speech_provider_when_generating_then_transcript_without_audio() {
    let document = text_document(LECTURE_NOTES);
    let service = service(&document, ProviderGateway::offline()).await;

    let podcast = service
        .generate(document.id, DEFAULT_VOICE, AudioFormat::Mp3)
        .await
        .unwrap();

    assert!(!podcast.success);
    assert!(podcast.segments.is_empty());
    assert_eq!(podcast.source, ContentSource::Fallback);
    assert!(podcast.message.is_some());
    assert!(podcast.transcript.starts_with("Photosynthesis converts light"));
    assert!(!podcast.sync_data.is_empty());
    assert_eq!(podcast.voice, DEFAULT_VOICE);
}

#[tokio::test]
async fn given_unknown_voice_when_generating_then_invalid_request() {
    let document = text_document(LECTURE_NOTES);
    let service = service(&document, ProviderGateway::offline()).await;

    let result = service
        .generate(document.id, "xx-XX_RobotVoice", AudioFormat::Mp3)
        .await;

    assert!(matches!(result, Err(ContentError::InvalidRequest(_))));
}

#[tokio::test]
async fn given_speech_provider_when_generating_then_segments_are_stored_and_served() {
    let document = text_document(LECTURE_NOTES);
    let service = service(
        &document,
        ProviderGateway::offline().with_speech_synthesizer(Arc::new(StubSpeech)),
    )
    .await;

    let podcast = service
        .generate(document.id, DEFAULT_VOICE, AudioFormat::Mp3)
        .await
        .unwrap();

    assert!(podcast.success);
    assert_eq!(podcast.source, ContentSource::Provider);
    assert_eq!(podcast.segments.len(), 1);

    let segment = &podcast.segments[0];
    assert_eq!(segment.url, format!("/api/audio/{}", segment.file_name));
    assert!(segment.file_name.ends_with(".mp3"));
    assert_eq!(podcast.total_duration_secs, segment.duration_secs);

    let (audio, mime) = service.audio_file(&segment.file_name).await.unwrap();
    assert!(audio.starts_with(b"AUDIO:"));
    assert_eq!(audio.len() as u64, segment.size_bytes);
    assert_eq!(mime, "audio/mpeg");
}

#[tokio::test]
async fn given_long_text_when_generating_then_every_segment_respects_the_request_limit() {
    let document = text_document(&long_text());
    let service = service(
        &document,
        ProviderGateway::offline().with_speech_synthesizer(Arc::new(StubSpeech)),
    )
    .await;

    let podcast = service
        .generate(document.id, DEFAULT_VOICE, AudioFormat::Wav)
        .await
        .unwrap();

    assert!(podcast.segments.len() >= 2);
    assert!(podcast.segments.iter().all(|s| s.file_name.ends_with(".wav")));
    let summed: u64 = podcast.segments.iter().map(|s| s.duration_secs).sum();
    assert_eq!(podcast.total_duration_secs, summed);
}

#[tokio::test]
async fn given_speech_failing_midway_when_generating_then_no_partial_audio_is_returned() {
    let document = text_document(&long_text());
    let service = service(
        &document,
        ProviderGateway::offline().with_speech_synthesizer(Arc::new(FlakySpeech::new(1))),
    )
    .await;

    let podcast = service
        .generate(document.id, DEFAULT_VOICE, AudioFormat::Mp3)
        .await
        .unwrap();

    assert!(!podcast.success);
    assert!(podcast.segments.is_empty());
    assert_eq!(podcast.total_duration_secs, 0);
    assert!(podcast.message.unwrap().contains("quota exceeded"));
}

#[tokio::test]
async fn given_unsafe_or_missing_audio_name_when_fetching_then_rejected() {
    let document = text_document(LECTURE_NOTES);
    let service = service(&document, ProviderGateway::offline()).await;

    assert!(matches!(
        service.audio_file("../metadata.json").await,
        Err(ContentError::InvalidRequest(_))
    ));
    assert!(matches!(
        service.audio_file("missing.mp3").await,
        Err(ContentError::FileStore(FileStoreError::NotFound(_)))
    ));
}

#[test]
fn given_many_sentences_when_splitting_then_chunks_respect_limit_and_keep_every_word() {
    let text = long_text();

    let chunks = split_into_audio_segments(&text, 250);

    assert!(chunks.len() > 1);
    assert!(chunks.iter().all(|c| c.chars().count() <= 250));
    let rejoined: Vec<&str> = chunks.iter().flat_map(|c| c.split_whitespace()).collect();
    let original: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(rejoined, original);
}

#[test]
fn given_sentence_longer_than_limit_when_splitting_then_split_between_words() {
    let sentence = format!("{}.", vec!["alpha"; 40].join(" "));

    let chunks = split_into_audio_segments(&sentence, 30);

    assert!(chunks.iter().all(|c| c.chars().count() <= 30));
    assert_eq!(
        chunks.iter().map(|c| c.split_whitespace().count()).sum::<usize>(),
        40
    );
}

#[test]
fn given_word_longer_than_limit_when_splitting_then_word_is_cut() {
    let chunks = split_into_audio_segments(&"x".repeat(25), 10);

    assert!(chunks.iter().all(|c| c.chars().count() <= 10));
    assert_eq!(chunks.concat().replace(' ', ""), format!("{}.", "x".repeat(25)));
}

#[test]
fn given_empty_text_when_splitting_then_no_chunks() {
    assert!(split_into_audio_segments("  ", 100).is_empty());
}

#[test]
fn given_text_length_when_estimating_duration_then_ten_characters_per_second_rounded_up() {
    assert_eq!(estimated_duration_secs(&"a".repeat(25)), 3);
    assert_eq!(estimated_duration_secs(&"a".repeat(30)), 3);
    assert_eq!(estimated_duration_secs(""), 0);
}
