use docstudy::domain::DEFAULT_VOICE;
use docstudy::presentation::config::{
    Environment, LlmProvider, QuizStrategySetting, Settings, StorageProvider,
};

#[test]
fn given_no_settings_file_when_loading_then_defaults_describe_an_offline_local_server() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.storage.provider, StorageProvider::Local);
    assert_eq!(settings.upload.max_file_size_bytes(), 50 * 1024 * 1024);
    assert_eq!(settings.generation.min_content_chars, 100);
    assert_eq!(settings.generation.quiz_strategy, QuizStrategySetting::Rotation);
    assert_eq!(settings.llm.provider, LlmProvider::None);
    assert_eq!(settings.tts.default_voice, DEFAULT_VOICE);
}

#[test]
fn given_generation_settings_when_clamping_counts_then_kept_within_one_and_max() {
    let generation = Settings::load(Environment::Test).unwrap().generation;

    assert_eq!(generation.clamp_count(None), generation.default_count);
    assert_eq!(generation.clamp_count(Some(0)), 1);
    assert_eq!(generation.clamp_count(Some(7)), 7);
    assert_eq!(generation.clamp_count(Some(10_000)), generation.max_items);
}
