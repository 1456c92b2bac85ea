use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub upload: UploadSettings,
    pub generation: GenerationSettings,
    pub llm: LlmSettings,
    #[serde(default)]
    pub nlu: NluSettings,
    pub tts: TtsSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProvider,
    pub data_dir: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProvider {
    Local,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_file_size_mb: u64,
}

impl UploadSettings {
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSettings {
    pub min_content_chars: usize,
    pub max_items: usize,
    pub default_count: usize,
    pub quiz_strategy: QuizStrategySetting,
    pub provider_timeout_secs: u64,
    pub words_per_minute: f64,
    pub words_per_page: usize,
    pub max_sync_words: usize,
}

impl GenerationSettings {
    /// Requested item counts are clamped into `1..=max_items`.
    pub fn clamp_count(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_count)
            .clamp(1, self.max_items.max(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStrategySetting {
    Rotation,
    ContentMarker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    None,
    Watsonx,
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "lmstudio")]
    LmStudio,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
    pub space_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NluSettings {
    pub api_key: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TtsSettings {
    pub api_key: Option<String>,
    pub url: Option<String>,
    pub default_voice: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers defaults, `appsettings.<environment>` and `APP__`-style
    /// environment variables (`APP_LLM__API_KEY` sets `llm.api_key`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("storage.provider", "local")?
            .set_default("storage.data_dir", "./data")?
            .set_default("upload.max_file_size_mb", 50)?
            .set_default("generation.min_content_chars", 100)?
            .set_default("generation.max_items", 50)?
            .set_default("generation.default_count", 5)?
            .set_default("generation.quiz_strategy", "rotation")?
            .set_default("generation.provider_timeout_secs", 30)?
            .set_default("generation.words_per_minute", 150.0)?
            .set_default("generation.words_per_page", 100)?
            .set_default("generation.max_sync_words", 200)?
            .set_default("llm.provider", "none")?
            .set_default("llm.model", "ibm/granite-13b-instruct-v2")?
            .set_default("tts.default_voice", crate::domain::DEFAULT_VOICE)?
            .set_default("logging.level", "info,docstudy=debug,tower_http=debug")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
