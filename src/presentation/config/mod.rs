mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VARIABLE, Environment};
pub use settings::{
    GenerationSettings, LlmProvider, LlmSettings, LoggingSettings, NluSettings,
    QuizStrategySetting, ServerSettings, Settings, StorageProvider, StorageSettings,
    TtsSettings, UploadSettings,
};
