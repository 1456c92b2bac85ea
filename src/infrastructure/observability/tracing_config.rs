use crate::presentation::config::{Environment, LoggingSettings};

const DEFAULT_FILTER: &str = "info,docstudy=debug,tower_http=debug";

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
    pub filter: String,
}

impl TracingConfig {
    pub fn from_settings(settings: &LoggingSettings, environment: Environment) -> Self {
        let filter = if settings.level.trim().is_empty() {
            DEFAULT_FILTER.to_string()
        } else {
            settings.level.clone()
        };

        Self {
            environment,
            json_format: settings.enable_json,
            filter,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            json_format: false,
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}
