use docstudy::infrastructure::observability::TracingConfig;
use docstudy::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_logging_settings_when_building_config_then_level_and_format_carried_over() {
    let settings = LoggingSettings {
        level: "warn,docstudy=info".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&settings, Environment::Prod);

    assert_eq!(config.filter, "warn,docstudy=info");
    assert!(config.json_format);
    assert_eq!(config.environment, Environment::Prod);
}

#[test]
fn given_blank_level_when_building_config_then_default_filter_used() {
    let settings = LoggingSettings {
        level: "  ".to_string(),
        enable_json: false,
    };

    let config = TracingConfig::from_settings(&settings, Environment::Local);

    assert_eq!(config.filter, TracingConfig::default().filter);
}
