use docstudy::application::ports::LlmClientError;
use docstudy::infrastructure::llm::LlmClientFactory;
use docstudy::presentation::config::{LlmProvider, LlmSettings};

fn settings(provider: LlmProvider) -> LlmSettings {
    LlmSettings {
        provider,
        api_key: None,
        base_url: None,
        model: "ibm/granite-13b-instruct-v2".to_string(),
        space_id: None,
    }
}

#[test]
fn given_no_provider_when_creating_then_offline() {
    let client =
        LlmClientFactory::create(&settings(LlmProvider::None), reqwest::Client::new()).unwrap();

    assert!(client.is_none());
}

#[test]
fn given_watsonx_without_credentials_when_creating_then_configuration_error() {
    let mut watsonx = settings(LlmProvider::Watsonx);
    watsonx.api_key = Some("key".to_string());

    let result = LlmClientFactory::create(&watsonx, reqwest::Client::new());

    match result {
        Err(LlmClientError::Configuration(message)) => assert!(message.contains("space_id")),
        _ => panic!("expected a configuration error"),
    }
}

#[test]
fn given_complete_watsonx_settings_when_creating_then_client_built() {
    let mut watsonx = settings(LlmProvider::Watsonx);
    watsonx.api_key = Some("key".to_string());
    watsonx.space_id = Some("space".to_string());

    let client = LlmClientFactory::create(&watsonx, reqwest::Client::new()).unwrap();

    assert!(client.is_some());
}

#[test]
fn given_lmstudio_without_base_url_when_creating_then_configuration_error() {
    let result = LlmClientFactory::create(&settings(LlmProvider::LmStudio), reqwest::Client::new());

    assert!(matches!(result, Err(LlmClientError::Configuration(_))));
}

#[test]
fn given_blank_openai_key_when_creating_then_configuration_error() {
    let mut openai = settings(LlmProvider::OpenAi);
    openai.api_key = Some("  ".to_string());

    let result = LlmClientFactory::create(&openai, reqwest::Client::new());

    assert!(matches!(result, Err(LlmClientError::Configuration(_))));
}
