mod llm_client_factory;
mod openai_client;
mod watsonx_client;

pub use llm_client_factory::{LlmClientFactory, WATSONX_EU_DE_URL};
pub use openai_client::{OPENAI_BASE_URL, OpenAiClient};
pub use watsonx_client::WatsonxClient;
