mod watson_tts_client;

pub use watson_tts_client::WatsonTtsClient;
