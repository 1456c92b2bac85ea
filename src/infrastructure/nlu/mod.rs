mod watson_nlu_client;

pub use watson_nlu_client::WatsonNluClient;
