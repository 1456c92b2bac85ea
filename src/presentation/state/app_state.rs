use std::sync::Arc;

use crate::application::ports::{DocumentRepository, FileLoader, FileStore};
use crate::application::services::{
    AgentService, AudioSyncSynthesizer, ChatService, DocumentService, FlashcardService,
    PodcastService, ProviderGateway, QuizFallbackGenerator, QuizService, QuizStrategy,
    SummaryService,
};
use crate::presentation::config::{QuizStrategySetting, Settings};

#[derive(Clone)]
pub struct AppState {
    pub document_service: Arc<DocumentService>,
    pub flashcard_service: Arc<FlashcardService>,
    pub quiz_service: Arc<QuizService>,
    pub summary_service: Arc<SummaryService>,
    pub podcast_service: Arc<PodcastService>,
    pub chat_service: Arc<ChatService>,
    pub agent_service: Arc<AgentService>,
    pub gateway: Arc<ProviderGateway>,
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Wires every service over the same storage and provider gateway.
    pub fn new(
        settings: Settings,
        documents: Arc<dyn DocumentRepository>,
        files: Arc<dyn FileStore>,
        file_loader: Arc<dyn FileLoader>,
        gateway: ProviderGateway,
    ) -> Self {
        let gateway = Arc::new(gateway);
        let generation = &settings.generation;

        let strategy = match generation.quiz_strategy {
            QuizStrategySetting::Rotation => QuizStrategy::Rotation,
            QuizStrategySetting::ContentMarker => QuizStrategy::ContentMarker,
        };
        let sync = AudioSyncSynthesizer::new(
            generation.words_per_minute,
            generation.words_per_page,
            generation.max_sync_words,
        );

        Self {
            document_service: Arc::new(DocumentService::new(
                Arc::clone(&documents),
                Arc::clone(&files),
                file_loader,
                settings.upload.max_file_size_bytes(),
            )),
            flashcard_service: Arc::new(FlashcardService::new(
                Arc::clone(&documents),
                Arc::clone(&gateway),
                generation.min_content_chars,
            )),
            quiz_service: Arc::new(QuizService::new(
                Arc::clone(&documents),
                Arc::clone(&gateway),
                QuizFallbackGenerator::new(strategy),
                generation.min_content_chars,
            )),
            summary_service: Arc::new(SummaryService::new(
                Arc::clone(&documents),
                Arc::clone(&gateway),
            )),
            podcast_service: Arc::new(PodcastService::new(
                Arc::clone(&documents),
                Arc::clone(&gateway),
                files,
                sync,
            )),
            chat_service: Arc::new(ChatService::new(
                Arc::clone(&documents),
                Arc::clone(&gateway),
            )),
            agent_service: Arc::new(AgentService::new(documents, Arc::clone(&gateway))),
            gateway,
            settings: Arc::new(settings),
        }
    }
}
