mod agent_service;
mod audio_sync;
mod chat_service;
mod content_error;
mod context_locator;
mod document_service;
mod flashcard_generator;
mod flashcard_service;
mod podcast_service;
mod prompt_text;
mod provider_gateway;
mod quiz_generator;
mod quiz_service;
mod summary_service;
mod term_extractor;
mod text_segmenter;

pub use agent_service::{
    AGENT_FEATURES, ActionKind, AgentReply, AgentRequest, AgentService, ConversationMode,
    ConversationTurn, Personality, Speaker, actions, conversation_context, fallback_reply,
    suggestions, system_prompt,
};
pub use audio_sync::{
    AudioSyncSynthesizer, DEFAULT_MAX_WORDS, DEFAULT_WORDS_PER_MINUTE, DEFAULT_WORDS_PER_PAGE,
};
pub use chat_service::{ChatAnswer, ChatService, NO_ANSWER, relevant_sentences};
pub use content_error::ContentError;
pub use context_locator::{find_context_for_phrase, find_context_for_term};
pub use document_service::{DocumentError, DocumentService};
pub use flashcard_generator::{
    FlashcardFallbackGenerator, MAX_IMPORTANT_TERMS, MAX_KEY_PHRASES, extract_key_phrases,
};
pub use flashcard_service::{FlashcardService, FlashcardSet};
pub use podcast_service::{
    AUDIO_ROUTE_PREFIX, AudioSegment, MAX_SEGMENT_CHARS, Podcast, PodcastService,
    estimated_duration_secs, split_into_audio_segments,
};
pub use prompt_text::{PROMPT_CONTEXT_CHARS, excerpt};
pub use provider_gateway::{
    DEFAULT_PROVIDER_TIMEOUT, ProviderError, ProviderGateway, ProviderKind, ProviderStatus,
};
pub use quiz_generator::{
    KEY_POINT_QUESTION, QuizFallbackGenerator, QuizStrategy, has_content_markers,
};
pub use quiz_service::{Quiz, QuizParseError, QuizService, parse_provider_quiz, quiz_prompt};
pub use summary_service::{
    DocumentAnalysis, KeyTerm, Summary, SummaryService, leading_sentences_summary,
};
pub use term_extractor::{MIN_TERM_CHARS, extract_frequent_terms, is_stop_word};
pub use text_segmenter::{
    CONTEXT_SENTENCE_MIN_CHARS, QUIZ_SENTENCE_MIN_CHARS, STRUCTURED_LINE_MAX_CHARS,
    first_sentence, is_list_item, is_structured_line, segment_lines, segment_sentences,
    split_paragraphs, strip_line_marker,
};
