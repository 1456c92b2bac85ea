use std::sync::Arc;

use crate::application::ports::{DocumentRepository, GenerationParams};
use crate::domain::{ContentSource, Document, DocumentId};

use super::content_error::ContentError;
use super::prompt_text::excerpt;
use super::provider_gateway::ProviderGateway;

const DOCUMENT_PREVIEW_CHARS: usize = 1000;
const MAX_SUGGESTIONS: usize = 4;
const MAX_ACTIONS: usize = 3;
const PROVIDER_CONFIDENCE: f32 = 0.9;
const RULE_CONFIDENCE: f32 = 0.8;
const GENERIC_CONFIDENCE: f32 = 0.6;

/// What the assistant advertises to clients choosing how to use it.
pub const AGENT_FEATURES: [&str; 7] = [
    "Document analysis and Q&A",
    "Study material generation",
    "Concept explanation",
    "Learning strategy advice",
    "Interactive content creation",
    "Voice input support",
    "Conversation export",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Personality {
    #[default]
    Helpful,
    Academic,
    Casual,
    Encouraging,
}

impl Personality {
    pub const ALL: [Personality; 4] = [
        Self::Helpful,
        Self::Academic,
        Self::Casual,
        Self::Encouraging,
    ];

    /// Unknown names fall back to `Helpful`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "academic" => Self::Academic,
            "casual" => Self::Casual,
            "encouraging" => Self::Encouraging,
            _ => Self::Helpful,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Helpful => "helpful",
            Self::Academic => "academic",
            Self::Casual => "casual",
            Self::Encouraging => "encouraging",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Helpful => "Helpful & Friendly",
            Self::Academic => "Academic & Formal",
            Self::Casual => "Casual & Relaxed",
            Self::Encouraging => "Encouraging & Motivating",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Helpful => "Supportive and encouraging",
            Self::Academic => "Scholarly and precise",
            Self::Casual => "Easy-going and conversational",
            Self::Encouraging => "Uplifting and confidence-building",
        }
    }

    fn tone(&self) -> &'static str {
        match self {
            Self::Helpful => "friendly and supportive",
            Self::Academic => "formal and scholarly",
            Self::Casual => "relaxed and conversational",
            Self::Encouraging => "motivating and positive",
        }
    }

    fn style(&self) -> &'static str {
        match self {
            Self::Helpful => "Clear explanations with encouraging language",
            Self::Academic => "Precise academic language with detailed explanations",
            Self::Casual => "Easy-going explanations with simple language",
            Self::Encouraging => "Uplifting language that builds confidence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversationMode {
    #[default]
    Chat,
    Tutor,
    Quiz,
    Study,
}

impl ConversationMode {
    pub const ALL: [ConversationMode; 4] = [Self::Chat, Self::Tutor, Self::Quiz, Self::Study];

    /// Unknown names fall back to `Chat`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tutor" => Self::Tutor,
            "quiz" => Self::Quiz,
            "study" => Self::Study,
            _ => Self::Chat,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Tutor => "tutor",
            Self::Quiz => "quiz",
            Self::Study => "study",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Chat => "General Chat",
            Self::Tutor => "Tutoring Mode",
            Self::Quiz => "Quiz Master",
            Self::Study => "Study Buddy",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Chat => "Open conversation and questions",
            Self::Tutor => "Step-by-step teaching",
            Self::Quiz => "Testing knowledge and skills",
            Self::Study => "Study strategies and techniques",
        }
    }

    fn focus(&self) -> &'static str {
        match self {
            Self::Chat => "general conversation and questions",
            Self::Tutor => "step-by-step teaching and explanation",
            Self::Quiz => "testing knowledge and asking questions",
            Self::Study => "study strategies and learning techniques",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    GenerateSummary,
    CreateFlashcards,
    GenerateQuiz,
    CreatePodcast,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GenerateSummary => "generate_summary",
            Self::CreateFlashcards => "create_flashcards",
            Self::GenerateQuiz => "generate_quiz",
            Self::CreatePodcast => "create_podcast",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::GenerateSummary => "Generate Summary",
            Self::CreateFlashcards => "Create Flashcards",
            Self::GenerateQuiz => "Generate Quiz",
            Self::CreatePodcast => "Create Podcast",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::GenerateSummary => "Create a comprehensive summary of the document",
            Self::CreateFlashcards => "Generate interactive flashcards for studying",
            Self::GenerateQuiz => "Create a quiz to test your knowledge",
            Self::CreatePodcast => "Generate an interactive audio version",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AgentRequest {
    pub document_id: Option<DocumentId>,
    pub message: String,
    pub history: Vec<ConversationTurn>,
    pub personality: Personality,
    pub mode: ConversationMode,
}

#[derive(Debug, Clone)]
pub struct AgentReply {
    pub message: String,
    pub confidence: f32,
    pub suggestions: Vec<String>,
    pub actions: Vec<ActionKind>,
    pub personality: Personality,
    pub mode: ConversationMode,
    pub source: ContentSource,
    pub has_document: bool,
}

/// Study assistant conversation. A missing document is not an error here: the
/// agent answers without document context.
pub struct AgentService {
    documents: Arc<dyn DocumentRepository>,
    gateway: Arc<ProviderGateway>,
}

impl AgentService {
    pub fn new(documents: Arc<dyn DocumentRepository>, gateway: Arc<ProviderGateway>) -> Self {
        Self { documents, gateway }
    }

    pub async fn chat(&self, request: AgentRequest) -> Result<AgentReply, ContentError> {
        let message = request.message.trim();
        if message.is_empty() {
            return Err(ContentError::InvalidRequest("message is required".to_string()));
        }

        let document = match request.document_id {
            Some(id) => {
                let found = self.documents.get(id).await?;
                if found.is_none() {
                    tracing::warn!(
                        document_id = %id,
                        "Agent document not found, continuing without context"
                    );
                }
                found
            }
            None => None,
        };

        let prompt = format!(
            "{}{}\n\nHuman: {}\n\nAssistant:",
            system_prompt(request.personality, request.mode, document.as_ref()),
            conversation_context(&request.history),
            message
        );
        let params = GenerationParams {
            max_tokens: 500,
            temperature: 0.7,
            top_p: 0.9,
        };

        let (text, confidence, source) = match self.gateway.generate_text(&prompt, &params).await {
            Ok(text) => (text, PROVIDER_CONFIDENCE, ContentSource::Provider),
            Err(e) => {
                tracing::warn!(error = %e, "Agent provider unavailable, using rule-based reply");
                let (text, confidence) = fallback_reply(message);
                (text, confidence, ContentSource::Fallback)
            }
        };

        let has_document = document.is_some();
        tracing::info!(
            personality = request.personality.as_str(),
            mode = request.mode.as_str(),
            has_document,
            source = source.as_str(),
            "Agent reply generated"
        );

        Ok(AgentReply {
            message: text,
            confidence,
            suggestions: suggestions(message, has_document),
            actions: actions(message, has_document),
            personality: request.personality,
            mode: request.mode,
            source,
            has_document,
        })
    }
}

pub fn system_prompt(
    personality: Personality,
    mode: ConversationMode,
    document: Option<&Document>,
) -> String {
    let mut prompt = format!(
        "You are an AI Learning Assistant with a {} personality. \
         Your communication style: {}. You are currently in {} mode.",
        personality.tone(),
        personality.style(),
        mode.focus()
    );

    if let Some(document) = document {
        prompt.push_str(&format!(
            "\n\nDocument Context:\n- Filename: {}\n- Pages: {}\n- Text Length: {} characters\n- Upload Date: {}\n",
            document.filename,
            document.page_count,
            document.text_length(),
            document.uploaded_at.to_rfc3339()
        ));
        if !document.raw_text.is_empty() {
            prompt.push_str(&format!(
                "\nDocument Preview: {}...\n",
                excerpt(&document.raw_text, DOCUMENT_PREVIEW_CHARS)
            ));
        }
    }

    prompt.push_str(
        "\n\nYour capabilities include:\n\
         - Analyzing documents and answering questions about their content\n\
         - Creating study materials (summaries, flashcards, quizzes)\n\
         - Explaining complex concepts in simple terms\n\
         - Providing learning strategies and study tips\n\
         - Generating audio narrations of documents\n\n\
         Always be helpful, accurate, and educational. If you are not sure about something, say so. \
         Keep responses concise but informative.",
    );
    prompt
}

pub fn conversation_context(history: &[ConversationTurn]) -> String {
    if history.is_empty() {
        return String::new();
    }

    let mut context = String::from("\n\nRecent Conversation:\n");
    for turn in history {
        let role = match turn.speaker {
            Speaker::User => "Human",
            Speaker::Assistant => "Assistant",
        };
        context.push_str(&format!("{}: {}\n", role, turn.content));
    }
    context
}

/// Rule-based reply with its confidence, chosen by the first matching intent.
pub fn fallback_reply(message: &str) -> (String, f32) {
    let lower = message.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    let has_word = |candidates: &[&str]| words.iter().any(|w| candidates.contains(w));

    if has_word(&["hello", "hi", "hey"]) {
        return (
            "Hello! I'm your AI Learning Assistant. I can help you analyze documents, create study \
             materials, and answer questions. What would you like to explore today?"
                .to_string(),
            RULE_CONFIDENCE,
        );
    }
    if lower.contains("summary") || lower.contains("summarize") {
        return (
            "I can help you create a comprehensive summary! Use the 'Generate Summary' action, or \
             tell me which sections interest you most."
                .to_string(),
            RULE_CONFIDENCE,
        );
    }
    if lower.contains("quiz") || lower.contains("test") || lower.contains("questions") {
        return (
            "Great idea! I can create quizzes to test your understanding. Use the 'Generate Quiz' \
             action, or tell me which topics you'd like to focus on."
                .to_string(),
            RULE_CONFIDENCE,
        );
    }
    if lower.contains("study") || lower.contains("learn") || lower.contains("understand") {
        return (
            "I'm here to help you study effectively! I can create flashcards, explain concepts, \
             generate practice questions, or help you plan your study time. What would you like to \
             work on?"
                .to_string(),
            RULE_CONFIDENCE,
        );
    }

    (
        format!(
            "I understand you're asking about: \"{}\". My language model is not reachable right \
             now, but I can still help with document analysis, study materials, and questions about \
             your document. Could you be more specific?",
            message
        ),
        GENERIC_CONFIDENCE,
    )
}

pub fn suggestions(message: &str, has_document: bool) -> Vec<String> {
    let lower = message.to_lowercase();
    let mut suggestions: Vec<&str> = Vec::new();

    if has_document {
        suggestions.extend([
            "Explain the main concepts",
            "Create study questions about this",
            "What are the key takeaways?",
            "Generate a summary",
        ]);
    }
    if lower.contains("explain") || lower.contains("what is") {
        suggestions.extend([
            "Can you give me an example?",
            "How does this relate to other concepts?",
            "Why is this important?",
        ]);
    }
    if lower.contains("help") || lower.contains("study") {
        suggestions.extend([
            "Create flashcards for this topic",
            "Make a quiz to test my knowledge",
            "Suggest study strategies",
        ]);
    }
    if suggestions.len() < 3 {
        suggestions.extend([
            "How can I better understand this?",
            "What should I focus on?",
            "Give me practice questions",
        ]);
    }

    suggestions
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

/// Actions are only offered when a document is loaded.
pub fn actions(message: &str, has_document: bool) -> Vec<ActionKind> {
    if !has_document {
        return Vec::new();
    }

    let lower = message.to_lowercase();
    let mentions = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

    let candidates = [
        (ActionKind::GenerateSummary, mentions(&["summary", "summarize"])),
        (ActionKind::CreateFlashcards, mentions(&["flashcard", "cards"])),
        (ActionKind::GenerateQuiz, mentions(&["quiz", "test", "question"])),
        (ActionKind::CreatePodcast, mentions(&["podcast", "audio", "listen"])),
    ];

    candidates
        .into_iter()
        .filter(|(_, wanted)| *wanted)
        .map(|(kind, _)| kind)
        .take(MAX_ACTIONS)
        .collect()
}
