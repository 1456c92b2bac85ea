mod content_source;
mod document;
mod document_id;
mod flashcard;
mod quiz_question;
mod segment;
mod storage_path;
mod sync_point;
mod term;
mod voice;

pub use content_source::ContentSource;
pub use document::{ContentType, Document};
pub use document_id::DocumentId;
pub use flashcard::{CardType, Flashcard, renumber_flashcards};
pub use quiz_question::{OPTIONS_PER_QUESTION, QuizQuestion, QuizValidationError, validate_quiz};
pub use segment::Segment;
pub use storage_path::StoragePath;
pub use sync_point::{Coordinates, SyncPoint};
pub use term::Term;
pub use voice::{DEFAULT_VOICE, Voice, available_voices, is_known_voice};
