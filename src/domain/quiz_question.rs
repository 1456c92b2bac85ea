use serde::Serialize;

pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: usize,
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
}

impl QuizQuestion {
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct_index).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizValidationError {
    #[error("expected {expected} questions, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("question {id}: empty question text")]
    EmptyQuestion { id: usize },
    #[error("question {id}: expected 4 options, got {actual}")]
    WrongOptionCount { id: usize, actual: usize },
    #[error("question {id}: option {index} is empty")]
    EmptyOption { id: usize, index: usize },
    #[error("question {id}: correct index {index} out of range")]
    CorrectIndexOutOfRange { id: usize, index: usize },
    #[error("question {id}: missing explanation")]
    MissingExplanation { id: usize },
}

/// Checks the structure every quiz must have before it reaches a caller.
pub fn validate_quiz(questions: &[QuizQuestion], count: usize) -> Result<(), QuizValidationError> {
    if questions.len() != count {
        return Err(QuizValidationError::WrongLength {
            expected: count,
            actual: questions.len(),
        });
    }

    for question in questions {
        let id = question.id;
        if question.question.trim().is_empty() {
            return Err(QuizValidationError::EmptyQuestion { id });
        }
        if question.options.len() != OPTIONS_PER_QUESTION {
            return Err(QuizValidationError::WrongOptionCount {
                id,
                actual: question.options.len(),
            });
        }
        if let Some(index) = question.options.iter().position(|o| o.trim().is_empty()) {
            return Err(QuizValidationError::EmptyOption { id, index });
        }
        if question.correct_index >= OPTIONS_PER_QUESTION {
            return Err(QuizValidationError::CorrectIndexOutOfRange {
                id,
                index: question.correct_index,
            });
        }
        if question.explanation.trim().is_empty() {
            return Err(QuizValidationError::MissingExplanation { id });
        }
    }

    Ok(())
}
