use docstudy::domain::{QuizQuestion, QuizValidationError, validate_quiz};

fn question(id: usize) -> QuizQuestion {
    QuizQuestion {
        id,
        question: "Which metal is the frame made of?".to_string(),
        options: vec![
            "Aluminum".to_string(),
            "Steel".to_string(),
            "Titanium".to_string(),
            "Copper".to_string(),
        ],
        correct_index: 0,
        explanation: "The frame is aluminum.".to_string(),
    }
}

#[test]
fn given_well_formed_quiz_when_validating_then_ok() {
    let quiz = vec![question(1), question(2)];

    assert!(validate_quiz(&quiz, 2).is_ok());
    assert_eq!(quiz[0].correct_option(), Some("Aluminum"));
}

#[test]
fn given_wrong_question_count_when_validating_then_length_error() {
    let quiz = vec![question(1)];

    assert_eq!(
        validate_quiz(&quiz, 3),
        Err(QuizValidationError::WrongLength {
            expected: 3,
            actual: 1
        })
    );
}

#[test]
fn given_three_options_when_validating_then_option_count_error() {
    let mut q = question(1);
    q.options.pop();

    assert_eq!(
        validate_quiz(&[q], 1),
        Err(QuizValidationError::WrongOptionCount { id: 1, actual: 3 })
    );
}

#[test]
fn given_blank_option_when_validating_then_empty_option_error() {
    let mut q = question(1);
    q.options[2] = "   ".to_string();

    assert_eq!(
        validate_quiz(&[q], 1),
        Err(QuizValidationError::EmptyOption { id: 1, index: 2 })
    );
}

#[test]
fn given_correct_index_four_when_validating_then_out_of_range_error() {
    let mut q = question(1);
    q.correct_index = 4;

    assert_eq!(
        validate_quiz(&[q], 1),
        Err(QuizValidationError::CorrectIndexOutOfRange { id: 1, index: 4 })
    );
}

#[test]
fn given_missing_explanation_when_validating_then_rejected() {
    let mut q = question(1);
    q.explanation.clear();

    assert_eq!(
        validate_quiz(&[q], 1),
        Err(QuizValidationError::MissingExplanation { id: 1 })
    );
}

#[test]
fn given_question_when_serialized_then_correct_index_is_camel_case() {
    let json = serde_json::to_value(question(1)).unwrap();

    assert_eq!(json["correctIndex"], 0);
    assert_eq!(json["options"].as_array().unwrap().len(), 4);
}
