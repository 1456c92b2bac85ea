use std::sync::Arc;

use docstudy::application::services::{
    ChatService, ContentError, NO_ANSWER, ProviderGateway, relevant_sentences,
};
use docstudy::domain::{ContentSource, DocumentId};

use crate::helpers::{LECTURE_NOTES, StubLlm, repository_with, text_document};

#[tokio::test]
async fn given_offline_gateway_when_asking_then_first_matching_sentence_answers() {
    let document = text_document(LECTURE_NOTES);
    let service = ChatService::new(
        repository_with(&document).await,
        Arc::new(ProviderGateway::offline()),
    );

    let answer = service
        .answer(document.id, "What does chlorophyll absorb?")
        .await
        .unwrap();

    assert_eq!(answer.answer, "Chlorophyll absorbs mostly blue and red light.");
    assert_eq!(answer.relevant_sentences, 1);
    assert_eq!(answer.source, ContentSource::Fallback);
    assert_eq!(answer.question, "What does chlorophyll absorb?");
}

#[tokio::test]
async fn given_question_with_no_overlap_when_asking_offline_then_no_answer_message() {
    let document = text_document(LECTURE_NOTES);
    let service = ChatService::new(
        repository_with(&document).await,
        Arc::new(ProviderGateway::offline()),
    );

    let answer = service
        .answer(document.id, "Explain quantum gravity?")
        .await
        .unwrap();

    assert_eq!(answer.answer, NO_ANSWER);
    assert_eq!(answer.relevant_sentences, 0);
}

#[tokio::test]
async fn given_language_model_when_asking_then_model_answer_returned() {
    let document = text_document(LECTURE_NOTES);
    let gateway =
        ProviderGateway::offline().with_llm(Arc::new(StubLlm::new("Blue and red light.")));
    let service = ChatService::new(repository_with(&document).await, Arc::new(gateway));

    let answer = service
        .answer(document.id, "What does chlorophyll absorb?")
        .await
        .unwrap();

    assert_eq!(answer.answer, "Blue and red light.");
    assert_eq!(answer.source, ContentSource::Provider);
}

#[tokio::test]
async fn given_blank_question_when_asking_then_invalid_request() {
    let document = text_document(LECTURE_NOTES);
    let service = ChatService::new(
        repository_with(&document).await,
        Arc::new(ProviderGateway::offline()),
    );

    let result = service.answer(document.id, "   ").await;

    assert!(matches!(result, Err(ContentError::InvalidRequest(_))));
}

#[tokio::test]
async fn given_unknown_document_when_asking_then_not_found() {
    let document = text_document(LECTURE_NOTES);
    let service = ChatService::new(
        repository_with(&document).await,
        Arc::new(ProviderGateway::offline()),
    );

    let result = service.answer(DocumentId::new(), "Anything?").await;

    assert!(matches!(result, Err(ContentError::DocumentNotFound(_))));
}

#[test]
fn given_only_short_question_words_when_matching_then_nothing_is_relevant() {
    assert!(relevant_sentences(LECTURE_NOTES, "is it ok?").is_empty());
}

#[test]
fn given_keyword_in_several_sentences_when_matching_then_all_are_returned_in_order() {
    let relevant = relevant_sentences(LECTURE_NOTES, "light?");

    let texts: Vec<&str> = relevant.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "Photosynthesis converts light energy into chemical energy",
            "Chlorophyll absorbs mostly blue and red light"
        ]
    );
}
