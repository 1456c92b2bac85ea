use docstudy::domain::{CardType, ContentSource, Flashcard, renumber_flashcards};

#[test]
fn given_keyword_card_when_serialized_then_type_is_kebab_case_and_keyword_present() {
    let card = Flashcard::new(
        "What is the significance of \"aluminum\" in this document?".to_string(),
        "The frame is aluminum.".to_string(),
        CardType::KeywordBased,
        ContentSource::Provider,
    )
    .with_keyword("aluminum".to_string(), 0.92);

    let json = serde_json::to_value(&card).unwrap();

    assert_eq!(json["type"], "keyword-based");
    assert_eq!(json["source"], "provider");
    assert_eq!(json["keyword"], "aluminum");
}

#[test]
fn given_card_without_keyword_when_serialized_then_optional_fields_are_omitted() {
    let card = Flashcard::new(
        "Q".to_string(),
        "A".to_string(),
        CardType::SentenceBased,
        ContentSource::Fallback,
    );

    let json = serde_json::to_value(&card).unwrap();

    assert!(json.get("keyword").is_none());
    assert!(json.get("relevance").is_none());
    assert_eq!(json["type"], "sentence-based");
}

#[test]
fn given_cards_with_arbitrary_ids_when_renumbered_then_ids_run_from_one() {
    let mut cards: Vec<Flashcard> = (0..3)
        .map(|i| {
            let mut card = Flashcard::new(
                format!("Q{}", i),
                format!("A{}", i),
                CardType::TermBased,
                ContentSource::Fallback,
            );
            card.id = 40 + i;
            card
        })
        .collect();

    renumber_flashcards(&mut cards);

    let ids: Vec<usize> = cards.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
