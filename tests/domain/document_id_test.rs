use docstudy::domain::DocumentId;

#[test]
fn given_document_id_when_displayed_and_parsed_then_same_id_returned() {
    let id = DocumentId::new();

    let parsed: DocumentId = id.to_string().parse().unwrap();

    assert_eq!(parsed, id);
}

#[test]
fn given_surrounding_whitespace_when_parsing_then_id_is_accepted() {
    let id = DocumentId::new();

    let parsed: DocumentId = format!("  {}\n", id).parse().unwrap();

    assert_eq!(parsed, id);
}

#[test]
fn given_malformed_value_when_parsing_then_error_names_the_input() {
    let error = "not-a-uuid".parse::<DocumentId>().unwrap_err();

    assert!(error.contains("not-a-uuid"));
}
