use docstudy::application::services::{extract_frequent_terms, is_stop_word};

#[test]
fn given_repeated_terms_when_extracting_then_ranked_by_count_with_first_surface_form() {
    let text = "Aluminum frames. The aluminum frame is strong. Battery and battery again.";

    let terms = extract_frequent_terms(text, 10);

    let ranked: Vec<(&str, usize)> = terms
        .iter()
        .map(|t| (t.text.as_str(), t.frequency))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("Aluminum", 2),
            ("Battery", 2),
            ("frames", 1),
            ("frame", 1),
            ("strong", 1)
        ]
    );
    assert_eq!(terms[0].normalized_form, "aluminum");
}

#[test]
fn given_short_words_and_stop_words_when_extracting_then_they_are_ignored() {
    let terms = extract_frequent_terms("which which which cat dog about photosynthesis", 10);

    let texts: Vec<&str> = terms.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["photosynthesis"]);
    assert!(is_stop_word("which"));
    assert!(!is_stop_word("photosynthesis"));
}

#[test]
fn given_limit_when_extracting_then_result_is_truncated() {
    let text = "alpha1 bravo2 charlie delta4 echo55";

    assert_eq!(extract_frequent_terms(text, 2).len(), 2);
    assert!(extract_frequent_terms(text, 0).is_empty());
}

#[test]
fn given_empty_text_when_extracting_then_no_terms() {
    assert!(extract_frequent_terms("", 5).is_empty());
}
