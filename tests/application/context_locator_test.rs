use docstudy::application::services::{find_context_for_phrase, find_context_for_term};

const TEXT: &str = "The frame is made of aluminum. Battery life reaches 18 hours. \
The display uses an IPS panel.";

#[test]
fn given_term_in_text_when_locating_then_first_matching_sentence_returned() {
    assert_eq!(
        find_context_for_term(TEXT, "battery"),
        "Battery life reaches 18 hours"
    );
}

#[test]
fn given_term_in_different_case_when_locating_then_match_ignores_case() {
    assert_eq!(
        find_context_for_term(TEXT, "ALUMINUM"),
        "The frame is made of aluminum"
    );
}

#[test]
fn given_absent_term_when_locating_then_filler_sentence_mentions_term() {
    assert_eq!(
        find_context_for_term(TEXT, "quantum"),
        "\"quantum\" appears in the context of the document content."
    );
}

#[test]
fn given_blank_term_when_locating_then_generic_filler_returned() {
    assert_eq!(
        find_context_for_term(TEXT, "  "),
        "This appears in the context of the document content."
    );
}

#[test]
fn given_phrase_when_locating_then_any_of_first_three_words_matches() {
    let context = find_context_for_phrase(TEXT, "IPS technology: wide viewing angles");

    assert_eq!(context, "The display uses an IPS panel");
}

#[test]
fn given_phrase_with_no_matching_words_when_locating_then_filler_returned() {
    let context = find_context_for_phrase(TEXT, "Warranty coverage terms");

    assert_eq!(
        context,
        "\"Warranty coverage terms\" appears in the context of the document content."
    );
}

#[test]
fn given_term_split_by_abbreviation_when_locating_then_paragraph_first_sentence_returned() {
    let text = "We moved to the U.S. Army base.\n\nLater things.";

    assert_eq!(find_context_for_term(text, "U.S. Army"), "We moved to the U.S");
}

#[test]
fn given_term_only_in_short_sentence_when_locating_then_paragraph_first_sentence_returned() {
    let text = "Solar power keeps growing every year. It wins.";

    assert_eq!(
        find_context_for_term(text, "wins"),
        "Solar power keeps growing every year"
    );
}
