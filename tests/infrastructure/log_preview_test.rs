use docstudy::infrastructure::observability::log_preview;

#[test]
fn given_empty_text_when_previewing_then_placeholder() {
    assert_eq!(log_preview("   "), "[EMPTY]");
}

#[test]
fn given_short_text_when_previewing_then_unchanged() {
    assert_eq!(log_preview("What is osmosis?"), "What is osmosis?");
}

#[test]
fn given_long_text_when_previewing_then_cut_with_total_length() {
    let text = "a".repeat(150);

    let preview = log_preview(&text);

    assert_eq!(preview, format!("{}... (150 chars total)", "a".repeat(100)));
}

#[test]
fn given_multibyte_text_at_cut_point_when_previewing_then_no_panic() {
    let text = "é".repeat(120);

    let preview = log_preview(&text);

    assert!(preview.starts_with(&"é".repeat(100)));
    assert!(preview.ends_with("(120 chars total)"));
}

#[test]
fn given_newlines_when_previewing_then_flattened() {
    assert_eq!(log_preview("line one\nline two\r\n"), "line one line two");
}

#[test]
fn given_credentials_when_previewing_then_every_value_is_redacted() {
    let preview = log_preview("Authorization: Bearer abc123 apikey=one&token=two password=hunter2");

    assert!(!preview.contains("abc123"));
    assert!(!preview.contains("one&"));
    assert!(!preview.contains("two"));
    assert!(!preview.contains("hunter2"));
    assert_eq!(preview.matches("[REDACTED]").count(), 4);
}

#[test]
fn given_repeated_marker_when_previewing_then_each_occurrence_redacted() {
    let preview = log_preview("token=first and token=second");

    assert_eq!(preview, "token=[REDACTED] and token=[REDACTED]");
}
