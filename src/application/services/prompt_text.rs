/// Characters of document text sent to a language model with one prompt.
pub const PROMPT_CONTEXT_CHARS: usize = 6000;

/// Leading `max_chars` characters of `text`, cut on a char boundary.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}
