use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static HYPHEN_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<prefix>\w)-[ \t]*\r?\n[ \t]*(?P<suffix>\w)").unwrap());

/// Cleans text pulled out of PDFs and text files for the segmenters.
///
/// Applies NFKC (ligatures such as "ﬁ" become "fi"), maps exotic line and
/// space separators to plain ones, joins words hyphenated across a line break,
/// collapses runs of whitespace inside lines and keeps one blank line between
/// paragraphs.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized = normalize_characters(raw);
    let joined = HYPHEN_NEWLINE.replace_all(&normalized, "$prefix$suffix");

    let mut paragraphs: Vec<String> = Vec::new();
    let mut lines: Vec<String> = Vec::new();
    for line in joined.lines() {
        let line = line.split_whitespace().collect::<Vec<_>>().join(" ");
        if line.is_empty() {
            flush_paragraph(&mut lines, &mut paragraphs);
        } else {
            lines.push(line);
        }
    }
    flush_paragraph(&mut lines, &mut paragraphs);

    paragraphs.join("\n\n")
}

fn normalize_characters(raw: &str) -> String {
    raw.nfkc()
        .filter_map(|ch| match ch {
            '\u{2028}' | '\u{2029}' | '\u{0085}' | '\u{000c}' => Some('\n'),
            '\u{00ad}' | '\u{200b}' | '\u{feff}' => None,
            c if c.is_control() && !matches!(c, '\n' | '\r' | '\t') => None,
            c => Some(c),
        })
        .collect()
}

fn flush_paragraph(lines: &mut Vec<String>, paragraphs: &mut Vec<String>) {
    if !lines.is_empty() {
        paragraphs.push(lines.join("\n"));
        lines.clear();
    }
}
