//! Text cleanup for extracted paragraphs.
//!
//! Applied to each paragraph in order: bracketed spans are removed, the
//! remainder is NFKD-normalised, then whitespace runs collapse to a single
//! space and the ends are trimmed.

use unicode_normalization::UnicodeNormalization;

/// Remove every `[...]` span, brackets included.
///
/// Spans do not nest: a `[` seen while already inside a span is part of that
/// span, and the first `]` closes it. An unterminated `[` drops the rest of
/// the text. A `]` outside any span is dropped on its own.
pub fn remove_brackets(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut in_brackets = false;

    for ch in text.chars() {
        match (in_brackets, ch) {
            (false, '[') => in_brackets = true,
            (true, ']') => in_brackets = false,
            (false, ']') | (true, _) => {}
            (false, _) => cleaned.push(ch),
        }
    }

    cleaned
}

/// Apply Unicode compatibility decomposition (NFKD).
pub fn normalize_nfkd(text: &str) -> String {
    text.nfkd().collect()
}

/// Collapse each whitespace run to one ASCII space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Run the full cleanup chain on one paragraph.
pub fn clean_paragraph(text: &str) -> String {
    let text = remove_brackets(text);
    let text = normalize_nfkd(&text);
    collapse_whitespace(&text)
}

/// Clean every paragraph, dropping any left empty by cleanup.
pub fn clean_paragraphs<I, S>(paragraphs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paragraphs
        .into_iter()
        .map(|p| clean_paragraph(p.as_ref()))
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_removed_with_contents() {
        assert_eq!(remove_brackets("a[b]c[d][e]f"), "acf");
    }

    #[test]
    fn unterminated_bracket_consumes_rest() {
        assert_eq!(remove_brackets("a[bc"), "a");
    }

    #[test]
    fn brackets_do_not_nest() {
        // The inner `[` is swallowed; the first `]` closes the span.
        assert_eq!(remove_brackets("x[a[b]c]y"), "xcy");
    }

    #[test]
    fn stray_closing_bracket_dropped() {
        assert_eq!(remove_brackets("a]b"), "ab");
    }

    #[test]
    fn text_without_brackets_unchanged() {
        assert_eq!(remove_brackets("plain text"), "plain text");
        assert_eq!(remove_brackets(""), "");
    }

    #[test]
    fn multibyte_text_survives_bracket_removal() {
        assert_eq!(remove_brackets("café[note 1] ☕"), "café ☕");
    }

    #[test]
    fn nfkd_decomposes_precomposed_accent() {
        let decomposed = normalize_nfkd("\u{e9}");
        assert_eq!(decomposed, "e\u{301}");
        assert_eq!(decomposed.chars().count(), 2);
    }

    #[test]
    fn nfkd_replaces_compatibility_characters() {
        assert_eq!(normalize_nfkd("\u{fb01}"), "fi");
        assert_eq!(normalize_nfkd("x\u{b2}"), "x2");
        assert_eq!(normalize_nfkd("a\u{a0}b"), "a b");
    }

    #[test]
    fn nfkd_is_idempotent() {
        for sample in ["Crème brûlée", "\u{fb01}ne", "Ångström", "plain", ""] {
            let once = normalize_nfkd(sample);
            assert_eq!(normalize_nfkd(&once), once);
        }
    }

    #[test]
    fn whitespace_collapsed_and_trimmed() {
        assert_eq!(collapse_whitespace("  a \t b\n\nc  "), "a b c");
        assert_eq!(collapse_whitespace(" \n "), "");
    }

    #[test]
    fn citation_gap_collapses_to_single_space() {
        assert_eq!(
            clean_paragraph("The dandelion is [1] a flowering plant."),
            "The dandelion is a flowering plant."
        );
    }

    #[test]
    fn clean_paragraph_runs_all_steps() {
        assert_eq!(
            clean_paragraph("Caf\u{e9}[2]\u{a0}au lait.\n"),
            "Cafe\u{301} au lait."
        );
    }

    #[test]
    fn clean_paragraph_is_idempotent() {
        let once = clean_paragraph("Ren\u{e9}  [a] Descartes [b\n");
        assert_eq!(clean_paragraph(&once), once);
    }

    #[test]
    fn paragraphs_emptied_by_cleanup_dropped() {
        let cleaned = clean_paragraphs(["[citation needed]", "Kept [1] text.", " [x] "]);
        assert_eq!(cleaned, vec!["Kept text.".to_owned()]);
    }

    #[test]
    fn paragraph_order_preserved() {
        let cleaned = clean_paragraphs(vec!["B".to_owned(), "A".to_owned(), "C".to_owned()]);
        assert_eq!(cleaned, vec!["B", "A", "C"]);
    }
}
