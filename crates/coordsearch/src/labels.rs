//! Markup helpers for search result labels.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

pub const HIGHLIGHT_START: &str = r#"<span class="ga-search-highlight">"#;
pub const HIGHLIGHT_END: &str = "</span>";

/// Existing markup a highlight must never be placed across.
const PROTECTED_TAGS: [&str; 4] = ["<b>", "</b>", HIGHLIGHT_START, HIGHLIGHT_END];

static PROTECTED: Lazy<Regex> = Lazy::new(|| {
    let alternatives = PROTECTED_TAGS.iter().map(|tag| regex::escape(tag));
    RegexBuilder::new(&itertools::join(alternatives, "|"))
        .case_insensitive(true)
        .build()
        .expect("protected tags pattern")
});

static FORMATTING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<b>|</b>|<i>|</i>").expect("formatting tags pattern"));

fn protected_spans(label: &str) -> Vec<Range<usize>> {
    PROTECTED.find_iter(label).map(|m| m.range()).collect()
}

/// Whether the match starts or ends inside a protected span.
fn overlaps(spans: &[Range<usize>], matched: &Range<usize>) -> bool {
    spans.iter().any(|span| {
        (matched.start >= span.start && matched.start < span.end)
            || (matched.end > span.start && matched.end <= span.end)
    })
}

fn highlight_word(label: &str, word: &str) -> String {
    if word.is_empty() {
        return label.to_owned();
    }
    let Ok(pattern) = RegexBuilder::new(&regex::escape(word))
        .case_insensitive(true)
        .build()
    else {
        return label.to_owned();
    };

    let spans = protected_spans(label);
    let mut out = String::with_capacity(label.len());
    let mut last = 0;
    for found in pattern.find_iter(label) {
        let range = found.range();
        out.push_str(&label[last..range.start]);
        if overlaps(&spans, &range) {
            out.push_str(found.as_str());
        } else {
            out.push_str(HIGHLIGHT_START);
            out.push_str(found.as_str());
            out.push_str(HIGHLIGHT_END);
        }
        last = range.end;
    }
    out.push_str(&label[last..]);
    out
}

/// Wrap every case-insensitive occurrence of each space separated word of
/// `words` in highlight markup, keeping the label's own casing. Occurrences
/// that would cut through existing `<b>` or highlight tags are left alone.
pub fn highlight(label: &str, words: &str) -> String {
    words
        .split(' ')
        .fold(label.to_owned(), |acc, word| highlight_word(&acc, word))
}

/// Strip `<b>` and `<i>` formatting from a label.
pub fn clean_label(label: &str) -> String {
    FORMATTING.replace_all(label, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hl(text: &str) -> String {
        format!("{HIGHLIGHT_START}{text}{HIGHLIGHT_END}")
    }

    #[test]
    fn test_highlight_single_word() {
        assert_eq!(
            highlight("Bern Bahnhof", "bern"),
            format!("{} Bahnhof", hl("Bern"))
        );
    }

    #[test]
    fn test_highlight_every_occurrence() {
        assert_eq!(
            highlight("Berneck, Bern", "BERN"),
            format!("{}eck, {}", hl("Bern"), hl("Bern"))
        );
    }

    #[test]
    fn test_highlight_several_words() {
        assert_eq!(
            highlight("Zürich Hauptbahnhof", "zürich haupt"),
            format!("{} {}bahnhof", hl("Zürich"), hl("Haupt"))
        );
    }

    #[test]
    fn test_empty_words_are_ignored() {
        assert_eq!(highlight("Bern", ""), "Bern");
        assert_eq!(highlight("Bern", "  "), "Bern");
    }

    #[test]
    fn test_existing_markup_is_not_broken() {
        assert_eq!(highlight("<b>Bern</b>", "b"), format!("<b>{}ern</b>", hl("B")));
        // The word "span" only occurs inside the highlight tags added for "bern".
        let once = highlight("Bern", "bern");
        assert_eq!(highlight(&once, "span"), once);
    }

    #[test]
    fn test_special_characters_are_literal() {
        assert_eq!(highlight("St. Gallen (SG)", "(sg)"), format!("St. Gallen {}", hl("(SG)")));
        assert_eq!(highlight("a+b", "."), "a+b");
    }

    #[test]
    fn test_clean_label() {
        assert_eq!(clean_label("<b>Bern</b> <i>BE</i>"), "Bern BE");
        assert_eq!(clean_label("<B>Bern</B>"), "Bern");
        assert_eq!(clean_label("<span>Bern</span>"), "<span>Bern</span>");
    }
}
