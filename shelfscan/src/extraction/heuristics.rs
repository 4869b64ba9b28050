//! Positional title/author heuristic over raw OCR text.
//!
//! Full-page segmentation on a cover surfaces the largest, topmost text block
//! first, so the first readable line is taken as the title and the second as
//! the author. This is a fixed ordering rule, not font-size analysis; it
//! assumes the recognizer emits lines in top-to-bottom visual order.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Only the first lines of a cover carry the title and author; later lines
/// are usually publisher marks or noise.
pub const MAX_CANDIDATE_LINES: usize = 10;

/// Cleaned lines with this many characters or fewer are OCR debris.
pub const MIN_DISCARDED_LEN: usize = 2;

fn disallowed_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[^\w\s\-:'.,!?ğüşıöçĞÜŞİÖÇ]").expect("static character class is valid")
    })
}

/// Recognized text split into reading-order lines.
///
/// Lines are trimmed and never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecognizedText {
    lines: Vec<String>,
}

impl RecognizedText {
    pub fn from_raw(raw: &str) -> Self {
        let lines = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

/// Title and author guessed from a cover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFields {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Remove characters outside the allow-list and trim.
///
/// Word characters (including Turkish letters), whitespace, `-`, `:`, `'`
/// and `. , ! ?` survive.
pub fn clean_line(line: &str) -> String {
    disallowed_chars().replace_all(line, "").trim().to_string()
}

/// Pick title and author from recognized lines.
pub fn extract_candidates(text: &RecognizedText) -> CandidateFields {
    let mut survivors = text
        .lines()
        .iter()
        .take(MAX_CANDIDATE_LINES)
        .map(|line| clean_line(line))
        .filter(|cleaned| cleaned.chars().count() > MIN_DISCARDED_LEN);

    let title = survivors.next();
    let author = title.as_ref().and_then(|_| survivors.next());

    CandidateFields { title, author }
}

/// Convenience wrapper over [`RecognizedText::from_raw`] and [`extract_candidates`].
pub fn parse_book_info(raw: &str) -> CandidateFields {
    extract_candidates(&RecognizedText::from_raw(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_recognized_text_drops_blank_lines() {
        let text = RecognizedText::from_raw("  First  \n\n   \r\n\tSecond\n");
        assert_eq!(text.lines(), &["First".to_string(), "Second".to_string()]);
        assert_eq!(text.len(), 2);
    }

    #[test]
    fn test_gatsby_cover() {
        let fields = parse_book_info("The Great Gatsby\nF. Scott Fitzgerald\nPenguin Classics");
        assert_eq!(
            fields,
            CandidateFields {
                title: Some("The Great Gatsby".to_string()),
                author: Some("F. Scott Fitzgerald".to_string()),
            }
        );
    }

    #[test]
    fn test_single_line_has_no_author() {
        let fields = parse_book_info("Moby Dick");
        assert_eq!(fields.title.as_deref(), Some("Moby Dick"));
        assert_eq!(fields.author, None);
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(parse_book_info(""), CandidateFields::default());
        assert_eq!(parse_book_info("  \n\t\n \r\n"), CandidateFields::default());
    }

    #[test]
    fn test_short_fragments_are_skipped() {
        let fields = parse_book_info("ab\n|\nSuç ve Ceza\nx\nDostoyevski");
        assert_eq!(fields.title.as_deref(), Some("Suç ve Ceza"));
        assert_eq!(fields.author.as_deref(), Some("Dostoyevski"));
    }

    #[test]
    fn test_symbols_do_not_count_towards_length() {
        // "©®™" strips to nothing, "#1*" strips to "1".
        let fields = parse_book_info("©®™\n#1*\nKürk Mantolu Madonna");
        assert_eq!(fields.title.as_deref(), Some("Kürk Mantolu Madonna"));
        assert_eq!(fields.author, None);
    }

    #[test]
    fn test_clean_line_keeps_allowed_punctuation() {
        assert_eq!(
            clean_line("Dune: Messiah -- Frank Herbert's!? (1969), vol. 2"),
            "Dune: Messiah -- Frank Herbert's!? 1969, vol. 2"
        );
        assert_eq!(clean_line("  «İnce Memed»  "), "İnce Memed");
        assert_eq!(clean_line("ğüşıöç ĞÜŞİÖÇ"), "ğüşıöç ĞÜŞİÖÇ");
    }

    #[test]
    fn test_only_first_ten_lines_are_considered() {
        let mut raw = vec!["--"; MAX_CANDIDATE_LINES];
        raw.push("Late Title Line");
        let fields = parse_book_info(&raw.join("\n"));
        assert_eq!(fields, CandidateFields::default());
    }

    #[test]
    fn test_tenth_line_still_counts() {
        let mut raw = vec!["*"; MAX_CANDIDATE_LINES - 1];
        raw.push("Tenth Line Title");
        raw.push("Eleventh Line Author");
        let fields = parse_book_info(&raw.join("\n"));
        assert_eq!(fields.title.as_deref(), Some("Tenth Line Title"));
        assert_eq!(fields.author, None);
    }

    #[test]
    fn test_three_character_line_survives() {
        let fields = parse_book_info("It!\nKing");
        assert_eq!(fields.title.as_deref(), Some("It!"));
        assert_eq!(fields.author.as_deref(), Some("King"));
    }

    #[test]
    fn test_no_returned_field_is_short() {
        let inputs = [
            "a\nbb\nccc\ndd\neeee",
            "  x  \n  yy  \n",
            "@@@\n!!\n.,\nOK?\nA-B",
            "1\n22\n333\n4444\n55555\n666666",
        ];
        for raw in inputs {
            let fields = parse_book_info(raw);
            for value in [fields.title, fields.author].into_iter().flatten() {
                assert!(
                    value.chars().count() > MIN_DISCARDED_LEN,
                    "{value:?} from {raw:?} is too short"
                );
            }
        }
    }

    #[test]
    fn test_parsing_is_deterministic() {
        let raw = "Tutunamayanlar\nOğuz Atay\nİletişim Yayınları";
        assert_eq!(parse_book_info(raw), parse_book_info(raw));
    }
}
