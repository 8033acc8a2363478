//! Left-to-right scanner applying [`crate::rules`]: digraph first, then single letter, else passthrough.

use crate::rules::{is_digraph_suffix, lookup_digraph, lookup_letter};

/// Transliterates Finglish to Farsi script.
///
/// Total over any input: characters without a rule (uppercase, digits, punctuation, whitespace,
/// Persian glyphs) are copied unchanged. A digraph consumes its `h`, so the scan resumes after it.
pub fn convert(input: &str) -> String {
    // Persian glyphs are two bytes in UTF-8.
    let mut farsi = String::with_capacity(input.len() * 2);
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(glyph) = lookup_digraph(c) {
            if chars.peek().copied().is_some_and(is_digraph_suffix) {
                chars.next();
                farsi.push_str(glyph);
                continue;
            }
        }

        match lookup_letter(c) {
            Some(glyph) => farsi.push_str(glyph),
            None => farsi.push(c),
        }
    }

    farsi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_single_letters() {
        assert_eq!(convert("salam"), "سالام");
        assert_eq!(convert("dard"), "دارد");
    }

    #[test]
    fn test_digraphs() {
        assert_eq!(convert("shoma"), "شوما");
        assert_eq!(convert("khoobi"), "خووبی");
        assert_eq!(convert("chai"), "چای");
        assert_eq!(convert("gh"), "غ");
    }

    #[test]
    fn test_consumed_h_is_not_reprocessed() {
        assert_eq!(convert("sh"), "ش");
        assert_eq!(convert("shh"), "شه");
        assert_eq!(convert("shch"), "شچ");
    }

    #[test]
    fn test_lone_h() {
        assert_eq!(convert("h"), "ه");
        assert_eq!(convert("hh"), "هه");
        assert_eq!(convert("mah"), "ماه");
    }

    #[test]
    fn test_trailing_digraph_letter() {
        assert_eq!(convert("s"), "س");
        assert_eq!(convert("c"), "س");
        assert_eq!(convert("g"), "گ");
        assert_eq!(convert("k"), "ک");
        assert_eq!(convert("ras"), "راس");
    }

    #[test]
    fn test_digraph_letter_before_non_h() {
        assert_eq!(convert("sa"), "سا");
        assert_eq!(convert("s h"), "س ه");
        assert_eq!(convert("sH"), "سH");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(convert("123!"), "123!");
        assert_eq!(convert("A"), "A");
        assert_eq!(convert("Salam"), "Sالام");
        assert_eq!(convert("salam, khoobi?"), "سالام, خووبی?");
    }

    #[test]
    fn test_multibyte_input_is_scanned_by_char() {
        assert_eq!(convert("سلام"), "سلام");
        assert_eq!(convert("éa"), "éا");
        assert_eq!(convert("😀sh"), "😀ش");
    }
}
