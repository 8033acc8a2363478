//! Static rule table: Latin letters and digraphs mapped to Persian glyphs.
//!
//! The table is plain data so it can be listed (`finglish-bot rules`) and tested without going
//! through the scanner. Only lowercase ASCII letters have rules.

/// Letter that, followed by `h`, forms a digraph with its own glyph.
const DIGRAPH_SUFFIX: char = 'h';

/// One mapping from an input sequence (one letter or a letter + `h`) to its Persian output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub input: &'static str,
    pub output: &'static str,
}

impl Rule {
    const fn new(input: &'static str, output: &'static str) -> Self {
        Self { input, output }
    }

    /// True for two-character rules (`ch`, `gh`, `kh`, `sh`).
    pub fn is_digraph(&self) -> bool {
        self.input.len() == 2
    }
}

/// Digraph rules. Checked before [`LETTERS`].
pub static DIGRAPHS: [Rule; 4] = [
    Rule::new("ch", "چ"),
    Rule::new("gh", "غ"),
    Rule::new("kh", "خ"),
    Rule::new("sh", "ش"),
];

/// Single-letter rules, indexed by `c - 'a'`.
pub static LETTERS: [Rule; 26] = [
    Rule::new("a", "ا"),
    Rule::new("b", "ب"),
    Rule::new("c", "س"),
    Rule::new("d", "د"),
    Rule::new("e", "ع"),
    Rule::new("f", "ف"),
    Rule::new("g", "گ"),
    Rule::new("h", "ه"),
    Rule::new("i", "ی"),
    Rule::new("j", "ج"),
    Rule::new("k", "ک"),
    Rule::new("l", "ل"),
    Rule::new("m", "م"),
    Rule::new("n", "ن"),
    Rule::new("o", "و"),
    Rule::new("p", "پ"),
    Rule::new("q", "ک"),
    Rule::new("r", "ر"),
    Rule::new("s", "س"),
    Rule::new("t", "ت"),
    Rule::new("u", "ی"),
    Rule::new("v", "و"),
    Rule::new("w", "و"),
    Rule::new("x", "خ"),
    Rule::new("y", "ی"),
    Rule::new("z", "ز"),
];

/// All rules in match priority order: digraphs first, then single letters.
pub fn rules() -> impl Iterator<Item = &'static Rule> {
    DIGRAPHS.iter().chain(LETTERS.iter())
}

/// Glyph for a single lowercase letter, or `None` if `c` has no rule.
pub fn lookup_letter(c: char) -> Option<&'static str> {
    if c.is_ascii_lowercase() {
        Some(LETTERS[(c as u8 - b'a') as usize].output)
    } else {
        None
    }
}

/// Glyph for the digraph `c` + `h`, or `None` if `c` does not start a digraph.
pub fn lookup_digraph(c: char) -> Option<&'static str> {
    DIGRAPHS
        .iter()
        .find(|rule| rule.input.starts_with(c))
        .map(|rule| rule.output)
}

/// True if `c` is the second character of every digraph.
pub(crate) fn is_digraph_suffix(c: char) -> bool {
    c == DIGRAPH_SUFFIX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_table_is_ordered_a_to_z() {
        for (i, rule) in LETTERS.iter().enumerate() {
            let expected = (b'a' + i as u8) as char;
            assert_eq!(rule.input, expected.to_string());
        }
    }

    #[test]
    fn test_every_digraph_ends_with_h() {
        for rule in DIGRAPHS.iter() {
            assert!(rule.is_digraph());
            assert!(rule.input.ends_with(DIGRAPH_SUFFIX));
        }
    }

    #[test]
    fn test_rules_lists_digraphs_first() {
        let all: Vec<&Rule> = rules().collect();
        assert_eq!(all.len(), 30);
        assert!(all[..4].iter().all(|r| r.is_digraph()));
        assert!(all[4..].iter().all(|r| !r.is_digraph()));
    }

    #[test]
    fn test_lookup_letter() {
        assert_eq!(lookup_letter('a'), Some("ا"));
        assert_eq!(lookup_letter('z'), Some("ز"));
        assert_eq!(lookup_letter('u'), Some("ی"));
        assert_eq!(lookup_letter('A'), None);
        assert_eq!(lookup_letter('1'), None);
        assert_eq!(lookup_letter('ا'), None);
    }

    #[test]
    fn test_lookup_digraph() {
        assert_eq!(lookup_digraph('c'), Some("چ"));
        assert_eq!(lookup_digraph('g'), Some("غ"));
        assert_eq!(lookup_digraph('k'), Some("خ"));
        assert_eq!(lookup_digraph('s'), Some("ش"));
        assert_eq!(lookup_digraph('z'), None);
        assert_eq!(lookup_digraph('h'), None);
        assert_eq!(lookup_digraph('S'), None);
    }
}
