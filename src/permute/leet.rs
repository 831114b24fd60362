//! Leet-speak substitution for username variants

/// Character substitution table for leet-speak variants
///
/// Applied to lowercase input; characters without an entry pass through
/// unchanged.
pub const LEET_MAP: &[(char, char)] = &[
    ('a', '4'),
    ('e', '3'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
];

/// Substitute every mapped character in `word` (e.g. `jane.doe` -> `j4n3.d03`)
///
/// Total and deterministic: separators and unmapped characters are kept,
/// so the variant of a mapping-free word is the word itself.
pub fn to_leet(word: &str) -> String {
    word.chars().map(substitute).collect()
}

fn substitute(c: char) -> char {
    LEET_MAP
        .iter()
        .find(|(plain, _)| *plain == c)
        .map(|(_, leet)| *leet)
        .unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_all_mapped_chars() {
        assert_eq!(to_leet("jane.doe"), "j4n3.d03");
        assert_eq!(to_leet("test"), "7357");
        assert_eq!(to_leet("aeiost"), "431057");
    }

    #[test]
    fn test_keeps_unmapped_chars() {
        assert_eq!(to_leet("jdy"), "jdy");
        assert_eq!(to_leet("x.y-z"), "x.y-z");
    }

    #[test]
    fn test_empty_word() {
        assert_eq!(to_leet(""), "");
    }

    #[test]
    fn test_map_is_lowercase_to_digit() {
        for (plain, leet) in LEET_MAP {
            assert!(plain.is_ascii_lowercase());
            assert!(leet.is_ascii_digit());
        }
    }
}
