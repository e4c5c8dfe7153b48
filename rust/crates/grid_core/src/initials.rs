//! Tile initials.

/// Maximum number of words that contribute to the initials.
pub const MAX_INITIALS: usize = 3;

/// Word separators: Unicode `White_Space` minus NEL (U+0085), plus the
/// byte order mark (U+FEFF).
fn is_separator(c: char) -> bool {
    match c {
        '\u{0085}' => false,
        '\u{FEFF}' => true,
        _ => c.is_whitespace(),
    }
}

/// Derive the uppercase initials shown on a tile.
///
/// Takes the first character of each of the first three separator
/// delimited words. A missing or blank name yields an empty string.
pub fn initials_from_name(name: Option<&str>) -> String {
    let Some(name) = name else {
        return String::new();
    };

    name.split(is_separator)
        .filter(|word| !word.is_empty())
        .take(MAX_INITIALS)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_take_first_three_words() {
        assert_eq!(initials_from_name(Some("Alpha Beta Gamma Delta")), "ABG");
    }

    #[test]
    fn test_initials_single_word() {
        assert_eq!(initials_from_name(Some("solo")), "S");
    }

    #[test]
    fn test_initials_missing_or_empty() {
        assert_eq!(initials_from_name(None), "");
        assert_eq!(initials_from_name(Some("")), "");
        assert_eq!(initials_from_name(Some("   \t\n ")), "");
    }

    #[test]
    fn test_initials_collapse_whitespace_runs() {
        assert_eq!(initials_from_name(Some("  home \t\t assistant\n")), "HA");
    }

    #[test]
    fn test_initials_separator_set() {
        // BOM separates and is trimmed, NEL is part of a word
        assert_eq!(initials_from_name(Some("\u{FEFF}mail\u{FEFF}box")), "MB");
        assert_eq!(initials_from_name(Some("\u{FEFF}")), "");
        assert_eq!(initials_from_name(Some("mail\u{0085}box")), "M");
        assert_eq!(initials_from_name(Some("a\u{00A0}b\u{3000}c\u{2028}d")), "ABC");
    }

    #[test]
    fn test_initials_non_alphabetic_pass_through() {
        assert_eq!(initials_from_name(Some("3d printer 42")), "3P4");
        assert_eq!(initials_from_name(Some("#ops @team")), "#@");
    }

    #[test]
    fn test_initials_unicode_uppercase() {
        assert_eq!(initials_from_name(Some("élan vital")), "ÉV");
    }

    #[test]
    fn test_initials_never_exceed_word_limit() {
        let names = [
            "a b c d e f",
            "one",
            "x  y",
            "Grafana Loki Tempo Mimir",
            "   spaced   out   words   here   ",
        ];

        for name in names {
            let initials = initials_from_name(Some(name));
            assert!(initials.chars().count() <= MAX_INITIALS, "{name:?}");
            assert_eq!(initials, initials.to_uppercase());
        }
    }
}
