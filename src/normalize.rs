//! Author identity keys.
//!
//! The key is what profiles are merged on, so two spellings of the same name
//! ("José García", "Jose Garcia") must fold to the same string. Display names
//! are kept verbatim elsewhere; nothing here is meant for presentation.

use unicode_normalization::UnicodeNormalization;

/// Canonicalize an author display name into its identity key.
///
/// 1. Unicode dash variants become an ASCII hyphen
/// 2. NFD decomposition, then every non-ASCII code point is dropped
///    (accents vanish, base letters stay)
/// 3. Whitespace runs collapse to one space, ends are trimmed
///
/// Empty input is returned as is.
///
/// ```
/// use openalex_authors::normalize_author_name;
///
/// assert_eq!(normalize_author_name("José  García "), "Jose Garcia");
/// assert_eq!(normalize_author_name("Jean\u{2013}Pierre"), "Jean-Pierre");
/// ```
pub fn normalize_author_name(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let folded: String = name
        .chars()
        .map(unify_dash)
        .nfd()
        .filter(char::is_ascii)
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn unify_dash(c: char) -> char {
    match c {
        // en dash, em dash, minus sign, hyphen, non-breaking hyphen
        '\u{2013}' | '\u{2014}' | '\u{2212}' | '\u{2010}' | '\u{2011}' => '-',
        _ => c,
    }
}
