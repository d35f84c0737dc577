//! The abbreviation guard used by the plain-dash matcher.
//!
//! Artist names such as `AC-DC`, `A-ha` or `B-52's` contain hyphens of their
//! own. A hyphen is only treated as part of the artist when the tokens on
//! both sides of it look like fragments of an abbreviation.
//!
//! Names like `Jay-Z` stay ambiguous: `Jay` is neither short nor all-caps,
//! so `Jay-Z-Song` splits after `Jay`.

/// Longest token that counts as short regardless of case.
const SHORT_TOKEN_MAX: usize = 2;

/// Longest all-caps token that counts as an abbreviation.
const CAPS_TOKEN_MAX: usize = 4;

/// Whether `segment` looks like a fragment of an abbreviated artist name.
///
/// True when the trimmed segment has at least one letter and is either at
/// most two characters long, or at most four characters with every cased
/// character uppercase and no whitespace.
///
/// ```
/// use singalong_core::looks_like_abbreviation;
///
/// assert!(looks_like_abbreviation("AC"));
/// assert!(looks_like_abbreviation("ha"));
/// assert!(looks_like_abbreviation("INXS"));
/// assert!(!looks_like_abbreviation("Queen"));
/// assert!(!looks_like_abbreviation("05"));
/// ```
pub fn looks_like_abbreviation(segment: &str) -> bool {
    let token = segment.trim();
    if !token.chars().any(char::is_alphabetic) {
        return false;
    }

    let len = token.chars().count();
    if len <= SHORT_TOKEN_MAX {
        return true;
    }

    len <= CAPS_TOKEN_MAX
        && !token.chars().any(char::is_whitespace)
        && !token.chars().any(char::is_lowercase)
}
