//! Archive member resolution: `Artist/Title.kar` layouts.
//!
//! Karaoke archives are commonly laid out as `Language/Artist/Title.kar` or
//! `Artist/Title.kar`. When the filename alone yields no artist, the
//! immediate parent directory supplies one, unless that directory is a
//! collection label such as `Rock`, `2019` or `CD 2`.

use super::normalize::{fold_text, strip_trailing_period};
use super::parser::{parse_detailed, ParseOutcome};

/// Single-word directory names that label a collection, not an artist:
/// genres, languages and the common words collectors file things under.
const CATEGORY_LABELS: &[&str] = &[
    "80s", "90s", "acoustic", "alternative", "archive", "assorted", "ballads", "best", "blues",
    "bonus", "chinese", "christian", "christmas", "classics", "collection", "country", "dance",
    "disco", "downloads", "duets", "english", "extra", "extras", "favorites", "favourites",
    "folk", "french", "german", "gospel", "greatest", "hits", "instrumental", "italian",
    "japanese", "jazz", "karaoke", "kids", "korean", "latin", "metal", "misc", "miscellaneous",
    "mix", "mixes", "more", "music", "new", "old", "oldies", "other", "party", "pop", "punk",
    "rap", "reggae", "requests", "rock", "showtunes", "singles", "songs", "soul", "spanish",
    "standards", "top", "tracks", "unknown", "unsorted", "various",
];

/// Words that introduce a numbered volume (`CD 2`, `Disc1`, `Vol. 3`).
const VOLUME_MARKERS: &[&str] = &["cd", "disc", "disk", "pack", "part", "vol", "volume"];

pub(crate) fn resolve(path: &str, fallback: bool, extra_labels: &[String]) -> ParseOutcome {
    let outcome = parse_detailed(path);
    if !fallback || outcome.song.has_artist() || outcome.song.is_empty() {
        return outcome;
    }

    let Some(directory) = parent_directory(path)
        .map(fold_text)
        .map(strip_trailing_period)
    else {
        return outcome;
    };
    if directory.is_empty() || looks_like_category(&directory, extra_labels) {
        return outcome;
    }

    log::debug!("Using directory {:?} as the artist of {:?}", directory, path);
    ParseOutcome {
        song: outcome.song.with_artist(directory),
        ..outcome
    }
}

/// The directory segment immediately above the filename, if any.
fn parent_directory(path: &str) -> Option<&str> {
    let mut segments = path.rsplit(['/', '\\']);
    segments.next()?;
    segments.next()
}

/// Whether a directory name is a generic collection label rather than an
/// artist name.
pub fn looks_like_category(name: &str, extra_labels: &[String]) -> bool {
    let name = name.trim();

    if name.chars().all(|c| c.is_numeric() || c.is_whitespace()) {
        return true;
    }

    let lowered = name.to_lowercase();
    if extra_labels
        .iter()
        .any(|label| label.trim().to_lowercase() == lowered)
    {
        return true;
    }

    if !name.contains(char::is_whitespace) && CATEGORY_LABELS.contains(&lowered.as_str()) {
        return true;
    }

    is_volume_marker(&lowered)
}

fn is_volume_marker(lowered: &str) -> bool {
    let word_end = lowered
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(lowered.len());
    let (word, rest) = lowered.split_at(word_end);
    let number = rest.trim_start_matches([' ', '.', '#', '_']);

    VOLUME_MARKERS.contains(&word)
        && !number.is_empty()
        && number.bytes().all(|b| b.is_ascii_digit())
}
