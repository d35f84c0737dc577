//! The naming-convention matchers, tried in a fixed priority order.
//!
//! Each matcher looks at an already-normalized stem and either returns a
//! populated [`ParsedSong`] or declines. The more specific disc-prefixed
//! shapes run first because the dash splitters would happily accept them
//! with the wrong field assignment.

use std::ops::RangeInclusive;

use super::abbreviation::looks_like_abbreviation;
use crate::model::{NamingConvention, ParsedSong};

/// Length bounds of a disc code such as `SC1234` or `DISC1`.
const DISC_CODE_LEN: RangeInclusive<usize> = 3..=16;

/// Digit-count bounds of a track number such as `05`.
const TRACK_LEN: RangeInclusive<usize> = 1..=3;

/// One arm per recognized naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Matcher {
    DiscTrackArtistTitle,
    DiscArtistTitle,
    SpacedDash,
    PlainDash,
    TitleOnly,
}

impl Matcher {
    /// Priority order. `TitleOnly` is last and never declines.
    pub(crate) const CASCADE: [Self; 5] = [
        Self::DiscTrackArtistTitle,
        Self::DiscArtistTitle,
        Self::SpacedDash,
        Self::PlainDash,
        Self::TitleOnly,
    ];

    pub(crate) fn convention(self) -> NamingConvention {
        match self {
            Self::DiscTrackArtistTitle => NamingConvention::DiscTrackArtistTitle,
            Self::DiscArtistTitle => NamingConvention::DiscArtistTitle,
            Self::SpacedDash => NamingConvention::SpacedDash,
            Self::PlainDash => NamingConvention::PlainDash,
            Self::TitleOnly => NamingConvention::TitleOnly,
        }
    }

    pub(crate) fn apply(self, stem: &str) -> Option<ParsedSong> {
        match self {
            Self::DiscTrackArtistTitle => disc_track_artist_title(stem),
            Self::DiscArtistTitle => disc_artist_title(stem),
            Self::SpacedDash => spaced_dash(stem),
            Self::PlainDash => plain_dash(stem),
            Self::TitleOnly => Some(title_only(stem)),
        }
    }
}

/// `SC1234-05-John Doe-My Song`
fn disc_track_artist_title(stem: &str) -> Option<ParsedSong> {
    let [disc, track, artist, title] = hyphen_fields::<4>(stem)?;
    (is_disc_code(disc) && is_track_number(track))
        .then(|| ParsedSong::new(artist, title, disc, track))
}

/// `SC1234-John Doe-My Song`. Spaced separators decline, so that
/// `M83 - Midnight City - Live` reaches the spaced-dash matcher, and an
/// artist shaped like a track number is left to the four-field form.
fn disc_artist_title(stem: &str) -> Option<ParsedSong> {
    if has_spaced_separator(stem, 2) {
        return None;
    }
    let [disc, artist, title] = hyphen_fields::<3>(stem)?;
    (is_disc_code(disc) && !is_track_number(artist))
        .then(|| ParsedSong::new(artist, title, disc, ""))
}

/// `Artist - Title`, split on the first spaced dash only so that
/// `Artist - Title - Live` keeps `Title - Live` intact.
fn spaced_dash(stem: &str) -> Option<ParsedSong> {
    let dash = stem.match_indices('-').map(|(at, _)| at).find(|&at| {
        stem[..at].chars().next_back().is_some_and(char::is_whitespace)
            && stem[at + 1..].chars().next().is_some_and(char::is_whitespace)
    })?;

    artist_title(&stem[..dash], &stem[dash + 1..])
}

/// `Artist-Title`. Hyphens between abbreviation fragments (`AC-DC`) stay
/// inside the artist; the first hyphen that is not such a join splits.
fn plain_dash(stem: &str) -> Option<ParsedSong> {
    let segments: Vec<&str> = stem.split('-').collect();
    if segments.len() < 2 {
        return None;
    }

    let split = (1..segments.len()).find(|&next| !joins_artist(&segments, next))?;
    artist_title(
        &segments[..split].join("-"),
        &segments[split..].join("-"),
    )
}

fn title_only(stem: &str) -> ParsedSong {
    ParsedSong::title_only(stem.trim())
}

/// Whether the hyphen in front of `segments[next]` belongs to the artist.
/// The final segment is never absorbed, so a title always remains.
fn joins_artist(segments: &[&str], next: usize) -> bool {
    next + 1 < segments.len()
        && looks_like_abbreviation(segments[next - 1])
        && looks_like_abbreviation(segments[next])
}

fn artist_title(artist: &str, title: &str) -> Option<ParsedSong> {
    let (artist, title) = (artist.trim(), title.trim());
    (!artist.is_empty() && !title.is_empty()).then(|| ParsedSong::artist_title(artist, title))
}

/// Split into exactly `N` trimmed, non-empty hyphen-delimited fields. The
/// last field keeps any further hyphens verbatim.
fn hyphen_fields<const N: usize>(stem: &str) -> Option<[&str; N]> {
    let mut fields = [""; N];
    let mut parts = stem.splitn(N, '-');
    for field in &mut fields {
        let part = parts.next()?.trim();
        if part.is_empty() {
            return None;
        }
        *field = part;
    }
    Some(fields)
}

/// Whether any of the first `separators` hyphens has whitespace beside it.
fn has_spaced_separator(stem: &str, separators: usize) -> bool {
    stem.match_indices('-').take(separators).any(|(at, _)| {
        stem[..at].ends_with(char::is_whitespace) || stem[at + 1..].starts_with(char::is_whitespace)
    })
}

/// Uppercase ASCII letters and digits, with at least one of each.
fn is_disc_code(segment: &str) -> bool {
    DISC_CODE_LEN.contains(&segment.len())
        && segment
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        && segment.bytes().any(|b| b.is_ascii_digit())
        && segment.bytes().any(|b| b.is_ascii_uppercase())
}

fn is_track_number(segment: &str) -> bool {
    TRACK_LEN.contains(&segment.len()) && segment.bytes().all(|b| b.is_ascii_digit())
}
