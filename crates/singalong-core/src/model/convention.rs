use serde::{Deserialize, Serialize};
use std::fmt;

/// The filename naming convention a parse result came from.
///
/// Used for diagnostics and bulk-import telemetry; [`crate::parse`] itself
/// only hands back the [`crate::ParsedSong`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingConvention {
    /// `Artist - Title`
    SpacedDash,
    /// `SC1234-05-Artist-Title`
    DiscTrackArtistTitle,
    /// `SC1234-Artist-Title`
    DiscArtistTitle,
    /// `Artist-Title`, with `AC-DC`-style artists kept whole.
    PlainDash,
    /// No separator; the whole stem is the title.
    TitleOnly,
    /// Nothing usable: empty stem or undecodable input.
    Unrecognized,
}

impl NamingConvention {
    pub const ALL: [Self; 6] = [
        Self::DiscTrackArtistTitle,
        Self::DiscArtistTitle,
        Self::SpacedDash,
        Self::PlainDash,
        Self::TitleOnly,
        Self::Unrecognized,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SpacedDash => "spaced_dash",
            Self::DiscTrackArtistTitle => "disc_track_artist_title",
            Self::DiscArtistTitle => "disc_artist_title",
            Self::PlainDash => "plain_dash",
            Self::TitleOnly => "title_only",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// True for conventions that recovered structure beyond a bare title.
    pub fn is_structured(self) -> bool {
        !matches!(self, Self::TitleOnly | Self::Unrecognized)
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
