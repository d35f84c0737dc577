use serde::{Deserialize, Serialize};
use std::fmt;

/// Song metadata recovered from a karaoke filename.
///
/// Every field is always present; an empty string means the filename did not
/// carry that piece of information. Values are fixed at construction and
/// only read back through accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedSong {
    artist: String,
    title: String,
    disc: String,
    track: String,
}

impl ParsedSong {
    #[must_use]
    pub fn new(
        artist: impl Into<String>,
        title: impl Into<String>,
        disc: impl Into<String>,
        track: impl Into<String>,
    ) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            disc: disc.into(),
            track: track.into(),
        }
    }

    #[must_use]
    pub fn artist_title(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(artist, title, String::new(), String::new())
    }

    #[must_use]
    pub fn title_only(title: impl Into<String>) -> Self {
        Self::new(String::new(), title, String::new(), String::new())
    }

    /// Returns a copy of this song with `artist` filled in, keeping the title
    /// and dropping nothing else.
    #[must_use]
    pub fn with_artist(self, artist: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            ..self
        }
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn disc(&self) -> &str {
        &self.disc
    }

    pub fn track(&self) -> &str {
        &self.track
    }

    /// True when no field carries any text.
    pub fn is_empty(&self) -> bool {
        self.artist.is_empty()
            && self.title.is_empty()
            && self.disc.is_empty()
            && self.track.is_empty()
    }

    pub fn has_artist(&self) -> bool {
        !self.artist.is_empty()
    }
}

impl fmt::Display for ParsedSong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.artist.is_empty(), self.title.is_empty()) {
            (false, false) => write!(f, "{} - {}", self.artist, self.title)?,
            (false, true) => write!(f, "{}", self.artist)?,
            (true, _) => write!(f, "{}", self.title)?,
        }
        if !self.disc.is_empty() {
            write!(f, " [{}", self.disc)?;
            if !self.track.is_empty() {
                write!(f, "-{}", self.track)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
