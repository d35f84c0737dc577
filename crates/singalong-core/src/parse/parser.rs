//! The parse orchestrator: normalizes, runs the matcher cascade, and
//! assembles the result.

use encoding_rs::Encoding;
use serde::Serialize;

use super::archive;
use super::decode::{decode_name, resolve_encoding};
use super::matchers::Matcher;
use super::normalize::normalize;
use super::options::ParserOptions;
use crate::error::{Error, Result};
use crate::model::{NamingConvention, ParsedSong};

/// A parse result together with the convention that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    pub song: ParsedSong,
    pub convention: NamingConvention,
}

impl ParseOutcome {
    fn unrecognized() -> Self {
        Self {
            song: ParsedSong::default(),
            convention: NamingConvention::Unrecognized,
        }
    }
}

/// Parse a karaoke filename or path into song metadata.
///
/// Total over all string input: names without a recognizable separator
/// come back as title-only, and empty or whitespace-only names come back
/// with every field empty.
///
/// ```
/// let song = singalong_core::parse("AC-DC - Back In Black.cdg");
/// assert_eq!(song.artist(), "AC-DC");
/// assert_eq!(song.title(), "Back In Black");
/// ```
pub fn parse(raw: &str) -> ParsedSong {
    parse_detailed(raw).song
}

/// Like [`parse`], but also reports which naming convention matched.
pub fn parse_detailed(raw: &str) -> ParseOutcome {
    let stem = normalize(raw);
    if stem.is_empty() {
        return ParseOutcome::unrecognized();
    }

    Matcher::CASCADE
        .iter()
        .find_map(|matcher| {
            matcher.apply(&stem).map(|song| ParseOutcome {
                song,
                convention: matcher.convention(),
            })
        })
        .inspect(|outcome| {
            if outcome.convention == NamingConvention::TitleOnly {
                log::debug!("Could not parse filename stem {:?}; returning as title only", stem);
            }
        })
        .unwrap_or_else(|| ParseOutcome {
            song: ParsedSong::title_only(stem.as_str()),
            convention: NamingConvention::TitleOnly,
        })
}

/// Parse input that may be absent. `None` is a caller defect and is
/// rejected immediately instead of being treated as an empty name.
pub fn try_parse(raw: Option<&str>) -> Result<ParsedSong> {
    raw.map(parse).ok_or(Error::MissingInput)
}

/// Parse a name given as UTF-8 bytes. Undecodable input is logged and
/// yields an all-empty song.
pub fn parse_bytes(raw: &[u8]) -> ParsedSong {
    decoded(raw, encoding_rs::UTF_8)
        .map(|text| parse(&text))
        .unwrap_or_default()
}

/// Resolve an archive member path with the default options: the parent
/// directory becomes the artist when the filename has none.
///
/// ```
/// let song = singalong_core::parse_archive_member("Rock/Queen/Bohemian Rhapsody.cdg");
/// assert_eq!(song.artist(), "Queen");
/// assert_eq!(song.title(), "Bohemian Rhapsody");
/// ```
pub fn parse_archive_member(path: &str) -> ParsedSong {
    archive::resolve(path, true, &[]).song
}

fn decoded(raw: &[u8], encoding: &'static Encoding) -> Option<String> {
    match decode_name(raw, encoding) {
        Ok(text) => Some(text),
        Err(e) => {
            log::warn!("Leaving name unparsed: {e} ({} bytes)", raw.len());
            None
        }
    }
}

/// A parser carrying [`ParserOptions`], for callers that configure the
/// archive behaviour.
#[derive(Debug, Clone)]
pub struct FilenameParser {
    options: ParserOptions,
    archive_encoding: &'static Encoding,
}

impl Default for FilenameParser {
    fn default() -> Self {
        Self {
            options: ParserOptions::default(),
            archive_encoding: encoding_rs::WINDOWS_1252,
        }
    }
}

impl FilenameParser {
    /// Build a parser, validating the configured archive encoding.
    pub fn new(options: ParserOptions) -> Result<Self> {
        let archive_encoding = resolve_encoding(&options.archive_encoding)?;
        Ok(Self {
            options,
            archive_encoding,
        })
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn archive_encoding(&self) -> &'static Encoding {
        self.archive_encoding
    }

    pub fn parse(&self, raw: &str) -> ParsedSong {
        parse(raw)
    }

    pub fn parse_detailed(&self, raw: &str) -> ParseOutcome {
        parse_detailed(raw)
    }

    pub fn parse_archive_member(&self, path: &str) -> ParsedSong {
        self.parse_archive_member_detailed(path).song
    }

    pub fn parse_archive_member_detailed(&self, path: &str) -> ParseOutcome {
        archive::resolve(
            path,
            self.options.directory_artist_fallback,
            &self.options.extra_category_labels,
        )
    }

    /// Decode a raw archive member name with the configured encoding, then
    /// resolve it like [`FilenameParser::parse_archive_member`].
    pub fn parse_archive_member_bytes(&self, raw: &[u8]) -> ParsedSong {
        decoded(raw, self.archive_encoding)
            .map(|path| self.parse_archive_member(&path))
            .unwrap_or_default()
    }
}
