//! Karaoke filename parsing for singalong.
//!
//! This crate turns karaoke filenames and archive-member paths into
//! structured song metadata (artist, title, disc and track). It recognizes
//! the common distributor naming conventions (spaced dashes, plain dashes,
//! disc/track-prefixed codes, typographic dash variants) and falls back to
//! the enclosing directory name for archive members that carry no artist.
//!
//! Every entry point is a pure, synchronous function of its input and is safe
//! to call from any number of threads.
//!
//! ```
//! let song = singalong_core::parse("SC1234-05-John Doe-My Song.mp3");
//! assert_eq!(song.disc(), "SC1234");
//! assert_eq!(song.track(), "05");
//! assert_eq!(song.artist(), "John Doe");
//! assert_eq!(song.title(), "My Song");
//! ```

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod parse;
pub mod stats;

pub use error::{Error, Result};
pub use model::{NamingConvention, ParsedSong};
pub use parse::{
    looks_like_abbreviation, normalize, normalize_bytes, parse, parse_archive_member,
    parse_bytes, parse_detailed, try_parse, FilenameParser, ParseOutcome, ParserOptions,
};
pub use stats::ParseStats;
