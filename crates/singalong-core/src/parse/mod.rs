//! Filename parsing: normalizer, matcher cascade, orchestrator and archive
//! path resolver.

pub mod abbreviation;
pub mod archive;
pub mod decode;
mod matchers;
pub mod normalize;
pub mod options;
pub mod parser;

pub use abbreviation::looks_like_abbreviation;
pub use archive::looks_like_category;
pub use decode::{decode_name, resolve_encoding};
pub use normalize::{fold_text, normalize, normalize_bytes};
pub use options::ParserOptions;
pub use parser::{
    parse, parse_archive_member, parse_bytes, parse_detailed, try_parse, FilenameParser,
    ParseOutcome,
};
