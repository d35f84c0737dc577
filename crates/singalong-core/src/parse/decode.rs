//! Decoding of names that arrive as raw bytes.

use encoding_rs::Encoding;

use crate::error::{Error, Result};

/// Look up an encoding by its WHATWG label (`"cp1252"`, `"shift_jis"`, ...).
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::UnknownEncoding(label.to_owned()))
}

/// Decode `raw` strictly: malformed input is an error, never replaced.
pub fn decode_name(raw: &[u8], encoding: &'static Encoding) -> Result<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(raw)
        .map(|text| text.into_owned())
        .ok_or(Error::Decoding {
            encoding: encoding.name(),
        })
}
