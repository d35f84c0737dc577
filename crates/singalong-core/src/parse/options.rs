use serde::{Deserialize, Serialize};

/// Tunables for [`crate::FilenameParser`].
///
/// The matcher cascade itself is fixed; these only affect archive members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Use the parent directory as the artist when an archive member's
    /// filename carries none.
    #[serde(default = "default_directory_artist_fallback")]
    pub directory_artist_fallback: bool,

    /// Additional directory names that are collection labels rather than
    /// artists (matched case-insensitively, e.g. `"Top 40"`).
    #[serde(default)]
    pub extra_category_labels: Vec<String>,

    /// WHATWG label of the encoding archive member names are stored in.
    #[serde(default = "default_archive_encoding")]
    pub archive_encoding: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            directory_artist_fallback: default_directory_artist_fallback(),
            extra_category_labels: Vec::new(),
            archive_encoding: default_archive_encoding(),
        }
    }
}

fn default_directory_artist_fallback() -> bool {
    true
}

fn default_archive_encoding() -> String {
    String::from("windows-1252")
}
