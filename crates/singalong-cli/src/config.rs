use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use singalong_core::{FilenameParser, ParserOptions};
use std::path::{Path, PathBuf};

/// Configuration for singalong.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (SING_* prefix)
/// 3. Config file (~/.config/singalong/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Archive-member parsing options.
    ///
    /// Can be set via:
    /// - Config: [parser] table
    #[serde(default)]
    pub parser: ParserOptions,

    /// Count files whose name yields no artist as excluded in reports.
    ///
    /// Can be set via:
    /// - ENV: SING_EXCLUDE_NON_MATCHING
    /// - Config: exclude_non_matching = true
    #[serde(default)]
    pub exclude_non_matching: bool,

    /// File extensions (without the dot) that `report` considers.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parser: ParserOptions::default(),
            exclude_non_matching: false,
            extensions: default_extensions(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/singalong/config.toml
    /// Reads environment variables with SING_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("sing");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Build the parser these options describe.
    pub fn parser(&self) -> Result<FilenameParser> {
        FilenameParser::new(self.parser.clone()).context("Invalid [parser] configuration")
    }

    /// Whether `path` has one of the configured karaoke extensions.
    pub fn is_karaoke_file(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|known| known.trim_start_matches('.').eq_ignore_ascii_case(&ext))
            })
    }
}

fn default_extensions() -> Vec<String> {
    [
        "cdg", "mp3", "kar", "mid", "midi", "mpg", "mpeg", "mp4", "avi", "ogg", "wav", "flac",
        "m4a",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/singalong/config.toml
/// - macOS: ~/Library/Application Support/singalong/config.toml
/// - Windows: %APPDATA%\singalong\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("singalong")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Singalong Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (SING_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Count files whose name yields no artist as excluded in `singalong report`
#
# Can also be set via:
# - Environment: SING_EXCLUDE_NON_MATCHING=true
exclude_non_matching = false

# File extensions considered by `singalong report`
extensions = ["cdg", "mp3", "kar", "mid", "midi", "mpg", "mpeg", "mp4", "avi", "ogg", "wav", "flac", "m4a"]

[parser]
# Use the parent directory as the artist when an archive member's filename
# has none (Artist/Title.kar layouts)
directory_artist_fallback = true

# Directory names that label a collection rather than an artist, on top of
# the built-in genre, language and volume labels
extra_category_labels = []

# Encoding that archive member names are stored in (WHATWG label)
archive_encoding = "windows-1252"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    write_config_file(&config_file_path())
}

fn write_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
