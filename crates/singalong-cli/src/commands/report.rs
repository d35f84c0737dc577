use anyhow::{Context, Result};
use serde::Serialize;
use singalong_core::{parse_bytes, FilenameParser, NamingConvention, ParseOutcome, ParseStats};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::Config;

/// Per-convention counts for a directory tree.
#[derive(Debug, Serialize)]
pub struct LibraryReport {
    pub root: PathBuf,
    pub stats: ParseStats,
    /// Files without an artist, when `exclude_non_matching` is set.
    pub excluded: Option<u64>,
    /// Relative paths of files that ended up without an artist.
    pub unmatched: Vec<String>,
}

pub fn run_report(
    config: &Config,
    root: &Path,
    directory_artist: bool,
    show_unmatched: bool,
    json: bool,
) -> Result<()> {
    log::info!("Scanning {}", root.display());
    let report = build_report(config, root, directory_artist)?;
    log::info!("Scan complete: {} files parsed", report.stats.files_parsed);

    if json {
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{text}");
        return Ok(());
    }

    println!("Naming conventions in {}\n", report.root.display());
    println!("  Files parsed:  {}", report.stats.files_parsed);
    for convention in NamingConvention::ALL {
        println!("  {:<24} {}", convention.as_str(), report.stats.count(convention));
    }
    println!("  Recognized:    {}", report.stats.recognized());
    println!("  Unrecognized:  {}", report.stats.unrecognized());
    println!("  Blank artist:  {}", report.stats.blank_artist);
    if let Some(excluded) = report.excluded {
        println!("  Excluded:      {excluded}");
    }

    if show_unmatched && !report.unmatched.is_empty() {
        println!("\nFiles without an artist:");
        for path in &report.unmatched {
            println!("  {path}");
        }
    }

    Ok(())
}

pub fn build_report(config: &Config, root: &Path, directory_artist: bool) -> Result<LibraryReport> {
    if !root.is_dir() {
        anyhow::bail!("Not a directory: {}", root.display());
    }

    let parser = config.parser()?;
    let mut stats = ParseStats::new();
    let mut unmatched = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable entry: {e}");
                None
            }
        })
    {
        let path = entry.path();
        if !entry.file_type().is_file() || !config.is_karaoke_file(path) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        let outcome = parse_path(&parser, relative, directory_artist);
        if !outcome.song.has_artist() {
            unmatched.push(relative.to_string_lossy().into_owned());
        }
        stats.record(&outcome);
    }

    let excluded = config.exclude_non_matching.then_some(stats.blank_artist);

    Ok(LibraryReport {
        root: root.to_path_buf(),
        stats,
        excluded,
        unmatched,
    })
}

fn parse_path(parser: &FilenameParser, relative: &Path, directory_artist: bool) -> ParseOutcome {
    let Some(name) = relative.to_str() else {
        // Not valid Unicode; the byte path logs the decoding failure.
        return ParseOutcome {
            song: parse_bytes(relative.as_os_str().as_encoded_bytes()),
            convention: NamingConvention::Unrecognized,
        };
    };

    if directory_artist {
        parser.parse_archive_member_detailed(name)
    } else {
        parser.parse_detailed(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn library() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("Rock").join("Queen")).unwrap();

        fs::write(root.join("Artist - Title.cdg"), "").unwrap();
        fs::write(root.join("SC1234-05-John Doe-My Song.mp3"), "").unwrap();
        fs::write(root.join("AC-DC-Back In Black.kar"), "").unwrap();
        fs::write(root.join("Rock").join("Queen").join("Bohemian Rhapsody.cdg"), "").unwrap();
        fs::write(root.join("cover.jpg"), "").unwrap();
        temp_dir
    }

    #[test]
    fn test_report_counts_conventions() {
        let temp_dir = library();
        let report = build_report(&Config::default(), temp_dir.path(), false).unwrap();

        assert_eq!(report.stats.files_parsed, 4);
        assert_eq!(report.stats.count(NamingConvention::SpacedDash), 1);
        assert_eq!(report.stats.count(NamingConvention::DiscTrackArtistTitle), 1);
        assert_eq!(report.stats.count(NamingConvention::PlainDash), 1);
        assert_eq!(report.stats.count(NamingConvention::TitleOnly), 1);
        assert_eq!(report.stats.blank_artist, 1);
        assert!(report.excluded.is_none());
        assert_eq!(report.unmatched.len(), 1);
    }

    #[test]
    fn test_report_directory_artist() {
        let temp_dir = library();
        let report = build_report(&Config::default(), temp_dir.path(), true).unwrap();

        assert_eq!(report.stats.blank_artist, 0);
        assert!(report.unmatched.is_empty());
    }

    #[test]
    fn test_report_excluded_count() {
        let temp_dir = library();
        let config = Config {
            exclude_non_matching: true,
            ..Config::default()
        };
        let report = build_report(&config, temp_dir.path(), false).unwrap();
        assert_eq!(report.excluded, Some(1));
    }

    #[test]
    fn test_report_rejects_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        assert!(build_report(&Config::default(), &missing, false).is_err());
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let report = build_report(&Config::default(), temp_dir.path(), false).unwrap();
        assert_eq!(report.stats, ParseStats::new());
    }
}
