use anyhow::{Context, Result};
use serde::Serialize;
use singalong_core::{FilenameParser, ParseOutcome};
use std::io::BufRead;

use crate::config::Config;

/// One parsed name, as printed by `singalong parse --json`.
#[derive(Debug, Serialize)]
struct ParsedName<'a> {
    name: &'a str,
    #[serde(flatten)]
    outcome: ParseOutcome,
}

pub fn run_parse(config: &Config, names: Vec<String>, archive: bool, json: bool) -> Result<()> {
    let parser = config.parser()?;

    let names = if names.is_empty() {
        read_names(std::io::stdin().lock())?
    } else {
        names
    };
    log::debug!("Parsing {} names", names.len());

    for name in &names {
        let outcome = parse_name(&parser, name, archive);
        if json {
            let line = serde_json::to_string(&ParsedName { name, outcome })
                .context("Failed to serialize parse result")?;
            println!("{line}");
        } else {
            println!("{}", render(name, &outcome));
        }
    }

    Ok(())
}

fn parse_name(parser: &FilenameParser, name: &str, archive: bool) -> ParseOutcome {
    if archive {
        parser.parse_archive_member_detailed(name)
    } else {
        parser.parse_detailed(name)
    }
}

fn read_names(input: impl BufRead) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in input.lines() {
        let line = line.context("Failed to read names from standard input")?;
        if !line.trim().is_empty() {
            names.push(line);
        }
    }
    Ok(names)
}

fn render(name: &str, outcome: &ParseOutcome) -> String {
    let song = &outcome.song;
    let mut lines = vec![
        name.to_string(),
        format!("  convention: {}", outcome.convention),
        format!("  artist:     {}", song.artist()),
        format!("  title:      {}", song.title()),
    ];
    if !song.disc().is_empty() {
        lines.push(format!("  disc:       {}", song.disc()));
    }
    if !song.track().is_empty() {
        lines.push(format!("  track:      {}", song.track()));
    }
    lines.join("\n")
}
