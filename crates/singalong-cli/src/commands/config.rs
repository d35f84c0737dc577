use anyhow::{Context, Result};

use crate::config::{self, Config};

/// Show the current effective configuration.
pub fn show_config(json: bool) -> Result<()> {
    let config = Config::load()?;

    if json {
        let text = serde_json::to_string_pretty(&config).context("Failed to serialize config")?;
        println!("{text}");
        return Ok(());
    }

    println!("Current Configuration");
    println!("=====================\n");

    let config_path = config::config_file_path();
    println!("Config file: {}", config_path.display());
    let exists = config_path.exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    let parser = config.parser()?;
    let options = parser.options();

    println!("Settings:");
    println!("  exclude_non_matching: {}", config.exclude_non_matching);
    println!("  extensions: {}", config.extensions.join(", "));
    println!(
        "  parser.directory_artist_fallback: {}",
        options.directory_artist_fallback
    );
    println!(
        "  parser.extra_category_labels: {}",
        if options.extra_category_labels.is_empty() {
            String::from("<none>")
        } else {
            options.extra_category_labels.join(", ")
        }
    );
    println!(
        "  parser.archive_encoding: {} (resolved: {})",
        options.archive_encoding,
        parser.archive_encoding().name()
    );

    println!("\nPriority: CLI args > ENV vars (SING_*) > Config file > Defaults");

    Ok(())
}

/// Create the config file with commented defaults.
pub fn init_config() -> Result<()> {
    let config_path = config::config_file_path();
    if config::ensure_config_file()? {
        println!("Created {}", config_path.display());
    } else {
        println!("Config file already exists: {}", config_path.display());
    }
    Ok(())
}
