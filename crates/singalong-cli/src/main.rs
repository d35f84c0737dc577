use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "singalong", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Parse karaoke filenames into artist, title, disc and track
    ///
    /// Each NAME may be a bare filename or a full path; directory components
    /// are ignored unless --archive is given. With no NAME arguments, names
    /// are read from standard input, one per line.
    ///
    /// Recognized conventions, in priority order:
    ///
    /// - Disc-Track-Artist-Title  (SC1234-05-John Doe-My Song.cdg)
    /// - Disc-Artist-Title        (SC1234-John Doe-My Song.cdg)
    /// - Artist - Title           (Queen - Bohemian Rhapsody.cdg)
    /// - Artist-Title             (AC-DC-Back In Black.cdg)
    /// - Title only               (anything else)
    Parse {
        /// Filenames or paths to parse
        names: Vec<String>,

        /// Treat names as archive member paths: the parent directory
        /// supplies the artist when the filename has none
        #[arg(long)]
        archive: bool,
    },
    /// Report which naming conventions a karaoke directory tree uses
    ///
    /// Walks PATH recursively, parses every file whose extension is listed
    /// in the configuration, and prints per-convention counts.
    Report {
        /// Root of the karaoke library
        path: PathBuf,

        /// Resolve paths relative to PATH like archive members, so that
        /// Artist/Title.cdg layouts pick up the directory as the artist
        #[arg(long)]
        directory_artist: bool,

        /// List every file that ended up without an artist
        #[arg(long)]
        show_unmatched: bool,
    },
    /// Show or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a commented default config file if none exists
    Init,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { names, archive } => {
            let config = config::Config::load()?;
            commands::run_parse(&config, names, archive, cli.json)?;
        }
        Commands::Report {
            path,
            directory_artist,
            show_unmatched,
        } => {
            let config = config::Config::load()?;
            commands::run_report(&config, &path, directory_artist, show_unmatched, cli.json)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::show_config(cli.json)?,
            ConfigAction::Path => println!("{}", config::config_file_path().display()),
            ConfigAction::Init => commands::init_config()?,
        },
    }

    Ok(())
}
