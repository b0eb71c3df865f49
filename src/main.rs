#[macro_use]
extern crate log;

mod config;
mod error;
mod extract;
mod filter;
mod input;
mod launcher;
mod log_level;
mod play_controller;
mod playlist;
#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use crate::{
    config::{ConfigField, Settings},
    filter::{FilterEngine, Verdict},
    input::{file::FileInput, stdin::StdinInput, url::UrlInput, Input},
    launcher::DetachedLauncher,
    log_level::LogLevel,
    play_controller::{evaluate_links, PlayController},
};

/// Play the links of a markdown document in mpv
#[derive(Debug, Parser)]
#[command(name = "mpvlink", version)]
struct Cli {
    /// settings file, defaults to the user config directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Send the filtered links of a document to mpv
    Play {
        #[command(flatten)]
        source: SourceArgs,

        /// write the playlist but do not start the player
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the links that pass the filters
    Links {
        #[command(flatten)]
        source: SourceArgs,

        /// also print rejected links
        #[arg(long)]
        all: bool,
    },
    /// Inspect or change the allow-lists
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Args)]
struct SourceArgs {
    /// markdown file, `-` or nothing reads stdin
    #[arg(conflicts_with = "url")]
    file: Option<PathBuf>,

    /// fetch the markdown document from a url
    #[arg(long)]
    url: Option<String>,
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    /// Print the current settings as json, or the lines of a single list
    Show {
        #[arg(value_enum)]
        field: Option<ConfigField>,
    },
    /// Replace a list, every value becomes one line
    Set {
        #[arg(value_enum)]
        field: ConfigField,
        values: Vec<String>,
    },
    /// Append a line to a list
    Add {
        #[arg(value_enum)]
        field: ConfigField,
        value: String,
    },
    /// Remove a line from a list
    Remove {
        #[arg(value_enum)]
        field: ConfigField,
        value: String,
    },
    /// Restore the default lists
    Reset,
}

impl SourceArgs {
    fn input(&self) -> anyhow::Result<Box<dyn Input + Send>> {
        if let Some(url) = &self.url {
            return Ok(Box::new(UrlInput::parse(url)?));
        }
        match &self.file {
            Some(path) if path.as_os_str() != "-" => Ok(Box::new(FileInput::new(path.clone()))),
            _ => Ok(Box::new(StdinInput)),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    log_level::init_logger(cli.log_level);

    let settings_path = match cli.config {
        Some(path) => path,
        None => Settings::default_path()?,
    };
    let mut settings = Settings::load(&settings_path)?;

    match cli.command {
        Command::Play { source, dry_run } => {
            let mut input = source.input()?;
            let controller =
                PlayController::new(settings.filters, Box::new(DetachedLauncher::new()));
            if dry_run {
                let text = input.read_document().await?;
                let (path, playlist) = controller.prepare(&text)?;
                println!("{} ({} entries)", path.display(), playlist.len());
                for url in playlist.entries() {
                    debug!("  {}", url);
                }
            } else {
                let outcome = controller.run(input.as_mut()).await?;
                info!(
                    "playing {} entries from {} (pid {})",
                    outcome.entries,
                    outcome.playlist_path.display(),
                    outcome.player.pid
                );
            }
        }
        Command::Links { source, all } => {
            let text = source.input()?.read_document().await?;
            let engine = FilterEngine::new(&settings.filters);
            for (candidate, verdict) in evaluate_links(&text, &engine) {
                match (verdict, all) {
                    (Verdict::Rejected, false) => {}
                    (Verdict::Rejected, true) => {
                        println!("{} {}", "rejected ".red(), candidate.url.dimmed())
                    }
                    (v, true) => println!("{} {}", format!("{:<9}", v).green(), candidate.url),
                    (_, false) => println!("{}", candidate.url),
                }
            }
        }
        Command::Config { action } => match action {
            ConfigAction::Show { field: None } => {
                println!("{}", serde_json::to_string_pretty(&settings.filters)?);
            }
            ConfigAction::Show { field: Some(field) } => {
                for line in settings.filters.get(field).lines() {
                    println!("{}", line);
                }
            }
            ConfigAction::Set { field, values } => {
                settings.filters.update(field, values.join("\n"));
                settings.persist()?;
            }
            ConfigAction::Add { field, value } => {
                if settings.filters.add_line(field, &value) {
                    settings.persist()?;
                } else {
                    warn!("'{}' is already listed", value);
                }
            }
            ConfigAction::Remove { field, value } => {
                if settings.filters.remove_line(field, &value) {
                    settings.persist()?;
                } else {
                    warn!("'{}' is not listed", value);
                }
            }
            ConfigAction::Reset => {
                settings.reset();
                settings.persist()?;
                info!("settings reset in {}", settings.path().display());
            }
        },
    }
    Ok(())
}
