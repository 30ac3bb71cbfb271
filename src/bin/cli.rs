//! Garfield Vibes CLI
//!
//! Command-line access to the site content:
//! - Draw a random comic or look one up by date
//! - Draw a wisdom quote
//! - Browse the meme gallery
//! - Show or change the saved theme preference
//! - Check a running server

use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};

use garfield_vibes::content::{
    find_meme, random_wisdom, Comic, ComicArchive, ThreadRandom, MEMES,
};
use garfield_vibes::config::Config;
use garfield_vibes::logging;
use garfield_vibes::theme::{FilePreferenceStore, Theme, ThemeController};

#[derive(Parser)]
#[command(name = "vibes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Garfield Vibes from the terminal")]
#[command(long_about = "Random comics, lasagna wisdom and the finest memes.\nI hate Mondays. You hate Mondays. Let's vibe.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (for `status`)
    #[arg(long, default_value = "http://localhost:8080", global = true)]
    pub api_url: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,

    /// Config file for the comic archive (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Spin the wheel of comic destiny
    Comic {
        /// Specific day instead of a random one (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// A random piece of wisdom
    Wisdom,

    /// List the meme gallery
    Memes,

    /// Show one meme
    Meme {
        /// Meme ID
        id: u64,
    },

    /// Show or change the saved theme
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },

    /// Check a running server
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Show,
    Toggle,
    Light,
    Dark,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_stderr();

    match cli.command {
        Commands::Comic { date } => {
            let archive = comic_archive(cli.config.as_deref())?;
            let today = Local::now().date_naive();

            let comic = match date {
                Some(d) => archive.comic_for_str(&d, today)?,
                None => archive.fetch_random(&mut ThreadRandom::new(), today).await?,
            };

            print_comic(&comic, cli.format)?;
        }

        Commands::Wisdom => {
            let quote = random_wisdom(&mut ThreadRandom::new())?;
            match cli.format {
                Format::Json => print_json(&serde_json::json!({ "quote": quote }))?,
                Format::Table => println!("🐱 \u{201c}{}\u{201d}", quote),
            }
        }

        Commands::Memes => match cli.format {
            Format::Json => print_json(&MEMES)?,
            Format::Table => {
                println!("{:<4} {:<26} {}", "ID", "Title", "Caption");
                println!("{}", "-".repeat(80));
                for meme in MEMES.iter() {
                    println!("{:<4} {:<26} {}", meme.id, meme.title, meme.caption);
                }
            }
        },

        Commands::Meme { id } => {
            let meme = find_meme(id)?;
            match cli.format {
                Format::Json => print_json(meme)?,
                Format::Table => {
                    println!("{}", meme.title);
                    println!("  {}", meme.caption);
                    println!("  {}", meme.url);
                }
            }
        }

        Commands::Theme { action } => {
            let store = FilePreferenceStore::default();
            let path = store.path().to_path_buf();
            let mut controller = ThemeController::load(store, None);

            let theme = match action {
                ThemeAction::Show => controller.theme(),
                ThemeAction::Toggle => controller.toggle(),
                ThemeAction::Light => controller.set(Theme::Light),
                ThemeAction::Dark => controller.set(Theme::Dark),
            };

            match cli.format {
                Format::Json => print_json(&serde_json::json!({
                    "theme": theme,
                    "path": path,
                }))?,
                Format::Table => println!("{} {}", theme.icon(), theme),
            }
        }

        Commands::Status => {
            let client = reqwest::Client::new();
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    match cli.format {
                        Format::Json => print_json(&health)?,
                        Format::Table => {
                            println!("Garfield Vibes v{}", env!("CARGO_PKG_VERSION"));
                            println!();
                            println!(
                                "Server status: {}",
                                health["status"].as_str().unwrap_or("unknown")
                            );
                            println!(
                                "Page bundle:   {}",
                                health["static_dir"].as_str().unwrap_or("unknown")
                            );
                            if let Some(days) = health["archive_days"].as_u64() {
                                println!("Archive days:  {}", days);
                            }
                            if let Some(uptime) = health["uptime_seconds"].as_u64() {
                                println!("Uptime:        {}", format_duration(uptime));
                            }
                        }
                    }
                }
                Ok(resp) => {
                    eprintln!("Server returned error: {}", resp.status());
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("Cannot connect to Garfield Vibes at {}", cli.api_url);
                    eprintln!("Error: {}", e);
                    eprintln!();
                    eprintln!("Make sure the server is running:");
                    eprintln!("  cargo run --bin garfield-vibes");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = garfield_vibes::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// The `[comics]` section the server would use
fn comic_archive(config: Option<&Path>) -> anyhow::Result<ComicArchive> {
    let config = match config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    Ok(config.comics)
}

fn print_comic(comic: &Comic, format: Format) -> anyhow::Result<()> {
    match format {
        Format::Json => print_json(&serde_json::json!({
            "date": comic.date,
            "title": comic.title,
            "image_url": comic.image_url,
            "long_date": comic.long_date(),
        })),
        Format::Table => {
            println!("{}", comic.title);
            println!("  📅 {}", comic.long_date());
            println!("  {}", comic.image_url);
            println!("  © Paws, Inc. • Jim Davis");
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_theme_default_action() {
        let cli = Cli::parse_from(["vibes", "theme"]);
        assert!(matches!(
            cli.command,
            Commands::Theme {
                action: ThemeAction::Show
            }
        ));
    }

    #[test]
    fn test_parse_comic_with_date() {
        let cli = Cli::parse_from(["vibes", "--format", "json", "comic", "--date", "1978-06-19"]);
        assert!(cli.format == Format::Json);
        assert!(matches!(cli.command, Commands::Comic { date: Some(ref d) } if d == "1978-06-19"));
    }

    #[test]
    fn test_comic_archive_reads_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[comics]\nfirst_strip = \"1980-01-01\"\nbase_url = \"http://localhost:7000\"\n",
        )
        .unwrap();

        let archive = comic_archive(Some(&path)).unwrap();
        let today = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let comic = archive.comic_for_str("1980-01-01", today).unwrap();
        assert!(comic.image_url.starts_with("http://localhost:7000/"));
        assert!(archive.comic_for_str("1979-12-31", today).is_err());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(42), "42s");
        assert_eq!(format_duration(3661), "1h 1m");
        assert_eq!(format_duration(90_000), "1d 1h");
    }
}
