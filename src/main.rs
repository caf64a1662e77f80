use anyhow::Result;
use clap::{Parser, Subcommand};

use agenda::cli::{handle_backup_command, handle_event_command, BackupCommands, EventCommands};
use agenda::config::{paths::AgendaPaths, settings::Settings};
use agenda::storage::Storage;

#[derive(Parser)]
#[command(
    name = "agenda",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal calendar",
    long_about = "agenda-cli is a terminal-based personal calendar. It stores \
                  events in a plain delimited text file, detects scheduling \
                  conflicts, and keeps a single-file backup you can roll back to."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Event management commands
    #[command(subcommand, alias = "ev")]
    Event(EventCommands),

    /// Backup and restore commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = AgendaPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;

    match cli.command {
        Some(Commands::Event(cmd)) => {
            handle_event_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&paths, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Event file:      {}", paths.events_file().display());
            println!("Backup file:     {}", paths.backup_file().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Date format:     {}", settings.date_format);
            println!("Auto backup:     {}", if settings.auto_backup { "on" } else { "off" });
        }
        None => {
            println!("agenda-cli: terminal-based personal calendar");
            println!();
            println!("Try: agenda event list");
            println!("     agenda event add \"Dentist\" \"2025-01-05 09:00\" \"10:00\"");
            println!("     agenda --help");
        }
    }

    Ok(())
}
