//! Backup CLI commands
//!
//! Implements CLI commands for backing up and restoring the event file.

use clap::Subcommand;

use crate::backup::BackupManager;
use crate::config::paths::AgendaPaths;
use crate::error::AgendaResult;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Copy the event file to the backup location
    Create,

    /// Overwrite the event file with the backup
    Restore {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Show whether a backup exists and where it lives
    Status,
}

/// Handle a backup command
pub fn handle_backup_command(paths: &AgendaPaths, cmd: BackupCommands) -> AgendaResult<()> {
    let manager = BackupManager::new(paths);

    match cmd {
        BackupCommands::Create => {
            if manager.backup()? {
                println!("Backup written to {}", manager.backup_path().display());
            } else {
                println!("Nothing to back up yet (no event file).");
            }
        }

        BackupCommands::Restore { force } => {
            if !manager.backup_exists() {
                println!("No backup found at {}", manager.backup_path().display());
                return Ok(());
            }

            if !force {
                println!("Restoring will overwrite your current events.");
                println!("Re-run with --force to proceed.");
                return Ok(());
            }

            if manager.restore()? {
                println!("Events restored from {}", manager.backup_path().display());
            }
        }

        BackupCommands::Status => {
            if manager.backup_exists() {
                println!("Backup present: {}", manager.backup_path().display());
            } else {
                println!("No backup yet. Create one with: agenda backup create");
            }
        }
    }

    Ok(())
}
