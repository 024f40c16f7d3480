//! Backup CLI commands

use clap::Subcommand;

use crate::backup::{restore_backup, BackupManager};
use crate::config::paths::TrailheadPaths;
use crate::config::settings::Settings;
use crate::error::{TrailheadError, TrailheadResult};

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create a backup now
    Create,
    /// List existing backups
    List,
    /// Restore a backup over the current data
    Restore {
        /// Backup filename (from 'backup list')
        filename: String,
    },
}

/// Handle a backup command
pub fn handle_backup_command(
    paths: &TrailheadPaths,
    settings: &Settings,
    cmd: BackupCommands,
) -> TrailheadResult<()> {
    let manager = BackupManager::new(paths.clone(), settings.backup_retention.clone());

    match cmd {
        BackupCommands::Create => {
            let path = manager.create_backup()?;
            println!("Backup created: {}", path.display());
        }

        BackupCommands::List => {
            let backups = manager.list_backups()?;
            if backups.is_empty() {
                println!("No backups found.");
            } else {
                for backup in backups {
                    println!(
                        "  {}  {:>8} bytes  {}",
                        backup.filename,
                        backup.size_bytes,
                        backup.created_at.format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }

        BackupCommands::Restore { filename } => {
            let backup_path = paths.backup_dir().join(&filename);
            if !backup_path.exists() {
                return Err(TrailheadError::Backup(format!(
                    "Backup not found: {}",
                    filename
                )));
            }

            // Keep a safety copy of the current state before overwriting
            manager.create_backup()?;
            restore_backup(paths, &backup_path)?;
            println!("Restored from {}.", filename);
        }
    }

    Ok(())
}
