//! Usersu - create and manage PRoot-based Android sandbox environments.
//!
//! Provisions a minimal Android-like rootfs on the host (typically inside
//! Termux) and launches a PRoot sandbox rooted at it. PRoot itself does the
//! isolation; this tool builds the tree and the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use usersu::commands;
use usersu::config::Config;

#[derive(Parser)]
#[command(name = "usersu")]
#[command(about = "Create and manage PRoot-based Android sandbox environments")]
#[command(
    after_help = "QUICK START:\n  usersu create ./rootfs   Build an Android-like rootfs\n  usersu enter ./rootfs    Enter the sandbox\n  usersu info ./rootfs     Inspect a rootfs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Android-like rootfs structure for a PRoot sandbox
    Create {
        /// Path where the rootfs will be created
        path: PathBuf,

        /// Create minimal structure only (Android system tree)
        #[arg(short, long)]
        minimal: bool,

        /// Don't copy system binaries into the rootfs
        #[arg(long)]
        no_copy_bins: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Enter the PRoot sandbox environment
    Enter {
        /// Path to the rootfs
        path: PathBuf,

        /// Command to execute instead of an interactive shell
        #[arg(short, long)]
        command: Option<String>,

        /// Bind mount directories (format: src:dest, or a single path)
        #[arg(short, long = "bind")]
        bind: Vec<String>,

        /// Disable hard-link to symlink rewriting (proot -L)
        #[arg(long)]
        no_link2symlink: bool,
    },

    /// Show information about a rootfs
    Info {
        /// Path to the rootfs
        path: PathBuf,
    },

    /// Update/add binaries from the current Android/Termux system
    UpdateBinaries {
        /// Path to the rootfs
        path: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present
    dotenvy::dotenv().ok();
    let base_dir = std::env::current_dir()?;
    let config = Config::load(&base_dir);

    match cli.command {
        Commands::Create {
            path,
            minimal,
            no_copy_bins,
            verbose,
        } => {
            commands::cmd_create(&path, minimal, !no_copy_bins, verbose, &config)?;
        }

        Commands::Enter {
            path,
            command,
            bind,
            no_link2symlink,
        } => {
            let code = commands::cmd_enter(&path, command, bind, !no_link2symlink, &config)?;
            std::process::exit(code);
        }

        Commands::Info { path } => {
            commands::cmd_info(&path)?;
        }

        Commands::UpdateBinaries { path, verbose } => {
            commands::cmd_update_binaries(&path, verbose, &config)?;
        }
    }

    Ok(())
}
