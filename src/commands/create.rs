//! Create command - materialize a new rootfs.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::host;
use crate::rootfs::populate::{populate_binaries, populate_libraries, UpdateStrategy};
use crate::rootfs::scaffold;

/// Execute the create command.
pub fn cmd_create(
    path: &Path,
    minimal: bool,
    copy_bins: bool,
    verbose: bool,
    config: &Config,
) -> Result<()> {
    if !host::is_termux() {
        eprintln!("Warning: Not running in Termux. Some features may not work correctly.");
        eprintln!("For best results, run this tool in Termux on Android.\n");
    }

    if path.exists() && path.read_dir().map(|mut d| d.next().is_some()).unwrap_or(false) {
        eprintln!(
            "Warning: Directory {} already exists and is not empty; existing files are kept.",
            path.display()
        );
    }

    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create rootfs directory {}", path.display()))?;
    let abs = path.canonicalize()?;

    println!("Creating rootfs at: {}", abs.display());

    let dir_count = scaffold::create_directories(path, minimal, verbose)?;
    let link_count = if minimal {
        0
    } else {
        scaffold::create_symlinks(path, verbose)?
    };
    scaffold::write_seed_files(path)?;
    println!("Scaffolded {} directories, {} symlinks", dir_count, link_count);

    if copy_bins {
        println!("\nCopying system binaries...");
        let binaries = host::find_binaries(config);

        if binaries.is_empty() {
            eprintln!("Warning: No system binaries found to copy");
        } else {
            let stats = populate_binaries(
                &binaries,
                &path.join("system/bin"),
                UpdateStrategy::CopyIfAbsent,
                verbose,
            )?;
            println!("Copied {} binaries ({} skipped)", stats.copied, stats.skipped.len());

            println!("Copying essential libraries...");
            let lib_stats = populate_libraries(&host::library_source_dirs(config), path, verbose)?;
            if lib_stats.copied > 0 {
                println!("Copied {} libraries", lib_stats.copied);
            }
        }
    }

    println!("\nRootfs created successfully at {}", abs.display());
    println!("\nTo enter the sandbox, run:");
    println!("  usersu enter {}", abs.display());

    Ok(())
}
