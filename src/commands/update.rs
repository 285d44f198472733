//! Update command - refresh rootfs binaries from the host system.

use anyhow::{bail, Result};
use std::path::Path;

use crate::config::Config;
use crate::host;
use crate::rootfs::populate::{populate_binaries, UpdateStrategy};

/// Execute the update-binaries command.
///
/// Absent binaries are added; present ones are refreshed only when the
/// host copy is strictly newer. Libraries are not touched.
pub fn cmd_update_binaries(path: &Path, verbose: bool, config: &Config) -> Result<()> {
    if !path.exists() {
        bail!("Rootfs {} does not exist", path.display());
    }

    if !host::is_termux() {
        eprintln!("Warning: Not running in Termux. Limited binaries available.");
    }

    println!("Updating binaries from system...");
    let binaries = host::find_binaries(config);

    if binaries.is_empty() {
        eprintln!("Warning: No system binaries found");
        return Ok(());
    }

    let stats = populate_binaries(
        &binaries,
        &path.join("system/bin"),
        UpdateStrategy::CopyIfNewer,
        verbose,
    )?;

    println!("\nAdded {} new binaries", stats.copied);
    println!("Updated {} existing binaries", stats.updated);
    if !stats.skipped.is_empty() {
        println!("Skipped {} binaries", stats.skipped.len());
    }

    Ok(())
}
