//! Info command - inspect an existing rootfs.

use anyhow::{bail, Result};
use std::path::Path;

use crate::rootfs::info;

/// Execute the info command.
pub fn cmd_info(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("Path {} does not exist", path.display());
    }

    println!("Rootfs: {}\n", path.canonicalize()?.display());
    info::gather(path)?.print();
    Ok(())
}
