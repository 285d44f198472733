//! Directory, symlink, and seed-file scaffolding.
//!
//! Every operation here converges: directories are created with
//! `create_dir_all` (pre-existing ones are untouched), symlinks are removed
//! and recreated so a stale or wrong-target link from a partial run is
//! repaired, and seed files are overwritten unconditionally.

use anyhow::{Context, Result};
use std::fs;
use std::os::unix::fs::symlink;
use std::path::Path;

use crate::files::write_file_with_dirs;
use crate::layout::{BUILD_PROP, HOSTS_FILE, MINIMAL_DIR_COUNT, ROOTFS_DIRS, SYMLINKS};

/// Create the declared directory skeleton under `root`.
///
/// Minimal mode creates only the Android system tree; full mode creates
/// the whole table. Returns the number of directories processed.
pub fn create_directories(root: &Path, minimal: bool, verbose: bool) -> Result<usize> {
    let dirs = if minimal {
        &ROOTFS_DIRS[..MINIMAL_DIR_COUNT]
    } else {
        ROOTFS_DIRS
    };

    for dir in dirs {
        // A compat symlink (or leftover file) at the leading component
        // covers this path already; create_dir_all through an absolute
        // symlink would land outside the rootfs.
        let first = dir.split('/').next().unwrap_or(dir);
        if let Ok(meta) = root.join(first).symlink_metadata() {
            if !meta.is_dir() {
                continue;
            }
        }
        fs::create_dir_all(root.join(dir))
            .with_context(|| format!("Failed to create directory {}", dir))?;
        if verbose {
            println!("  Created: {}", dir);
        }
    }
    Ok(dirs.len())
}

/// Create the Android-compatibility symlinks at the rootfs root.
///
/// Anything already at a link's name (file, dir-less symlink, stale link)
/// is removed first so the result always matches the declared table.
pub fn create_symlinks(root: &Path, verbose: bool) -> Result<usize> {
    for (name, target) in SYMLINKS {
        let link_path = root.join(name);
        if let Ok(meta) = link_path.symlink_metadata() {
            if meta.is_dir() {
                // The directory pass creates some of these names as real
                // directories; the declared layout wants links.
                fs::remove_dir_all(&link_path)
                    .with_context(|| format!("Failed to remove existing {}", name))?;
            } else {
                fs::remove_file(&link_path)
                    .with_context(|| format!("Failed to remove existing {}", name))?;
            }
        }
        symlink(target, &link_path)
            .with_context(|| format!("Failed to symlink {} -> {}", name, target))?;
        if verbose {
            println!("  Symlinked: {} -> {}", name, target);
        }
    }
    Ok(SYMLINKS.len())
}

/// Write the hosts file and build.prop signature, overwriting any prior
/// content.
pub fn write_seed_files(root: &Path) -> Result<()> {
    write_file_with_dirs(root.join("system/etc/hosts"), HOSTS_FILE)?;
    write_file_with_dirs(root.join("system/build.prop"), BUILD_PROP)?;
    Ok(())
}
