//! Best-effort population of rootfs bin/lib directories from host sources.
//!
//! One copy routine, two policies: create-time population never overwrites
//! (CopyIfAbsent), while `update-binaries` refreshes a file when the host
//! copy is strictly newer (CopyIfNewer). Libraries only ever use
//! CopyIfAbsent; the asymmetry is inherited from the original layout
//! contract rather than a technical limit.
//!
//! A batch never aborts on a single file: copy failures are recorded with
//! their reason and the fold carries on, so the summary always reflects a
//! completed pass over every source file.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::files::{copy_preserving_mtime, set_mode};

/// When an already-present destination file may be overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStrategy {
    /// Never overwrite; existing files are left untouched.
    CopyIfAbsent,
    /// Overwrite only when the source mtime is strictly newer.
    CopyIfNewer,
}

/// Aggregate result of one population batch.
#[derive(Debug, Default)]
pub struct CopyStats {
    /// Files newly copied (destination did not exist).
    pub copied: usize,
    /// Existing files refreshed (CopyIfNewer only).
    pub updated: usize,
    /// Files that failed to copy, with the failure reason.
    pub skipped: Vec<(String, String)>,
}

impl CopyStats {
    fn merge(&mut self, other: CopyStats) {
        self.copied += other.copied;
        self.updated += other.updated;
        self.skipped.extend(other.skipped);
    }
}

/// Copy host binaries into `dest_dir`, normalizing each copy to 0755.
pub fn populate_binaries(
    binaries: &[PathBuf],
    dest_dir: &Path,
    strategy: UpdateStrategy,
    verbose: bool,
) -> Result<CopyStats> {
    fs::create_dir_all(dest_dir)?;
    let mut stats = CopyStats::default();

    for binary in binaries {
        let Some(name) = binary.file_name() else {
            continue;
        };
        let dest = dest_dir.join(name);
        match copy_one(binary, &dest, strategy, true) {
            Ok(CopyOutcome::Copied) => stats.copied += 1,
            Ok(CopyOutcome::Updated) => stats.updated += 1,
            Ok(CopyOutcome::Untouched) => {}
            Err(err) => {
                let name = name.to_string_lossy().into_owned();
                if verbose {
                    println!("  Skipped {}: {}", name, err);
                }
                stats.skipped.push((name, err.to_string()));
            }
        }
    }
    Ok(stats)
}

/// Copy shared objects from each existing host library directory into the
/// rootfs, routing `lib64` sources to `system/lib64` and the rest to
/// `system/lib`. Copy-if-absent only.
pub fn populate_libraries(
    source_dirs: &[PathBuf],
    root: &Path,
    verbose: bool,
) -> Result<CopyStats> {
    let mut stats = CopyStats::default();

    for source in source_dirs {
        if !source.is_dir() {
            continue;
        }
        let dest_dir = if source.to_string_lossy().contains("lib64") {
            root.join("system/lib64")
        } else {
            root.join("system/lib")
        };
        stats.merge(copy_shared_objects(source, &dest_dir, verbose)?);
    }
    Ok(stats)
}

fn copy_shared_objects(source: &Path, dest_dir: &Path, verbose: bool) -> Result<CopyStats> {
    fs::create_dir_all(dest_dir)?;
    let mut stats = CopyStats::default();

    let Ok(entries) = fs::read_dir(source) else {
        return Ok(stats);
    };
    for entry in entries.flatten() {
        let name = entry.file_name();
        let name_str = name.to_string_lossy();
        if !is_shared_object(&name_str) || !entry.path().is_file() {
            continue;
        }
        let dest = dest_dir.join(&name);
        match copy_one(&entry.path(), &dest, UpdateStrategy::CopyIfAbsent, false) {
            Ok(CopyOutcome::Copied) => stats.copied += 1,
            Ok(_) => {}
            Err(err) => {
                if verbose {
                    println!("  Skipped {}: {}", name_str, err);
                }
                stats.skipped.push((name_str.into_owned(), err.to_string()));
            }
        }
    }
    Ok(stats)
}

/// Shared-object naming convention: a `.so` base name, optionally followed
/// by a version suffix (`libfoo.so`, `libfoo.so.1.2`).
pub fn is_shared_object(name: &str) -> bool {
    name.ends_with(".so") || name.contains(".so.")
}

enum CopyOutcome {
    Copied,
    Updated,
    Untouched,
}

fn copy_one(
    src: &Path,
    dest: &Path,
    strategy: UpdateStrategy,
    executable: bool,
) -> Result<CopyOutcome> {
    if !dest.exists() {
        copy_preserving_mtime(src, dest)?;
        if executable {
            set_mode(dest, 0o755)?;
        }
        return Ok(CopyOutcome::Copied);
    }

    match strategy {
        UpdateStrategy::CopyIfAbsent => Ok(CopyOutcome::Untouched),
        UpdateStrategy::CopyIfNewer => {
            let src_mtime = fs::metadata(src)?.modified()?;
            let dest_mtime = fs::metadata(dest)?.modified()?;
            if src_mtime > dest_mtime {
                copy_preserving_mtime(src, dest)?;
                if executable {
                    set_mode(dest, 0o755)?;
                }
                Ok(CopyOutcome::Updated)
            } else {
                Ok(CopyOutcome::Untouched)
            }
        }
    }
}
