//! Utilities for file operations with automatic parent directory creation.

use anyhow::Result;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Write a file, creating parent directories as needed.
pub fn write_file_with_dirs<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, content: C) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Set Unix permission bits on an existing file.
pub fn set_mode(path: &Path, mode: u32) -> Result<()> {
    fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    Ok(())
}

/// Copy a file and carry over the source's modification time, so later
/// newer-than comparisons see the origin's timestamp rather than the
/// copy's.
pub fn copy_preserving_mtime(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst)?;
    let mtime = filetime::FileTime::from_last_modification_time(&fs::metadata(src)?);
    filetime::set_file_mtime(dst, mtime)?;
    Ok(())
}
