//! Host environment probing.
//!
//! Binaries and libraries are harvested from a fixed candidate list of
//! Android and Termux directories. Every candidate that exists is scanned;
//! the union of their contents feeds the rootfs populator (which applies
//! its own copy-if-absent policy, so overlapping names are harmless).

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use crate::config::Config;

/// True when running under Termux.
pub fn is_termux() -> bool {
    if std::env::var_os("TERMUX_VERSION").is_some() {
        return true;
    }
    dirs::home_dir()
        .map(|home| home.to_string_lossy().contains("com.termux"))
        .unwrap_or(false)
}

/// Host directories that may hold system binaries.
pub fn binary_source_dirs(config: &Config) -> Vec<PathBuf> {
    let mut dirs_out = vec![PathBuf::from("/system/bin"), PathBuf::from("/system/xbin")];
    if let Some(home) = dirs::home_dir() {
        // Termux keeps its usr tree next to the home directory
        dirs_out.push(home.join("../usr/bin"));
    }
    if let Some(prefix) = &config.termux_prefix {
        dirs_out.push(prefix.join("bin"));
    }
    dirs_out
}

/// Host directories that may hold shared libraries.
pub fn library_source_dirs(config: &Config) -> Vec<PathBuf> {
    let mut dirs_out = vec![PathBuf::from("/system/lib"), PathBuf::from("/system/lib64")];
    if let Some(home) = dirs::home_dir() {
        dirs_out.push(home.join("../usr/lib"));
    }
    if let Some(prefix) = &config.termux_prefix {
        dirs_out.push(prefix.join("lib"));
    }
    dirs_out
}

/// Enumerate executable regular files across all existing binary source
/// directories. Unreadable entries are silently skipped.
pub fn find_binaries(config: &Config) -> Vec<PathBuf> {
    let mut binaries = Vec::new();
    for dir in binary_source_dirs(config) {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if is_executable_file(&path) {
                binaries.push(path);
            }
        }
    }
    binaries
}

fn is_executable_file(path: &std::path::Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}
