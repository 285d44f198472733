//! Read-only inspection of an existing rootfs.

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::layout::{INFO_DIR_COUNT, ROOTFS_DIRS};
use crate::rootfs::populate::is_shared_object;

/// Snapshot of a rootfs for reporting.
#[derive(Debug)]
pub struct RootfsInfo {
    /// Existence of the first declared directories, in declaration order.
    pub directories: Vec<(&'static str, bool)>,
    /// build.prop content, if the signature file is present.
    pub build_prop: Option<String>,
    /// Entry count of system/bin, if the directory exists.
    pub binary_count: Option<usize>,
    /// Shared objects across system/lib and system/lib64.
    pub library_count: usize,
    /// Sum of all regular file sizes under the rootfs, in bytes.
    pub total_size: u64,
}

/// Gather a [`RootfsInfo`] for the rootfs at `root`. Purely observational.
pub fn gather(root: &Path) -> Result<RootfsInfo> {
    let directories = ROOTFS_DIRS[..INFO_DIR_COUNT]
        .iter()
        .map(|dir| (*dir, root.join(dir).exists()))
        .collect();

    let build_prop = fs::read_to_string(root.join("system/build.prop")).ok();

    let bin_dir = root.join("system/bin");
    let binary_count = if bin_dir.exists() {
        Some(fs::read_dir(&bin_dir)?.count())
    } else {
        None
    };

    let mut library_count = 0;
    for lib_dir in ["system/lib", "system/lib64"] {
        let lib_path = root.join(lib_dir);
        let Ok(entries) = fs::read_dir(&lib_path) else {
            continue;
        };
        library_count += entries
            .flatten()
            .filter(|e| is_shared_object(&e.file_name().to_string_lossy()))
            .count();
    }

    let total_size = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum();

    Ok(RootfsInfo {
        directories,
        build_prop,
        binary_count,
        library_count,
        total_size,
    })
}

impl RootfsInfo {
    /// Print the report the way `usersu info` shows it.
    pub fn print(&self) {
        println!("Directory structure:");
        for (dir, exists) in &self.directories {
            let mark = if *exists { "ok" } else { "missing" };
            println!("  [{}] {}", mark, dir);
        }

        if let Some(prop) = &self.build_prop {
            println!("\nBuild info:");
            for line in prop.trim().lines() {
                println!("  {}", line);
            }
        }

        if let Some(count) = self.binary_count {
            println!("\nBinaries: {} files in /system/bin", count);
        }
        if self.library_count > 0 {
            println!("Libraries: {} shared objects", self.library_count);
        }

        println!(
            "\nTotal size: {:.2} MB",
            self.total_size as f64 / 1024.0 / 1024.0
        );
    }
}
