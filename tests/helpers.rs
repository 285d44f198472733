//! Shared test utilities for usersu tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with a temporary rootfs target and a mock host
/// binary source directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Rootfs build destination
    pub rootfs: PathBuf,
    /// Mock host directory binaries are harvested from
    pub host_bin: PathBuf,
}

impl TestEnv {
    /// Create a new test environment with temporary directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base = temp_dir.path();

        let rootfs = base.join("rootfs");
        let host_bin = base.join("host/bin");
        fs::create_dir_all(&rootfs).expect("Failed to create rootfs dir");
        fs::create_dir_all(&host_bin).expect("Failed to create host bin dir");

        Self {
            _temp_dir: temp_dir,
            rootfs,
            host_bin,
        }
    }
}

/// Create a mock executable binary file.
pub fn create_mock_binary(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir for binary");
    }
    fs::write(path, content).expect("Failed to create mock binary");
    let mut perms = fs::metadata(path)
        .expect("Failed to get metadata")
        .permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to set permissions");
}

/// Create a mock shared library file.
pub fn create_mock_library(path: &Path) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir for library");
    }
    fs::write(path, b"\x7fELF").expect("Failed to create mock library");
}

/// Set a file's modification time to a fixed unix timestamp.
pub fn set_mtime(path: &Path, unix_seconds: i64) {
    filetime::set_file_mtime(path, filetime::FileTime::from_unix_time(unix_seconds, 0))
        .expect("Failed to set mtime");
}

/// Assert that a symlink exists and points to the expected target.
pub fn assert_symlink(path: &Path, expected_target: &str) {
    assert!(
        path.is_symlink(),
        "Expected symlink at {}, but it's not a symlink",
        path.display()
    );

    let target = fs::read_link(path).expect("Failed to read symlink");
    assert_eq!(
        target.to_string_lossy(),
        expected_target,
        "Symlink {} points to {:?}, expected {}",
        path.display(),
        target,
        expected_target
    );
}

/// Assert that a directory exists.
pub fn assert_dir_exists(path: &Path) {
    assert!(path.is_dir(), "Expected directory to exist: {}", path.display());
}
