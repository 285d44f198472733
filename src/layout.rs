//! Declarative rootfs layout and sandbox defaults.
//!
//! Everything the builder materializes and the launcher passes to proot is
//! defined here as static data. The scaffolding and argument-building code
//! are plain functions over these tables, which keeps them testable against
//! a temp directory without any special setup.

/// Directories created inside the rootfs, in creation order.
///
/// The first [`MINIMAL_DIR_COUNT`] entries form the minimal layout. The full
/// list spans both the Android tree (`system/bin`, `data/data`, `sdcard`)
/// and a POSIX tree (`bin`, `etc`, `usr/bin`, `var/log`) so software
/// expecting either convention finds familiar paths.
pub const ROOTFS_DIRS: &[&str] = &[
    "system/bin",
    "system/xbin",
    "system/lib",
    "system/lib64",
    "system/etc",
    "system/usr",
    "sys",
    "data/data",
    "data/local/tmp",
    "misc",
    "boot",
    "recovery",
    "dev",
    "proc",
    "sdcard",
    "storage",
    "mnt",
    "tmp",
    "root",
    "etc",
    "bin",
    "sbin",
    "usr/bin",
    "usr/sbin",
    "var/log",
    "cache",
];

/// How many of [`ROOTFS_DIRS`] a `--minimal` create materializes.
pub const MINIMAL_DIR_COUNT: usize = 6;

/// How many of [`ROOTFS_DIRS`] the `info` command reports on.
pub const INFO_DIR_COUNT: usize = 10;

/// Android-compatibility symlinks created at the rootfs root (full mode).
///
/// Each `(name, target)` entry is recreated unconditionally so a rootfs
/// converges to this table even if a prior run left a stale link or a
/// regular file at the name.
pub const SYMLINKS: &[(&str, &str)] = &[
    ("bin", "/system/bin"),
    ("sbin", "/system/xbin"),
    ("lib", "/system/lib"),
    ("lib64", "/system/lib64"),
    ("etc", "/system/etc"),
    ("usr", "/system/usr"),
];

/// Seed content for `system/etc/hosts`: loopback mappings only.
pub const HOSTS_FILE: &str = "127.0.0.1 localhost\n::1 localhost\n";

/// Seed content for `system/build.prop`. Fixed values; doubles as a
/// signature that the rootfs was produced by this tool.
pub const BUILD_PROP: &str = "\
ro.build.version.sdk=33
ro.product.model=UserSU_Sandbox
ro.build.type=user
";

/// Pseudo-filesystems bound into every sandbox before user binds.
pub const DEFAULT_BINDS: &[&str] = &["/dev", "/proc", "/sys"];

/// Shell candidates probed inside the rootfs, in priority order.
pub const SHELL_CANDIDATES: &[&str] = &[
    "/system/bin/sh",
    "/bin/sh",
    "/system/bin/bash",
    "/bin/bash",
];

/// PATH exported inside the sandbox (Android dirs first, then POSIX).
pub const SANDBOX_PATH: &str = "/system/bin:/system/xbin:/bin:/sbin:/usr/bin:/usr/sbin";

/// Initial working directory inside the sandbox.
pub const SANDBOX_WORKDIR: &str = "/root";
