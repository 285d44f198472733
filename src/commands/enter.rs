//! Enter command - launch a PRoot sandbox in an existing rootfs.

use anyhow::{bail, Result};
use std::path::Path;

use crate::config::Config;
use crate::proot::{self, LaunchOptions};

/// Execute the enter command. Returns the jailer's exit code.
pub fn cmd_enter(
    path: &Path,
    command: Option<String>,
    binds: Vec<String>,
    link2symlink: bool,
    config: &Config,
) -> Result<i32> {
    if !path.exists() {
        bail!("Rootfs path {} does not exist", path.display());
    }

    let opts = LaunchOptions {
        rootfs: path.to_path_buf(),
        command,
        binds,
        link2symlink,
    };
    let invocation = proot::build_invocation(&opts, config)?;

    println!("Entering sandbox at {}...", path.canonicalize()?.display());
    proot::exec(&invocation)
}
