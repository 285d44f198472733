//! PRoot invocation: argument-vector construction and process handoff.
//!
//! PRoot parses its flags positionally, so the vector is built in a fixed
//! order: root dir, default binds, user binds, link2symlink, working dir,
//! fake-root, PATH, entry point. Construction is separate from execution so
//! the vector can be tested without spawning anything.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::Config;
use crate::layout::{DEFAULT_BINDS, SANDBOX_PATH, SANDBOX_WORKDIR, SHELL_CANDIDATES};

/// One sandbox launch request. Consumed once to build a [`ProotInvocation`].
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Rootfs to chroot into. Must exist.
    pub rootfs: PathBuf,
    /// Explicit command to run via `<shell> -c`; interactive shell if None.
    pub command: Option<String>,
    /// User bind specs (`src:dest` or `path`), passed through in order
    /// after the default binds. Duplicates are not filtered; proot's own
    /// precedence rules apply.
    pub binds: Vec<String>,
    /// Emit `-L` (hard-link to symlink rewriting).
    pub link2symlink: bool,
}

/// A fully built jailer command line.
#[derive(Debug)]
pub struct ProotInvocation {
    pub program: String,
    pub args: Vec<String>,
}

/// Find the first candidate shell that exists inside the rootfs.
///
/// Candidates are probed relative to the rootfs root in priority order;
/// the returned path is the in-sandbox (absolute) form.
pub fn resolve_shell(rootfs: &Path) -> Option<&'static str> {
    SHELL_CANDIDATES
        .iter()
        .find(|shell| rootfs.join(shell.trim_start_matches('/')).exists())
        .copied()
}

/// Build the ordered proot argument vector for one launch.
pub fn build_invocation(opts: &LaunchOptions, config: &Config) -> Result<ProotInvocation> {
    let rootfs = opts
        .rootfs
        .canonicalize()
        .with_context(|| format!("Failed to resolve rootfs path {}", opts.rootfs.display()))?;

    let mut args = Vec::new();

    args.push("-r".to_string());
    args.push(rootfs.to_string_lossy().into_owned());

    for bind in DEFAULT_BINDS {
        args.push("-b".to_string());
        args.push(bind.to_string());
    }
    for bind in &opts.binds {
        args.push("-b".to_string());
        args.push(bind.clone());
    }

    if opts.link2symlink {
        args.push("-L".to_string());
    }

    args.push("-w".to_string());
    args.push(SANDBOX_WORKDIR.to_string());

    // Always present uid 0 inside the sandbox
    args.push("-0".to_string());

    args.push("--env".to_string());
    args.push(format!("PATH={}", SANDBOX_PATH));

    let shell = resolve_shell(&rootfs).unwrap_or_else(|| {
        eprintln!("Warning: No shell found in rootfs");
        SHELL_CANDIDATES[0]
    });

    match &opts.command {
        Some(command) => {
            args.push(shell.to_string());
            args.push("-c".to_string());
            args.push(command.clone());
        }
        None => args.push(shell.to_string()),
    }

    Ok(ProotInvocation {
        program: config.proot_bin.clone(),
        args,
    })
}

/// Hand control to proot and block until it exits.
///
/// Returns the jailer's exit code. A signal-terminated jailer (typically
/// Ctrl+C in the sandbox) is a normal exit, not an error.
pub fn exec(invocation: &ProotInvocation) -> Result<i32> {
    if which::which(&invocation.program).is_err() {
        bail!(
            "{} is not installed.\n\nInstall PRoot in Termux with:\n  pkg install proot",
            invocation.program
        );
    }

    let status = Command::new(&invocation.program)
        .args(&invocation.args)
        .status()
        .with_context(|| format!("Failed to execute '{}'", invocation.program))?;

    match status.code() {
        Some(code) => Ok(code),
        None => {
            println!("\nExited sandbox");
            Ok(0)
        }
    }
}
