//! Configuration management for usersu.
//!
//! Reads configuration from a .env file and environment variables.
//! Environment variables take precedence over the .env file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Default jailer program looked up on PATH.
pub const DEFAULT_PROOT_BIN: &str = "proot";

/// Usersu configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Jailer program to invoke (default: "proot", override: USERSU_PROOT)
    pub proot_bin: String,
    /// Termux prefix if running under Termux (from PREFIX)
    pub termux_prefix: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a .env file and the environment.
    ///
    /// The .env file is looked up in `base_dir`; real environment variables
    /// override anything it sets.
    pub fn load(base_dir: &Path) -> Self {
        let mut env_vars = HashMap::new();

        let env_path = base_dir.join(".env");
        if env_path.exists() {
            if let Ok(content) = fs::read_to_string(&env_path) {
                for line in content.lines() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }
                    if let Some((key, value)) = line.split_once('=') {
                        let value = value.trim().trim_matches('"').trim_matches('\'');
                        env_vars.insert(key.trim().to_string(), value.to_string());
                    }
                }
            }
        }

        // Environment variables override .env file
        for (key, value) in std::env::vars() {
            env_vars.insert(key, value);
        }

        Self {
            proot_bin: env_vars
                .get("USERSU_PROOT")
                .cloned()
                .unwrap_or_else(|| DEFAULT_PROOT_BIN.to_string()),
            termux_prefix: env_vars.get("PREFIX").map(PathBuf::from),
        }
    }

    /// Print the active configuration.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  proot binary:  {}", self.proot_bin);
        match &self.termux_prefix {
            Some(prefix) => println!("  termux prefix: {}", prefix.display()),
            None => println!("  termux prefix: (not set)"),
        }
    }
}
