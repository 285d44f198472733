//! Rootfs builder for usersu.
//!
//! Materializes the Android-like directory tree a PRoot sandbox runs in.
//!
//! ## Components
//!
//! - **scaffold**: directory skeleton, compatibility symlinks, seed files
//! - **populate**: best-effort binary/library copying with per-policy
//!   update semantics
//! - **info**: read-only inspection of an existing rootfs

pub mod info;
pub mod populate;
pub mod scaffold;

pub use info::RootfsInfo;
pub use populate::{CopyStats, UpdateStrategy};
