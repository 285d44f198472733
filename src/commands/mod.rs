//! CLI command handlers.
//!
//! Each submodule handles a specific CLI command:
//! - `create` - Build a new rootfs structure
//! - `enter` - Launch a PRoot sandbox in a rootfs
//! - `info` - Inspect an existing rootfs
//! - `update` - Refresh rootfs binaries from the host

pub mod create;
pub mod enter;
pub mod info;
pub mod update;

pub use create::cmd_create;
pub use enter::cmd_enter;
pub use info::cmd_info;
pub use update::cmd_update_binaries;
