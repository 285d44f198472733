//! Usersu library exports.
//!
//! The binary is a thin clap front end; everything it does lives here so
//! integration tests can drive the same code paths.

pub mod commands;
pub mod config;
pub mod files;
pub mod host;
pub mod layout;
pub mod proot;
pub mod rootfs;
