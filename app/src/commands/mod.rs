//! Host commands
//!
//! These commands bridge the page to the Rust core. Every command returns a
//! serializable [`tabs::CommandResult`].

pub mod contact;
pub mod diagnostics;
pub mod tabs;
