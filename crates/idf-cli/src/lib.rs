//! CLI library components for the identity federation tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
