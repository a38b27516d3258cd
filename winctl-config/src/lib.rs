//! Configuration system for winctl.
//!
//! This crate provides configuration loading, saving, and default values
//! for the window-command dispatcher. It includes:
//!
//! - Window settings for the native host (title, initial size)
//! - Keybinding entries mapping key combinations to command names
//! - Relaunch settings used by the `reset` command
//! - Log level selection

pub mod config;
pub mod defaults;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use types::{KeyBinding, LogLevel, RelaunchConfig};
