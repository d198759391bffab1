//! Configuration module for Budget Shell
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ShellPaths;
pub use settings::Settings;
