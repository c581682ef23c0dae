//! Configuration module for Finance Guardian
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::GuardianPaths;
pub use settings::{OverwritePolicy, Settings};
