//! Display formatting for terminal output
//!
//! Provides utilities for formatting month ledgers and the category template
//! for terminal display.

pub mod ledger;
pub mod template;

pub use ledger::{format_ledger, format_title};
pub use template::format_template;
