//! Interactive terminal session
//!
//! The session logs a user in, then dispatches main menu selections to the
//! ledger flows until the user logs out. All input and output goes through a
//! `Console`, so a whole session can be driven from a script.

pub mod flows;
pub mod login;
pub mod menu;
pub mod prompt;

pub use flows::LedgerFlows;
pub use login::login;
pub use menu::{run_session, MenuOption};
pub use prompt::Console;
