//! Service layer for Finance Guardian
//!
//! The service layer provides the budgeting logic on top of the storage
//! layer: column addressing, budget allocation, the monthly ledger engine and
//! the user directory.

pub mod addressing;
pub mod allocator;
pub mod directory;
pub mod ledger;

pub use addressing::{column, column_for};
pub use allocator::allocate;
pub use directory::UserDirectory;
pub use ledger::LedgerService;
