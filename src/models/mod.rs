//! Core data models for Finance Guardian
//!
//! This module contains the data structures of the budgeting domain: amounts,
//! months, the category template, month ledgers and directory users.

pub mod amount;
pub mod ledger;
pub mod month;
pub mod template;
pub mod user;

pub use amount::{Amount, AmountParseError};
pub use ledger::{LedgerRow, MonthLedger, MonthStatus, RecordKind};
pub use month::Month;
pub use template::{CategoryTemplate, TemplateCategory, TemplateValidationError};
pub use user::{DisplayName, UserRecord, UserValidationError, Username};
