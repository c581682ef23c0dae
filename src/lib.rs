//! Finance Guardian - terminal budgeting assistant
//!
//! This library provides the core functionality of Finance Guardian. Users
//! derive a monthly budget from their income and a percentage template, record
//! expenses against it, and view, update or delete both later on.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (amounts, months, templates, ledgers, users)
//! - `storage`: Workbook storage layer (CSV sheets on disk or in memory)
//! - `services`: Business logic layer (addressing, allocation, ledgers, users)
//! - `display`: Terminal formatting
//! - `session`: Interactive menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_guardian::config::{GuardianPaths, Settings};
//! use finance_guardian::storage::{initialize_workbook, CsvWorkbook};
//!
//! let paths = GuardianPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut workbook = CsvWorkbook::open(paths.workbook_dir())?;
//! initialize_workbook(&mut workbook)?;
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod session;
pub mod storage;

pub use error::{GuardianError, GuardianResult};
