//! One Meal roster - weekly staff schedule and payroll advances
//!
//! # Overview
//!
//! Four departments (cuisine, chawarma, pizza, serveurs), each with a list
//! of employees. For every employee the roster tracks the shift worked and
//! the cash advance paid on each of the six working days, and keeps the
//! net pay of the week up to date.
//!
//! # Module structure
//!
//! ```text
//! roster/src/
//! ├── core/          # config, load / save, session
//! ├── payroll/       # pay calculation, migration, operations, confirmation
//! ├── storage.rs     # key-value store (redb)
//! ├── utils/         # logging
//! └── cli.rs         # command line front end
//! ```

pub mod cli;
pub mod core;
pub mod payroll;
pub mod storage;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Session};
pub use payroll::{ConfirmationToken, DepartmentSummary, PendingAction, StoreOutcome};
pub use storage::{KeyValueStore, MemoryStore, RedbStore, StorageError, StorageResult};
pub use utils::logger::init_logger_with_file;
