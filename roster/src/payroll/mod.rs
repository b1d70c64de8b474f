//! Payroll core
//!
//! - [`calculator`]: net pay of one employee
//! - [`migrator`]: upgrade stored records to the current schema
//! - [`store`]: roster operations (snapshot in, snapshot out)
//! - [`confirm`]: two-step confirmation for destructive operations
//! - [`draft`]: rate entry helpers for the add / edit dialog
//! - [`summary`]: weekly grid of a department

pub mod calculator;
pub mod confirm;
pub mod draft;
pub mod migrator;
pub mod money;
pub mod store;
pub mod summary;

pub use confirm::{ConfirmationToken, Confirmations, PendingAction};
pub use draft::{RateDraft, RateField};
pub use migrator::{MigrationError, migrate};
pub use store::{Declined, StoreOutcome};
pub use summary::{DepartmentSummary, EmployeeRow, summarize};
