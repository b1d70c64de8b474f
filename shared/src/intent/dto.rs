//! Intent payloads

use serde::{Deserialize, Serialize};

/// Name and rates entered in the add / edit employee dialog.
///
/// The double rate is not part of the payload; it is always derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub name: String,
    pub morning: f64,
    pub evening: f64,
}

/// Step used by the "+100" shortcut next to each advance field
pub const DEFAULT_ADVANCE_STEP: f64 = 100.0;

pub(crate) fn default_advance_step() -> f64 {
    DEFAULT_ADVANCE_STEP
}
