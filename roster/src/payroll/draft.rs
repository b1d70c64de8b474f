//! Rates being typed into the add / edit dialog

use shared::models::{Employee, PayRates};

/// Amount added by the "+100" button next to a rate field
pub const RATE_STEP: f64 = 100.0;

/// Rates offered when the add dialog opens
pub const NEW_EMPLOYEE_RATE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateField {
    Morning,
    Evening,
}

/// Morning and evening rates under edition; the double rate is display-only
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateDraft {
    pub morning: f64,
    pub evening: f64,
}

impl RateDraft {
    pub fn for_new() -> Self {
        Self {
            morning: NEW_EMPLOYEE_RATE,
            evening: NEW_EMPLOYEE_RATE,
        }
    }

    /// Pre-filled from the record being edited
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            morning: employee.pay_rates.morning,
            evening: employee.pay_rates.evening,
        }
    }

    pub fn increment(&mut self, field: RateField) {
        match field {
            RateField::Morning => self.morning += RATE_STEP,
            RateField::Evening => self.evening += RATE_STEP,
        }
    }

    pub fn double(&self) -> f64 {
        self.morning + self.evening
    }

    pub fn to_rates(&self) -> PayRates {
        PayRates::derive(self.morning, self.evening)
    }
}

impl Default for RateDraft {
    fn default() -> Self {
        Self::for_new()
    }
}
