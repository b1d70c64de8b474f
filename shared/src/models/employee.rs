//! Employee Model

use super::week::Week;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shift worked on a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftType {
    /// Not working. Older records may hold `"N/A"` for this.
    #[serde(rename = "", alias = "N/A")]
    None,
    #[serde(rename = "Matin")]
    Morning,
    #[serde(rename = "Soir")]
    Evening,
    #[serde(rename = "Doublé")]
    Double,
}

impl Default for ShiftType {
    fn default() -> Self {
        Self::None
    }
}

impl ShiftType {
    /// Option label in the shift selector
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "-",
            Self::Morning => "Matin",
            Self::Evening => "Soir",
            Self::Double => "Doublé",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shift type: {0}")]
pub struct UnknownShiftType(pub String);

impl FromStr for ShiftType {
    type Err = UnknownShiftType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "-" | "none" | "n/a" => Ok(Self::None),
            "morning" | "matin" => Ok(Self::Morning),
            "evening" | "soir" => Ok(Self::Evening),
            "double" | "doublé" | "doublee" => Ok(Self::Double),
            _ => Err(UnknownShiftType(s.to_string())),
        }
    }
}

/// Pay per shift type
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PayRates {
    pub morning: f64,
    pub evening: f64,
    /// Always `morning + evening`; see [`PayRates::derive`]
    pub double: f64,
}

impl PayRates {
    /// Rates with the double rate derived from the other two
    pub fn derive(morning: f64, evening: f64) -> Self {
        Self {
            morning,
            evening,
            double: morning + evening,
        }
    }
}

/// Employee record as shown in the weekly grid and persisted in storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub pay_rates: PayRates,
    pub shifts: Week<ShiftType>,
    /// Cash advances already handed out, per day
    #[serde(rename = "acomptes")]
    pub advances: Week<f64>,
    /// Net pay for the week. Derived; refreshed by every roster operation.
    pub total_pay: f64,
}

impl Employee {
    /// New employee with an empty week
    pub fn new(id: impl Into<String>, name: impl Into<String>, pay_rates: PayRates) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pay_rates,
            shifts: Week::default(),
            advances: Week::default(),
            total_pay: 0.0,
        }
    }
}
