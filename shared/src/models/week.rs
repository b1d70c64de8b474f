//! Working week (Saturday to Thursday)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A working day. Friday is the weekly day off and has no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
}

impl Weekday {
    /// The six working days in display order
    pub const ALL: [Weekday; 6] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
    ];

    /// Persisted key
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
        }
    }

    /// Column header
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Saturday => "Sam",
            Self::Sunday => "Dim",
            Self::Monday => "Lun",
            Self::Tuesday => "Mar",
            Self::Wednesday => "Mer",
            Self::Thursday => "Jeu",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a working day: {0}")]
pub struct UnknownWeekday(pub String);

impl FromStr for Weekday {
    type Err = UnknownWeekday;

    /// Accepts the persisted key or the column label, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.key() == normalized || day.label().to_lowercase() == normalized)
            .ok_or_else(|| UnknownWeekday(s.to_string()))
    }
}

/// One value per working day.
///
/// Every field is required when deserializing, so a partially filled week
/// never reaches the model.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Week<T> {
    pub saturday: T,
    pub sunday: T,
    pub monday: T,
    pub tuesday: T,
    pub wednesday: T,
    pub thursday: T,
}

impl<T> Week<T> {
    /// Build a week by calling `f` for each day
    pub fn from_fn(mut f: impl FnMut(Weekday) -> T) -> Self {
        Self {
            saturday: f(Weekday::Saturday),
            sunday: f(Weekday::Sunday),
            monday: f(Weekday::Monday),
            tuesday: f(Weekday::Tuesday),
            wednesday: f(Weekday::Wednesday),
            thursday: f(Weekday::Thursday),
        }
    }

    pub fn get(&self, day: Weekday) -> &T {
        match day {
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
        }
    }

    pub fn get_mut(&mut self, day: Weekday) -> &mut T {
        match day {
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
        }
    }

    /// Copy of this week with one day replaced
    pub fn with(&self, day: Weekday, value: T) -> Self
    where
        T: Clone,
    {
        let mut week = self.clone();
        *week.get_mut(day) = value;
        week
    }

    /// Days paired with their values, Saturday first
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &T)> {
        Weekday::ALL.into_iter().map(move |day| (day, self.get(day)))
    }
}

impl<T: Clone> Week<T> {
    /// Same value on every day
    pub fn splat(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}
