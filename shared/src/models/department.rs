//! Department Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Restaurant department, each with its own independent employee list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "cuisine")]
    Kitchen,
    #[serde(rename = "chawarma")]
    Shawarma,
    #[serde(rename = "pizza")]
    Pizza,
    #[serde(rename = "serveurs")]
    Servers,
}

impl Default for Department {
    fn default() -> Self {
        Self::Kitchen
    }
}

impl Department {
    /// All departments in tab order
    pub const ALL: [Department; 4] = [
        Department::Kitchen,
        Department::Shawarma,
        Department::Pizza,
        Department::Servers,
    ];

    /// Key under which the department is persisted
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Kitchen => "cuisine",
            Self::Shawarma => "chawarma",
            Self::Pizza => "pizza",
            Self::Servers => "serveurs",
        }
    }

    /// Tab label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Kitchen => "Cuisine",
            Self::Shawarma => "Chawarma",
            Self::Pizza => "Pizza",
            Self::Servers => "Serveurs",
        }
    }

    /// Role noun used in the "add employee" title ("Ajouter un cuisinier")
    pub const fn role_noun(&self) -> &'static str {
        match self {
            Self::Kitchen => "un cuisinier",
            Self::Shawarma => "un chawarmiste",
            Self::Pizza => "un pizzario",
            Self::Servers => "un serveur",
        }
    }

    /// Look up a department by its persisted key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a department name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown department: {0}")]
pub struct UnknownDepartment(pub String);

impl FromStr for Department {
    type Err = UnknownDepartment;

    /// Accepts English names as well as the persisted keys, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "kitchen" | "cuisine" => Ok(Self::Kitchen),
            "shawarma" | "chawarma" => Ok(Self::Shawarma),
            "pizza" => Ok(Self::Pizza),
            "servers" | "serveurs" => Ok(Self::Servers),
            _ => Err(UnknownDepartment(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_uses_persisted_keys() {
        for department in Department::ALL {
            let json = serde_json::to_string(&department).unwrap();
            assert_eq!(json, format!("\"{}\"", department.key()));
        }
    }

    #[test]
    fn test_from_str_accepts_both_spellings() {
        assert_eq!("kitchen".parse::<Department>().unwrap(), Department::Kitchen);
        assert_eq!("Cuisine".parse::<Department>().unwrap(), Department::Kitchen);
        assert_eq!("chawarma".parse::<Department>().unwrap(), Department::Shawarma);
        assert_eq!(" SERVERS ".parse::<Department>().unwrap(), Department::Servers);
        assert!("bar".parse::<Department>().is_err());
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Department::from_key("serveurs"), Some(Department::Servers));
        assert_eq!(Department::from_key("servers"), None);
    }
}
