//! Data models
//!
//! These types are also the persisted JSON shape: field and variant names
//! follow the keys already present in stored data (`cuisine`, `payRates`,
//! `acomptes`, `"Matin"`, ...).

pub mod department;
pub mod employee;
pub mod roster;
pub mod week;

// Re-exports
pub use department::*;
pub use employee::*;
pub use roster::*;
pub use week::*;
