//! Core module - configuration, persistence and the roster session
//!
//! # Module structure
//!
//! - [`Config`] - environment configuration
//! - [`persistence`] - load / save of the roster blob
//! - [`Session`] - live snapshot, active department, pending confirmations

pub mod config;
pub mod persistence;
pub mod session;

pub use config::{Config, DEFAULT_STORAGE_KEY};
pub use persistence::{CORRUPT_SUFFIX, LoadError, decode_roster, load_roster, save_roster};
pub use session::Session;
