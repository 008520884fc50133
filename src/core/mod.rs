//! Core key serialization configuration.
//!
//! - [`encoding`] - Container encodings (PEM, DER, OpenSSH, ...)
//! - [`format`] - Private, public and parameter formats
//! - [`error`] - Error types for configuration failures
//! - [`types`] - Passwords and encryption descriptors
//! - [`builder`] - Tuned encryption builder
//! - [`policy`] - Reusable export policies

pub mod builder;
pub mod encoding;
pub mod error;
pub mod format;
mod label;
pub mod policy;
pub mod types;

// Re-export commonly used items
pub use error::{ErrorKind, KeyFormatError, KeyFormatResult};
