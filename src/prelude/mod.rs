//! Ergonomic imports for key serialization configuration.
//!
//! # Usage
//!
//! ```rust
//! use keyfmt::prelude::*;
//!
//! let enc = PrivateFormat::OpenSSH
//!     .encryption_builder()?
//!     .kdf_rounds(64)?
//!     .build(b"password")?;
//! assert!(matches!(enc, KeySerializationEncryption::Tuned(_)));
//! # Ok::<(), KeyFormatError>(())
//! ```

pub use crate::core::builder::EncryptionBuilder;
pub use crate::core::encoding::Encoding;
pub use crate::core::error::{ErrorKind, KeyFormatError, KeyFormatResult};
pub use crate::core::format::{ParameterFormat, PrivateFormat, PublicFormat};
pub use crate::core::policy::EncryptionPolicy;
pub use crate::core::types::{KeySerializationEncryption, Password, TunedEncryption};
