//! Configuration model for serializing cryptographic key material.
//!
//! This crate defines the values a key encoder consumes: which container
//! encoding and structural format to write, and whether (and how) a private
//! key is encrypted at rest. Invalid combinations are rejected while the
//! configuration is assembled, never at encoding time.
//!
//! # Quick Start
//!
//! ```rust
//! use keyfmt::{KeySerializationEncryption, PrivateFormat};
//!
//! // PKCS#8 and traditional formats: best-available encryption
//! let enc = KeySerializationEncryption::best_available(b"password")?;
//! assert!(enc.is_encrypted());
//!
//! // OpenSSH keys can tune the bcrypt-pbkdf rounds
//! let enc = PrivateFormat::OpenSSH
//!     .encryption_builder()?
//!     .kdf_rounds(100)?
//!     .build(b"password")?;
//! assert_eq!(enc.kdf_rounds(), Some(100));
//! # Ok::<(), keyfmt::KeyFormatError>(())
//! ```
//!
//! # Encryption Descriptors
//!
//! | Variant | Carries | Produced by |
//! |---------|---------|-------------|
//! | `NoEncryption` | nothing | [`KeySerializationEncryption::no_encryption`] |
//! | `BestAvailable` | password | [`KeySerializationEncryption::best_available`] |
//! | `Tuned` | format, password, KDF rounds | [`EncryptionBuilder::build`] |
//!
//! # Features
//!
//! - `prelude` (default) - the [`prelude`] module
//! - `serde` - `Serialize`/`Deserialize` for the enumerations and [`EncryptionPolicy`]
//!
//! # Security
//!
//! - Passwords must be at least one byte
//! - Password bytes are zeroized on drop
//! - Debug output redacts passwords
//! - No unsafe code

#![forbid(unsafe_code)]

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use crate::core::builder::EncryptionBuilder;
pub use crate::core::encoding::Encoding;
pub use crate::core::error::{ErrorKind, KeyFormatError, KeyFormatResult};
pub use crate::core::format::{ParameterFormat, PrivateFormat, PublicFormat};
pub use crate::core::policy::EncryptionPolicy;
pub use crate::core::types::{KeySerializationEncryption, Password, TunedEncryption};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_values_are_send_sync() {
        assert_send_sync::<Encoding>();
        assert_send_sync::<PrivateFormat>();
        assert_send_sync::<PublicFormat>();
        assert_send_sync::<ParameterFormat>();
        assert_send_sync::<Password>();
        assert_send_sync::<KeySerializationEncryption>();
        assert_send_sync::<TunedEncryption>();
        assert_send_sync::<EncryptionBuilder>();
        assert_send_sync::<EncryptionPolicy>();
        assert_send_sync::<KeyFormatError>();
    }

    #[test]
    fn test_builder_shared_across_threads() -> KeyFormatResult<()> {
        let base = PrivateFormat::OpenSSH.encryption_builder()?;
        let handles: Vec<_> = (1..=4u32)
            .map(|rounds| {
                std::thread::spawn(move || {
                    base.kdf_rounds(rounds * 10)
                        .and_then(|b| b.build(b"password"))
                })
            })
            .collect();

        for (rounds, handle) in (1..=4u32).zip(handles) {
            let enc = handle.join().expect("thread panicked")?;
            assert_eq!(enc.kdf_rounds(), Some(rounds * 10));
        }
        assert_eq!(base.kdf_rounds_value(), None);
        Ok(())
    }
}
