//! Stored export policies.
//!
//! An [`EncryptionPolicy`] captures the encoding, format and encryption
//! tuning chosen once (typically from configuration) and reused for every
//! key export. With the `serde` feature it can be deserialized directly.
//!
//! # Example
//!
//! ```rust
//! use keyfmt::{Encoding, EncryptionPolicy, PrivateFormat};
//!
//! let policy = EncryptionPolicy::new(Encoding::PEM, PrivateFormat::OpenSSH).with_kdf_rounds(64);
//!
//! let enc = policy.encryption(Some(&b"password"[..]))?;
//! assert_eq!(enc.kdf_rounds(), Some(64));
//! # Ok::<(), keyfmt::KeyFormatError>(())
//! ```

use crate::core::builder::EncryptionBuilder;
use crate::core::encoding::Encoding;
use crate::core::error::{KeyFormatError, KeyFormatResult};
use crate::core::format::PrivateFormat;
use crate::core::types::KeySerializationEncryption;

#[cfg(feature = "serde")]
const fn default_encrypt() -> bool {
    true
}

/// Reusable description of how private keys should be exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncryptionPolicy {
    /// Container syntax for the exported key.
    pub encoding: Encoding,
    /// Private key layout.
    pub format: PrivateFormat,
    /// Whether exported keys are password protected.
    #[cfg_attr(feature = "serde", serde(default = "default_encrypt"))]
    pub encrypt: bool,
    /// KDF rounds; only valid for formats with an encryption builder.
    #[cfg_attr(feature = "serde", serde(default))]
    pub kdf_rounds: Option<u32>,
}

impl EncryptionPolicy {
    /// Creates an encrypting policy with default tuning.
    #[must_use]
    pub const fn new(encoding: Encoding, format: PrivateFormat) -> Self {
        Self {
            encoding,
            format,
            encrypt: true,
            kdf_rounds: None,
        }
    }

    /// Creates a policy that exports keys in plaintext.
    #[must_use]
    pub const fn unencrypted(encoding: Encoding, format: PrivateFormat) -> Self {
        Self {
            encoding,
            format,
            encrypt: false,
            kdf_rounds: None,
        }
    }

    /// Returns this policy with `kdf_rounds` set.
    #[must_use]
    pub const fn with_kdf_rounds(self, rounds: u32) -> Self {
        Self {
            kdf_rounds: Some(rounds),
            ..self
        }
    }

    /// Returns a builder carrying this policy's tuning.
    ///
    /// # Errors
    ///
    /// - [`KeyFormatError::UnsupportedFormat`] if the format has no builder
    /// - [`KeyFormatError::InvalidKdfRounds`] if `kdf_rounds` is zero
    pub fn builder(&self) -> KeyFormatResult<EncryptionBuilder> {
        let builder = self.format.encryption_builder()?;
        match self.kdf_rounds {
            Some(rounds) => builder.kdf_rounds(rounds),
            None => Ok(builder),
        }
    }

    /// Returns the encryption descriptor for one export.
    ///
    /// Unencrypted policies ignore `password`. Otherwise formats with an
    /// encryption builder produce a tuned descriptor and all other formats
    /// produce [`KeySerializationEncryption::BestAvailable`].
    ///
    /// `kdf_rounds` is validated whether or not the policy encrypts.
    ///
    /// # Errors
    ///
    /// - [`KeyFormatError::EmptyPassword`] if encryption is enabled and the
    ///   password is missing or empty
    /// - [`KeyFormatError::UnsupportedFormat`] if `kdf_rounds` is set for a
    ///   format without an encryption builder
    /// - [`KeyFormatError::InvalidKdfRounds`] if `kdf_rounds` is zero
    pub fn encryption(&self, password: Option<&[u8]>) -> KeyFormatResult<KeySerializationEncryption> {
        let builder = self.kdf_rounds.map(|_| self.builder()).transpose()?;
        if !self.encrypt {
            return Ok(KeySerializationEncryption::no_encryption());
        }
        let password = password.ok_or(KeyFormatError::EmptyPassword)?;

        match builder {
            Some(builder) => builder.build(password),
            None if self.format.supports_encryption_builder() => self.builder()?.build(password),
            None => KeySerializationEncryption::best_available(password),
        }
    }
}
