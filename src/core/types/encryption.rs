//! KeySerializationEncryption - how a serialized private key is protected.
//!
//! The descriptor is a plain sum type. Encoding engines match on it
//! exhaustively to choose a cipher and KDF, reading the password and the
//! optional rounds count from the password-carrying variants.

use crate::core::error::KeyFormatResult;
use crate::core::format::PrivateFormat;
use crate::core::types::Password;

/// Describes whether and how a private key is encrypted at rest.
///
/// # Example
///
/// ```rust
/// use keyfmt::{KeySerializationEncryption, PrivateFormat};
///
/// let plain = KeySerializationEncryption::no_encryption();
/// assert!(!plain.is_encrypted());
///
/// let best = KeySerializationEncryption::best_available(b"password")
///     .expect("non-empty password");
/// assert_eq!(best.password(), Some(&b"password"[..]));
///
/// let tuned = PrivateFormat::OpenSSH
///     .encryption_builder()
///     .and_then(|b| b.kdf_rounds(32))
///     .and_then(|b| b.build(b"password"))
///     .expect("valid configuration");
/// assert_eq!(tuned.kdf_rounds(), Some(32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum KeySerializationEncryption {
    /// The key is written in plaintext.
    #[default]
    NoEncryption,

    /// The strongest cipher and KDF the encoder supports for the target format.
    BestAvailable {
        /// Password the key is encrypted under.
        password: Password,
    },

    /// Password encryption with explicit tuning, produced by
    /// [`EncryptionBuilder::build`](crate::EncryptionBuilder::build).
    Tuned(TunedEncryption),
}

impl KeySerializationEncryption {
    /// Returns the descriptor for unencrypted output.
    #[must_use]
    pub const fn no_encryption() -> Self {
        Self::NoEncryption
    }

    /// Returns a best-available descriptor protected by `password`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyFormatError::EmptyPassword`](crate::KeyFormatError::EmptyPassword)
    /// if `password` is empty.
    pub fn best_available(password: &[u8]) -> KeyFormatResult<Self> {
        let password = Password::try_from(password)?;
        tracing::trace!(password_len = password.as_bytes().len(), "best-available encryption");
        Ok(Self::BestAvailable { password })
    }

    /// Returns `true` unless this is [`KeySerializationEncryption::NoEncryption`].
    #[must_use]
    pub const fn is_encrypted(&self) -> bool {
        !matches!(self, Self::NoEncryption)
    }

    /// Returns the password for password-carrying variants.
    #[must_use]
    pub fn password(&self) -> Option<&[u8]> {
        match self {
            Self::NoEncryption => None,
            Self::BestAvailable { password } => Some(password.as_bytes()),
            Self::Tuned(tuned) => Some(tuned.password()),
        }
    }

    /// Returns the KDF rounds count, if one was configured.
    #[must_use]
    pub const fn kdf_rounds(&self) -> Option<u32> {
        match self {
            Self::NoEncryption | Self::BestAvailable { .. } => None,
            Self::Tuned(tuned) => tuned.kdf_rounds(),
        }
    }

    /// Returns the private format a tuned descriptor was built for.
    #[must_use]
    pub const fn format(&self) -> Option<PrivateFormat> {
        match self {
            Self::NoEncryption | Self::BestAvailable { .. } => None,
            Self::Tuned(tuned) => Some(tuned.format()),
        }
    }
}

/// Password encryption with format-specific tuning.
///
/// Only [`EncryptionBuilder::build`](crate::EncryptionBuilder::build) creates
/// this value; it has no mutators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TunedEncryption {
    format: PrivateFormat,
    password: Password,
    kdf_rounds: Option<u32>,
}

impl TunedEncryption {
    pub(crate) fn new(format: PrivateFormat, password: Password, kdf_rounds: Option<u32>) -> Self {
        Self {
            format,
            password,
            kdf_rounds,
        }
    }

    /// Returns the private format this descriptor was built for.
    #[must_use]
    pub const fn format(&self) -> PrivateFormat {
        self.format
    }

    /// Returns the password bytes.
    #[must_use]
    pub fn password(&self) -> &[u8] {
        self.password.as_bytes()
    }

    /// Returns the KDF rounds count, if one was configured.
    #[must_use]
    pub const fn kdf_rounds(&self) -> Option<u32> {
        self.kdf_rounds
    }
}
