//! Structural formats of encoded key material.
//!
//! [`PrivateFormat`] carries the one capability in this module: only
//! [`PrivateFormat::OpenSSH`] can hand out an [`EncryptionBuilder`], since
//! OpenSSH private keys use their own tunable bcrypt-pbkdf scheme that
//! PKCS#8 and traditional OpenSSL keys do not share.

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::core::builder::EncryptionBuilder;
use crate::core::error::{KeyFormatError, KeyFormatResult};
use crate::core::label::find_by_label;

// =============================================================================
// PrivateFormat
// =============================================================================

/// Layout of serialized private key material.
///
/// # Example
///
/// ```rust
/// use keyfmt::{ErrorKind, PrivateFormat};
///
/// let builder = PrivateFormat::OpenSSH.encryption_builder();
/// assert!(builder.is_ok());
///
/// let err = PrivateFormat::PKCS8.encryption_builder().unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidState);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrivateFormat {
    /// PKCS#8 `PrivateKeyInfo` / `EncryptedPrivateKeyInfo`.
    PKCS8,
    /// Algorithm-specific legacy OpenSSL layout (PKCS#1, SEC1, ...).
    TraditionalOpenSSL,
    /// Raw private key bytes.
    Raw,
    /// `openssh-key-v1` private key container.
    OpenSSH,
}

impl PrivateFormat {
    /// Every private format, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::PKCS8,
        Self::TraditionalOpenSSL,
        Self::Raw,
        Self::OpenSSH,
    ];

    /// Returns the human-readable label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PKCS8 => "PKCS8",
            Self::TraditionalOpenSSL => "TraditionalOpenSSL",
            Self::Raw => "Raw",
            Self::OpenSSH => "OpenSSH",
        }
    }

    /// Returns `true` if this format can produce an [`EncryptionBuilder`].
    #[must_use]
    pub const fn supports_encryption_builder(self) -> bool {
        match self {
            Self::OpenSSH => true,
            Self::PKCS8 | Self::TraditionalOpenSSL | Self::Raw => false,
        }
    }

    /// Returns a builder for tuned password encryption in this format.
    ///
    /// # Errors
    ///
    /// Returns [`KeyFormatError::UnsupportedFormat`] unless `self` is
    /// [`PrivateFormat::OpenSSH`].
    pub fn encryption_builder(self) -> KeyFormatResult<EncryptionBuilder> {
        if !self.supports_encryption_builder() {
            tracing::debug!(format = %self, "encryption builder refused");
            return Err(KeyFormatError::UnsupportedFormat {
                required: Self::OpenSSH,
            });
        }
        Ok(EncryptionBuilder::new(self))
    }
}

impl Display for PrivateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for PrivateFormat {
    type Error = KeyFormatError;

    fn try_from(label: &str) -> Result<Self, Self::Error> {
        find_by_label(Self::ALL, Self::label, "PrivateFormat", label)
    }
}

impl FromStr for PrivateFormat {
    type Err = KeyFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

// =============================================================================
// PublicFormat
// =============================================================================

/// Layout of serialized public key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PublicFormat {
    /// X.509 `SubjectPublicKeyInfo`.
    SubjectPublicKeyInfo,
    /// Raw PKCS#1 `RSAPublicKey`.
    PKCS1,
    /// OpenSSH public key line.
    OpenSSH,
    /// Raw public key bytes.
    Raw,
    /// X9.62 compressed EC point.
    CompressedPoint,
    /// X9.62 uncompressed EC point.
    UncompressedPoint,
}

impl PublicFormat {
    /// Every public format, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::SubjectPublicKeyInfo,
        Self::PKCS1,
        Self::OpenSSH,
        Self::Raw,
        Self::CompressedPoint,
        Self::UncompressedPoint,
    ];

    /// Returns the human-readable label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SubjectPublicKeyInfo => "X.509 subjectPublicKeyInfo with PKCS#1",
            Self::PKCS1 => "Raw PKCS#1",
            Self::OpenSSH => "OpenSSH",
            Self::Raw => "Raw",
            Self::CompressedPoint => "X9.62 Compressed Point",
            Self::UncompressedPoint => "X9.62 Uncompressed Point",
        }
    }
}

impl Display for PublicFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for PublicFormat {
    type Error = KeyFormatError;

    fn try_from(label: &str) -> Result<Self, Self::Error> {
        find_by_label(Self::ALL, Self::label, "PublicFormat", label)
    }
}

impl FromStr for PublicFormat {
    type Err = KeyFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

// =============================================================================
// ParameterFormat
// =============================================================================

/// Layout of serialized domain parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterFormat {
    /// PKCS#3 `DHParameter`.
    PKCS3,
}

impl ParameterFormat {
    /// Every parameter format.
    pub const ALL: &'static [Self] = &[Self::PKCS3];

    /// Returns the human-readable label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PKCS3 => "PKCS3",
        }
    }
}

impl Display for ParameterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for ParameterFormat {
    type Error = KeyFormatError;

    fn try_from(label: &str) -> Result<Self, Self::Error> {
        find_by_label(Self::ALL, Self::label, "ParameterFormat", label)
    }
}

impl FromStr for ParameterFormat {
    type Err = KeyFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
