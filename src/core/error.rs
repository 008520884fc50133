//! Error types for key serialization configuration.
//!
//! Every error raised here is a programmer error detected while assembling
//! serialization options. Nothing is deferred to encoding time, so each
//! variant maps onto one of two coarse kinds exposed by [`ErrorKind`].

use core::fmt::{self, Display};

use thiserror::Error;

/// Coarse classification of a [`KeyFormatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A supplied value (password, rounds, label) is not acceptable.
    InvalidArgument,
    /// The operation is not allowed given the receiver's current state or tag.
    InvalidState,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => f.write_str("invalid argument"),
            Self::InvalidState => f.write_str("invalid state"),
        }
    }
}

/// Errors that can occur while building key serialization options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyFormatError {
    /// A password-carrying descriptor was given zero bytes.
    #[error("Password must be 1 or more bytes.")]
    EmptyPassword,

    /// The KDF rounds count must be at least one.
    #[error("kdf_rounds must be an integer >= 1")]
    InvalidKdfRounds,

    /// A label did not name any member of the enumeration.
    #[error("Unknown {kind} label: {label}")]
    UnknownLabel {
        /// Name of the enumeration that was searched.
        kind: &'static str,
        /// The rejected label.
        label: String,
    },

    /// An encryption builder was requested from a format without that capability.
    #[error("encryption_builder only supported with PrivateFormat::{required:?}")]
    UnsupportedFormat {
        /// The only format able to produce a builder.
        required: crate::core::format::PrivateFormat,
    },

    /// KDF rounds were already configured on this builder chain.
    #[error("kdf_rounds already set")]
    KdfRoundsAlreadySet,
}

impl KeyFormatError {
    /// Returns the coarse kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyPassword | Self::InvalidKdfRounds | Self::UnknownLabel { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::UnsupportedFormat { .. } | Self::KdfRoundsAlreadySet => ErrorKind::InvalidState,
        }
    }
}

/// Result type alias for key serialization configuration.
pub type KeyFormatResult<T> = Result<T, KeyFormatError>;
