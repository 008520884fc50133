//! Builder for tuned private key encryption.
//!
//! An [`EncryptionBuilder`] is obtained from
//! [`PrivateFormat::encryption_builder`] and is a `Copy` value: every tuning
//! call returns a new builder and leaves the receiver untouched, so a
//! partially configured builder can be shared as a template.
//!
//! # Example
//!
//! ```rust
//! use keyfmt::PrivateFormat;
//!
//! let base = PrivateFormat::OpenSSH.encryption_builder()?;
//!
//! // Branch two configurations from the same base.
//! let fast = base.kdf_rounds(16)?;
//! let slow = base.kdf_rounds(128)?;
//!
//! assert_eq!(fast.build(b"password")?.kdf_rounds(), Some(16));
//! assert_eq!(slow.build(b"password")?.kdf_rounds(), Some(128));
//! assert_eq!(base.build(b"password")?.kdf_rounds(), None);
//! # Ok::<(), keyfmt::KeyFormatError>(())
//! ```

use crate::core::error::{KeyFormatError, KeyFormatResult};
use crate::core::format::PrivateFormat;
use crate::core::types::{KeySerializationEncryption, Password, TunedEncryption};

/// Immutable assembler for [`KeySerializationEncryption::Tuned`] descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncryptionBuilder {
    format: PrivateFormat,
    kdf_rounds: Option<u32>,
}

impl EncryptionBuilder {
    /// Only reachable through [`PrivateFormat::encryption_builder`].
    pub(crate) const fn new(format: PrivateFormat) -> Self {
        Self {
            format,
            kdf_rounds: None,
        }
    }

    /// Returns the private format this builder targets.
    #[must_use]
    pub const fn format(&self) -> PrivateFormat {
        self.format
    }

    /// Returns the configured KDF rounds, if any.
    #[must_use]
    pub const fn kdf_rounds_value(&self) -> Option<u32> {
        self.kdf_rounds
    }

    /// Returns a new builder with the KDF rounds (cost factor) set.
    ///
    /// Rounds may be set once per chain. The receiver is not modified.
    ///
    /// # Errors
    ///
    /// - [`KeyFormatError::KdfRoundsAlreadySet`] if this builder already has rounds
    /// - [`KeyFormatError::InvalidKdfRounds`] if `rounds` is zero
    ///
    /// The already-set check runs first: a builder with rounds reports
    /// [`KeyFormatError::KdfRoundsAlreadySet`] even when `rounds` is zero.
    pub fn kdf_rounds(self, rounds: u32) -> KeyFormatResult<Self> {
        if self.kdf_rounds.is_some() {
            tracing::debug!(format = %self.format, "kdf_rounds set twice");
            return Err(KeyFormatError::KdfRoundsAlreadySet);
        }
        if rounds == 0 {
            tracing::debug!(format = %self.format, "kdf_rounds must be positive");
            return Err(KeyFormatError::InvalidKdfRounds);
        }
        Ok(Self {
            kdf_rounds: Some(rounds),
            ..self
        })
    }

    /// Finalizes a tuned descriptor protected by `password`.
    ///
    /// The builder stays usable; calling `build` again with another password
    /// yields an independent descriptor with the same tuning.
    ///
    /// # Errors
    ///
    /// Returns [`KeyFormatError::EmptyPassword`] if `password` is empty.
    pub fn build(&self, password: &[u8]) -> KeyFormatResult<KeySerializationEncryption> {
        let password = Password::try_from(password)?;
        tracing::trace!(
            format = %self.format,
            kdf_rounds = ?self.kdf_rounds,
            password_len = password.as_bytes().len(),
            "tuned encryption"
        );
        Ok(KeySerializationEncryption::Tuned(TunedEncryption::new(
            self.format,
            password,
            self.kdf_rounds,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    fn openssh() -> EncryptionBuilder {
        EncryptionBuilder::new(PrivateFormat::OpenSSH)
    }

    #[test]
    fn test_build_without_rounds() -> KeyFormatResult<()> {
        let enc = openssh().build(b"password")?;
        match enc {
            KeySerializationEncryption::Tuned(tuned) => {
                assert_eq!(tuned.format(), PrivateFormat::OpenSSH);
                assert_eq!(tuned.password(), b"password");
                assert_eq!(tuned.kdf_rounds(), None);
            }
            other => panic!("expected tuned encryption, got {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_build_with_rounds() -> KeyFormatResult<()> {
        let enc = openssh().kdf_rounds(12)?.build(b"password")?;
        assert_eq!(enc.kdf_rounds(), Some(12));
        assert_eq!(enc.format(), Some(PrivateFormat::OpenSSH));
        Ok(())
    }

    #[test]
    fn test_rounds_set_twice_in_chain() -> KeyFormatResult<()> {
        let err = openssh()
            .kdf_rounds(12)?
            .kdf_rounds(12)
            .expect_err("second kdf_rounds call");
        assert_eq!(err, KeyFormatError::KdfRoundsAlreadySet);
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(err.to_string(), "kdf_rounds already set");
        Ok(())
    }

    #[test]
    fn test_rounds_set_twice_on_same_instance() -> KeyFormatResult<()> {
        let rounded = openssh().kdf_rounds(12)?;
        assert!(rounded.kdf_rounds(20).is_err());
        assert!(rounded.kdf_rounds(30).is_err());
        // The failed calls did not disturb the configured value.
        assert_eq!(rounded.kdf_rounds_value(), Some(12));
        Ok(())
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let err = openssh().kdf_rounds(0).expect_err("zero rounds");
        assert_eq!(err, KeyFormatError::InvalidKdfRounds);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_already_set_reported_before_zero() -> KeyFormatResult<()> {
        let err = openssh()
            .kdf_rounds(7)?
            .kdf_rounds(0)
            .expect_err("rounds already set");
        assert_eq!(err, KeyFormatError::KdfRoundsAlreadySet);
        Ok(())
    }

    #[test]
    fn test_receiver_unchanged() -> KeyFormatResult<()> {
        let base = openssh();
        let rounded = base.kdf_rounds(10)?;
        assert_eq!(base.kdf_rounds_value(), None);
        assert_eq!(rounded.kdf_rounds_value(), Some(10));
        assert_ne!(base, rounded);
        Ok(())
    }

    #[test]
    fn test_branches_are_independent() -> KeyFormatResult<()> {
        let base = openssh();
        let b1 = base.kdf_rounds(10)?;
        let b2 = base.kdf_rounds(20)?;

        let e1 = b1.build(b"password")?;
        let e2 = b2.build(b"password")?;

        assert_eq!(e1.kdf_rounds(), Some(10));
        assert_eq!(e2.kdf_rounds(), Some(20));
        assert_ne!(e1, e2);
        Ok(())
    }

    #[test]
    fn test_build_is_repeatable() -> KeyFormatResult<()> {
        let builder = openssh().kdf_rounds(24)?;
        let e1 = builder.build(b"first")?;
        let e2 = builder.build(b"second")?;

        assert_eq!(e1.password(), Some(&b"first"[..]));
        assert_eq!(e2.password(), Some(&b"second"[..]));
        assert_eq!(e1.kdf_rounds(), e2.kdf_rounds());
        assert_eq!(e1.format(), e2.format());
        Ok(())
    }

    #[test]
    fn test_build_empty_password() -> KeyFormatResult<()> {
        for builder in [openssh(), openssh().kdf_rounds(5)?] {
            let err = builder.build(b"").expect_err("empty password");
            assert_eq!(err, KeyFormatError::EmptyPassword);
            assert_eq!(err.to_string(), "Password must be 1 or more bytes.");
        }
        Ok(())
    }
}
