//! Password - validated password bytes for key encryption.
//!
//! Every password-carrying encryption descriptor stores its password as a
//! [`Password`], so the non-empty rule is checked in exactly one place.

use core::fmt::{self, Debug};

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::core::error::{KeyFormatError, KeyFormatResult};

/// A non-empty password used to encrypt serialized private keys.
///
/// # Security
///
/// - Bytes are zeroized on drop
/// - Debug output redacts the password
/// - Equality comparison uses constant-time comparison
///
/// # Example
///
/// ```rust
/// use keyfmt::Password;
///
/// let password = Password::try_from(&b"correct horse"[..]).expect("non-empty");
/// assert_eq!(password.as_bytes(), b"correct horse");
///
/// assert!(Password::try_from(&b""[..]).is_err());
/// ```
///
/// The bytes are only wiped on drop; a live password cannot be emptied.
///
/// ```compile_fail
/// use zeroize::Zeroize;
///
/// let mut password = keyfmt::Password::try_from(&b"pw"[..]).expect("non-empty");
/// password.zeroize();
/// ```
#[derive(Clone)]
pub struct Password {
    bytes: Vec<u8>,
}

impl Password {
    /// Validates and takes ownership of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyFormatError::EmptyPassword`] if `bytes` is empty.
    pub fn new(bytes: Vec<u8>) -> KeyFormatResult<Self> {
        if bytes.is_empty() {
            tracing::debug!("rejected empty password");
            return Err(KeyFormatError::EmptyPassword);
        }
        Ok(Self { bytes })
    }

    /// Returns the password bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl TryFrom<&[u8]> for Password {
    type Error = KeyFormatError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::new(bytes.to_vec())
    }
}

impl TryFrom<Vec<u8>> for Password {
    type Error = KeyFormatError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for Password {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl ZeroizeOnDrop for Password {}

impl Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        if self.bytes.len() != other.bytes.len() {
            return false;
        }
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for Password {}
