//! Container encodings for serialized key material.

use core::fmt::{self, Display};
use core::str::FromStr;

use crate::core::error::KeyFormatError;
use crate::core::label::find_by_label;

/// Container syntax used for serialized key bytes.
///
/// Membership is closed; two values are equal only when they carry the same
/// tag. The label returned by [`Encoding::label`] is informational.
///
/// # Example
///
/// ```rust
/// use keyfmt::Encoding;
///
/// assert_eq!(Encoding::X962.label(), "ANSI X9.62");
/// assert_eq!(Encoding::try_from("S/MIME"), Ok(Encoding::SMIME));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// PEM armored text.
    PEM,
    /// Binary DER.
    DER,
    /// OpenSSH key file or `authorized_keys` line.
    OpenSSH,
    /// Raw key bytes without a container.
    Raw,
    /// ANSI X9.62 point encoding.
    X962,
    /// S/MIME.
    SMIME,
}

impl Encoding {
    /// Every encoding, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::PEM,
        Self::DER,
        Self::OpenSSH,
        Self::Raw,
        Self::X962,
        Self::SMIME,
    ];

    /// Returns the human-readable label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PEM => "PEM",
            Self::DER => "DER",
            Self::OpenSSH => "OpenSSH",
            Self::Raw => "Raw",
            Self::X962 => "ANSI X9.62",
            Self::SMIME => "S/MIME",
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for Encoding {
    type Error = KeyFormatError;

    fn try_from(label: &str) -> Result<Self, Self::Error> {
        find_by_label(Self::ALL, Self::label, "Encoding", label)
    }
}

impl FromStr for Encoding {
    type Err = KeyFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
