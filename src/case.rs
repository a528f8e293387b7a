//! Case policy used by every comparison in the crate.

use serde::{Deserialize, Serialize};

/// How two characters are compared. Byte-wise ASCII only: non-ASCII bytes
/// always compare exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    #[default]
    Sensitive,
    Insensitive,
}

impl Case {
    /// Compare two bytes under this policy.
    #[inline]
    pub fn eq_byte(self, a: u8, b: u8) -> bool {
        match self {
            Case::Sensitive => a == b,
            Case::Insensitive => a.eq_ignore_ascii_case(&b),
        }
    }

    /// Compare two byte slices of equal length under this policy.
    /// Slices of different length are never equal.
    pub fn eq_bytes(self, a: &[u8], b: &[u8]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| self.eq_byte(x, y))
    }
}

/// `true` means case-sensitive.
impl From<bool> for Case {
    fn from(sensitive: bool) -> Self {
        if sensitive {
            Case::Sensitive
        } else {
            Case::Insensitive
        }
    }
}
