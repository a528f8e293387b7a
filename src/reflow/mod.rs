//! Paragraph reflow: wrapping single-line text to a width and merging
//! wrapped text back into a single line.
//!
//! Positions and widths are byte counts. Only ASCII characters take part in
//! whitespace matching, so every cut lands on a character boundary.

mod unwrap;
mod wrap;

use serde::{Deserialize, Serialize};

pub use unwrap::unwrap;
pub use wrap::wrap;

/// Whitespace used by [`wrap`] when no other set is given.
pub const DEFAULT_WHITESPACE: &str = " \t\r";

/// Width used by [`WrapOptions::default`].
pub const DEFAULT_WIDTH: usize = 80;

/// Set of ASCII bytes that may be turned into line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhitespaceSet {
    bits: u128,
}

impl WhitespaceSet {
    /// Builds a set from the ASCII characters of `chars`; others are ignored.
    pub fn new(chars: &str) -> Self {
        let bits = chars
            .bytes()
            .filter(u8::is_ascii)
            .fold(0u128, |bits, b| bits | (1u128 << b));
        Self { bits }
    }

    /// True if `b` is one of the set's ASCII bytes.
    #[inline]
    pub fn contains(&self, b: u8) -> bool {
        b.is_ascii() && self.bits & (1u128 << b) != 0
    }
}

impl Default for WhitespaceSet {
    fn default() -> Self {
        Self::new(DEFAULT_WHITESPACE)
    }
}

/// Wrapping parameters, loadable from a host application's config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapOptions {
    pub width: usize,
    pub whitespace: String,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            whitespace: DEFAULT_WHITESPACE.to_string(),
        }
    }
}

impl WrapOptions {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Wraps `text` with these options. See [`wrap`].
    pub fn wrap(&self, text: &str) -> String {
        wrap(text, self.width, &self.whitespace)
    }
}
