//! Alphabet selection for the encoder.

use std::fmt;
use std::str::FromStr;

use crate::constants::{ALPHABET, ALPHABET_URL};
use crate::Base64Error;

/// Which 64-symbol table the encoder writes with.
///
/// Decoding does not need a selector: the backward table recognizes both
/// alphabets at once.
///
/// # Example
///
/// ```
/// use lenient_base64::Alphabet;
///
/// let alphabet: Alphabet = "base64url".parse().unwrap();
/// assert_eq!(alphabet, Alphabet::UrlSafe);
/// assert_eq!(alphabet.symbols()[62], b'-');
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Alphabet {
    /// `A-Z a-z 0-9 + /`
    #[default]
    Standard,
    /// `A-Z a-z 0-9 - _`
    UrlSafe,
}

impl Alphabet {
    /// The forward table: 64 symbols followed by the padding character.
    pub const fn symbols(self) -> &'static [u8; 65] {
        match self {
            Alphabet::Standard => ALPHABET,
            Alphabet::UrlSafe => ALPHABET_URL,
        }
    }

    /// Canonical name, as accepted by [`FromStr`] and written by `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            Alphabet::Standard => "standard",
            Alphabet::UrlSafe => "url-safe",
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Alphabet {
    type Err = Base64Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "std" | "base64" => Ok(Alphabet::Standard),
            "url" | "url-safe" | "url_safe" | "urlsafe" | "base64url" => Ok(Alphabet::UrlSafe),
            _ => Err(Base64Error::UnknownAlphabet(s.to_string())),
        }
    }
}
