//! Shared backward lookup table.

use crate::constants::{ALPHABET, ALPHABET_URL, INVALID, PAD, PAD_VALUE};

/// Maps every byte value to its 6-bit symbol value.
///
/// Both alphabets are merged into one table: `+`/`-` map to 62 and `/`/`_`
/// map to 63. `=` maps to 64. Any other byte maps to [`INVALID`].
pub(crate) static DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET[i] as usize] = i as u8;
        table[ALPHABET_URL[i] as usize] = i as u8;
        i += 1;
    }
    table[PAD as usize] = PAD_VALUE;
    table
};

/// Returns the 6-bit value of a base64 symbol.
///
/// Padding yields 0, so a padded group decodes with the same bit math as a
/// full one. Unrecognized bytes also yield 0; callers filter those first
/// with [`is_base64_symbol`].
#[inline]
pub fn sextet(byte: u8) -> u8 {
    DECODE_TABLE[byte as usize] & 63
}

/// Whether the decoder consumes `byte` as a symbol (either alphabet or `=`).
#[inline]
pub fn is_base64_symbol(byte: u8) -> bool {
    DECODE_TABLE[byte as usize] != INVALID
}

#[inline]
pub(crate) fn is_pad(byte: u8) -> bool {
    DECODE_TABLE[byte as usize] == PAD_VALUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_symbols_are_recognized() {
        assert!(is_base64_symbol(b'A'));
        assert_eq!(sextet(b'A'), 0);
    }

    #[test]
    fn test_both_alphabets_share_values() {
        assert_eq!(sextet(b'+'), 62);
        assert_eq!(sextet(b'-'), 62);
        assert_eq!(sextet(b'/'), 63);
        assert_eq!(sextet(b'_'), 63);
        assert_eq!(sextet(b'a'), 26);
        assert_eq!(sextet(b'9'), 61);
    }

    #[test]
    fn test_padding() {
        assert!(is_base64_symbol(b'='));
        assert!(is_pad(b'='));
        assert_eq!(sextet(b'='), 0);
    }

    #[test]
    fn test_foreign_bytes() {
        for byte in [b'\n', b'\r', b' ', b'\t', b',', b'.', b'!', 0u8, 0x80, 0xFF] {
            assert!(!is_base64_symbol(byte), "byte {byte:#04x} should be skipped");
        }
        let recognized = (0..=255u8).filter(|&b| is_base64_symbol(b)).count();
        assert_eq!(recognized, 64 + 2 + 1);
    }
}
