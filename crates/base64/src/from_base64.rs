//! Allocating base64 decoder.

use crate::decode::decode_forward;
use crate::sizes::decoded_capacity;

/// Decodes base64 text into a new vector.
///
/// Accepts either alphabet, skips foreign bytes and never fails; see
/// [`decode`](crate::decode) for the exact rules.
///
/// # Example
///
/// ```
/// use lenient_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8g\nd29ybGQ="), b"hello world");
/// assert_eq!(from_base64(b"-_8"), [0xfb, 0xff]);
/// ```
pub fn from_base64(encoded: impl AsRef<[u8]>) -> Vec<u8> {
    let encoded = encoded.as_ref();
    let mut buf = vec![0u8; decoded_capacity(encoded.len())];
    let scan = decode_forward(&mut buf, encoded.len(), |_, i| encoded[i]);
    buf.truncate(scan.written);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(from_base64(""), b"");
    }

    #[test]
    fn test_entirely_invalid() {
        assert_eq!(from_base64("!!! \r\n ***"), b"");
    }

    #[test]
    fn test_mixed_alphabets() {
        assert_eq!(from_base64("+/8="), [0xfb, 0xff]);
        assert_eq!(from_base64("-_8="), [0xfb, 0xff]);
        assert_eq!(from_base64("+_-/"), from_base64("-/+_"));
    }
}
