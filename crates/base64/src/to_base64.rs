//! Allocating base64 encoders.

use crate::alphabet::Alphabet;
use crate::encode::encode_backward;
use crate::sizes::encoded_len;

fn to_string(uint8: &[u8], alphabet: Alphabet) -> String {
    let mut buf = vec![0u8; encoded_len(uint8.len())];
    let len = encode_backward(&mut buf, uint8.len(), alphabet.symbols(), |_, i| uint8[i]);
    buf[..len].iter().copied().map(char::from).collect()
}

/// Encodes a byte slice to a standard base64 string.
///
/// # Example
///
/// ```
/// use lenient_base64::to_base64;
///
/// let encoded = to_base64(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    to_string(uint8, Alphabet::Standard)
}

/// Encodes a byte slice to a URL-safe base64 string, with padding.
///
/// # Example
///
/// ```
/// use lenient_base64::to_base64_url;
///
/// assert_eq!(to_base64_url(&[0xfb, 0xff, 0xbf]), "-_-_");
/// ```
pub fn to_base64_url(uint8: &[u8]) -> String {
    to_string(uint8, Alphabet::UrlSafe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(to_base64(b""), "");
        assert_eq!(to_base64_url(b""), "");
    }

    #[test]
    fn test_hello_world() {
        assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
    }

    #[test]
    fn test_url_alphabet() {
        assert_eq!(to_base64(&[0xfb, 0xff]), "+/8=");
        assert_eq!(to_base64_url(&[0xfb, 0xff]), "-_8=");
    }

    #[test]
    fn test_binary_data() {
        let data: Vec<u8> = (0..=255).collect();
        let encoded = to_base64(&data);
        assert_eq!(encoded.len(), 344);
        for c in encoded.chars() {
            assert!(
                c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=',
                "Invalid base64 character: {}",
                c
            );
        }
    }
}
