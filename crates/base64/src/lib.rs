//! Base64 encoding and decoding into caller-owned buffers.
//!
//! This crate provides:
//! - Standard (`+/`) and URL-safe (`-_`) encoding, always padded
//! - In-place encoding: the raw bytes and the encoded text share one buffer
//! - Lenient decoding that accepts both alphabets at once, skips bytes that
//!   are not base64 (line breaks, spaces, anything else) and never fails on
//!   malformed input
//! - In-place decoding
//!
//! Nothing is allocated on the buffer-based paths. Capacity is checked up
//! front: [`encoded_len`] and [`decoded_capacity`] give the sizes to reserve.
//!
//! # Example
//!
//! ```
//! use lenient_base64::{decode, decoded_capacity, encode, encoded_len};
//!
//! let data = b"any carnal pleasure.";
//! let mut text = vec![0u8; encoded_len(data.len())];
//! let len = encode(&mut text, data).unwrap();
//! assert_eq!(&text[..len], b"YW55IGNhcm5hbCBwbGVhc3VyZS4=");
//!
//! let mut raw = vec![0u8; decoded_capacity(len)];
//! let n = decode(&mut raw, &text[..len]).unwrap();
//! assert_eq!(&raw[..n], data);
//! ```

mod alphabet;
mod constants;
mod decode;
mod decode_table;
mod encode;
mod from_base64;
mod sizes;
mod to_base64;

pub use alphabet::Alphabet;
pub use constants::{ALPHABET, ALPHABET_URL, PAD};
pub use decode::{decode, decode_in_place};
pub use decode_table::{is_base64_symbol, sextet};
pub use encode::{encode, encode_in_place, encode_url, encode_with};
pub use from_base64::from_base64;
pub use sizes::{decoded_capacity, encoded_len};
pub use to_base64::{to_base64, to_base64_url};

use thiserror::Error;

/// Error type for base64 operations.
///
/// Only buffer sizing can fail; input content never does.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The destination is shorter than the operation may write.
    #[error("output buffer too small: {required} bytes required, {actual} available")]
    OutputTooSmall { required: usize, actual: usize },
    /// In-place encoding was asked for more bytes than the buffer holds.
    #[error("cannot encode {len} bytes from a buffer of {capacity}")]
    LengthOutOfBounds { len: usize, capacity: usize },
    /// The alphabet name is neither standard nor URL-safe.
    #[error("unknown base64 alphabet: {0:?}")]
    UnknownAlphabet(String),
}
