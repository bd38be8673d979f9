//! Buffer sizing rules.

use crate::Base64Error;

/// Exact number of characters produced by encoding `len` bytes.
///
/// ```
/// use lenient_base64::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(6), 8);
/// ```
pub const fn encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}

/// Minimum destination size for decoding `len` characters.
///
/// Covers every full group, a partial trailing group and the terminating
/// zero byte.
pub const fn decoded_capacity(len: usize) -> usize {
    (len / 4) * 3 + 3
}

pub(crate) fn ensure_capacity(required: usize, actual: usize) -> Result<(), Base64Error> {
    if actual < required {
        tracing::debug!(required, actual, "base64 destination buffer too small");
        return Err(Base64Error::OutputTooSmall { required, actual });
    }
    Ok(())
}
