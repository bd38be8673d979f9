//! Base64 encoding into caller-supplied buffers.

use crate::alphabet::Alphabet;
use crate::sizes::{encoded_len, ensure_capacity};
use crate::Base64Error;

/// Splits three octets into four sextets.
#[inline]
fn split(o1: u8, o2: u8, o3: u8) -> [u8; 4] {
    [
        o1 >> 2,
        ((o1 & 0b11) << 4) | (o2 >> 4),
        ((o2 & 0b1111) << 2) | (o3 >> 6),
        o3 & 0b11_1111,
    ]
}

/// Encodes `len` source bytes into `out`, last group first.
///
/// `read` fetches source byte `i`; it receives `out` so the source may live
/// in `out` itself. Every group is read before any of its four output slots
/// are written, and output slot `4g` never precedes source byte `3g`, so
/// walking backwards never clobbers unread input.
///
/// `out` must hold at least `encoded_len(len)` bytes.
pub(crate) fn encode_backward<F>(
    out: &mut [u8],
    len: usize,
    symbols: &[u8; 65],
    read: F,
) -> usize
where
    F: Fn(&[u8], usize) -> u8,
{
    let written = encoded_len(len);
    let pad = symbols[64];
    let extra_length = len % 3;
    let mut r = len - extra_length;
    let mut w = written;

    if extra_length == 1 {
        let o1 = read(out, r);
        let [s0, s1, _, _] = split(o1, 0, 0);
        w -= 4;
        out[w + 3] = pad;
        out[w + 2] = pad;
        out[w + 1] = symbols[s1 as usize];
        out[w] = symbols[s0 as usize];
    } else if extra_length == 2 {
        let o2 = read(out, r + 1);
        let o1 = read(out, r);
        let [s0, s1, s2, _] = split(o1, o2, 0);
        w -= 4;
        out[w + 3] = pad;
        out[w + 2] = symbols[s2 as usize];
        out[w + 1] = symbols[s1 as usize];
        out[w] = symbols[s0 as usize];
    }

    while r > 0 {
        let o3 = read(out, r - 1);
        let o2 = read(out, r - 2);
        let o1 = read(out, r - 3);
        let [s0, s1, s2, s3] = split(o1, o2, o3);
        w -= 4;
        out[w + 3] = symbols[s3 as usize];
        out[w + 2] = symbols[s2 as usize];
        out[w + 1] = symbols[s1 as usize];
        out[w] = symbols[s0 as usize];
        r -= 3;
    }

    written
}

/// Encodes `input` into `output` with the given alphabet.
///
/// Returns the number of characters written, always
/// [`encoded_len`]`(input.len())`. The output is padded with `=` and is not
/// terminated.
///
/// # Errors
///
/// Returns [`Base64Error::OutputTooSmall`] if `output` is shorter than
/// [`encoded_len`]`(input.len())`. Nothing is written in that case.
pub fn encode_with(
    output: &mut [u8],
    input: &[u8],
    alphabet: Alphabet,
) -> Result<usize, Base64Error> {
    ensure_capacity(encoded_len(input.len()), output.len())?;
    Ok(encode_backward(
        output,
        input.len(),
        alphabet.symbols(),
        |_, i| input[i],
    ))
}

/// Encodes `input` into `output` using the standard alphabet.
///
/// # Example
///
/// ```
/// use lenient_base64::encode;
///
/// let mut out = [0u8; 8];
/// let len = encode(&mut out, b"foobar").unwrap();
/// assert_eq!(&out[..len], b"Zm9vYmFy");
/// ```
pub fn encode(output: &mut [u8], input: &[u8]) -> Result<usize, Base64Error> {
    encode_with(output, input, Alphabet::Standard)
}

/// Encodes `input` into `output` using the URL-safe alphabet (`-` and `_`).
///
/// Padding is still emitted.
///
/// # Example
///
/// ```
/// use lenient_base64::encode_url;
///
/// let mut out = [0u8; 4];
/// let len = encode_url(&mut out, &[0xfb, 0xff]).unwrap();
/// assert_eq!(&out[..len], b"-_8=");
/// ```
pub fn encode_url(output: &mut [u8], input: &[u8]) -> Result<usize, Base64Error> {
    encode_with(output, input, Alphabet::UrlSafe)
}

/// Encodes the first `len` bytes of `buf` in place.
///
/// The encoded text replaces the raw bytes starting at index 0, so `buf` must
/// have room for [`encoded_len`]`(len)` bytes. Bytes past the encoded text are
/// left untouched.
///
/// # Errors
///
/// Returns [`Base64Error::LengthOutOfBounds`] if `len > buf.len()` and
/// [`Base64Error::OutputTooSmall`] if the encoded text would not fit.
///
/// # Example
///
/// ```
/// use lenient_base64::{encode_in_place, Alphabet};
///
/// let mut buf = [0u8; 8];
/// buf[..5].copy_from_slice(b"fooba");
/// let len = encode_in_place(&mut buf, 5, Alphabet::Standard).unwrap();
/// assert_eq!(&buf[..len], b"Zm9vYmE=");
/// ```
pub fn encode_in_place(
    buf: &mut [u8],
    len: usize,
    alphabet: Alphabet,
) -> Result<usize, Base64Error> {
    if len > buf.len() {
        tracing::debug!(
            len,
            capacity = buf.len(),
            "in-place encode length exceeds buffer"
        );
        return Err(Base64Error::LengthOutOfBounds {
            len,
            capacity: buf.len(),
        });
    }
    ensure_capacity(encoded_len(len), buf.len())?;
    Ok(encode_backward(buf, len, alphabet.symbols(), |src, i| src[i]))
}
