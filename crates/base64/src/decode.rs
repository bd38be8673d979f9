//! Garbage-tolerant base64 decoding into caller-supplied buffers.
//!
//! The decoder never rejects input. Bytes outside both alphabets are skipped,
//! every four symbols become three bytes, a short trailing group is decoded
//! best-effort and trailing `=` retract the bytes they stand in for.

use crate::decode_table::{is_base64_symbol, is_pad, sextet};
use crate::sizes::{decoded_capacity, ensure_capacity};
use crate::Base64Error;

/// Outcome of one decoding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Scan {
    /// Decoded bytes, excluding the terminating zero.
    pub written: usize,
    /// Input bytes ignored: foreign bytes and `=` that would start a group.
    pub skipped: usize,
}

/// Decodes a short trailing group of 0 to 3 sextets into `dst`.
///
/// Returns the number of bytes produced: 0, 1, 1 and 2 respectively.
fn finish_group(dst: &mut [u8], sextets: &[u8]) -> usize {
    match *sextets {
        [] => 0,
        [s0] => {
            dst[0] = s0 << 2;
            1
        }
        [s0, s1] => {
            dst[0] = (s0 << 2) | (s1 >> 4);
            1
        }
        [s0, s1, s2, ..] => {
            dst[0] = (s0 << 2) | (s1 >> 4);
            dst[1] = (s1 << 4) | (s2 >> 2);
            2
        }
    }
}

/// Decodes `len` source characters into `out`, front to back.
///
/// `read` fetches source character `i`; it receives `out` so the source may
/// live in `out` itself. Output never overtakes the read cursor: after `4g`
/// symbols at most `3g` bytes have been written.
///
/// `out` must hold at least `decoded_capacity(len) - 1` bytes. The
/// terminating zero is written only when `out` has room for it.
pub(crate) fn decode_forward<F>(out: &mut [u8], len: usize, read: F) -> Scan
where
    F: Fn(&[u8], usize) -> u8,
{
    let mut quad = [0u8; 4];
    let mut count = 0;
    let mut pads = 0;
    let mut last_group = 0;
    let mut written = 0;
    let mut skipped = 0;

    for i in 0..len {
        let byte = read(out, i);
        if !is_base64_symbol(byte) {
            skipped += 1;
            continue;
        }
        let pad = is_pad(byte);
        // Surplus padding must not open a group of its own.
        if pad && count == 0 {
            skipped += 1;
            continue;
        }
        pads = if pad { pads + 1 } else { 0 };
        quad[count] = sextet(byte);
        count += 1;
        if count == 4 {
            let [s0, s1, s2, s3] = quad;
            out[written] = (s0 << 2) | (s1 >> 4);
            out[written + 1] = (s1 << 4) | (s2 >> 2);
            out[written + 2] = (s2 << 6) | s3;
            written += 3;
            last_group = 3;
            count = 0;
        }
    }

    if count > 0 {
        last_group = finish_group(&mut out[written..], &quad[..count]);
        written += last_group;
    }

    // Padding never produces bytes, and never eats into an earlier group.
    written -= pads.min(2).min(last_group);

    if written < out.len() {
        out[written] = 0;
    }

    tracing::trace!(
        input = len,
        skipped,
        written,
        padding = pads.min(2),
        "decoded base64"
    );

    Scan { written, skipped }
}

/// Decodes `input` into `output`.
///
/// Recognizes the standard and URL-safe alphabets at the same time. Bytes
/// that belong to neither (line breaks, spaces, stray punctuation) are
/// skipped. A zero byte is written after the decoded data; it is not part of
/// the returned count.
///
/// # Errors
///
/// Returns [`Base64Error::OutputTooSmall`] if `output` is shorter than
/// [`decoded_capacity`]`(input.len())`. Malformed input is never an error.
///
/// # Example
///
/// ```
/// use lenient_base64::decode;
///
/// let mut out = [0xAAu8; 6];
/// let len = decode(&mut out, b"Zm9v\r\nYg==").unwrap();
/// assert_eq!(&out[..len], b"foob");
/// assert_eq!(out[len], 0);
/// ```
pub fn decode(output: &mut [u8], input: &[u8]) -> Result<usize, Base64Error> {
    ensure_capacity(decoded_capacity(input.len()), output.len())?;
    Ok(decode_forward(output, input.len(), |_, i| input[i]).written)
}

/// Decodes the base64 text held in `buf`, overwriting it with the result.
///
/// The decoded bytes start at index 0. A zero byte follows them when `buf`
/// has room, which is always the case unless the text is empty or a single
/// symbol. The remainder of `buf` keeps whatever text was there.
///
/// # Example
///
/// ```
/// use lenient_base64::decode_in_place;
///
/// let mut buf = *b"YW55IGNhcm5hbCBwbGVhc3VyZS4=";
/// let len = decode_in_place(&mut buf);
/// assert_eq!(&buf[..len], b"any carnal pleasure.");
/// ```
pub fn decode_in_place(buf: &mut [u8]) -> usize {
    let len = buf.len();
    decode_forward(buf, len, |src, i| src[i]).written
}
