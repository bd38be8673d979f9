/// Standard base64 alphabet followed by the padding character.
///
/// Index 64 holds `=` so a padded group can be looked up like any other symbol.
pub const ALPHABET: &[u8; 65] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

/// URL-safe base64 alphabet (uses - and _ instead of + and /), padding last.
pub const ALPHABET_URL: &[u8; 65] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_=";

/// Padding character.
pub const PAD: u8 = b'=';

/// Backward-table value marking the padding character.
pub(crate) const PAD_VALUE: u8 = 64;

/// Backward-table value for bytes that belong to neither alphabet.
pub(crate) const INVALID: u8 = 0xFF;
