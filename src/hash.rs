use primitive_types::U512;
use sha2::{Digest, Sha512};
use tracing::trace;

use crate::alphabet::{Encoding, encode_integer};
use crate::error::{Result, ShortCodeError};

/// Longest short code a caller may request.
pub const MAX_CODE_LENGTH: usize = 128;

/// Code length used when a caller has no preference.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// SHA-512 of the input, read as a big-endian 512-bit integer.
#[must_use]
pub fn digest_value(value: impl AsRef<[u8]>) -> U512 {
    let digest = Sha512::digest(value.as_ref());
    U512::from_big_endian(digest.as_slice())
}

/// Encode the digest of `value` and keep its `length` most significant symbols.
///
/// No padding is applied, so the result is shorter than `length` when the
/// full encoding is.
pub(crate) fn encode_digest(value: impl AsRef<[u8]>, length: usize, encoding: Encoding) -> String {
    let mut encoded = encode_integer(digest_value(value), encoding.alphabet());
    // Every symbol is ASCII, so byte truncation lands on a char boundary.
    encoded.truncate(length);
    trace!(length, ?encoding, code = %encoded, "derived short code");
    encoded
}

/// Derive a deterministic short code from `value`.
///
/// The SHA-512 digest is encoded in the chosen alphabet and cut down to its
/// first `length` symbols. A longer `length` therefore extends a shorter
/// result to the right.
///
/// # Errors
///
/// Returns `InvalidLength` if `length` exceeds [`MAX_CODE_LENGTH`].
///
/// # Examples
///
/// ```
/// use linkhash::{short_code, Encoding};
///
/// assert_eq!(short_code("hello world", 8, Encoding::Hex)?, "309ecc48");
/// assert_eq!(short_code("hello world", 8, Encoding::Base64)?, "MDIN8D1b");
/// assert!(short_code("hello world", 129, Encoding::Base64).is_err());
/// # Ok::<(), linkhash::ShortCodeError>(())
/// ```
pub fn short_code(value: impl AsRef<[u8]>, length: usize, encoding: Encoding) -> Result<String> {
    if length > MAX_CODE_LENGTH {
        return Err(ShortCodeError::InvalidLength {
            length,
            max: MAX_CODE_LENGTH,
        });
    }
    Ok(encode_digest(value, length, encoding))
}
