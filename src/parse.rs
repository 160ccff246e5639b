use crate::alphabet::Encoding;
use crate::error::{Result, ShortCodeError};
use crate::hash::MAX_CODE_LENGTH;

/// Validates a short code taken from user input, such as a request path segment.
///
/// Parsing rules:
/// - Surrounding whitespace is trimmed
/// - The code must be non-empty and at most [`MAX_CODE_LENGTH`] symbols
/// - Every symbol must belong to the encoding's alphabet
/// - Case is significant, so `Ab` and `ab` are different base64 codes
///
/// Returns the trimmed code.
///
/// # Errors
///
/// Returns `InvalidCode` if any rule is violated.
///
/// # Examples
///
/// ```
/// use linkhash::{parse_short_code, Encoding};
///
/// assert_eq!(parse_short_code(" MDIN8D ", Encoding::Base64).unwrap(), "MDIN8D");
/// assert!(parse_short_code("MDIN8D", Encoding::Hex).is_err());
/// ```
pub fn parse_short_code(input: &str, encoding: Encoding) -> Result<String> {
    let code = input.trim();
    let alphabet = encoding.alphabet();

    if code.is_empty() || code.len() > MAX_CODE_LENGTH || !code.chars().all(|c| alphabet.contains(c)) {
        return Err(ShortCodeError::InvalidCode {
            code: code.to_string(),
        });
    }

    Ok(code.to_string())
}

/// Returns true if `input` would be accepted by [`parse_short_code`].
#[must_use]
pub fn is_valid_short_code(input: &str, encoding: Encoding) -> bool {
    parse_short_code(input, encoding).is_ok()
}
