use primitive_types::U512;

use crate::error::{Result, ShortCodeError};

/// Ordered, duplicate-free ASCII symbol table. Its length is the numeric base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: &'static [u8],
}

/// Lowercase hexadecimal digits.
pub const HEX: Alphabet = Alphabet {
    symbols: b"0123456789abcdef",
};

/// URL-safe 64-symbol table, digit 0 first. Not the RFC 4648 ordering.
pub const BASE64: Alphabet = Alphabet {
    symbols: b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ-_",
};

impl Alphabet {
    /// Build a custom alphabet from a static symbol table.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAlphabet` if the table has fewer than two symbols,
    /// contains a non-ASCII byte, or repeats a symbol.
    pub fn new(symbols: &'static [u8]) -> Result<Self> {
        if symbols.len() < 2 {
            return Err(ShortCodeError::InvalidAlphabet {
                reason: format!("need at least 2 symbols, got {}", symbols.len()),
            });
        }

        let mut seen = [false; 128];
        for &symbol in symbols {
            if !symbol.is_ascii() {
                return Err(ShortCodeError::InvalidAlphabet {
                    reason: format!("non-ASCII byte 0x{symbol:02x}"),
                });
            }
            let slot = &mut seen[usize::from(symbol)];
            if *slot {
                return Err(ShortCodeError::InvalidAlphabet {
                    reason: format!("duplicate symbol '{}'", char::from(symbol)),
                });
            }
            *slot = true;
        }

        Ok(Self { symbols })
    }

    #[must_use]
    pub const fn symbols(&self) -> &'static [u8] {
        self.symbols
    }

    #[must_use]
    pub const fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if `c` is one of this alphabet's symbols. Case-sensitive.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        u8::try_from(c).is_ok_and(|byte| self.symbols.contains(&byte))
    }
}

/// The two symbol sets a short code can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// Base 16, `0-9a-f`.
    Hex,
    /// Base 64, `0-9a-zA-Z-_`.
    #[default]
    Base64,
}

impl Encoding {
    /// Map a numeric base onto an encoding.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedBase` for anything other than 16 or 64.
    pub const fn from_base(base: u32) -> Result<Self> {
        match base {
            16 => Ok(Self::Hex),
            64 => Ok(Self::Base64),
            _ => Err(ShortCodeError::UnsupportedBase { base }),
        }
    }

    #[must_use]
    pub const fn alphabet(self) -> Alphabet {
        match self {
            Self::Hex => HEX,
            Self::Base64 => BASE64,
        }
    }

    #[must_use]
    pub const fn base(self) -> usize {
        self.alphabet().base()
    }
}

/// Encode a non-negative integer in positional notation over `alphabet`,
/// most significant digit first.
///
/// Zero encodes to the alphabet's first symbol. Otherwise the result has no
/// leading zero symbols.
///
/// # Examples
///
/// ```
/// use linkhash::alphabet::{encode_integer, BASE64, HEX};
///
/// assert_eq!(encode_integer(20_190_925u64, HEX), "13416cd");
/// assert_eq!(encode_integer(20_190_925u64, BASE64), "1d1rd");
/// assert_eq!(encode_integer(0u64, BASE64), "0");
/// ```
#[must_use]
pub fn encode_integer(number: impl Into<U512>, alphabet: Alphabet) -> String {
    let mut value: U512 = number.into();
    let symbols = alphabet.symbols();
    if value.is_zero() {
        return char::from(symbols[0]).to_string();
    }

    let base = U512::from(alphabet.base());
    let mut digits = Vec::new();
    while !value.is_zero() {
        let (quotient, remainder) = value.div_mod(base);
        digits.push(symbols[remainder.as_usize()]);
        value = quotient;
    }

    digits.iter().rev().map(|&digit| char::from(digit)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_alphabet_sizes() {
        assert_eq!(HEX.base(), 16);
        assert_eq!(BASE64.base(), 64);
    }

    #[test]
    fn test_standard_alphabets_pass_validation() {
        assert_eq!(Alphabet::new(HEX.symbols()), Ok(HEX));
        assert_eq!(Alphabet::new(BASE64.symbols()), Ok(BASE64));
    }

    #[test]
    fn test_new_rejects_single_symbol() {
        assert!(matches!(
            Alphabet::new(b"0"),
            Err(ShortCodeError::InvalidAlphabet { .. })
        ));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = Alphabet::new(b"0120").unwrap_err();
        assert_eq!(
            err,
            ShortCodeError::InvalidAlphabet {
                reason: "duplicate symbol '0'".to_string()
            }
        );
    }

    #[test]
    fn test_new_rejects_non_ascii() {
        assert!(Alphabet::new(b"01\xff").is_err());
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        assert!(HEX.contains('a'));
        assert!(!HEX.contains('A'));
        assert!(BASE64.contains('A'));
        assert!(BASE64.contains('-'));
        assert!(BASE64.contains('_'));
        assert!(!BASE64.contains('+'));
        assert!(!BASE64.contains('é'));
    }

    #[test]
    fn test_encoding_from_base() {
        assert_eq!(Encoding::from_base(16), Ok(Encoding::Hex));
        assert_eq!(Encoding::from_base(64), Ok(Encoding::Base64));
        assert_eq!(
            Encoding::from_base(36),
            Err(ShortCodeError::UnsupportedBase { base: 36 })
        );
    }

    #[test]
    fn test_encoding_default_is_base64() {
        assert_eq!(Encoding::default(), Encoding::Base64);
        assert_eq!(Encoding::default().base(), 64);
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode_integer(0u64, HEX), "0");
        assert_eq!(encode_integer(0u64, BASE64), "0");
    }

    #[test]
    fn test_encode_matches_hex_formatting() {
        assert_eq!(encode_integer(20_190_925u64, HEX), "13416cd");
        assert_eq!(encode_integer(20_190_925u64, HEX), format!("{:x}", 20_190_925u64));
        assert_eq!(encode_integer(255u64, HEX), "ff");
        assert_eq!(encode_integer(u64::MAX, HEX), format!("{:x}", u64::MAX));
    }

    #[test]
    fn test_encode_base64_known_values() {
        assert_eq!(encode_integer(20_190_925u64, BASE64), "1d1rd");
        assert_eq!(encode_integer(63u64, BASE64), "_");
        assert_eq!(encode_integer(64u64, BASE64), "10");
        assert_eq!(encode_integer(4095u64, BASE64), "__");
    }

    #[test]
    fn test_encode_custom_alphabet() {
        let binary = Alphabet::new(b"01").unwrap();
        assert_eq!(encode_integer(10u64, binary), "1010");
    }

    #[test]
    fn test_encode_full_width_value() {
        // 2^512 - 1 is 128 hex digits and ceil(512 / 6) = 86 base64 digits
        assert_eq!(encode_integer(U512::MAX, HEX), "f".repeat(128));
        let encoded = encode_integer(U512::MAX, BASE64);
        assert_eq!(encoded.len(), 86);
        assert!(encoded.starts_with('3'));
        assert!(encoded[1..].chars().all(|c| c == '_'));
    }

    #[test]
    fn test_encode_has_no_leading_zero_symbol() {
        for value in [1u64, 16, 64, 1000, 123_456_789] {
            assert!(!encode_integer(value, HEX).starts_with('0'));
            assert!(!encode_integer(value, BASE64).starts_with('0'));
        }
    }
}
