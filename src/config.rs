use crate::alphabet::Encoding;
use crate::error::{Result, ShortCodeError};
use crate::hash::{DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortenerConfig {
    pub length: usize,
    pub encoding: Encoding,
}

impl ShortenerConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
            encoding: Encoding::Base64,
        }
    }

    #[must_use]
    pub const fn length(mut self, len: usize) -> Self {
        self.length = len;
        self
    }

    #[must_use]
    pub const fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Checks that the configured length yields a usable, non-empty code.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLength` if `length` is zero or exceeds [`MAX_CODE_LENGTH`].
    pub const fn validate(&self) -> Result<()> {
        if self.length == 0 || self.length > MAX_CODE_LENGTH {
            return Err(ShortCodeError::InvalidLength {
                length: self.length,
                max: MAX_CODE_LENGTH,
            });
        }
        Ok(())
    }
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self::new()
    }
}
