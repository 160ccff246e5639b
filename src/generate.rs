use crate::alphabet::Encoding;
use crate::config::ShortenerConfig;
use crate::error::Result;

/// Short code generator bound to one validated length and encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortCodeGenerator {
    config: ShortenerConfig,
}

impl ShortCodeGenerator {
    /// Create a generator, validating the config once up front.
    ///
    /// # Errors
    ///
    /// Returns `InvalidLength` if the configured length is zero or over the limit.
    pub fn new(config: ShortenerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.config.length
    }

    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.config.encoding
    }

    /// Derive the short code for `value`.
    ///
    /// Identical to [`crate::short_code`] with this generator's length and
    /// encoding, minus the error path already ruled out by [`Self::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use linkhash::{ShortCodeGenerator, ShortenerConfig};
    ///
    /// let generator = ShortCodeGenerator::new(ShortenerConfig::new()).unwrap();
    /// assert_eq!(generator.code_for("hello world"), "MDIN8D");
    /// ```
    #[must_use]
    pub fn code_for(&self, value: impl AsRef<[u8]>) -> String {
        crate::hash::encode_digest(value, self.config.length, self.config.encoding)
    }
}
