#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortCodeError {
    #[error("invalid code length {length} (maximum is {max})")]
    InvalidLength { length: usize, max: usize },

    #[error("unsupported alphabet base: {base}")]
    UnsupportedBase { base: u32 },

    #[error("invalid alphabet: {reason}")]
    InvalidAlphabet { reason: String },

    #[error("invalid short code: {code}")]
    InvalidCode { code: String },

    #[error("short code not found: {code}")]
    NotFound { code: String },

    #[error("URL must not be empty")]
    EmptyUrl,
}

pub type Result<T> = std::result::Result<T, ShortCodeError>;
