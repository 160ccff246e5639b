pub mod alphabet;
pub mod config;
pub mod error;
pub mod generate;
pub mod hash;
pub mod parse;
pub mod store;

pub use alphabet::{Alphabet, BASE64, Encoding, HEX, encode_integer};
pub use config::ShortenerConfig;
pub use error::{Result, ShortCodeError};
pub use generate::ShortCodeGenerator;
pub use hash::{DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH, digest_value, short_code};
pub use parse::{is_valid_short_code, parse_short_code};
pub use store::{Link, LinkStore};
