//! Engine error type.
//!
//! The text paths (tokenize / extract / format / render) are total functions
//! and never fail; the only fallible surfaces are resolving a theme name
//! supplied by the host and loading configuration from the environment.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown theme: {0:?} (expected \"light\" or \"dark\")")]
    UnknownTheme(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T = ()> = std::result::Result<T, Error>;
