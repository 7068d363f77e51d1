// error.rs

use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}: command not found")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("{value}: not a 32-bit integer ({source})")]
    InvalidInteger { value: String, source: ParseIntError },

    #[error("{value}: not a valid count ({source})")]
    InvalidCount { value: String, source: ParseIntError },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}={value} is not a valid count")]
    InvalidWindow {
        var: &'static str,
        value: String,
        source: ParseIntError,
    },
}
