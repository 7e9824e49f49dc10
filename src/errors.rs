// src/errors.rs

//! Crate-wide error types.
//!
//! Malformed instance input is a recoverable, run-level failure: it aborts the
//! current run only, never the process. Everything else funnels through the
//! same enum so callers can `?` their way up to `main`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlandagError {
    #[error("malformed instance input: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PlandagError>;
