//! Error types for hemline operations.
//!
//! Rendering itself never fails; these cover loading and validating
//! document trees for the walker, the CLI and the WASM binding.

use thiserror::Error;

/// Errors that can occur while loading or validating a document tree.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
