//! Error types for castpath operations.
//!
//! - **`Error`**: failures that stop a whole run before any query is answered
//!   (unreadable or empty cast file, nothing usable in it).
//! - **`QueryError`**: failures scoped to a single query. The caller reports
//!   them and moves on to the next pair.
//!
//! A disconnected pair is not an error; it is a normal query outcome.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input file is empty: {}", .0.display())]
    EmptyInput(PathBuf),

    /// Every row was malformed, or the file only had a header.
    #[error("no usable cast records in {}", .0.display())]
    NoRecords(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("actor '{0}' not found in database")]
    UnknownActor(String),
}
