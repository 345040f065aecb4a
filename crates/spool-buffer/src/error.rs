use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpoolError {
    #[error("capacity exceeded: {requested} more bytes would pass the {limit}-byte cap")]
    Capacity { requested: u64, limit: u64 },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("illegal state: {0}")]
    IllegalState(&'static str),
}

impl SpoolError {
    /// True for the over-cap error, so callers can apply domain policy
    /// (reject an oversized upload, abort a download) without inspecting
    /// error text.
    pub fn is_capacity(&self) -> bool { matches!(self, SpoolError::Capacity { .. }) }

    /// Convert into an `io::Error` for use behind the `std::io` traits.
    /// Non-I/O variants stay reachable through `io::Error::get_ref`.
    pub fn into_io(self) -> io::Error {
        match self {
            SpoolError::Io(e) => e,
            other => io::Error::other(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, SpoolError>;
