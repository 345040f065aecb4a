//! Capture buffer that starts in memory and spills to a private
//! temporary file once a configured threshold is crossed.
//!
//! [`SpillBuffer`] accumulates a byte stream whose size is unknown in
//! advance. Writes stay in a growable memory region up to `max_buffer`
//! bytes, then transparently continue in a temporary file, up to an
//! absolute `max_size` cap. Everything written can be read back, in
//! order and exactly once per cursor, through [`SpillBuffer::replay`] —
//! regardless of which tier holds the bytes.
//!
//! # Key Features
//!
//! - **Tier transparency**: replay yields identical content whether the
//!   data lives in memory, on disk, or crossed the boundary mid-stream
//! - **Hard caps**: writing past `max_size` fails with a distinguishable
//!   error instead of truncating
//! - **No leaked files**: the backing file is private to the buffer and
//!   removed on release or drop
//!
//! # Example
//!
//! ```
//! use std::io::Read;
//! use spool_buffer::{SpillBuffer, SpoolOptions};
//!
//! let mut buffer = SpillBuffer::new(SpoolOptions::new().max_buffer(4));
//! buffer.append(b"hello world").unwrap();
//! assert!(buffer.is_spilled());
//!
//! let mut captured = Vec::new();
//! buffer.replay().unwrap().read_to_end(&mut captured).unwrap();
//! assert_eq!(captured, b"hello world");
//! ```

pub use self::error::{Result, SpoolError};
pub use self::replay::Replay;
pub use self::spool::SpillBuffer;

use std::path::PathBuf;

mod error;
mod replay;
mod spool;

/// Capacity configuration for a [`SpillBuffer`].
///
/// All parameters are optional; the default configuration never spills
/// and accepts writes without bound.
#[derive(Clone, Debug, Default)]
pub struct SpoolOptions {
    /// Initial capacity guess for the in-memory region.
    ///
    /// Purely an allocation hint; the region grows past it as needed.
    ///
    /// Default: 0
    pub size_hint: usize,

    /// Threshold in bytes above which storage moves to a temporary file.
    ///
    /// `None` means the buffer never spills. `Some(0)` spills on the
    /// first non-empty write.
    ///
    /// Default: `None`
    pub max_buffer: Option<u64>,

    /// Absolute cap on total bytes accepted.
    ///
    /// A write that would pass the cap fails whole with
    /// [`SpoolError::Capacity`]; previously committed bytes stay intact.
    ///
    /// Default: `None` (unbounded)
    pub max_size: Option<u64>,

    /// Directory for the backing temporary file.
    ///
    /// `None` uses the platform temp directory. Tests redirect this to
    /// keep spill files under their own scratch space.
    ///
    /// Default: `None`
    pub spool_dir: Option<PathBuf>,
}

impl SpoolOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial in-memory capacity guess.
    #[must_use]
    pub fn size_hint(mut self, size_hint: usize) -> Self {
        self.size_hint = size_hint;
        self
    }

    /// Set the memory-to-disk spill threshold.
    #[must_use]
    pub fn max_buffer(mut self, max_buffer: u64) -> Self {
        self.max_buffer = Some(max_buffer);
        self
    }

    /// Set the absolute size cap.
    #[must_use]
    pub fn max_size(mut self, max_size: u64) -> Self {
        self.max_size = Some(max_size);
        self
    }

    /// Set the directory the backing file is created in.
    #[must_use]
    pub fn spool_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.spool_dir = Some(dir.into());
        self
    }
}
