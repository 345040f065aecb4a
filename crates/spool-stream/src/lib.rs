//! Tee and counting decorators for one-pass stream capture.
//!
//! A caller wraps an existing reader or writer; bytes keep flowing to
//! their original destination exactly as before, while a shadow copy
//! accumulates in a [`SpillBuffer`](spool_buffer::SpillBuffer) (tee) or
//! just a running count and optional digest (counting). After the pass,
//! the captured bytes are read back through the buffer's replay cursor.
//!
//! Decorators stack: a [`CountingWriter`] over a [`TeeWriter`] over the
//! real destination counts, retains, and forwards in one pass.
//!
//! # Example
//!
//! ```
//! use std::io::Read;
//! use spool_buffer::{SpillBuffer, SpoolOptions};
//! use spool_stream::TeeReader;
//!
//! let source = b"payload bytes";
//! let spool = SpillBuffer::new(SpoolOptions::new().max_buffer(4));
//! let mut tee = TeeReader::new(&source[..], spool);
//!
//! let mut consumed = Vec::new();
//! tee.read_to_end(&mut consumed).unwrap();
//!
//! let spool = tee.into_spool();
//! assert_eq!(consumed, source);
//! assert_eq!(spool.to_bytes().unwrap(), source);
//! ```

pub use self::count::{CountingReader, CountingWriter};
pub use self::tee::{TeeReader, TeeWriter};

mod count;
mod tee;
