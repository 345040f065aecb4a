//! Spillable stream capture.
//!
//! One-pass capture of byte streams whose size is unknown in advance:
//! buffer in memory, spill to a private temporary file past a threshold,
//! optionally digest every byte, optionally tee to a downstream
//! consumer, and replay the capture afterwards.
//!
//! This crate re-exports the public surface of the member crates:
//!
//! - [`spool_buffer`] — [`SpillBuffer`], its [`SpoolOptions`] and the
//!   [`Replay`] cursor
//! - [`spool_digest`] — [`Hasher`], [`DigestAlgorithm`],
//!   [`DigestReader`]/[`DigestWriter`]
//! - [`spool_stream`] — [`TeeReader`]/[`TeeWriter`],
//!   [`CountingReader`]/[`CountingWriter`]
//!
//! # Example
//!
//! Consume a stream once while retaining a replayable copy and a
//! content digest:
//!
//! ```
//! use std::io::Read;
//! use spool::{DigestAlgorithm, DigestReader, SpillBuffer, SpoolOptions, TeeReader};
//!
//! let payload = b"one pass, retained and digested";
//!
//! let spool = SpillBuffer::new(SpoolOptions::new().max_buffer(16));
//! let tee = TeeReader::new(&payload[..], spool);
//! let mut reader = DigestReader::new(tee, DigestAlgorithm::Sha256);
//!
//! std::io::copy(&mut reader, &mut std::io::sink()).unwrap();
//!
//! let digest = reader.digest().unwrap();
//! let spool = reader.into_inner().into_spool();
//! assert_eq!(spool.to_bytes().unwrap(), payload);
//! # let _ = digest;
//! ```

pub use spool_buffer::{Replay, Result, SpillBuffer, SpoolError, SpoolOptions};
pub use spool_digest::{
    AlgoHasher, DigestAlgorithm, DigestError, DigestReader, DigestWriter, Hasher, Sha1Hasher,
    Sha256Hasher, encode_digest,
};
pub use spool_stream::{CountingReader, CountingWriter, TeeReader, TeeWriter};
