//! Incremental digest primitives and hashing stream decorators.
//!
//! Provides a minimal [`Hasher`] trait over the supported algorithms, a
//! tagged-variant [`DigestAlgorithm`] registry for callers that select an
//! algorithm by name, and pass-through [`DigestReader`]/[`DigestWriter`]
//! decorators that fold every transferred byte into a running hash.
//!
//! Digests are rendered with [`encode_digest`] as URL- and filesystem-safe
//! base64 (no `+`, `/`, or padding), since collaborators embed them in file
//! and object names.
//!
//! # Example
//!
//! ```
//! use std::io::Write;
//! use spool_digest::{DigestAlgorithm, DigestWriter};
//!
//! let mut writer = DigestWriter::new(Vec::new(), DigestAlgorithm::Sha256);
//! writer.write_all(b"hello world").unwrap();
//!
//! let digest = writer.digest().unwrap();
//! assert_eq!(writer.byte_count(), 11);
//! assert_eq!(writer.into_inner(), b"hello world");
//! # let _ = digest;
//! ```

pub use self::algorithm::{AlgoHasher, DigestAlgorithm, encode_digest};
pub use self::error::{DigestError, Result};
pub use self::hasher::{Hasher, Sha1Hasher, Sha256Hasher};
pub use self::sink::{DigestReader, DigestWriter};

mod algorithm;
mod error;
mod hasher;
mod sink;
