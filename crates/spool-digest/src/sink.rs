//! Pass-through decorators that hash the bytes they carry.
//!
//! Both decorators fold only bytes actually transferred: a short read or
//! write hashes exactly what moved, and end-of-stream touches nothing.
//! Finalization is one-shot; once [`DigestWriter::digest`] (or the reader
//! equivalent) has been called, further transfers fail rather than
//! producing a digest that silently misses bytes.

use std::io::{self, Read, Write};

use crate::algorithm::{AlgoHasher, DigestAlgorithm, encode_digest};
use crate::error::{DigestError, Result};
use crate::hasher::Hasher;

/// Writer decorator computing a running digest of everything written.
///
/// Bytes are forwarded to the wrapped writer first; only the count the
/// writer accepted is hashed, so the digest always matches what the
/// destination actually received.
pub struct DigestWriter<W> {
    inner: W,
    hasher: Option<AlgoHasher>,
    count: u64,
}

impl<W> DigestWriter<W> {
    pub fn new(inner: W, algorithm: DigestAlgorithm) -> Self {
        Self {
            inner,
            hasher: Some(algorithm.hasher()),
            count: 0,
        }
    }

    /// Bytes hashed so far.
    pub fn byte_count(&self) -> u64 { self.count }

    /// Finalize and return the encoded digest.
    ///
    /// One-shot: the accumulator is consumed, and a second call (or any
    /// later write) reports `IllegalState`. Zero bytes written yields the
    /// algorithm's well-defined empty-input digest.
    pub fn digest(&mut self) -> Result<String> {
        let hasher = self
            .hasher
            .take()
            .ok_or(DigestError::IllegalState("digest already finalized"))?;
        Ok(encode_digest(&hasher.finalize()))
    }

    pub fn get_ref(&self) -> &W { &self.inner }

    pub fn get_mut(&mut self) -> &mut W { &mut self.inner }

    pub fn into_inner(self) -> W { self.inner }
}

impl<W: Write> Write for DigestWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(hasher) = self.hasher.as_mut() else {
            return Err(io::Error::other(DigestError::IllegalState(
                "write after digest finalized",
            )));
        };
        let n = self.inner.write(buf)?;
        if n > 0 {
            hasher.update(&buf[..n]);
            self.count += n as u64;
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Reader decorator computing a running digest of everything read.
///
/// Hashes exactly the bytes returned to the caller, in order. There is no
/// rewind: consumption is strictly sequential, and a caller that needs to
/// revisit bytes must retain them elsewhere.
pub struct DigestReader<R> {
    inner: R,
    hasher: Option<AlgoHasher>,
    count: u64,
}

impl<R> DigestReader<R> {
    pub fn new(inner: R, algorithm: DigestAlgorithm) -> Self {
        Self {
            inner,
            hasher: Some(algorithm.hasher()),
            count: 0,
        }
    }

    /// Bytes hashed so far.
    pub fn byte_count(&self) -> u64 { self.count }

    /// Finalize and return the encoded digest. One-shot, as on
    /// [`DigestWriter::digest`].
    pub fn digest(&mut self) -> Result<String> {
        let hasher = self
            .hasher
            .take()
            .ok_or(DigestError::IllegalState("digest already finalized"))?;
        Ok(encode_digest(&hasher.finalize()))
    }

    pub fn get_ref(&self) -> &R { &self.inner }

    pub fn get_mut(&mut self) -> &mut R { &mut self.inner }

    pub fn into_inner(self) -> R { self.inner }
}

impl<R: Read> Read for DigestReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let Some(hasher) = self.hasher.as_mut() else {
            return Err(io::Error::other(DigestError::IllegalState(
                "read after digest finalized",
            )));
        };
        let n = self.inner.read(buf)?;
        if n > 0 {
            hasher.update(&buf[..n]);
            self.count += n as u64;
        }
        Ok(n)
    }
}
