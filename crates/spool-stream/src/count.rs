//! Counting decorators: byte totals and an optional digest, no retention.
//!
//! The cheapest capture mode. When only "how many bytes, and what
//! digest" are needed, these avoid spill-buffer retention entirely.

use std::io::{self, Read, Write};

use spool_digest::{AlgoHasher, DigestAlgorithm, DigestError, Hasher, encode_digest};

/// Reader decorator tracking bytes actually delivered.
///
/// Only positive read results increment the counter; end-of-stream does
/// not. With [`CountingReader::with_digest`], delivered bytes also fold
/// into a running hash, finalized one-shot by
/// [`CountingReader::digest`] — after which further reads fail.
pub struct CountingReader<R> {
    inner: R,
    count: u64,
    hasher: Option<AlgoHasher>,
    finalized: bool,
}

impl<R> CountingReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            count: 0,
            hasher: None,
            finalized: false,
        }
    }

    pub fn with_digest(inner: R, algorithm: DigestAlgorithm) -> Self {
        Self {
            inner,
            count: 0,
            hasher: Some(algorithm.hasher()),
            finalized: false,
        }
    }

    /// Bytes delivered so far.
    pub fn count(&self) -> u64 { self.count }

    /// Finalize and return the encoded digest. One-shot; fails when no
    /// digest was configured or it was already taken.
    pub fn digest(&mut self) -> spool_digest::Result<String> {
        match self.hasher.take() {
            Some(hasher) => {
                self.finalized = true;
                Ok(encode_digest(&hasher.finalize()))
            }
            None if self.finalized => Err(DigestError::IllegalState("digest already finalized")),
            None => Err(DigestError::IllegalState("no digest configured")),
        }
    }

    pub fn get_ref(&self) -> &R { &self.inner }

    pub fn get_mut(&mut self) -> &mut R { &mut self.inner }

    pub fn into_inner(self) -> R { self.inner }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.finalized {
            return Err(io::Error::other(DigestError::IllegalState(
                "read after digest finalized",
            )));
        }
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.count += n as u64;
            if let Some(hasher) = self.hasher.as_mut() {
                hasher.update(&buf[..n]);
            }
        }
        Ok(n)
    }
}

/// Writer decorator tracking bytes actually accepted downstream.
///
/// Same contract as [`CountingReader`], in the write direction.
pub struct CountingWriter<W> {
    inner: W,
    count: u64,
    hasher: Option<AlgoHasher>,
    finalized: bool,
}

impl<W> CountingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            count: 0,
            hasher: None,
            finalized: false,
        }
    }

    pub fn with_digest(inner: W, algorithm: DigestAlgorithm) -> Self {
        Self {
            inner,
            count: 0,
            hasher: Some(algorithm.hasher()),
            finalized: false,
        }
    }

    /// Bytes accepted so far.
    pub fn count(&self) -> u64 { self.count }

    /// Finalize and return the encoded digest. One-shot; fails when no
    /// digest was configured or it was already taken.
    pub fn digest(&mut self) -> spool_digest::Result<String> {
        match self.hasher.take() {
            Some(hasher) => {
                self.finalized = true;
                Ok(encode_digest(&hasher.finalize()))
            }
            None if self.finalized => Err(DigestError::IllegalState("digest already finalized")),
            None => Err(DigestError::IllegalState("no digest configured")),
        }
    }

    pub fn get_ref(&self) -> &W { &self.inner }

    pub fn get_mut(&mut self) -> &mut W { &mut self.inner }

    pub fn into_inner(self) -> W { self.inner }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.finalized {
            return Err(io::Error::other(DigestError::IllegalState(
                "write after digest finalized",
            )));
        }
        let n = self.inner.write(buf)?;
        if n > 0 {
            self.count += n as u64;
            if let Some(hasher) = self.hasher.as_mut() {
                hasher.update(&buf[..n]);
            }
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use spool_digest::Sha256Hasher;

    #[test]
    fn test_counting_reader_counts_delivered_bytes() {
        let data = vec![7u8; 1000];
        let mut reader = CountingReader::new(Cursor::new(&data));

        let mut buf = [0u8; 64];
        let mut total = 0usize;
        loop {
            let n = reader.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            total += n;
        }

        assert_eq!(total, 1000);
        assert_eq!(reader.count(), 1000);
    }

    #[test]
    fn test_counting_reader_eof_not_counted() {
        let mut reader = CountingReader::new(Cursor::new(b""));
        let mut buf = [0u8; 8];
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
        assert_eq!(reader.read(&mut buf).unwrap(), 0);
        assert_eq!(reader.count(), 0);
    }

    #[test]
    fn test_counting_reader_digest_matches_reference() {
        let data = b"count and digest in one pass";
        let mut reader = CountingReader::with_digest(Cursor::new(&data[..]), DigestAlgorithm::Sha256);

        io::copy(&mut reader, &mut io::sink()).unwrap();

        assert_eq!(reader.count(), data.len() as u64);
        assert_eq!(
            reader.digest().unwrap(),
            encode_digest(&Sha256Hasher::digest(data))
        );
    }

    #[test]
    fn test_digest_without_configuration_fails() {
        let mut reader = CountingReader::new(Cursor::new(b"data"));
        assert!(matches!(
            reader.digest(),
            Err(DigestError::IllegalState("no digest configured"))
        ));
    }

    #[test]
    fn test_digest_is_terminal() {
        let data = b"bytes";
        let mut reader = CountingReader::with_digest(Cursor::new(&data[..]), DigestAlgorithm::Sha1);
        io::copy(&mut reader, &mut io::sink()).unwrap();

        reader.digest().unwrap();
        assert!(matches!(
            reader.digest(),
            Err(DigestError::IllegalState("digest already finalized"))
        ));
        let mut buf = [0u8; 4];
        assert!(reader.read(&mut buf).is_err());
    }

    #[test]
    fn test_counting_writer_forwards_and_counts() {
        let mut writer = CountingWriter::with_digest(Vec::new(), DigestAlgorithm::Sha256);
        writer.write_all(b"hello ").unwrap();
        writer.write_all(b"world").unwrap();

        assert_eq!(writer.count(), 11);
        assert_eq!(
            writer.digest().unwrap(),
            encode_digest(&Sha256Hasher::digest(b"hello world"))
        );
        assert_eq!(writer.into_inner(), b"hello world");
    }
}
