//! Stream tees: forward unmodified, retain a copy.

use std::io::{self, Read, Write};

use spool_buffer::SpillBuffer;

/// Reader decorator that mirrors every delivered byte into a
/// [`SpillBuffer`].
///
/// Bytes requested but not delivered (end-of-stream, short reads) never
/// touch the buffer. The decorator owns its buffer; take it back with
/// [`TeeReader::into_spool`] once the source is drained.
pub struct TeeReader<R> {
    inner: R,
    spool: SpillBuffer,
}

impl<R> TeeReader<R> {
    pub fn new(inner: R, spool: SpillBuffer) -> Self {
        Self { inner, spool }
    }

    pub fn spool(&self) -> &SpillBuffer { &self.spool }

    pub fn spool_mut(&mut self) -> &mut SpillBuffer { &mut self.spool }

    pub fn get_ref(&self) -> &R { &self.inner }

    pub fn get_mut(&mut self) -> &mut R { &mut self.inner }

    pub fn into_spool(self) -> SpillBuffer { self.spool }

    pub fn into_parts(self) -> (R, SpillBuffer) { (self.inner, self.spool) }
}

impl<R: Read> Read for TeeReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            self.spool
                .append(&buf[..n])
                .map_err(|e| e.into_io())?;
        }
        Ok(n)
    }
}

/// Writer decorator that mirrors every forwarded byte into a
/// [`SpillBuffer`].
///
/// Forwarding is the primary effect: bytes go to the wrapped destination
/// first and are never rolled back. A mirror failure (capacity, spill
/// I/O) is then surfaced to the caller — the destination has the bytes,
/// retention does not. The wrapped
/// [`SpoolError`](spool_buffer::SpoolError) stays reachable through
/// `io::Error::get_ref`, so "delivered but not retained" is
/// distinguishable from a delivery failure.
pub struct TeeWriter<W> {
    inner: W,
    spool: SpillBuffer,
}

impl<W> TeeWriter<W> {
    pub fn new(inner: W, spool: SpillBuffer) -> Self {
        Self { inner, spool }
    }

    pub fn spool(&self) -> &SpillBuffer { &self.spool }

    pub fn spool_mut(&mut self) -> &mut SpillBuffer { &mut self.spool }

    pub fn get_ref(&self) -> &W { &self.inner }

    pub fn get_mut(&mut self) -> &mut W { &mut self.inner }

    pub fn into_spool(self) -> SpillBuffer { self.spool }

    pub fn into_parts(self) -> (W, SpillBuffer) { (self.inner, self.spool) }
}

impl<W: Write> Write for TeeWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        if n > 0 {
            self.spool
                .append(&buf[..n])
                .map_err(|e| e.into_io())?;
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
