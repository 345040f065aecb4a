use std::io::{self, Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::SpoolOptions;
use crate::error::{Result, SpoolError};
use crate::replay::Replay;

/// Chunk size for bulk copies; bounds peak transient memory.
const COPY_CHUNK: usize = 32 * 1024;

/// A capture buffer that spills from memory to a temporary file.
///
/// Bytes are appended sequentially. Until `max_buffer` is crossed they
/// accumulate in a growable memory region; the first write that would
/// cross it moves everything captured so far into a fresh private
/// temporary file, and writing continues there. The transition is
/// one-way and invisible to readers: [`SpillBuffer::replay`] always
/// yields the full written sequence from byte 0.
///
/// Writes and replays on one instance are a write phase followed by a
/// read phase; the `&self`/`&mut self` split enforces that no write can
/// interleave with a live [`Replay`] cursor.
pub struct SpillBuffer {
    opts: SpoolOptions,
    len: u64,
    tier: Tier,
}

enum Tier {
    Memory(Vec<u8>),
    Disk(NamedTempFile),
    Released,
}

impl SpillBuffer {
    pub fn new(opts: SpoolOptions) -> Self {
        let mem = Vec::with_capacity(opts.size_hint);
        Self {
            opts,
            len: 0,
            tier: Tier::Memory(mem),
        }
    }

    /// A buffer that never spills and accepts writes without bound.
    pub fn with_defaults() -> Self {
        Self::new(SpoolOptions::new())
    }

    /// Total bytes accepted so far.
    pub fn len(&self) -> u64 { self.len }

    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// True once the buffer has moved to its disk tier.
    pub fn is_spilled(&self) -> bool { matches!(self.tier, Tier::Disk(_)) }

    /// True after [`SpillBuffer::release`]; all further operations fail.
    pub fn is_released(&self) -> bool { matches!(self.tier, Tier::Released) }

    /// The captured bytes, while they are still memory-resident.
    ///
    /// Returns `None` once spilled or released. Callers use this to skip
    /// the replay cursor for small payloads.
    pub fn as_slice(&self) -> Option<&[u8]> {
        match &self.tier {
            Tier::Memory(mem) => Some(mem),
            _ => None,
        }
    }

    /// Path of the backing file, while the buffer is disk-resident.
    ///
    /// The file is private to this buffer and disappears on release; the
    /// path is only useful for handing the content to a reader that does
    /// not outlive the buffer.
    pub fn file_path(&self) -> Option<&Path> {
        match &self.tier {
            Tier::Disk(file) => Some(file.path()),
            _ => None,
        }
    }

    /// Append a single byte. Same capacity and spill rules as
    /// [`SpillBuffer::append`].
    pub fn push(&mut self, byte: u8) -> Result<()> {
        self.append(&[byte])
    }

    /// Append `buf` to the capture.
    ///
    /// The call is all-or-nothing: if accepting `buf` would pass
    /// `max_size` the write fails with [`SpoolError::Capacity`] and the
    /// buffer is unchanged. The spill check runs before the write
    /// commits, so a write that would cross `max_buffer` lands entirely
    /// in the disk tier; one that lands exactly on the threshold stays
    /// in memory. Empty writes are no-ops.
    pub fn append(&mut self, buf: &[u8]) -> Result<()> {
        if matches!(self.tier, Tier::Released) {
            return Err(SpoolError::IllegalState("append after release"));
        }
        if buf.is_empty() {
            return Ok(());
        }

        let requested = buf.len() as u64;
        if let Some(limit) = self.opts.max_size {
            if self.len.saturating_add(requested) > limit {
                return Err(SpoolError::Capacity { requested, limit });
            }
        }

        if matches!(self.tier, Tier::Memory(_))
            && self
                .opts
                .max_buffer
                .is_some_and(|threshold| self.len.saturating_add(requested) > threshold)
        {
            self.spill()?;
        }

        let written = match &mut self.tier {
            Tier::Memory(mem) => {
                mem.extend_from_slice(buf);
                Ok(())
            }
            Tier::Disk(file) => file.as_file_mut().write_all(buf),
            Tier::Released => return Err(SpoolError::IllegalState("append after release")),
        };
        if let Err(e) = written {
            // A half-written file is not replayable; the buffer is done.
            self.release();
            return Err(SpoolError::Io(e));
        }

        self.len += requested;
        Ok(())
    }

    /// Pull `source` to exhaustion, appending everything read.
    ///
    /// Reads in bounded chunks so large sources never materialize in
    /// memory beyond the chunk. Returns the number of bytes transferred.
    pub fn read_from<R: Read>(&mut self, source: &mut R) -> Result<u64> {
        self.read_from_inner(source, None)
    }

    /// Like [`SpillBuffer::read_from`], stopping after `max_len` bytes.
    ///
    /// A source that runs dry earlier is normal termination: the actual
    /// transferred count is returned.
    pub fn read_from_limited<R: Read>(&mut self, source: &mut R, max_len: u64) -> Result<u64> {
        self.read_from_inner(source, Some(max_len))
    }

    fn read_from_inner<R: Read>(&mut self, source: &mut R, max_len: Option<u64>) -> Result<u64> {
        let mut chunk = vec![0u8; COPY_CHUNK];
        let mut transferred = 0u64;

        loop {
            let want = match max_len {
                Some(limit) => {
                    let remaining = limit - transferred;
                    if remaining == 0 {
                        break;
                    }
                    remaining.min(COPY_CHUNK as u64) as usize
                }
                None => COPY_CHUNK,
            };
            let n = match source.read(&mut chunk[..want]) {
                Ok(0) => break,
                Ok(n) => n,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(SpoolError::Io(e)),
            };
            self.append(&chunk[..n])?;
            transferred += n as u64;
        }

        Ok(transferred)
    }

    /// A fresh read cursor over everything captured so far.
    ///
    /// Each call returns an independent cursor starting at byte 0;
    /// cursors do not interfere with each other. The shared borrow keeps
    /// the buffer immutable for as long as any cursor lives.
    pub fn replay(&self) -> Result<Replay<'_>> {
        match &self.tier {
            Tier::Memory(mem) => Ok(Replay::from_memory(mem)),
            Tier::Disk(file) => {
                let handle = file.reopen().map_err(SpoolError::Io)?;
                Ok(Replay::from_file(handle))
            }
            Tier::Released => Err(SpoolError::IllegalState("replay after release")),
        }
    }

    /// Materialize the full capture as one contiguous allocation.
    ///
    /// Convenience for small payloads; a spilled buffer is read back
    /// from disk in full, so prefer [`SpillBuffer::replay`] or
    /// [`SpillBuffer::copy_to`] when the capture may be large.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(self.len as usize);
        self.replay()?.read_to_end(&mut out).map_err(SpoolError::Io)?;
        Ok(out)
    }

    /// Stream the full capture into `dest` without materializing it.
    ///
    /// Returns the number of bytes copied.
    pub fn copy_to<W: Write>(&self, dest: &mut W) -> Result<u64> {
        let mut replay = self.replay()?;
        io::copy(&mut replay, dest).map_err(SpoolError::Io)
    }

    /// Release the memory region or delete the backing file.
    ///
    /// Idempotent. File removal is best effort; a leftover file on a
    /// failing filesystem is not surfaced. Subsequent appends and
    /// replays fail with [`SpoolError::IllegalState`]. Also runs on
    /// drop.
    pub fn release(&mut self) {
        match std::mem::replace(&mut self.tier, Tier::Released) {
            Tier::Memory(_) | Tier::Released => {}
            Tier::Disk(file) => {
                tracing::trace!(path = %file.path().display(), "removing spool file");
                let _ = file.close();
            }
        }
    }

    fn spill(&mut self) -> Result<()> {
        let mem = match std::mem::replace(&mut self.tier, Tier::Released) {
            Tier::Memory(mem) => mem,
            other => {
                self.tier = other;
                return Err(SpoolError::IllegalState("spill from non-memory tier"));
            }
        };

        tracing::debug!(buffered = mem.len(), "spilling capture buffer to disk");

        // Error paths leave the tier Released: a buffer that failed to
        // spill is unusable and must be discarded.
        let mut file = match &self.opts.spool_dir {
            Some(dir) => NamedTempFile::new_in(dir),
            None => NamedTempFile::new(),
        }
        .map_err(SpoolError::Io)?;
        file.as_file_mut().write_all(&mem).map_err(SpoolError::Io)?;

        self.tier = Tier::Disk(file);
        Ok(())
    }
}

impl Write for SpillBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf).map_err(SpoolError::into_io)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.tier {
            Tier::Disk(file) => file.as_file_mut().flush(),
            _ => Ok(()),
        }
    }
}

impl Drop for SpillBuffer {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_roundtrip() {
        let mut buffer = SpillBuffer::with_defaults();
        buffer.append(b"hello world").unwrap();

        assert_eq!(buffer.len(), 11);
        assert!(!buffer.is_spilled());
        assert_eq!(buffer.as_slice(), Some(&b"hello world"[..]));
        assert_eq!(buffer.to_bytes().unwrap(), b"hello world");
    }

    #[test]
    fn test_spill_on_threshold_crossing() {
        let mut buffer = SpillBuffer::new(SpoolOptions::new().max_buffer(4));
        buffer.append(&[1, 2, 3, 4]).unwrap();
        assert!(!buffer.is_spilled());

        // Exactly on the threshold stays in memory; crossing it spills.
        buffer.push(5).unwrap();
        assert!(buffer.is_spilled());
        assert!(buffer.as_slice().is_none());
        assert!(buffer.file_path().is_some());
        assert_eq!(buffer.to_bytes().unwrap(), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_capacity_worked_example() {
        // max_buffer = 4, max_size = 10: write 6, fail on 5 more, accept 4.
        let mut buffer = SpillBuffer::new(SpoolOptions::new().max_buffer(4).max_size(10));
        buffer.append(&[1, 2, 3, 4, 5, 6]).unwrap();
        assert!(buffer.is_spilled());
        assert_eq!(buffer.len(), 6);

        let err = buffer.append(&[7; 5]).unwrap_err();
        assert!(err.is_capacity());
        assert_eq!(buffer.len(), 6);

        buffer.append(&[7; 4]).unwrap();
        assert_eq!(buffer.len(), 10);
        assert_eq!(buffer.to_bytes().unwrap(), [1, 2, 3, 4, 5, 6, 7, 7, 7, 7]);
    }

    #[test]
    fn test_empty_append_never_spills() {
        let mut buffer = SpillBuffer::new(SpoolOptions::new().max_buffer(0));
        buffer.append(b"").unwrap();
        assert!(!buffer.is_spilled());

        buffer.append(b"x").unwrap();
        assert!(buffer.is_spilled());
    }

    #[test]
    fn test_release_is_terminal_and_idempotent() {
        let mut buffer = SpillBuffer::new(SpoolOptions::new().max_buffer(0));
        buffer.append(b"data").unwrap();
        let path = buffer.file_path().unwrap().to_path_buf();
        assert!(path.exists());

        buffer.release();
        buffer.release();
        assert!(!path.exists());
        assert!(buffer.is_released());
        assert!(matches!(
            buffer.append(b"more"),
            Err(SpoolError::IllegalState(_))
        ));
        assert!(buffer.replay().is_err());
    }

    #[test]
    fn test_write_trait_capacity_error_is_downcastable() {
        let mut buffer = SpillBuffer::new(SpoolOptions::new().max_size(2));
        let err = Write::write(&mut buffer, b"abc").unwrap_err();
        let inner = err.get_ref().and_then(|e| e.downcast_ref::<SpoolError>());
        assert!(matches!(inner, Some(SpoolError::Capacity { .. })));
    }
}
