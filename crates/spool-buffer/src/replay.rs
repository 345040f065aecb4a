use std::fs::File;
use std::io::{self, Cursor, Read};

/// Sequential read cursor over everything a buffer has captured.
///
/// Starts at byte 0 and reads through to the end, whichever tier holds
/// the data. Cursors are independent: several may coexist, each with its
/// own position. The borrow on the owning buffer keeps writes and
/// release out of the picture while any cursor is alive.
pub struct Replay<'a> {
    inner: ReplayInner<'a>,
}

enum ReplayInner<'a> {
    Memory(Cursor<&'a [u8]>),
    Disk(File),
}

impl<'a> Replay<'a> {
    pub(crate) fn from_memory(bytes: &'a [u8]) -> Self {
        Self {
            inner: ReplayInner::Memory(Cursor::new(bytes)),
        }
    }

    pub(crate) fn from_file(file: File) -> Self {
        Self {
            inner: ReplayInner::Disk(file),
        }
    }
}

impl Read for Replay<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.inner {
            ReplayInner::Memory(cursor) => cursor.read(buf),
            ReplayInner::Disk(file) => file.read(buf),
        }
    }
}
