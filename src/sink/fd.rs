//! File-descriptor sink (Unix)
//!
//! Writes straight through `libc::write`, bypassing stdlib buffering. Large
//! chunks are split into 32 KiB pieces so a single syscall never exceeds
//! what common kernels accept atomically for regular descriptors; any piece
//! the kernel takes only partially is a [`ShortWrite`] failure.
//!
//! [`ShortWrite`]: crate::OutputError::ShortWrite

use std::os::fd::{AsRawFd, BorrowedFd};

use crate::error::OutputError;
use crate::sink::Sink;

/// Largest byte count handed to a single `write(2)` call.
const MAX_CHUNK_SIZE: usize = 32 * 1024;

/// Sink over a borrowed Unix file descriptor.
///
/// The descriptor stays owned by the caller; the sink only advances its file
/// offset. Capacity is unbounded — running out of disk space surfaces as the
/// descriptor failing, not as a pre-flight rejection.
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
/// use std::os::fd::AsFd;
/// use flatwire::FdSink;
///
/// let file = File::create("numbers.bin")?;
/// let mut sink = FdSink::new(file.as_fd());
/// flatwire::write(&mut sink, &vec![1u64, 2, 3])?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FdSink<'a> {
    fd: BorrowedFd<'a>,
}

impl<'a> FdSink<'a> {
    /// Wrap a borrowed descriptor.
    pub fn new(fd: BorrowedFd<'a>) -> Self {
        Self { fd }
    }

    fn write_chunk(&self, mut chunk: &[u8]) -> Result<(), OutputError> {
        while !chunk.is_empty() {
            let piece = chunk.len().min(MAX_CHUNK_SIZE);
            // SAFETY: the pointer/length pair comes from a live slice and
            // the descriptor is borrowed for 'a, so it is still open.
            let ret = unsafe {
                libc::write(
                    self.fd.as_raw_fd(),
                    chunk.as_ptr() as *const libc::c_void,
                    piece,
                )
            };
            if ret < 0 {
                return Err(OutputError::Io(std::io::Error::last_os_error()));
            }
            let written = ret as usize;
            if written != piece {
                return Err(OutputError::ShortWrite {
                    written,
                    requested: piece,
                });
            }
            chunk = &chunk[piece..];
        }
        Ok(())
    }
}

impl Sink for FdSink<'_> {
    fn capacity(&self) -> usize {
        usize::MAX
    }

    fn write(&mut self, chunks: &[&[u8]]) -> Result<(), OutputError> {
        for chunk in chunks {
            self.write_chunk(chunk)?;
        }
        Ok(())
    }

    fn put(&mut self, byte: u8) -> Result<(), OutputError> {
        self.write_chunk(&[byte])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Seek, SeekFrom};
    use std::os::fd::AsFd;

    #[test]
    fn test_fd_sink_round_trips_through_file() {
        let mut file = tempfile::tempfile().unwrap();
        let mut sink = FdSink::new(file.as_fd());
        sink.write(&[b"alpha", b"beta"]).unwrap();
        sink.put(b'!').unwrap();

        let mut contents = Vec::new();
        file.seek(SeekFrom::Start(0)).unwrap();
        file.read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"alphabeta!");
    }

    #[test]
    fn test_fd_sink_chunks_large_payload() {
        // Three and a half syscall windows.
        let payload = vec![0xA5u8; MAX_CHUNK_SIZE * 3 + MAX_CHUNK_SIZE / 2];
        let mut file = tempfile::tempfile().unwrap();
        let mut sink = FdSink::new(file.as_fd());
        sink.write(&[&payload]).unwrap();

        let mut contents = Vec::new();
        file.seek(SeekFrom::Start(0)).unwrap();
        file.read_to_end(&mut contents).unwrap();
        assert_eq!(contents, payload);
    }
}
