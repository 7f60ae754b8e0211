//! Chunked byte copy with a reusable buffer.
//!
//! Every extracted entry is streamed through the same [`CopyBuffer`], which
//! lives as long as one top-level scan.

use std::io::Read;
use std::io::Write;
use std::io::{self};

use crate::ScanError;

/// Size of one copy chunk (64KB).
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Fixed-size buffer reused across entry copies.
///
/// # Examples
///
/// ```no_run
/// # use jarprobe_core::copy::{CopyBuffer, copy_with_buffer};
/// # use jarprobe_core::ScanError;
/// # fn example() -> Result<(), ScanError> {
/// let mut buffer = CopyBuffer::new();
/// let mut input = std::fs::File::open("input.bin")?;
/// let mut output = std::fs::File::create("output.bin")?;
///
/// let bytes_copied = copy_with_buffer(&mut input, &mut output, &mut buffer)?;
/// println!("Copied {bytes_copied} bytes");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CopyBuffer {
    buf: Box<[u8]>,
}

impl CopyBuffer {
    /// Creates a new zeroed copy buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; COPY_BUFFER_SIZE].into_boxed_slice(),
        }
    }
}

impl Default for CopyBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies `reader` into `writer` chunk by chunk until the reader is
/// exhausted, returning the number of bytes copied.
///
/// Interrupted reads are retried.
///
/// # Errors
///
/// Returns [`ScanError::Io`] on the first read or write failure; bytes
/// already written stay in `writer`.
#[inline]
pub fn copy_with_buffer<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
    buffer: &mut CopyBuffer,
) -> Result<u64, ScanError> {
    let mut total: u64 = 0;

    loop {
        let bytes_read = match reader.read(&mut buffer.buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ScanError::Io(e)),
        };

        writer.write_all(&buffer.buf[..bytes_read])?;
        total = total.saturating_add(bytes_read as u64);
    }

    Ok(total)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_copy_buffer_size() {
        assert_eq!(CopyBuffer::new().buf.len(), 64 * 1024);
        assert_eq!(CopyBuffer::default().buf.len(), 64 * 1024);
    }

    #[test]
    fn test_copy_empty_source() {
        let mut buffer = CopyBuffer::new();
        let mut input = Cursor::new(Vec::<u8>::new());
        let mut output = Vec::new();

        assert_eq!(copy_with_buffer(&mut input, &mut output, &mut buffer).unwrap(), 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_copy_multiple_chunks() {
        let mut buffer = CopyBuffer::new();
        let input_data: Vec<u8> = (0..COPY_BUFFER_SIZE * 3 + 1000)
            .map(|i| (i % 251) as u8)
            .collect();
        let mut input = Cursor::new(&input_data);
        let mut output = Vec::new();

        let copied = copy_with_buffer(&mut input, &mut output, &mut buffer).unwrap();
        assert_eq!(copied, input_data.len() as u64);
        assert_eq!(output, input_data);
    }

    #[test]
    fn test_copy_through_trait_object() {
        let mut buffer = CopyBuffer::new();
        let mut input = Cursor::new(b"MANIFEST".to_vec());
        let reader: &mut dyn Read = &mut input;
        let mut output = Vec::new();

        copy_with_buffer(reader, &mut output, &mut buffer).unwrap();
        assert_eq!(output, b"MANIFEST");
    }

    #[test]
    fn test_copy_with_interrupted_reads() {
        struct InterruptOnce {
            inner: Cursor<Vec<u8>>,
            interrupted: bool,
        }

        impl Read for InterruptOnce {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if !self.interrupted {
                    self.interrupted = true;
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
                }
                self.inner.read(buf)
            }
        }

        let mut reader = InterruptOnce {
            inner: Cursor::new(vec![7u8; 100]),
            interrupted: false,
        };
        let mut buffer = CopyBuffer::new();
        let mut output = Vec::new();

        let copied = copy_with_buffer(&mut reader, &mut output, &mut buffer).unwrap();
        assert_eq!(copied, 100);
    }

    #[test]
    fn test_copy_with_read_failure() {
        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::InvalidData, "corrupt deflate stream"))
            }
        }

        let mut buffer = CopyBuffer::new();
        let mut output = Vec::new();
        let result = copy_with_buffer(&mut FailingReader, &mut output, &mut buffer);

        match result {
            Err(ScanError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::InvalidData),
            other => panic!("expected I/O error, got {other:?}"),
        }
    }
}
