//! Byte transfer primitives
//!
//! [`copy`] is the one helper in this crate that propagates I/O failures to
//! the caller; everything else that touches a stream builds on it and
//! absorbs errors into logged defaults.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use tracing::warn;

/// Transfer chunk size for [`copy`] and [`to_byte_array`] (4KB).
pub const DEFAULT_BUFFER_SIZE: usize = 4 * 1024;

/// Copy bytes from `input` to `output` until end-of-stream.
///
/// Reads up to [`DEFAULT_BUFFER_SIZE`] bytes at a time and writes the exact
/// slice read. Returns the total number of bytes transferred.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// let mut input = Cursor::new(b"payload".to_vec());
/// let mut output = Vec::new();
/// let copied = datakit::io::copy(&mut input, &mut output).unwrap();
/// assert_eq!(copied, 7);
/// assert_eq!(output, b"payload");
/// ```
pub fn copy<R, W>(input: &mut R, output: &mut W) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buffer = vec![0u8; DEFAULT_BUFFER_SIZE];
    let mut total = 0u64;

    loop {
        let n = input.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        output.write_all(&buffer[..n])?;
        total += n as u64;
    }

    Ok(total)
}

/// Drain a reader fully into an in-memory buffer.
///
/// The reader is borrowed, not consumed; releasing it stays the caller's
/// responsibility.
pub fn to_byte_array<R>(input: &mut R) -> io::Result<Vec<u8>>
where
    R: Read + ?Sized,
{
    let mut output = Vec::new();
    copy(input, &mut output)?;
    Ok(output)
}

/// Resources whose release can fail.
///
/// A plain drop swallows the final flush/sync error; `close` surfaces it.
pub trait Close {
    fn close(self) -> io::Result<()>;
}

impl Close for File {
    fn close(self) -> io::Result<()> {
        self.sync_all()
    }
}

impl<W: Write> Close for BufWriter<W> {
    fn close(mut self) -> io::Result<()> {
        self.flush()
    }
}

/// Release a resource, logging any failure instead of propagating it.
///
/// For cleanup paths where a secondary failure must not mask or replace the
/// primary outcome. `None` is a no-op.
pub fn close_quietly<C: Close>(resource: Option<C>) {
    if let Some(resource) = resource {
        if let Err(err) = resource.close() {
            warn!("close failed: {err}");
        }
    }
}
