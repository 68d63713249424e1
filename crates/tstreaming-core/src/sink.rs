//! Ready-made sinks.

use crate::print::Print;

/// Discards everything, reporting every byte as written.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Null;

impl Print for Null {
    #[inline]
    fn write(&mut self, _byte: u8) -> usize {
        1
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        bytes.len()
    }
}

#[cfg(feature = "alloc")]
impl Print for alloc::vec::Vec<u8> {
    #[inline]
    fn write(&mut self, byte: u8) -> usize {
        self.push(byte);
        1
    }

    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        self.extend_from_slice(bytes);
        bytes.len()
    }
}

/// Fixed-capacity in-memory sink. Refuses bytes once full.
///
/// Invariant: `len <= N`.
#[derive(Debug, Clone)]
pub struct ArrayBuf<const N: usize> {
    data: [u8; N],
    len: usize,
}

impl<const N: usize> ArrayBuf<N> {
    /// Create an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: [0u8; N],
            len: 0,
        }
    }

    /// Bytes written so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Contents as text, if they are valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    /// Number of bytes written.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if nothing was written.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True once the buffer refuses further bytes.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Forget the contents.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<const N: usize> Default for ArrayBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Print for ArrayBuf<N> {
    fn write(&mut self, byte: u8) -> usize {
        if self.len == N {
            return 0;
        }
        self.data[self.len] = byte;
        self.len += 1;
        1
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        let take = bytes.len().min(N - self.len);
        self.data[self.len..self.len + take].copy_from_slice(&bytes[..take]);
        self.len += take;
        take
    }
}

/// Adapts any [`std::io::Write`] into a sink. I/O errors show up as
/// refused bytes.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoPrint<W> {
    inner: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoPrint<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Flush the wrapped writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Print for IoPrint<W> {
    fn write(&mut self, byte: u8) -> usize {
        match self.inner.write_all(&[byte]) {
            Ok(()) => 1,
            Err(_) => 0,
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        let mut written = 0;
        while written < bytes.len() {
            match self.inner.write(&bytes[written..]) {
                Ok(0) => break,
                Ok(n) => written += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(_) => break,
            }
        }
        written
    }
}
