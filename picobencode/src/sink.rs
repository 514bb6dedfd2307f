// SPDX-License-Identifier: Apache-2.0

use crate::error::WriteError;

/// Destination for encoded bytes.
pub(crate) trait Sink {
    /// Appends `bytes` whole, or fails without appending any of them.
    fn put(&mut self, bytes: &[u8]) -> Result<(), WriteError>;

    fn put_byte(&mut self, byte: u8) -> Result<(), WriteError> {
        self.put(&[byte])
    }

    /// Total bytes appended so far.
    fn written(&self) -> usize;
}

/// Appends into a caller-provided slice, bounds-checked.
pub(crate) struct SliceSink<'o> {
    out: &'o mut [u8],
    len: usize,
}

impl<'o> SliceSink<'o> {
    pub fn new(out: &'o mut [u8]) -> Self {
        Self { out, len: 0 }
    }
}

impl Sink for SliceSink<'_> {
    fn put(&mut self, bytes: &[u8]) -> Result<(), WriteError> {
        let full = WriteError::BufferFull { written: self.len };
        let Some(end) = self.len.checked_add(bytes.len()) else {
            return Err(full);
        };
        match self.out.get_mut(self.len..end) {
            Some(dst) => {
                dst.copy_from_slice(bytes);
                self.len = end;
                Ok(())
            }
            None => Err(full),
        }
    }

    fn written(&self) -> usize {
        self.len
    }
}

/// Counts bytes without storing them.
#[derive(Default)]
pub(crate) struct CountingSink {
    len: usize,
}

impl Sink for CountingSink {
    fn put(&mut self, bytes: &[u8]) -> Result<(), WriteError> {
        self.len = self.len.saturating_add(bytes.len());
        Ok(())
    }

    fn written(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_sink_fills_exactly() {
        let mut buf = [0u8; 4];
        let mut sink = SliceSink::new(&mut buf);
        assert_eq!(sink.put(b"ab"), Ok(()));
        assert_eq!(sink.put_byte(b':'), Ok(()));
        assert_eq!(sink.put_byte(0), Ok(()));
        assert_eq!(sink.written(), 4);
        assert_eq!(sink.put_byte(b'x'), Err(WriteError::BufferFull { written: 4 }));
        assert_eq!(&buf, b"ab:\x00");
    }

    #[test]
    fn test_slice_sink_rejects_partial_put() {
        let mut buf = [0u8; 3];
        let mut sink = SliceSink::new(&mut buf);
        assert_eq!(sink.put(b"a"), Ok(()));
        assert_eq!(sink.put(b"bcd"), Err(WriteError::BufferFull { written: 1 }));
        assert_eq!(sink.written(), 1);
    }

    #[test]
    fn test_counting_sink() {
        let mut sink = CountingSink::default();
        sink.put(b"hello").unwrap();
        sink.put_byte(b'e').unwrap();
        assert_eq!(sink.written(), 6);
    }
}
