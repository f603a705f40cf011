// Append-only output buffer for assembling delta records.

use super::base64::{self, MAX_INT_LEN};

/// A growable byte buffer the encoder appends records to.
#[derive(Default)]
pub struct DeltaWriter {
    buf: Vec<u8>,
}

impl DeltaWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: Vec::with_capacity(cap),
        }
    }

    /// Append a single byte (record terminators and operators).
    #[inline]
    pub fn put_byte(&mut self, b: u8) {
        self.buf.push(b);
    }

    /// Append `v` as base-64 digits, most significant first.
    pub fn put_int(&mut self, v: u64) {
        let mut scratch = [0u8; MAX_INT_LEN];
        let len = base64::encode_u64(v, &mut scratch);
        self.buf.extend_from_slice(&scratch[MAX_INT_LEN - len..]);
    }

    /// Append a byte slice verbatim (insert literals, copied source runs).
    #[inline]
    pub fn put_slice(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the writer, yielding the assembled delta.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_int_writes_msb_first() {
        let mut w = DeltaWriter::new();
        w.put_int(65);
        assert_eq!(w.into_bytes(), b"11");
    }

    #[test]
    fn put_int_zero() {
        let mut w = DeltaWriter::new();
        w.put_int(0);
        assert_eq!(w.into_bytes(), b"0");
    }

    #[test]
    fn records_concatenate() {
        let mut w = DeltaWriter::new();
        w.put_int(3);
        w.put_byte(b':');
        w.put_slice(b"abc");
        assert_eq!(w.into_bytes(), b"3:abc");
    }
}
