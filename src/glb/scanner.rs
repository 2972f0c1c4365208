//! Byte-pattern search over a borrowed buffer.
//!
//! The extraction path never tokenizes JSON. The keys it needs are fixed
//! literals, so it slides a window over the chunk bytes looking for those
//! exact sequences, then delimits the value with a single-byte search. All
//! positions are tracked by re-slicing; there is no pointer arithmetic and
//! no way to read past the end of the buffer.

use byteorder::{ByteOrder, LittleEndian};

/// A bounds-checked view over the remaining bytes of a buffer.
///
/// Cheap to copy; advancing one cursor never affects another. The buffer's
/// owner must outlive every cursor derived from it, which the borrow checker
/// enforces through the lifetime parameter.
#[derive(Debug, Clone, Copy)]
pub struct Scan<'a> {
    rest: &'a [u8],
}

impl<'a> Scan<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { rest: buf }
    }

    /// Bytes left to scan.
    pub fn remaining(&self) -> usize {
        self.rest.len()
    }

    /// The remaining bytes as a slice.
    pub fn rest(&self) -> &'a [u8] {
        self.rest
    }

    /// Advance past `n` bytes. If fewer than `n` remain the cursor drains
    /// to the end and this returns `false`; it never reads out of bounds.
    pub fn advance(&mut self, n: usize) -> bool {
        if n > self.rest.len() {
            self.rest = &self.rest[self.rest.len()..];
            return false;
        }
        self.rest = &self.rest[n..];
        true
    }

    /// Restrict the view to the first `n` remaining bytes (or all of them
    /// if fewer are present). Used to confine field scans to the declared
    /// JSON chunk length so they cannot run into the binary payload.
    pub fn truncate(&mut self, n: usize) {
        if n < self.rest.len() {
            self.rest = &self.rest[..n];
        }
    }

    /// Read a little-endian u32 and advance past it.
    pub fn read_u32_le(&mut self) -> Option<u32> {
        if self.rest.len() < 4 {
            return None;
        }
        let value = LittleEndian::read_u32(&self.rest[..4]);
        self.rest = &self.rest[4..];
        Some(value)
    }

    /// Slide forward until the remaining bytes start with `pattern`,
    /// stopping at the match start. Returns `false` once fewer than
    /// `pattern.len()` bytes remain without a match.
    pub fn find(&mut self, pattern: &[u8]) -> bool {
        while self.rest.len() >= pattern.len() {
            if self.rest.starts_with(pattern) {
                return true;
            }
            self.rest = &self.rest[1..];
        }
        false
    }

    /// Single-byte specialization of [`find`](Self::find).
    pub fn find_byte(&mut self, byte: u8) -> bool {
        while let Some((&first, tail)) = self.rest.split_first() {
            if first == byte {
                return true;
            }
            self.rest = tail;
        }
        false
    }

    /// Distance scanned since `earlier`, which must be a cursor over the
    /// same buffer at an equal or earlier position.
    pub fn distance_from(&self, earlier: &Scan<'a>) -> usize {
        earlier.rest.len() - self.rest.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_stops_at_match_start() {
        let mut scan = Scan::new(b"xxx\"meta\":{}");
        assert!(scan.find(b"\"meta\":"));
        assert_eq!(scan.remaining(), 9);
        assert!(scan.rest().starts_with(b"\"meta\":"));
    }

    #[test]
    fn find_at_buffer_start() {
        let mut scan = Scan::new(b"\"meta\":{}");
        assert!(scan.find(b"\"meta\":"));
        assert_eq!(scan.remaining(), 9);
    }

    #[test]
    fn find_rejects_single_byte_near_misses_at_every_offset() {
        let pattern = b"\"exporterVersion\":\"";
        for corrupt_at in 0..pattern.len() {
            let mut haystack = Vec::from(b"junk".as_slice());
            haystack.extend_from_slice(pattern);
            haystack.extend_from_slice(b"1.0\"");
            haystack[4 + corrupt_at] ^= 0x01;

            let mut scan = Scan::new(&haystack);
            assert!(
                !scan.find(pattern),
                "corruption at offset {corrupt_at} still matched"
            );
        }
    }

    #[test]
    fn find_fails_when_buffer_ends_mid_pattern() {
        let pattern = b"\"meta\":";
        let mut scan = Scan::new(&pattern[..pattern.len() - 1]);
        assert!(!scan.find(pattern));
        assert!(scan.remaining() < pattern.len());
    }

    #[test]
    fn find_on_empty_buffer() {
        let mut scan = Scan::new(b"");
        assert!(!scan.find(b"x"));
        assert!(!scan.find_byte(b'x'));
    }

    #[test]
    fn find_byte_drains_on_miss() {
        let mut scan = Scan::new(b"abcdef");
        assert!(!scan.find_byte(b'"'));
        assert_eq!(scan.remaining(), 0);
    }

    #[test]
    fn advance_fails_closed() {
        let mut scan = Scan::new(b"abcd");
        assert!(scan.advance(4));
        assert!(!scan.advance(1));
        assert_eq!(scan.remaining(), 0);

        let mut scan = Scan::new(b"ab");
        assert!(!scan.advance(5));
        assert_eq!(scan.remaining(), 0);
    }

    #[test]
    fn truncate_confines_the_view() {
        let mut scan = Scan::new(b"json-part\"meta\":bin-part");
        scan.truncate(9);
        assert!(!scan.find(b"\"meta\":"));

        // Truncating past the end is a no-op
        let mut scan = Scan::new(b"ab");
        scan.truncate(100);
        assert_eq!(scan.remaining(), 2);
    }

    #[test]
    fn read_u32_le_checks_bounds() {
        let mut scan = Scan::new(&[0x2a, 0x00, 0x00, 0x00, 0xff]);
        assert_eq!(scan.read_u32_le(), Some(42));
        assert_eq!(scan.remaining(), 1);
        assert_eq!(scan.read_u32_le(), None);
    }

    #[test]
    fn distance_tracks_bytes_scanned() {
        let scan = Scan::new(b"0123456789");
        let mut moved = scan;
        moved.advance(3);
        assert!(moved.find_byte(b'7'));
        assert_eq!(moved.distance_from(&scan), 7);
    }

    #[test]
    fn copies_advance_independently() {
        let mut a = Scan::new(b"abcdef");
        let b = a;
        a.advance(3);
        assert_eq!(a.remaining(), 3);
        assert_eq!(b.remaining(), 6);
    }
}
