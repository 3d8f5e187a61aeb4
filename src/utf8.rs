// src/utf8.rs
//! Incremental, permissive UTF-8 decoding.
//!
//! Text runs arrive as raw byte strings. The decoder classifies only the
//! leading byte of each sequence; continuation bytes contribute their low
//! six bits without further validation. A byte that is not a valid leading
//! byte, or a multi-byte sequence cut off by the end of input, decodes to
//! one U+FFFD and advances exactly one byte, so malformed input can never
//! stall or overrun the decode loop.

/// The Unicode replacement scalar substituted for malformed input.
pub const REPLACEMENT: u32 = 0xFFFD;

/// Decode the scalar starting at `offset`, returning it together with the
/// number of bytes consumed. `None` once `offset` reaches the end.
pub fn decode_next(bytes: &[u8], offset: usize) -> Option<(u32, usize)> {
    let first = *bytes.get(offset)?;
    let rest = &bytes[offset + 1..];

    let (len, mut scalar) = if first < 0x80 {
        return Some((first as u32, 1));
    } else if first & 0xE0 == 0xC0 {
        (2, (first & 0x1F) as u32)
    } else if first & 0xF0 == 0xE0 {
        (3, (first & 0x0F) as u32)
    } else if first & 0xF8 == 0xF0 {
        (4, (first & 0x07) as u32)
    } else {
        return Some((REPLACEMENT, 1));
    };

    if rest.len() < len - 1 {
        // Truncated sequence: resynchronize one byte at a time.
        return Some((REPLACEMENT, 1));
    }
    for &b in &rest[..len - 1] {
        scalar = (scalar << 6) | (b & 0x3F) as u32;
    }
    Some((scalar, len))
}

/// Lazy iterator over the scalars of a byte string.
///
/// Wraps [`decode_next`] so a run can be walked, paused, and restarted at a
/// byte offset.
#[derive(Debug, Clone)]
pub struct Scalars<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Scalars<'a> {
    /// Current byte offset into the run.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl Iterator for Scalars<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let (scalar, len) = decode_next(self.bytes, self.offset)?;
        self.offset += len;
        Some(scalar)
    }
}

/// Iterate the scalars of `bytes` from the start.
pub fn scalars(bytes: &[u8]) -> Scalars<'_> {
    Scalars { bytes, offset: 0 }
}
