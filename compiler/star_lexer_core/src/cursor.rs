//! Cursor over a sentinel-terminated buffer.
//!
//! The cursor only moves forward. Byte reads at the current position and one
//! byte ahead never need explicit bounds checks: the sentinel (`0x00`) and
//! cache-line padding guarantee valid reads past the source content.
//!
//! Searches (`find`, `find_block_close`, `find_whitespace`, ...) are bounded
//! by the source length and use `memchr`, so interior null bytes are treated
//! as ordinary content.

/// Vertical tab. NMR-STAR counts it as whitespace.
const VT: u8 = 0x0B;

/// Returns `true` for the NMR-STAR whitespace set: space, newline, tab,
/// vertical tab.
///
/// Carriage return is deliberately absent; a lone `\r` is part of a word.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\n' | b'\t' | VT)
}

/// Forward-only cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a session can store its position and rebuild
/// a cursor on the next request.
///
/// # Invariant
///
/// `pos <= source_len`, and `buf[source_len] == 0x00`. Guaranteed by
/// [`SourceBuffer`](crate::SourceBuffer) construction and by every method
/// clamping its target to `source_len`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Returns `0x00` at EOF. At the last source byte this reads the sentinel.
    #[inline]
    pub fn peek(&self) -> u8 {
        if self.is_eof() {
            0
        } else {
            self.buf[self.pos as usize + 1]
        }
    }

    /// Advance the cursor by one byte, stopping at EOF.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// Move the cursor forward to `pos`, clamped to the source length.
    ///
    /// Moving backwards is a logic error.
    #[inline]
    pub fn advance_to(&mut self, pos: u32) {
        debug_assert!(pos >= self.pos, "cursor cannot rewind from {} to {pos}", self.pos);
        self.pos = pos.min(self.source_len);
    }

    /// Move the cursor to EOF.
    #[inline]
    pub fn advance_to_end(&mut self) {
        self.pos = self.source_len;
    }

    /// Returns `true` once every source byte has been consumed.
    ///
    /// Interior `0x00` bytes are content, so EOF is decided by position
    /// alone.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Source bytes from the current position to EOF.
    #[inline]
    fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Extract `source[start..end]`.
    ///
    /// # Contract
    ///
    /// `start <= end <= source_len`.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Advance past NMR-STAR whitespace (space, `\n`, `\t`, vertical tab).
    ///
    /// The sentinel is not whitespace, so the loop stops at EOF without a
    /// bounds check.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        while is_whitespace(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte.
    ///
    /// Returns `false` (and positions the cursor at EOF) if the rest of the
    /// source holds no newline.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining().len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline(&mut self) -> bool {
        if let Some(offset) = memchr::memchr(b'\n', self.remaining()) {
            self.pos += offset as u32;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }

    /// Absolute position of the next `byte` at or after the cursor.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining().len() <= source_len which fits in u32"
    )]
    pub fn find(&self, byte: u8) -> Option<u32> {
        memchr::memchr(byte, self.remaining()).map(|offset| self.pos + offset as u32)
    }

    /// Absolute position of the `\n` in the next `"\n;"` pair at or after the
    /// cursor. This pair closes a semicolon-delimited block.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining().len() <= source_len which fits in u32"
    )]
    pub fn find_block_close(&self) -> Option<u32> {
        memchr::memmem::find(self.remaining(), b"\n;").map(|offset| self.pos + offset as u32)
    }

    /// Absolute position of the next whitespace byte at or after the cursor,
    /// or the source length if there is none.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining().len() <= source_len which fits in u32"
    )]
    pub fn find_whitespace(&self) -> u32 {
        let remaining = self.remaining();
        // memchr3 covers three of the four whitespace bytes; a vertical tab
        // only matters ahead of its hit.
        let limit = memchr::memchr3(b' ', b'\n', b'\t', remaining).unwrap_or(remaining.len());
        let end = memchr::memchr(VT, &remaining[..limit]).unwrap_or(limit);
        self.pos + end as u32
    }

    /// Returns `true` if `source[start..end]` contains a `\n`.
    pub fn has_newline(&self, start: u32, end: u32) -> bool {
        memchr::memchr(b'\n', self.slice(start, end)).is_some()
    }
}
