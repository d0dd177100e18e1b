//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content so
//! the scanner can look one byte ahead without bounds checks. The total
//! buffer size is rounded up to the next 64-byte boundary.
//!
//! Unlike C strings, the sentinel does not end the source: interior `0x00`
//! bytes are ordinary content, and every search is bounded by [`len()`]
//! rather than by the first zero byte.
//!
//! [`len()`]: SourceBuffer::len

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Owned, immutable source bytes with a zero sentinel.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Largest source a buffer holds; offsets are `u32`.
    pub const MAX_LEN: usize = u32::MAX as usize;

    /// Number of bytes of a `len`-byte source that a buffer keeps.
    #[inline]
    pub fn kept_len(len: usize) -> usize {
        len.min(Self::MAX_LEN)
    }

    /// Create a buffer from text.
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Create a buffer by copying a byte slice.
    pub fn from_bytes(source: &[u8]) -> Self {
        let source = &source[..Self::kept_len(source.len())];
        let mut buf = Vec::with_capacity(padded_len(source.len()));
        buf.extend_from_slice(source);
        Self::from_vec(buf)
    }

    /// Create a buffer that takes ownership of `bytes`, appending the
    /// sentinel and padding in place.
    ///
    /// # Source Size
    ///
    /// Sources larger than [`MAX_LEN`](Self::MAX_LEN) bytes (~4 GiB) are
    /// truncated to [`kept_len`](Self::kept_len) bytes. File loading in
    /// `star_lexer` rejects such files before they get here.
    pub fn from_vec(mut bytes: Vec<u8>) -> Self {
        bytes.truncate(Self::kept_len(bytes.len()));
        let source_len = bytes.len();
        // Zero fill writes the sentinel (buf[source_len]) and the padding.
        bytes.resize(padded_len(source_len), 0);

        Self {
            buf: bytes,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(self.as_sentinel_bytes(), self.source_len)
    }

    /// Create a [`Cursor`] positioned at `pos`.
    ///
    /// `pos` is clamped to the source length.
    pub fn cursor_at(&self, pos: u32) -> Cursor<'_> {
        let mut cursor = self.cursor();
        cursor.advance_to(pos.min(self.source_len));
        cursor
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// 1-based line number of byte offset `pos`.
    ///
    /// Counts `\n` bytes in `source[..pos]`. Recomputed from the start of the
    /// buffer on every call; `pos` past the end is clamped to the length.
    pub fn line_number(&self, pos: u32) -> u32 {
        let end = pos.min(self.source_len) as usize;
        let newlines = memchr::memchr_iter(b'\n', &self.buf[..end]).count();
        u32::try_from(newlines)
            .unwrap_or(u32::MAX)
            .saturating_add(1)
    }
}

impl Default for SourceBuffer {
    fn default() -> Self {
        Self::from_vec(Vec::new())
    }
}

/// Buffer size for `source_len` content bytes: content plus one sentinel,
/// rounded up to the next cache line.
fn padded_len(source_len: usize) -> usize {
    (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1)
}
