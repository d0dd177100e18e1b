//! Hand-written NMR-STAR scanner producing `(RawTag, start, len)` tokens.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and never
//! allocates. Malformed input is reported through error tags, after which
//! the cursor sits at EOF so every later call returns `Eof`.
//!
//! # Rules
//!
//! - Whitespace is space, `\n`, `\t`, vertical tab.
//! - `#` at a token start begins a comment running to the next newline. A
//!   comment with no trailing newline simply ends the input.
//! - `;` immediately followed by `\n` opens a block, closed by the next
//!   `\n;`. The value excludes both the opener's and the closer's newline.
//! - `'` or `"` opens a quoted value. A matching quote only closes it when
//!   followed by whitespace or end of input; otherwise it is content. Quoted
//!   values may not span lines.
//! - Anything else is a word running to the next whitespace byte.

use crate::cursor::{is_whitespace, Cursor};
use crate::tag::{RawTag, RawToken};
use crate::Delineator;

/// Pure, allocation-free scanner.
///
/// Produces one token at a time; comments and whitespace are skipped inside
/// a single call.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Current byte offset. After a token this is where the next scan starts.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        loop {
            self.cursor.eat_whitespace();
            let start = self.cursor.pos();
            if self.cursor.is_eof() {
                return self.eof();
            }

            match self.cursor.current() {
                b'#' => {
                    if !self.cursor.eat_until_newline() {
                        return self.eof();
                    }
                }
                b';' if self.cursor.peek() == b'\n' => return self.semicolon_block(start),
                quote @ (b'\'' | b'"') => return self.quoted(start, quote),
                _ => return self.word(start),
            }
        }
    }

    // ─── EOF & Errors ──────────────────────────────────────────────

    fn eof(&self) -> RawToken {
        RawToken {
            tag: RawTag::Eof,
            start: self.cursor.pos(),
            len: 0,
        }
    }

    /// Report malformed input at `start` and park the cursor at EOF.
    fn error(&mut self, tag: RawTag, start: u32) -> RawToken {
        debug_assert!(tag.is_error());
        self.cursor.advance_to_end();
        RawToken { tag, start, len: 0 }
    }

    // ─── Semicolon Blocks ──────────────────────────────────────────

    /// Scan `;\n ... \n;`, starting at the `;`.
    ///
    /// The opener's newline may double as the closer's, so `;\n;` is an
    /// empty block.
    fn semicolon_block(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume ';', now on the opener's '\n'
        let Some(close) = self.cursor.find_block_close() else {
            return self.error(RawTag::UnterminatedBlock, start);
        };

        let value_start = start + 2;
        let value_end = close.max(value_start);
        self.cursor.advance_to(close + 2); // one past the closing ';'
        RawToken {
            tag: RawTag::SemicolonBlock,
            start: value_start,
            len: value_end - value_start,
        }
    }

    // ─── Quoted Values ─────────────────────────────────────────────

    /// Scan a quoted value, starting at the opening quote.
    fn quoted(&mut self, start: u32, quote: u8) -> RawToken {
        let (value_tag, unterminated, multiline) = match Delineator::from_quote(quote) {
            Some(Delineator::DoubleQuote) => (
                RawTag::DoubleQuoted,
                RawTag::UnterminatedDoubleQuote,
                RawTag::MultilineDoubleQuote,
            ),
            _ => (
                RawTag::SingleQuoted,
                RawTag::UnterminatedSingleQuote,
                RawTag::MultilineSingleQuote,
            ),
        };

        self.cursor.advance(); // consume opening quote
        loop {
            let Some(close) = self.cursor.find(quote) else {
                return self.error(unterminated, start);
            };
            self.cursor.advance_to(close + 1);

            // A quote followed by anything but whitespace is content.
            if self.cursor.is_eof() || is_whitespace(self.cursor.current()) {
                if self.cursor.has_newline(start, close + 1) {
                    return self.error(multiline, start);
                }
                return RawToken {
                    tag: value_tag,
                    start: start + 1,
                    len: close - start - 1,
                };
            }
        }
    }

    // ─── Words ─────────────────────────────────────────────────────

    fn word(&mut self, start: u32) -> RawToken {
        let end = self.cursor.find_whitespace();
        // Step over the terminating whitespace byte too; clamped at EOF.
        self.cursor.advance_to(end.saturating_add(1));
        RawToken {
            tag: RawTag::Word,
            start,
            len: end - start,
        }
    }
}

#[cfg(test)]
mod tests;
