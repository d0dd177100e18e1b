//! Raw token tags and the `(tag, start, len)` token produced by the scanner.

/// What the scanner found.
///
/// Discriminants group into ranges: values `0..16`, end-of-input at `16`,
/// errors from `240`. Error conditions are tags rather than `Result::Err` so
/// the scanner stays allocation-free; `star_lexer` turns them into
/// `ScanError`s with messages and line numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Values ===
    /// Whitespace-delimited word.
    Word = 0,
    /// `'...'` value.
    SingleQuoted = 1,
    /// `"..."` value.
    DoubleQuoted = 2,
    /// `;\n ... \n;` value.
    SemicolonBlock = 3,

    // === End of input ===
    /// Source exhausted. Also produced for a trailing comment with no newline.
    Eof = 16,

    // === Errors ===
    /// No closing `'` followed by whitespace or end of input.
    UnterminatedSingleQuote = 240,
    /// No closing `"` followed by whitespace or end of input.
    UnterminatedDoubleQuote = 241,
    /// No `\n;` after a block opener.
    UnterminatedBlock = 242,
    /// Closing `'` found, but on a later line than the opener.
    MultilineSingleQuote = 243,
    /// Closing `"` found, but on a later line than the opener.
    MultilineDoubleQuote = 244,
}

impl RawTag {
    /// Returns `true` for malformed-input tags.
    pub fn is_error(self) -> bool {
        (self as u8) >= 240
    }

    /// Returns `true` for tags that carry a token value.
    pub fn is_value(self) -> bool {
        (self as u8) < 16
    }

    /// Human-readable tag name for debugging output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::SingleQuoted => "single-quoted",
            Self::DoubleQuoted => "double-quoted",
            Self::SemicolonBlock => "semicolon-block",
            Self::Eof => "eof",
            Self::UnterminatedSingleQuote => "unterminated single quote",
            Self::UnterminatedDoubleQuote => "unterminated double quote",
            Self::UnterminatedBlock => "unterminated semicolon block",
            Self::MultilineSingleQuote => "multi-line single quote",
            Self::MultilineDoubleQuote => "multi-line double quote",
        }
    }
}

/// One scanner result.
///
/// For value tags, `start..start + len` is the decoded value with quotes or
/// block delimiters stripped. For error tags, `start` is the offset of the
/// opening delimiter and `len` is zero. For `Eof`, `start` is the source
/// length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub start: u32,
    pub len: u32,
}

impl RawToken {
    /// End offset (exclusive) of the value.
    #[inline]
    pub fn end(&self) -> u32 {
        self.start + self.len
    }

    /// Offset of the token's first source byte: the opening quote or `;` of
    /// a quoted value or block, the value start otherwise.
    #[inline]
    pub fn opener(&self) -> u32 {
        match self.tag {
            RawTag::SingleQuoted | RawTag::DoubleQuoted => self.start.saturating_sub(1),
            RawTag::SemicolonBlock => self.start.saturating_sub(2),
            RawTag::Word
            | RawTag::Eof
            | RawTag::UnterminatedSingleQuote
            | RawTag::UnterminatedDoubleQuote
            | RawTag::UnterminatedBlock
            | RawTag::MultilineSingleQuote
            | RawTag::MultilineDoubleQuote => self.start,
        }
    }
}
