//! How a token's boundaries were marked in the source text.

use std::fmt;

/// Delineation style of a token.
///
/// `Bare` doubles as the "nothing yet" value: a fresh session reports it
/// before any token has been produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Delineator {
    /// Whitespace-delimited word.
    #[default]
    Bare,
    /// Value wrapped in `'...'`.
    SingleQuote,
    /// Value wrapped in `"..."`.
    DoubleQuote,
    /// Multi-line value between a line-leading `;` and a `\n;` terminator.
    SemicolonBlock,
}

impl Delineator {
    /// Classify a token whose value starts at byte offset `start`.
    ///
    /// Looks only at the bytes immediately before `start`:
    ///
    /// - `start == 0`: [`Bare`](Self::Bare).
    /// - preceded by `;\n`: [`SemicolonBlock`](Self::SemicolonBlock).
    /// - preceded by a quote character: that quote's kind.
    /// - anything else: [`Bare`](Self::Bare).
    ///
    /// This applies to every token, so a bare word that directly follows a
    /// block's closing `;` and a newline classifies as a block too.
    pub fn classify(source: &[u8], start: u32) -> Self {
        let start = start as usize;
        if start == 0 || start > source.len() {
            return Self::Bare;
        }
        match source[start - 1] {
            b'\n' if start >= 2 && source[start - 2] == b';' => Self::SemicolonBlock,
            b'\'' => Self::SingleQuote,
            b'"' => Self::DoubleQuote,
            _ => Self::Bare,
        }
    }

    /// Quote kind for an opening quote byte.
    pub fn from_quote(byte: u8) -> Option<Self> {
        match byte {
            b'\'' => Some(Self::SingleQuote),
            b'"' => Some(Self::DoubleQuote),
            _ => None,
        }
    }

    /// The quote byte wrapping values of this kind, if any.
    pub fn quote_byte(self) -> Option<u8> {
        match self {
            Self::SingleQuote => Some(b'\''),
            Self::DoubleQuote => Some(b'"'),
            Self::Bare | Self::SemicolonBlock => None,
        }
    }

    /// Short human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bare => "bare",
            Self::SingleQuote => "single-quote",
            Self::DoubleQuote => "double-quote",
            Self::SemicolonBlock => "semicolon-block",
        }
    }
}

impl fmt::Display for Delineator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
