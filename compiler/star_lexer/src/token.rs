//! Tokens handed out by a [`Tokenizer`](crate::Tokenizer).

use std::borrow::Cow;

use star_lexer_core::Delineator;

use crate::serialize::quote_value;

/// A token borrowed from the session's buffer.
///
/// Valid until the next request on the same session; the borrow checker
/// enforces this. Use [`into_owned()`](Self::into_owned) to keep it longer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    value: &'a [u8],
    delineator: Delineator,
}

impl<'a> Token<'a> {
    pub(crate) fn new(value: &'a [u8], delineator: Delineator) -> Self {
        Self { value, delineator }
    }

    /// Decoded value with quotes or block delimiters stripped.
    pub fn value(&self) -> &'a [u8] {
        self.value
    }

    pub fn delineator(&self) -> Delineator {
        self.delineator
    }

    /// Value as text, replacing invalid UTF-8 with U+FFFD.
    pub fn text(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.value)
    }

    /// Detach from the session buffer.
    pub fn into_owned(self) -> OwnedToken {
        OwnedToken {
            value: self.value.to_vec(),
            delineator: self.delineator,
        }
    }
}

/// A token that owns its value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OwnedToken {
    pub value: Vec<u8>,
    pub delineator: Delineator,
}

impl OwnedToken {
    pub fn new(value: impl Into<Vec<u8>>, delineator: Delineator) -> Self {
        Self {
            value: value.into(),
            delineator,
        }
    }

    /// Shorthand for a [`Delineator::Bare`] token.
    pub fn bare(value: impl Into<Vec<u8>>) -> Self {
        Self::new(value, Delineator::Bare)
    }

    /// Value as text, replacing invalid UTF-8 with U+FFFD.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.value)
    }

    /// Re-serialize in NMR-STAR syntax using the recorded delineator.
    pub fn to_star(&self) -> Vec<u8> {
        quote_value(&self.value, self.delineator)
    }
}

/// Result of one successful token request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scan<'a> {
    Token(Token<'a>),
    /// No more tokens. Repeated requests keep returning this.
    EndOfStream,
}

impl<'a> Scan<'a> {
    pub fn is_end(&self) -> bool {
        matches!(self, Self::EndOfStream)
    }

    /// The token, or `None` at end of stream.
    pub fn token(self) -> Option<Token<'a>> {
        match self {
            Self::Token(token) => Some(token),
            Self::EndOfStream => None,
        }
    }
}
