//! Tokenizer sessions.
//!
//! A session owns one source buffer and a cursor position. Loading a new
//! source replaces the buffer wholesale and resets the session. Sessions are
//! independent values; run one per concurrent parse.
//!
//! # States
//!
//! ```text
//! Fresh ──token──▶ Scanning ──token──▶ Scanning
//!   │                 │
//!   └──end/error──────┴──end──▶ Exhausted   (terminal)
//!                     └─error─▶ Errored     (terminal)
//! ```
//!
//! Both terminal states answer every further request with
//! [`Scan::EndOfStream`] without touching the buffer.

use std::path::Path;

use star_lexer_core::{Delineator, RawScanner, RawTag, SourceBuffer};

use crate::source::{Source, STRING_SOURCE_NAME};
use crate::{LoadError, OwnedToken, Scan, ScanError, ScanErrorKind, Token};

/// Lifecycle of a tokenizer session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Loaded, nothing requested yet.
    #[default]
    Fresh,
    /// At least one token produced.
    Scanning,
    /// Source consumed.
    Exhausted,
    /// Malformed input found. No further tokens are produced.
    Errored,
}

impl SessionState {
    /// Returns `true` for `Exhausted` and `Errored`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Exhausted | Self::Errored)
    }
}

/// Cursor-driven NMR-STAR tokenizer over one owned source buffer.
#[derive(Clone, Debug, Default)]
pub struct Tokenizer {
    source: Source,
    /// Where the next scan starts. Never exceeds the source length.
    pos: u32,
    /// Offset reported by `current_line_number`.
    line_pos: u32,
    delineator: Delineator,
    state: SessionState,
}

impl Tokenizer {
    /// A fresh session over an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session over `text`.
    pub fn from_string(text: &str) -> Self {
        let mut tokenizer = Self::new();
        tokenizer.load_string(text);
        tokenizer
    }

    /// A fresh session over the contents of the file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let mut tokenizer = Self::new();
        tokenizer.load_file(path)?;
        Ok(tokenizer)
    }

    /// Replace the source with the contents of the file at `path`.
    ///
    /// On failure the current session is left untouched.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        match Source::from_file(path) {
            Ok(source) => {
                self.install(source);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "load failed");
                Err(err)
            }
        }
    }

    /// Replace the source with `text`, named `<string>`.
    ///
    /// Sources are addressed with `u32` offsets. Text beyond
    /// [`SourceBuffer::MAX_LEN`] bytes is dropped with a warning; files that
    /// large are refused by [`load_file`](Self::load_file) instead.
    pub fn load_string(&mut self, text: &str) {
        self.load_bytes(text.as_bytes(), STRING_SOURCE_NAME);
    }

    /// Replace the source with arbitrary bytes under a caller-chosen name.
    ///
    /// Same size limit as [`load_string`](Self::load_string).
    pub fn load_bytes(&mut self, bytes: &[u8], name: &str) {
        if bytes.len() > SourceBuffer::MAX_LEN {
            tracing::warn!(
                source = name,
                len = bytes.len(),
                kept = SourceBuffer::MAX_LEN,
                "source truncated"
            );
        }
        self.install(Source::from_bytes(bytes, name));
    }

    fn install(&mut self, source: Source) {
        tracing::debug!(source = %source.name, len = source.buffer.len(), "loaded source");
        self.source = source;
        self.pos = 0;
        self.line_pos = 0;
        self.delineator = Delineator::Bare;
        self.state = SessionState::Fresh;
    }

    /// Produce the next token.
    ///
    /// Returns [`Scan::EndOfStream`] once the source is consumed, and keeps
    /// returning it on every later call. Malformed input yields a
    /// [`ScanError`] once; the session is then `Errored` and behaves as
    /// exhausted.
    pub fn next_token(&mut self) -> Result<Scan<'_>, ScanError> {
        if self.state.is_terminal() {
            return Ok(Scan::EndOfStream);
        }

        let mut scanner = RawScanner::new(self.source.buffer.cursor_at(self.pos));
        let raw = scanner.next_token();
        self.pos = scanner.pos();

        if raw.tag == RawTag::Eof {
            self.line_pos = self.pos;
            self.delineator = Delineator::Bare;
            self.state = SessionState::Exhausted;
            tracing::debug!(source = %self.source.name, "end of stream");
            return Ok(Scan::EndOfStream);
        }

        if let Some(kind) = ScanErrorKind::from_tag(raw.tag) {
            self.line_pos = raw.opener();
            self.delineator = Delineator::Bare;
            self.state = SessionState::Errored;
            let err = ScanError::new(kind, self.current_line_number());
            tracing::debug!(source = %self.source.name, error = %err, "scan failed");
            return Err(err);
        }

        let bytes = self.source.buffer.as_bytes();
        self.line_pos = raw.opener();
        self.delineator = Delineator::classify(bytes, raw.start);
        self.state = SessionState::Scanning;
        tracing::trace!(
            tag = raw.tag.name(),
            start = raw.start,
            len = raw.len,
            delineator = %self.delineator,
            "token"
        );
        Ok(Scan::Token(Token::new(
            &bytes[raw.start as usize..raw.end() as usize],
            self.delineator,
        )))
    }

    /// Collect every remaining token in encounter order.
    ///
    /// Stops at end of stream, or at the first error (returned in place of
    /// the partial list).
    pub fn next_token_list(&mut self) -> Result<Vec<OwnedToken>, ScanError> {
        let mut tokens = Vec::new();
        while let Scan::Token(token) = self.next_token()? {
            tokens.push(token.into_owned());
        }
        Ok(tokens)
    }

    /// 1-based line where the most recently returned token begins.
    ///
    /// Quoted values and blocks begin at their opening quote or `;`, so a
    /// block reports the line of its opener, not of its first value line;
    /// errors report the same line for the same construct. Before the first
    /// token this is line 1, and after end of stream it is the line of the
    /// end of the source. Recounted from the start of the buffer on every
    /// call.
    pub fn current_line_number(&self) -> u32 {
        self.source.buffer.line_number(self.line_pos)
    }

    /// Delineator of the most recently returned token.
    ///
    /// `Bare` before the first token, at end of stream, and after an error.
    pub fn last_delineator(&self) -> Delineator {
        self.delineator
    }

    /// Where the session is in its lifecycle.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// File path or `<string>`; empty for a session that never loaded.
    pub fn source_name(&self) -> &str {
        &self.source.name
    }

    /// Byte offset where the next scan starts.
    pub fn position(&self) -> u32 {
        self.pos
    }
}

/// Tokenize `text` in one go.
pub fn tokenize(text: &str) -> Result<Vec<OwnedToken>, ScanError> {
    Tokenizer::from_string(text).next_token_list()
}
