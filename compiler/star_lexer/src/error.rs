//! Load and scan errors.
//!
//! Loading can fail on I/O; scanning can fail on malformed quoting. Both are
//! returned directly from the call that failed. Nothing is recorded on the
//! side for later inspection.

use std::path::PathBuf;

use star_lexer_core::RawTag;
use thiserror::Error;

/// Failure to read a source file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened, stat'ed, or read.
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fewer bytes were read than the file's reported size.
    #[error("short read of '{}': expected {expected} bytes, read {actual}", .path.display())]
    ShortRead {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },

    /// The file is larger than a source buffer can address.
    #[error("'{}' is too large to tokenize ({len} bytes)", .path.display())]
    TooLarge { path: PathBuf, len: u64 },
}

impl LoadError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::ShortRead { path, .. } | Self::TooLarge { path, .. } => {
                path
            }
        }
    }
}

/// What kind of malformed input stopped the scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ScanErrorKind {
    #[error("single-quoted value not terminated")]
    UnterminatedSingleQuote,
    #[error("double-quoted value not terminated")]
    UnterminatedDoubleQuote,
    #[error("semicolon-delimited value not terminated")]
    UnterminatedBlock,
    #[error("single-quoted value not terminated on the same line it began")]
    MultilineSingleQuote,
    #[error("double-quoted value not terminated on the same line it began")]
    MultilineDoubleQuote,
}

impl ScanErrorKind {
    /// Map a scanner error tag to its kind. `None` for non-error tags.
    pub fn from_tag(tag: RawTag) -> Option<Self> {
        match tag {
            RawTag::UnterminatedSingleQuote => Some(Self::UnterminatedSingleQuote),
            RawTag::UnterminatedDoubleQuote => Some(Self::UnterminatedDoubleQuote),
            RawTag::UnterminatedBlock => Some(Self::UnterminatedBlock),
            RawTag::MultilineSingleQuote => Some(Self::MultilineSingleQuote),
            RawTag::MultilineDoubleQuote => Some(Self::MultilineDoubleQuote),
            RawTag::Word
            | RawTag::SingleQuoted
            | RawTag::DoubleQuoted
            | RawTag::SemicolonBlock
            | RawTag::Eof => None,
        }
    }
}

/// Malformed input, located by the 1-based line where the offending
/// construct began.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{kind} (line {line})")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub line: u32,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, line: u32) -> Self {
        Self { kind, line }
    }
}
