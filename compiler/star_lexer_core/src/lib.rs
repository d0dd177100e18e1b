//! Low-level scanner for NMR-STAR text.
//!
//! This crate turns a byte buffer into raw token boundaries. It knows the
//! NMR-STAR lexical rules (whitespace, `#` comments, quoted values,
//! semicolon-delimited blocks) but nothing about sessions, error messages,
//! or logging. Those live in `star_lexer`.
//!
//! # Layers
//!
//! - [`SourceBuffer`]: owned, sentinel-terminated copy of the source bytes.
//! - [`Cursor`]: cheap `Copy` view over the buffer with memchr-backed searches.
//! - [`RawScanner`]: produces one [`RawToken`] per call.
//! - [`Delineator`]: how a token's boundaries were marked in the source.

mod cursor;
mod delineator;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::{is_whitespace, Cursor};
pub use delineator::Delineator;
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
