//! NMR-STAR tokenizer sessions.
//!
//! A [`Tokenizer`] owns one source buffer at a time and hands out tokens on
//! request. Each token carries its decoded value and a [`Delineator`]
//! describing how it was bounded in the source (bare word, single quote,
//! double quote, semicolon block).
//!
//! ```text
//! let mut tokenizer = Tokenizer::from_string("_Entry.ID 15000");
//! while let Scan::Token(token) = tokenizer.next_token()? {
//!     println!("{} {}", token.delineator(), token.text());
//! }
//! ```
//!
//! Grouping tokens into loops, save frames, and data blocks is the job of a
//! grammar layer built on top of this crate.

mod error;
mod serialize;
mod session;
mod source;
mod token;

pub use error::{LoadError, ScanError, ScanErrorKind};
pub use serialize::quote_value;
pub use session::{tokenize, SessionState, Tokenizer};
pub use source::STRING_SOURCE_NAME;
pub use star_lexer_core::Delineator;
pub use token::{OwnedToken, Scan, Token};
