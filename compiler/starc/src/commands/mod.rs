//! Command handlers for the `star` CLI.
//!
//! Each submodule implements one command. The shared file loader lives here
//! in the module root.

use star_lexer::{LoadError, ScanError, Tokenizer};

mod check;
mod lex;

pub use check::{check_file, check_summary};
pub use lex::{lex_file, lex_text, listing, write_json, write_table, Listing, TokenRecord};

/// Load a file into a fresh session, exiting with a readable message on failure.
pub(crate) fn load_file(path: &str) -> Tokenizer {
    match Tokenizer::from_file(path) {
        Ok(tokenizer) => tokenizer,
        Err(err) => {
            eprintln!("{}", load_error_message(&err));
            std::process::exit(1);
        }
    }
}

/// One-line description of a load failure.
pub fn load_error_message(err: &LoadError) -> String {
    let path = err.path().display();
    match err {
        LoadError::Io { source, .. } => match source.kind() {
            std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            _ => err.to_string(),
        },
        LoadError::ShortRead { .. } | LoadError::TooLarge { .. } => err.to_string(),
    }
}

/// Format a scan error as `name:line: error: kind`.
pub fn scan_error_message(name: &str, err: &ScanError) -> String {
    format!("{name}:{}: error: {}", err.line, err.kind)
}
