//! The `lex` command: print the token stream of a file or literal text.

use std::io::{self, Write};

use serde::Serialize;
use star_lexer::{Scan, ScanError, Tokenizer};

use super::{load_file, scan_error_message};

/// One token as shown by `star lex`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    /// 1-based line where the token begins (its opening quote or `;`).
    pub line: u32,
    pub delineator: &'static str,
    /// Value text; invalid UTF-8 is replaced with U+FFFD.
    pub value: String,
}

/// Every token scanned before the stream ended or an error stopped it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Listing {
    pub records: Vec<TokenRecord>,
    pub error: Option<ScanError>,
}

/// Drain `tokenizer`, keeping the tokens seen before any error.
pub fn listing(tokenizer: &mut Tokenizer) -> Listing {
    let mut records = Vec::new();
    loop {
        match tokenizer.next_token() {
            Ok(Scan::Token(token)) => {
                let value = token.text().into_owned();
                let delineator = token.delineator().name();
                records.push(TokenRecord {
                    line: tokenizer.current_line_number(),
                    delineator,
                    value,
                });
            }
            Ok(Scan::EndOfStream) => return Listing { records, error: None },
            Err(err) => {
                return Listing {
                    records,
                    error: Some(err),
                }
            }
        }
    }
}

/// Aligned `line  delineator  value` rows. Control characters in values are
/// escaped so each token stays on one row.
pub fn write_table(records: &[TokenRecord], out: &mut impl Write) -> io::Result<()> {
    for record in records {
        writeln!(
            out,
            "{:>5}  {:<15}  {}",
            record.line,
            record.delineator,
            record.value.escape_debug()
        )?;
    }
    Ok(())
}

/// One JSON object per line.
pub fn write_json(records: &[TokenRecord], out: &mut impl Write) -> io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record).map_err(io::Error::from)?;
        writeln!(out)?;
    }
    Ok(())
}

/// Tokenize the file at `path` and print its tokens.
pub fn lex_file(path: &str, json: bool) {
    let mut tokenizer = load_file(path);
    print_listing(&mut tokenizer, json);
}

/// Tokenize literal `text` and print its tokens.
pub fn lex_text(text: &str, json: bool) {
    let mut tokenizer = Tokenizer::from_string(text);
    print_listing(&mut tokenizer, json);
}

fn print_listing(tokenizer: &mut Tokenizer, json: bool) {
    let name = tokenizer.source_name().to_owned();
    let listing = listing(tokenizer);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let written = if json {
        write_json(&listing.records, &mut out)
    } else {
        writeln!(
            out,
            "Tokens for '{name}' ({} tokens):",
            listing.records.len()
        )
        .and_then(|()| write_table(&listing.records, &mut out))
    };
    if let Err(err) = written.and_then(|()| out.flush()) {
        eprintln!("error: cannot write output: {err}");
        std::process::exit(1);
    }

    if let Some(err) = listing.error {
        eprintln!("{}", scan_error_message(&name, &err));
        std::process::exit(1);
    }
}
