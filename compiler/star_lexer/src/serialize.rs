//! Writing token values back out in NMR-STAR syntax.
//!
//! The output re-tokenizes to the same value and delineator. Whitespace
//! around the value is not preserved byte for byte.

use star_lexer_core::Delineator;

/// Wrap `value` in the delimiters its `delineator` calls for.
///
/// - `Bare`: the value as-is.
/// - `SingleQuote` / `DoubleQuote`: the value between matching quotes.
/// - `SemicolonBlock`: `;` on its own line, the value, then `;` on its own
///   line followed by a newline.
///
/// The caller picks a delineator that can hold the value: a bare value
/// without whitespace, a quoted value without a newline or a closing quote
/// followed by whitespace, a block value without a line starting with `;`.
/// Tokenizer output fits the delineator it reported, with one exception: a
/// bare word that starts with `;` and directly follows a block is reported
/// as a block but cannot be written as one.
pub fn quote_value(value: &[u8], delineator: Delineator) -> Vec<u8> {
    match delineator {
        Delineator::Bare => value.to_vec(),
        Delineator::SingleQuote | Delineator::DoubleQuote => {
            let quote = delineator.quote_byte().unwrap_or(b'\'');
            let mut out = Vec::with_capacity(value.len() + 2);
            out.push(quote);
            out.extend_from_slice(value);
            out.push(quote);
            out
        }
        Delineator::SemicolonBlock => {
            let mut out = Vec::with_capacity(value.len() + 5);
            out.extend_from_slice(b";\n");
            out.extend_from_slice(value);
            out.extend_from_slice(b"\n;\n");
            out
        }
    }
}
