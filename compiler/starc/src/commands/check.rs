//! The `check` command: verify that a file tokenizes cleanly.

use star_lexer::Tokenizer;

use super::{load_file, scan_error_message};

/// Scan the whole source and describe the outcome.
///
/// `Ok` carries the summary line for stdout, `Err` the diagnostic for stderr.
pub fn check_summary(tokenizer: &mut Tokenizer) -> Result<String, String> {
    let name = tokenizer.source_name().to_owned();
    match tokenizer.next_token_list() {
        Ok(tokens) => Ok(format!("{name}: {} tokens", tokens.len())),
        Err(err) => Err(scan_error_message(&name, &err)),
    }
}

/// Check the file at `path`, exiting with status 1 on a scan error.
pub fn check_file(path: &str) {
    let mut tokenizer = load_file(path);
    match check_summary(&mut tokenizer) {
        Ok(summary) => println!("{summary}"),
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}
