//! NMR-STAR token inspector CLI.

use starc::commands::{check_file, lex_file, lex_text};

fn main() {
    starc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let mut json = false;
            let mut text = None;
            let mut path = None;
            let mut rest = args.iter().skip(2);
            while let Some(arg) = rest.next() {
                if arg == "--json" {
                    json = true;
                } else if arg == "-e" || arg == "--expr" {
                    let Some(value) = rest.next() else {
                        eprintln!("error: '{arg}' needs a text argument");
                        std::process::exit(1);
                    };
                    text = Some(value.as_str());
                } else if !arg.starts_with('-') && path.is_none() {
                    path = Some(arg.as_str());
                } else {
                    eprintln!("error: unexpected argument '{arg}'");
                    std::process::exit(1);
                }
            }

            match (text, path) {
                (Some(text), None) => lex_text(text, json),
                (None, Some(path)) => lex_file(path, json),
                _ => {
                    eprintln!("Usage: star lex <file.str> [--json]");
                    eprintln!("       star lex -e <text> [--json]");
                    std::process::exit(1);
                }
            }
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: star check <file.str>");
                std::process::exit(1);
            }
            check_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("star {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("NMR-STAR token inspector");
    println!();
    println!("Usage: star <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.str>      Tokenize a file and display its tokens");
    println!("  lex -e <text>       Tokenize literal text");
    println!("  check <file.str>    Verify a file tokenizes cleanly");
    println!("  help                Show this help message");
    println!("  version             Show version information");
    println!();
    println!("Lex options:");
    println!("  --json              One JSON object per token");
    println!();
    println!("Environment:");
    println!("  RUST_LOG            Enable tracing, e.g. RUST_LOG=star_lexer=trace");
    println!();
    println!("Examples:");
    println!("  star lex bmr15000_3.str");
    println!("  star lex -e \"_Entry.ID 15000\" --json");
    println!("  star check bmr15000_3.str");
}
