use pretty_assertions::assert_eq;

use super::*;
use crate::SourceBuffer;

/// Helper: scan a source and collect `(tag, value)` pairs up to and
/// including the first `Eof` or error tag.
fn scan(source: &[u8]) -> Vec<(RawTag, Vec<u8>)> {
    let buf = SourceBuffer::from_bytes(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        let value = buf.as_bytes()[tok.start as usize..tok.end() as usize].to_vec();
        tokens.push((tok.tag, value));
        if !tok.tag.is_value() {
            break;
        }
    }
    tokens
}

/// Helper: scan and return only the tags.
fn scan_tags(source: &[u8]) -> Vec<RawTag> {
    scan(source).into_iter().map(|(tag, _)| tag).collect()
}

fn word(value: &str) -> (RawTag, Vec<u8>) {
    (RawTag::Word, value.as_bytes().to_vec())
}

fn eof() -> (RawTag, Vec<u8>) {
    (RawTag::Eof, Vec::new())
}

// === Words & Whitespace ===

#[test]
fn empty_source_is_eof() {
    assert_eq!(scan(b""), vec![eof()]);
}

#[test]
fn whitespace_only_is_eof() {
    assert_eq!(scan(b" \n\t\x0B "), vec![eof()]);
}

#[test]
fn words_split_on_whitespace() {
    assert_eq!(scan(b"a b c"), vec![word("a"), word("b"), word("c"), eof()]);
}

#[test]
fn words_split_on_every_whitespace_kind() {
    assert_eq!(
        scan(b"_Entry.ID\t15000\x0Bx\ny"),
        vec![
            word("_Entry.ID"),
            word("15000"),
            word("x"),
            word("y"),
            eof()
        ]
    );
}

#[test]
fn carriage_return_is_part_of_word() {
    assert_eq!(scan(b"a\r\nb"), vec![word("a\r"), word("b"), eof()]);
}

#[test]
fn interior_null_is_part_of_word() {
    assert_eq!(
        scan(b"a\0b c"),
        vec![(RawTag::Word, b"a\0b".to_vec()), word("c"), eof()]
    );
}

#[test]
fn embedded_quotes_and_hash_stay_in_word() {
    assert_eq!(
        scan(b"don't a#b x\"y"),
        vec![word("don't"), word("a#b"), word("x\"y"), eof()]
    );
}

#[test]
fn word_positions_are_value_offsets() {
    let buf = SourceBuffer::new("  loop_  stop_");
    let mut scanner = RawScanner::new(buf.cursor());
    let first = scanner.next_token();
    assert_eq!((first.start, first.len), (2, 5));
    assert_eq!(scanner.pos(), 8);
    let second = scanner.next_token();
    assert_eq!((second.start, second.len), (9, 5));
    assert_eq!(scanner.pos(), 14);
}

// === Comments ===

#[test]
fn comment_is_skipped() {
    assert_eq!(scan(b"# a comment\nvalue"), vec![word("value"), eof()]);
}

#[test]
fn comment_between_words() {
    assert_eq!(
        scan(b"a # note b\nc"),
        vec![word("a"), word("c"), eof()]
    );
}

#[test]
fn consecutive_comments_are_skipped_in_one_call() {
    let source = "#1\n".repeat(10_000) + "x";
    assert_eq!(scan(source.as_bytes()), vec![word("x"), eof()]);
}

#[test]
fn trailing_comment_without_newline_is_eof() {
    let buf = SourceBuffer::new("a # tail");
    let mut scanner = RawScanner::new(buf.cursor());
    assert_eq!(scanner.next_token().tag, RawTag::Word);
    let end = scanner.next_token();
    assert_eq!(end.tag, RawTag::Eof);
    assert_eq!(end.start, 8);
    assert_eq!(scanner.pos(), buf.len());
}

#[test]
fn comment_only_source_is_eof() {
    assert_eq!(scan(b"#only"), vec![eof()]);
    assert_eq!(scan(b"#only\n"), vec![eof()]);
}

// === Semicolon Blocks ===

#[test]
fn semicolon_block() {
    assert_eq!(
        scan(b";\nline one\nline two\n;"),
        vec![
            (RawTag::SemicolonBlock, b"line one\nline two".to_vec()),
            eof()
        ]
    );
}

#[test]
fn semicolon_block_keeps_blank_lines_and_indentation() {
    assert_eq!(
        scan(b";\n  a\n\n  b;c\n;\n"),
        vec![(RawTag::SemicolonBlock, b"  a\n\n  b;c".to_vec()), eof()]
    );
}

#[test]
fn empty_semicolon_blocks() {
    assert_eq!(scan(b";\n;"), vec![(RawTag::SemicolonBlock, Vec::new()), eof()]);
    assert_eq!(
        scan(b";\n\n;"),
        vec![(RawTag::SemicolonBlock, Vec::new()), eof()]
    );
}

#[test]
fn semicolon_block_cursor_lands_after_closer() {
    let buf = SourceBuffer::new(";\nx\n;y");
    let mut scanner = RawScanner::new(buf.cursor());
    let block = scanner.next_token();
    assert_eq!(block.tag, RawTag::SemicolonBlock);
    assert_eq!(scanner.pos(), 5);
    assert_eq!(scan(b";\nx\n;y")[1], word("y"));
}

#[test]
fn semicolon_block_after_word() {
    assert_eq!(
        scan(b"_Details\n;\ntext\n;\n"),
        vec![
            word("_Details"),
            (RawTag::SemicolonBlock, b"text".to_vec()),
            eof()
        ]
    );
}

#[test]
fn semicolon_without_newline_is_word() {
    assert_eq!(scan(b";"), vec![word(";"), eof()]);
    assert_eq!(scan(b"; x"), vec![word(";"), word("x"), eof()]);
    assert_eq!(scan(b";x"), vec![word(";x"), eof()]);
}

#[test]
fn unterminated_semicolon_block() {
    let buf = SourceBuffer::new("a\n;\nnever closed\n");
    let mut scanner = RawScanner::new(buf.cursor());
    assert_eq!(scanner.next_token().tag, RawTag::Word);
    let err = scanner.next_token();
    assert_eq!(err.tag, RawTag::UnterminatedBlock);
    assert_eq!(err.start, 2);
    assert_eq!(scanner.pos(), buf.len());
}

// === Quoted Values ===

#[test]
fn single_quoted() {
    assert_eq!(
        scan(b"'hello world'"),
        vec![(RawTag::SingleQuoted, b"hello world".to_vec()), eof()]
    );
}

#[test]
fn double_quoted() {
    assert_eq!(
        scan(b"\"hello world\" next"),
        vec![
            (RawTag::DoubleQuoted, b"hello world".to_vec()),
            word("next"),
            eof()
        ]
    );
}

#[test]
fn embedded_quote_not_followed_by_whitespace_is_content() {
    assert_eq!(
        scan(b"'don't stop'"),
        vec![(RawTag::SingleQuoted, b"don't stop".to_vec()), eof()]
    );
    assert_eq!(
        scan(b"'a'b'"),
        vec![(RawTag::SingleQuoted, b"a'b".to_vec()), eof()]
    );
}

#[test]
fn other_quote_kind_is_content() {
    assert_eq!(
        scan(b"\"it's 5' 2\""),
        vec![(RawTag::DoubleQuoted, b"it's 5' 2".to_vec()), eof()]
    );
}

#[test]
fn empty_quoted_values() {
    assert_eq!(
        scan(b"'' \"\""),
        vec![
            (RawTag::SingleQuoted, Vec::new()),
            (RawTag::DoubleQuoted, Vec::new()),
            eof()
        ]
    );
}

#[test]
fn quoted_cursor_lands_after_closer() {
    let buf = SourceBuffer::new("'ab' c");
    let mut scanner = RawScanner::new(buf.cursor());
    let tok = scanner.next_token();
    assert_eq!((tok.start, tok.len), (1, 2));
    assert_eq!(scanner.pos(), 4);
}

#[test]
fn unterminated_single_quote() {
    assert_eq!(scan_tags(b"'unterminated"), vec![RawTag::UnterminatedSingleQuote]);
}

#[test]
fn unterminated_double_quote() {
    assert_eq!(scan_tags(b"x \"open"), vec![RawTag::Word, RawTag::UnterminatedDoubleQuote]);
}

#[test]
fn quote_followed_only_by_content_is_unterminated() {
    assert_eq!(scan_tags(b"'abc'def"), vec![RawTag::UnterminatedSingleQuote]);
}

#[test]
fn quoted_value_spanning_lines() {
    assert_eq!(scan_tags(b"'a\nb'"), vec![RawTag::MultilineSingleQuote]);
    assert_eq!(scan_tags(b"\"a\nb\" c"), vec![RawTag::MultilineDoubleQuote]);
}

#[test]
fn unclosed_quote_before_newline_is_unterminated() {
    assert_eq!(scan_tags(b"'a\nb"), vec![RawTag::UnterminatedSingleQuote]);
}

#[test]
fn error_start_points_at_opening_quote() {
    let buf = SourceBuffer::new("ok\n  'broken");
    let mut scanner = RawScanner::new(buf.cursor());
    scanner.next_token();
    let err = scanner.next_token();
    assert_eq!(err.tag, RawTag::UnterminatedSingleQuote);
    assert_eq!(err.start, 5);
}

// === EOF Behavior ===

#[test]
fn eof_is_idempotent() {
    let buf = SourceBuffer::new("a");
    let mut scanner = RawScanner::new(buf.cursor());
    assert_eq!(scanner.next_token().tag, RawTag::Word);
    for _ in 0..5 {
        let tok = scanner.next_token();
        assert_eq!(tok.tag, RawTag::Eof);
        assert_eq!(tok.len, 0);
    }
}

#[test]
fn after_error_only_eof() {
    let buf = SourceBuffer::new("'open\nmore words here");
    let mut scanner = RawScanner::new(buf.cursor());
    assert!(scanner.next_token().tag.is_error());
    assert_eq!(scanner.next_token().tag, RawTag::Eof);
    assert_eq!(scanner.next_token().tag, RawTag::Eof);
}

#[test]
fn scanner_resumes_from_stored_position() {
    let buf = SourceBuffer::new("a 'b c' d");
    let mut first = RawScanner::new(buf.cursor());
    first.next_token();
    let mut resumed = RawScanner::new(buf.cursor_at(first.pos()));
    let tok = resumed.next_token();
    assert_eq!(tok.tag, RawTag::SingleQuoted);
    assert_eq!(&buf.as_bytes()[tok.start as usize..tok.end() as usize], b"b c");
}

// === Large Inputs ===

#[test]
fn many_bare_words_scan_in_linear_time() {
    // Word-end searches must stop at the word's own terminator. Scanning the
    // rest of the buffer per word turns this into minutes.
    let source = "ab ".repeat(400_000);
    let buf = SourceBuffer::new(&source);
    let mut scanner = RawScanner::new(buf.cursor());

    let started = std::time::Instant::now();
    let mut words = 0;
    while scanner.next_token().tag == RawTag::Word {
        words += 1;
    }
    let elapsed = started.elapsed();

    assert_eq!(words, 400_000);
    assert!(
        elapsed < std::time::Duration::from_secs(5),
        "scanning 400k words took {elapsed:?}"
    );
}

#[test]
fn vertical_tab_ends_word_in_long_source() {
    let mut source = "ab ".repeat(1000);
    source.push_str("cd\u{0B}ef");
    let tokens = scan(source.as_bytes());
    assert_eq!(tokens.len(), 1003);
    assert_eq!(tokens[1000..].to_vec(), vec![word("cd"), word("ef"), eof()]);
}

// === Property Tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_scanner {
    use super::super::RawScanner;
    use crate::SourceBuffer;
    use proptest::prelude::*;

    /// Bytes biased toward the characters the scanner branches on.
    fn star_bytes() -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![
                Just(b' '),
                Just(b'\n'),
                Just(b'\t'),
                Just(b'\''),
                Just(b'"'),
                Just(b';'),
                Just(b'#'),
                Just(b'a'),
                Just(0u8),
                any::<u8>(),
            ],
            0..128,
        )
    }

    proptest! {
        #[test]
        fn scanning_terminates_within_bounds(bytes in star_bytes()) {
            let buf = SourceBuffer::from_bytes(&bytes);
            let mut scanner = RawScanner::new(buf.cursor());
            let mut last_pos = 0;
            let mut finished = false;
            // Every value token consumes at least one byte.
            for _ in 0..=bytes.len() + 1 {
                let tok = scanner.next_token();
                prop_assert!(tok.end() <= buf.len());
                prop_assert!(scanner.pos() <= buf.len());
                prop_assert!(scanner.pos() >= last_pos);
                last_pos = scanner.pos();
                if !tok.tag.is_value() {
                    finished = true;
                    break;
                }
            }
            prop_assert!(finished, "scanner did not finish");
        }

        #[test]
        fn value_tokens_are_ordered_and_disjoint(bytes in star_bytes()) {
            let buf = SourceBuffer::from_bytes(&bytes);
            let mut scanner = RawScanner::new(buf.cursor());
            let mut prev_end = 0;
            loop {
                let tok = scanner.next_token();
                if !tok.tag.is_value() {
                    break;
                }
                prop_assert!(tok.start >= prev_end);
                prev_end = tok.end();
            }
        }
    }
}
