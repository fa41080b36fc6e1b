use super::*;
use pretty_assertions::assert_eq;

/// Helper: scan a source string and collect `(kind, text)` pairs.
fn scan(source: &str) -> Vec<(TokenKind, &str)> {
    let len = u32::try_from(source.len()).unwrap_or(u32::MAX);
    Scanner::new(Cursor::new(source, len))
        .map(|t| (t.kind(), t.text(source)))
        .collect()
}

#[test]
fn empty_source_yields_nothing() {
    assert!(scan("").is_empty());
}

#[test]
fn exhausted_scanner_stays_exhausted() {
    let source = "x";
    let mut scanner = Scanner::new(Cursor::new(source, 1));
    assert!(scanner.next_token().is_some());
    for _ in 0..3 {
        assert_eq!(scanner.next_token(), None);
    }
    assert_eq!(scanner.pos(), 1);
}

#[test]
fn number_run() {
    assert_eq!(scan("007"), vec![(TokenKind::Number, "007")]);
}

#[test]
fn variable_run_with_digits_and_underscores() {
    assert_eq!(scan("x_1y2"), vec![(TokenKind::Variable, "x_1y2")]);
}

#[test]
fn number_then_variable_without_space() {
    assert_eq!(
        scan("12abc"),
        vec![(TokenKind::Number, "12"), (TokenKind::Variable, "abc")]
    );
}

#[test]
fn trailing_underscore_stays_in_variable() {
    assert_eq!(scan("a_"), vec![(TokenKind::Variable, "a_")]);
}

#[test]
fn leading_underscore_is_error_then_variable() {
    assert_eq!(
        scan("_a"),
        vec![(TokenKind::Error, "_"), (TokenKind::Variable, "a")]
    );
}

#[test]
fn every_operator() {
    assert_eq!(
        scan("+-*/:="),
        vec![
            (TokenKind::Plus, "+"),
            (TokenKind::Minus, "-"),
            (TokenKind::Multiply, "*"),
            (TokenKind::Divide, "/"),
            (TokenKind::Divide, ":"),
            (TokenKind::Equals, "="),
        ]
    );
}

#[test]
fn assignment_statement() {
    assert_eq!(
        scan("area = w * (h - 2)"),
        vec![
            (TokenKind::Variable, "area"),
            (TokenKind::Equals, "="),
            (TokenKind::Variable, "w"),
            (TokenKind::Multiply, "*"),
            (TokenKind::OpenParen, "("),
            (TokenKind::Variable, "h"),
            (TokenKind::Minus, "-"),
            (TokenKind::Number, "2"),
            (TokenKind::CloseParen, ")"),
        ]
    );
}

#[test]
fn consecutive_errors_are_separate_tokens() {
    assert_eq!(
        scan("?!"),
        vec![(TokenKind::Error, "?"), (TokenKind::Error, "!")]
    );
}

#[test]
fn non_ascii_error_covers_whole_character() {
    assert_eq!(
        scan("2×3"),
        vec![
            (TokenKind::Number, "2"),
            (TokenKind::Error, "×"),
            (TokenKind::Number, "3"),
        ]
    );
}

#[test]
fn non_ascii_letters_are_not_variables() {
    assert_eq!(
        scan("éa"),
        vec![(TokenKind::Error, "é"), (TokenKind::Variable, "a")]
    );
}

#[test]
fn interior_null_is_error() {
    assert_eq!(
        scan("1\u{0}2"),
        vec![
            (TokenKind::Number, "1"),
            (TokenKind::Error, "\u{0}"),
            (TokenKind::Number, "2"),
        ]
    );
}

#[test]
fn all_whitespace_kinds_are_skipped() {
    assert_eq!(
        scan("\t1\x0B\x0C\r\n+ 2"),
        vec![
            (TokenKind::Number, "1"),
            (TokenKind::Plus, "+"),
            (TokenKind::Number, "2"),
        ]
    );
}

#[test]
fn spans_are_exact() {
    let source = " ab  12 ";
    let tokens: Vec<Span> = Scanner::new(Cursor::new(source, 8))
        .map(|t| t.span())
        .collect();
    assert_eq!(tokens, vec![Span::new(1, 3), Span::new(5, 7)]);
}
