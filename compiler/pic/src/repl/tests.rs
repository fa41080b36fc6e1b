use super::*;
use crate::config::OutputFormat;
use pretty_assertions::assert_eq;

struct Session {
    summary: ReplSummary,
    out: String,
    report: String,
}

fn run(config: ReplConfig, input: &str) -> Session {
    let mut out = Vec::new();
    let mut report = Vec::new();
    let summary = {
        let mut repl = Repl::new(config, input.as_bytes(), &mut out, &mut report);
        match repl.run() {
            Ok(summary) => summary,
            Err(e) => panic!("in-memory session cannot fail: {e}"),
        }
    };
    Session {
        summary,
        out: String::from_utf8_lossy(&out).into_owned(),
        report: String::from_utf8_lossy(&report).into_owned(),
    }
}

fn quiet() -> ReplConfig {
    ReplConfig {
        banner: false,
        diagnostics: false,
        ..ReplConfig::default()
    }
}

// === Line handling ===

#[test]
fn exit_command_ignores_case() {
    assert!(is_exit_command("exit"));
    assert!(is_exit_command("EXIT"));
    assert!(is_exit_command("Exit"));
    assert!(!is_exit_command(" exit"));
    assert!(!is_exit_command("exit "));
    assert!(!is_exit_command("exits"));
    assert!(!is_exit_command(""));
}

#[test]
fn strip_line_terminator_variants() {
    assert_eq!(strip_line_terminator("1+2\n"), "1+2");
    assert_eq!(strip_line_terminator("1+2\r\n"), "1+2");
    assert_eq!(strip_line_terminator("1+2"), "1+2");
    assert_eq!(strip_line_terminator("\n"), "");
    assert_eq!(strip_line_terminator("a\n\n"), "a\n");
}

// === Sessions ===

#[test]
fn banner_prompt_and_farewell() {
    let session = run(ReplConfig::default(), "exit\n");
    assert_eq!(session.out, format!("{BANNER}> \nBye!\n\n"));
    assert_eq!(session.report, "");
    assert_eq!(session.summary, ReplSummary::default());
}

#[test]
fn exit_stops_before_later_lines() {
    let session = run(quiet(), "1\nExIt\n2\n");
    assert_eq!(session.summary.lines, 1);
    assert_eq!(session.report, "Found 1 tokens:\n1\n");
    assert_eq!(session.out, "> > \nBye!\n\n");
}

#[test]
fn end_of_input_ends_session() {
    let session = run(quiet(), "x = 1\n");
    assert_eq!(session.summary.lines, 1);
    assert_eq!(session.out, "> > \n\nBye!\n\n");
    assert_eq!(session.report, "Found 3 tokens:\nx\n=\n1\n");
}

#[test]
fn last_line_without_newline_is_evaluated() {
    let session = run(quiet(), "a+b");
    assert_eq!(session.summary.lines, 1);
    assert_eq!(session.report, "Found 3 tokens:\na\n+\nb\n");
}

#[test]
fn crlf_lines() {
    let session = run(quiet(), "1:2\r\nexit\r\n");
    assert_eq!(session.report, "Found 3 tokens:\n1\n:\n2\n");
}

#[test]
fn errors_are_counted_per_session() {
    let session = run(quiet(), "1 + ?\n! ?\nexit\n");
    assert_eq!(
        session.summary,
        ReplSummary {
            lines: 2,
            errors: 3
        }
    );
    assert_eq!(
        session.report,
        "Found 3 tokens:\n1\n+\nFound 1 tokens with errors.\n\
         Found 2 tokens:\nFound 2 tokens with errors.\n"
    );
}

#[test]
fn empty_line_reports_zero_tokens() {
    let session = run(quiet(), "\nexit\n");
    assert_eq!(session.summary.lines, 1);
    assert_eq!(session.report, "Found 0 tokens:\n");
}

#[test]
fn invalid_utf8_becomes_error_token() {
    let mut out = Vec::new();
    let mut report = Vec::new();
    let input: &[u8] = b"1 \xFF 2\n";
    let summary = {
        let mut repl = Repl::new(quiet(), input, &mut out, &mut report);
        match repl.run() {
            Ok(summary) => summary,
            Err(e) => panic!("in-memory session cannot fail: {e}"),
        }
    };
    assert_eq!(summary.errors, 1);
    assert_eq!(
        String::from_utf8_lossy(&report),
        "Found 3 tokens:\n1\n2\nFound 1 tokens with errors.\n"
    );
}

#[test]
fn json_session() {
    let config = ReplConfig {
        format: OutputFormat::Json,
        ..quiet()
    };
    let session = run(config, "7\n");
    assert_eq!(
        session.report,
        "[{\"kind\":\"Number\",\"span\":{\"start\":0,\"end\":1},\"error_location\":null,\"text\":\"7\"}]\n"
    );
}

#[test]
fn failing_output_is_a_write_error() {
    struct Broken;
    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut repl = Repl::new(quiet(), "1\n".as_bytes(), Broken, Vec::new());
    assert!(matches!(repl.run(), Err(ReplError::Write(_))));
}
