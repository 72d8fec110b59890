//! End-to-end tests for `run_check` over on-disk HTML documents.

use std::io::Write;
use std::path::PathBuf;

use brace_check::{
    render_report, run_check, Config, DelimiterCounts, DelimiterKind, ScanOutcome,
};
use tempfile::NamedTempFile;

/// Writes an HTML document to a temp file and returns the file handle
/// (dropping it deletes the file).
fn write_document(html: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(html.as_bytes())
        .expect("failed to write temp file");
    file
}

fn check(html: &str) -> brace_check::CheckReport {
    let file = write_document(html);
    let config = Config {
        file: file.path().to_path_buf(),
        ..Default::default()
    };
    run_check(config).expect("check should succeed")
}

#[test]
fn test_balanced_script_reports_zero_counts() {
    let report = check("<html><script>function f() { return [1,2]; }</script></html>");

    assert_eq!(
        report.outcome,
        ScanOutcome::Completed(DelimiterCounts::default())
    );

    colored::control::set_override(false);
    let rendered = render_report(&report);
    assert!(rendered.contains("No unexpected closing brace found"));
}

#[test]
fn test_extra_closing_brace_is_found() {
    let report = check("<html><script>function f() { return 1; }}</script></html>");

    match report.outcome {
        ScanOutcome::UnexpectedCloser(finding) => {
            assert_eq!(finding.kind, DelimiterKind::Brace);
            assert_eq!(finding.line, 1);
        }
        other => panic!("expected a finding, got {:?}", other),
    }
}

#[test]
fn test_closers_inside_string_literal_are_ignored() {
    // The three bogus closers live inside a string; the code around it is
    // balanced, so the scan must complete clean.
    let html = "<html><script>const s = \"} ) ]\"; function f() { g(s); }</script></html>";
    let report = check(html);

    assert_eq!(
        report.outcome,
        ScanOutcome::Completed(DelimiterCounts::default())
    );
}

#[test]
fn test_closers_inside_comments_are_ignored() {
    let html = "<html><script>/* } ) ] */ var x = 1; // }\nvar y = 2;</script></html>";
    let report = check(html);

    assert_eq!(
        report.outcome,
        ScanOutcome::Completed(DelimiterCounts::default())
    );
}

#[test]
fn test_missing_closer_reports_residual_counts() {
    // Missing closing paren before the brace: scan completes with paren 1
    let report = check("<html><script>if (x > 0 { y(); }</script></html>");

    assert_eq!(
        report.outcome,
        ScanOutcome::Completed(DelimiterCounts {
            brace: 0,
            paren: 1,
            bracket: 0,
        })
    );

    colored::control::set_override(false);
    let rendered = render_report(&report);
    assert!(rendered.contains("counts -> {brace,paren,brack}: 0 1 0"));
    assert!(rendered.contains("Unbalanced braces detected"));
}

#[test]
fn test_line_numbers_survive_comments_and_literals() {
    // The stray } sits on line 6 of the script; the block comment and the
    // multi-line template literal before it must not shift that number.
    let script = "var a = 1;\n/* two\nlines */\nvar t = `x\ny`;\n}";
    let html = format!("<script>{}</script>", script);
    let report = check(&html);

    match report.outcome {
        ScanOutcome::UnexpectedCloser(finding) => {
            assert_eq!(finding.kind, DelimiterKind::Brace);
            assert_eq!(finding.line, 6);
            assert_eq!(finding.column, 1);
        }
        other => panic!("expected a finding, got {:?}", other),
    }
}

#[test]
fn test_only_first_script_block_is_scanned() {
    // The second block is wildly unbalanced but never examined
    let html = "<script>var ok = 1;</script><script>}}}</script>";
    let report = check(html);

    assert_eq!(
        report.outcome,
        ScanOutcome::Completed(DelimiterCounts::default())
    );
}

#[test]
fn test_no_script_block_is_an_error() {
    let file = write_document("<html><body><p>plain page</p></body></html>");
    let config = Config {
        file: file.path().to_path_buf(),
        ..Default::default()
    };

    let err = run_check(config).expect_err("check should fail without a script block");
    assert!(
        err.chain()
            .any(|cause| cause.to_string().contains("No <script> block found")),
        "error chain should name the missing script block: {:#}",
        err
    );
}

#[test]
fn test_unreadable_input_is_an_error() {
    let config = Config {
        file: PathBuf::from("definitely/not/a/real/file.html"),
        ..Default::default()
    };

    let err = run_check(config).expect_err("check should fail on a missing file");
    assert!(err.to_string().contains("Failed to read input file"));
}

#[test]
fn test_report_counts_script_lines() {
    let report = check("<script>\nvar a = 1;\nvar b = 2;\n</script>");
    // lines(): leading newline yields an empty first line; trailing newline
    // does not yield a trailing empty one
    assert_eq!(report.script_lines, 3);
}
