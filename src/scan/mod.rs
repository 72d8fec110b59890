//! Delimiter balance scanning.
//!
//! A single left-to-right pass over masked script text, maintaining three
//! independent counters (brace, paren, bracket) plus the current line and
//! column. The scan halts at the first closing delimiter whose counter is
//! zero and reports it as a `Finding`; residual nonzero counters at end of
//! input indicate unclosed openers with no pinpointed location.

mod types;

pub use types::{DelimiterCounts, DelimiterKind, Finding, ScanOutcome};

use crate::config::CONTEXT_WINDOW_CHARS;

/// Scans masked script text for the first unexpected closing delimiter.
///
/// Line numbers are 1-based. The column resets to 0 at each newline and is
/// incremented before a character is classified, so reported columns are
/// 1-based and newlines themselves occupy no column.
///
/// The three kinds are tracked independently: an unmatched `}` is reported
/// even while parens are still open, and the first unexpected closer in
/// document order wins regardless of kind. At most one `Finding` is produced
/// per scan; the rest of the input is not examined.
pub fn scan_balance(masked: &str) -> ScanOutcome {
    let mut counts = DelimiterCounts::default();
    let mut line = 1usize;
    let mut column = 0usize;

    for (idx, ch) in masked.char_indices() {
        if ch == '\n' {
            line += 1;
            column = 0;
            continue;
        }
        column += 1;

        match ch {
            '{' => counts.brace += 1,
            '(' => counts.paren += 1,
            '[' => counts.bracket += 1,
            '}' => {
                if counts.brace == 0 {
                    return unexpected(DelimiterKind::Brace, line, column, masked, idx);
                }
                counts.brace -= 1;
            }
            ')' => {
                if counts.paren == 0 {
                    return unexpected(DelimiterKind::Paren, line, column, masked, idx);
                }
                counts.paren -= 1;
            }
            ']' => {
                if counts.bracket == 0 {
                    return unexpected(DelimiterKind::Bracket, line, column, masked, idx);
                }
                counts.bracket -= 1;
            }
            _ => {}
        }
    }

    ScanOutcome::Completed(counts)
}

fn unexpected(
    kind: DelimiterKind,
    line: usize,
    column: usize,
    masked: &str,
    idx: usize,
) -> ScanOutcome {
    ScanOutcome::UnexpectedCloser(Finding {
        kind,
        line,
        column,
        context: context_window(masked, idx),
    })
}

/// Cuts the context snippet around an offending byte index: up to
/// `CONTEXT_WINDOW_CHARS` characters before it and the same count after it,
/// clamped to the text bounds.
fn context_window(text: &str, idx: usize) -> String {
    let start = text[..idx]
        .char_indices()
        .rev()
        .take(CONTEXT_WINDOW_CHARS)
        .last()
        .map_or(idx, |(i, _)| i);
    let end = text[idx..]
        .char_indices()
        .nth(CONTEXT_WINDOW_CHARS)
        .map_or(text.len(), |(i, _)| idx + i);
    text[start..end].to_string()
}
