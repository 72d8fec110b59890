//! Human-readable report rendering.
//!
//! Formats a `CheckReport` as the text the binary prints to stdout. The
//! wording is stable; colors only decorate it.

use colored::*;

use crate::scan::{DelimiterCounts, Finding, ScanOutcome};
use crate::CheckReport;

/// Renders the outcome of a check as user-facing text.
///
/// Three shapes:
/// - an unexpected closer: kind, 1-based line/column, and a context snippet;
/// - a completed scan with all counters zero: final counts and the
///   "no unexpected closing brace found" verdict;
/// - a completed scan with leftover openers: final counts and the
///   "unbalanced braces detected" verdict (no location is given for missing
///   closers; that precision gap is accepted).
pub fn render_report(report: &CheckReport) -> String {
    let header = format!(
        "Scanned first <script> block of {} ({} script lines)",
        report.source.display(),
        report.script_lines
    );

    match &report.outcome {
        ScanOutcome::UnexpectedCloser(finding) => {
            format!("{}\n{}", header, render_finding(finding))
        }
        ScanOutcome::Completed(counts) => {
            format!("{}\n{}", header, render_counts(counts))
        }
    }
}

fn render_finding(finding: &Finding) -> String {
    format!(
        "Unexpected {} at line {} col {}\nContext:\n {}",
        format!("'{}'", finding.kind.closer()).red().bold(),
        finding.line,
        finding.column,
        finding.context
    )
}

fn render_counts(counts: &DelimiterCounts) -> String {
    let summary = format!(
        "Finished scan. counts -> {{brace,paren,brack}}: {} {} {}",
        counts.brace, counts.paren, counts.bracket
    );
    let verdict = if counts.is_balanced() {
        format!("✅ {}", "No unexpected closing brace found".green())
    } else {
        format!("⚠️ {}", "Unbalanced braces detected".yellow())
    };
    format!("{}\n{}", summary, verdict)
}
