//! brace_check library: locating unmatched delimiters in inline scripts.
//!
//! This library extracts the first inline `<script>` block from an HTML
//! document, masks comments and string/template literals so their contents
//! cannot affect delimiter balance, and then scans the masked text for the
//! first closing brace, parenthesis, or bracket that has no matching opener.
//!
//! # Example
//!
//! ```no_run
//! use brace_check::{render_report, run_check, Config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("index.html"),
//!     ..Default::default()
//! };
//!
//! let report = run_check(config)?;
//! println!("{}", render_report(&report));
//! # Ok(())
//! # }
//! ```
//!
//! # Scope
//!
//! Only the first script block is scanned; later blocks are ignored. Regex
//! literals are not recognized, so delimiters inside them can produce false
//! positives. Both limitations are deliberate.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod extract;
pub mod initialization;
mod mask;
mod report;
mod scan;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::ExtractionError;
pub use report::render_report;
pub use run::{run_check, CheckReport};
pub use scan::{DelimiterCounts, DelimiterKind, Finding, ScanOutcome};

// Internal run module (contains the check orchestration)
mod run {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use log::{debug, info};

    use crate::config::Config;
    use crate::extract::extract_first_script;
    use crate::mask::mask_script;
    use crate::scan::{scan_balance, ScanOutcome};

    /// Results of a balance check run.
    #[derive(Debug, Clone)]
    pub struct CheckReport {
        /// Path of the document that was scanned
        pub source: PathBuf,
        /// Number of lines in the extracted script block
        pub script_lines: usize,
        /// Outcome of the balance scan
        pub outcome: ScanOutcome,
    }

    /// Runs a balance check with the provided configuration.
    ///
    /// This is the main entry point for the library. It reads the input
    /// document, extracts the first inline script block, masks comments and
    /// string/template literals, and scans the masked text for the first
    /// unexpected closing delimiter.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the check (input path, log options)
    ///
    /// # Returns
    ///
    /// Returns a `CheckReport` carrying the scan outcome. An unexpected
    /// closing delimiter is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input file cannot be read
    /// - The document contains no `<script>` block
    pub fn run_check(config: Config) -> Result<CheckReport> {
        let document = std::fs::read_to_string(&config.file)
            .with_context(|| format!("Failed to read input file {}", config.file.display()))?;
        info!("Scanning {} ({} bytes)", config.file.display(), document.len());

        let script = extract_first_script(&document)
            .with_context(|| format!("Failed to locate a script block in {}", config.file.display()))?;
        let script_lines = script.lines().count();
        debug!(
            "Extracted first script block: {} lines, {} bytes",
            script_lines,
            script.len()
        );

        let masked = mask_script(script);
        // Masking must never add or remove newlines, or every reported line
        // number after the first masked region would be wrong.
        debug_assert_eq!(
            masked.matches('\n').count(),
            script.matches('\n').count()
        );

        let outcome = scan_balance(&masked);
        match &outcome {
            ScanOutcome::UnexpectedCloser(f) => {
                debug!(
                    "Scan halted at unexpected '{}' (line {}, col {})",
                    f.kind.closer(),
                    f.line,
                    f.column
                );
            }
            ScanOutcome::Completed(counts) => {
                debug!(
                    "Scan completed: {} brace(s), {} paren(s), {} bracket(s) left open",
                    counts.brace, counts.paren, counts.bracket
                );
            }
        }

        Ok(CheckReport {
            source: config.file,
            script_lines,
            outcome,
        })
    }
}
