//! First script block extraction.
//!
//! Locates the first inline `<script ...>...</script>` pair in a document
//! and returns its inner text verbatim. Only the first block is used; any
//! later script blocks are ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::error_handling::ExtractionError;

// Case-insensitive, non-greedy on content, attributes allowed in the open tag.
const SCRIPT_BLOCK_PATTERN: &str = r"(?is)<script[^>]*>(.*?)</script>";

/// Helper function to safely compile a regex pattern, panicking with a detailed
/// error message if compilation fails. Used for static regex patterns that are
/// compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(SCRIPT_BLOCK_PATTERN, "SCRIPT_BLOCK"));

/// Extracts the inner text of the first `<script>` block in a document.
///
/// Tag matching is case-insensitive and the opening tag may carry arbitrary
/// attributes. Content matching is non-greedy, so the block ends at the first
/// closing tag.
///
/// # Arguments
///
/// * `document` - The full document text
///
/// # Returns
///
/// The script block's inner text, borrowed from `document`.
///
/// # Errors
///
/// Returns `ExtractionError::NoScriptBlock` if the document contains no
/// script block.
pub fn extract_first_script(document: &str) -> Result<&str, ExtractionError> {
    let captures = SCRIPT_BLOCK
        .captures(document)
        .ok_or(ExtractionError::NoScriptBlock)?;
    Ok(captures.get(1).map(|m| m.as_str()).unwrap_or(""))
}
