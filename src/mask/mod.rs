//! Lexical masking of comments and string/template literals.
//!
//! Two passes, composed in sequence:
//! - Comment stripping: block comments become runs of newlines matching the
//!   newlines they contained; line comments are deleted outright.
//! - Literal masking: string and template literal bodies (quote markers
//!   included) are overwritten with filler, tracking a one-level escape flag.
//!
//! Invariant: the masked text has exactly as many newlines as the input, so
//! line/column arithmetic downstream stays correct.
//!
//! Regex literals are not recognized; delimiters inside them survive masking
//! and can produce false positives in the balance scan.

mod comments;
mod literals;

pub use comments::strip_comments;
pub use literals::mask_literals;

/// Masks everything in a script that must not influence delimiter balance.
///
/// Comments are stripped first, then string/template literals are masked.
/// Because comment stripping runs first, a `//` inside a string literal is
/// still treated as a comment start; this mirrors the reference behavior.
pub fn mask_script(script: &str) -> String {
    mask_literals(&strip_comments(script))
}
