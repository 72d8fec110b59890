//! Comment stripping (first masking pass).

use std::sync::LazyLock;

use regex::Regex;

// Block comments may span lines, so match with `.` crossing newlines.
const BLOCK_COMMENT_PATTERN: &str = r"(?s)/\*.*?\*/";
// Line comments run to end of physical line and can never span one.
const LINE_COMMENT_PATTERN: &str = r"//[^\n]*";

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

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(BLOCK_COMMENT_PATTERN, "BLOCK_COMMENT"));

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(LINE_COMMENT_PATTERN, "LINE_COMMENT"));

/// Strips comments from script text while preserving the line count.
///
/// Every block comment (`/* ... */`, non-greedy, possibly spanning lines) is
/// replaced with a run of newlines equal to the newlines it contained, so all
/// subsequent line numbers stay correct. Every line comment (`//` to end of
/// line) is then deleted in place; no compensation is needed since a line
/// comment cannot contain a newline.
///
/// Block comments are stripped before line comments, so a `//` inside a
/// block comment never starts a second strip.
pub fn strip_comments(script: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(script, |caps: &regex::Captures| {
        "\n".repeat(caps[0].matches('\n').count())
    });
    LINE_COMMENT.replace_all(&without_blocks, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_comment_replaced_by_newlines() {
        let script = "a(); /* one\ntwo\nthree */ b();";
        let stripped = strip_comments(script);
        assert_eq!(stripped, "a(); \n\n b();");
        assert_eq!(
            stripped.matches('\n').count(),
            script.matches('\n').count()
        );
    }

    #[test]
    fn test_single_line_block_comment_removed_entirely() {
        assert_eq!(strip_comments("a(); /* gone */ b();"), "a();  b();");
    }

    #[test]
    fn test_line_comment_deleted_to_end_of_line() {
        let script = "var x = 1; // comment with } ) ]\nvar y = 2;";
        assert_eq!(strip_comments(script), "var x = 1; \nvar y = 2;");
    }

    #[test]
    fn test_line_comment_at_end_of_input() {
        assert_eq!(strip_comments("var x = 1; // no newline"), "var x = 1; ");
    }

    #[test]
    fn test_multiple_comments() {
        let script = "a(); // first\nb(); /* second */ c(); // third\nd();";
        assert_eq!(strip_comments(script), "a(); \nb();  c(); \nd();");
    }

    #[test]
    fn test_line_comment_marker_inside_block_comment() {
        // The block pass consumes the whole comment, // inside it included
        let script = "a(); /* // not a line comment */ b();";
        assert_eq!(strip_comments(script), "a();  b();");
    }

    #[test]
    fn test_unterminated_block_comment_left_alone() {
        // Non-greedy match requires the terminator; without it nothing matches
        let script = "a(); /* open forever";
        assert_eq!(strip_comments(script), script);
    }

    #[test]
    fn test_no_comments_passthrough() {
        let script = "function f() { return [1,2]; }";
        assert_eq!(strip_comments(script), script);
    }
}
