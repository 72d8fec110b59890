//! String and template literal masking (second masking pass).

use crate::config::MASK_FILLER;

/// Lexical state of the masking scan.
///
/// `escaped` is a single-level flag: a backslash makes the immediately
/// following character inert (even the closing quote), and any non-backslash
/// character clears it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    InLiteral { quote: char, escaped: bool },
}

/// Masks string and template literal bodies with filler characters.
///
/// On one of the three quote markers (`'`, `"`, `` ` ``) the scan enters
/// literal mode for that specific quote character; the opening quote and
/// every character up to and including the matching unescaped closer are
/// replaced with filler. Newlines inside a literal pass through unchanged so
/// the line count is preserved. Template-literal interpolation (`${...}`) is
/// not parsed and is masked along with the rest of the literal.
///
/// An unterminated literal masks to end of input silently; that is accepted
/// behavior, not an error.
pub fn mask_literals(script: &str) -> String {
    let mut out = String::with_capacity(script.len());
    let mut state = State::Normal;

    for ch in script.chars() {
        match state {
            State::Normal => {
                if matches!(ch, '\'' | '"' | '`') {
                    out.push(MASK_FILLER);
                    state = State::InLiteral {
                        quote: ch,
                        escaped: false,
                    };
                } else {
                    out.push(ch);
                }
            }
            State::InLiteral { quote, escaped } => {
                // Newlines are the one thing never masked; losing them would
                // shift every line number after the literal.
                if ch == '\n' {
                    out.push('\n');
                } else {
                    out.push(MASK_FILLER);
                }

                state = if ch == '\\' && !escaped {
                    State::InLiteral {
                        quote,
                        escaped: true,
                    }
                } else if ch == quote && !escaped {
                    State::Normal
                } else {
                    State::InLiteral {
                        quote,
                        escaped: false,
                    }
                };
            }
        }
    }

    out
}
