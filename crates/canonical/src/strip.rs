//! Comment and string-literal stripping for source text.
//!
//! A single forward scan over the input. Comment bodies are dropped and
//! string-literal bodies are replaced by one space so the surrounding tokens
//! stay separated. Escape sequences are not interpreted; an unterminated
//! comment or literal is stripped to the end of input. Best-effort by
//! contract: malformed input degrades to partial stripping, never to an
//! error.

#[derive(Clone, Copy, PartialEq)]
enum State {
    Code,
    LineComment,
    BlockComment,
    SingleQuoted,
    DoubleQuoted,
}

/// Strips comments and/or string-literal bodies from `input`.
///
/// Line comments end at the newline (which is preserved as a separator);
/// block comments and string literals are replaced with a single space.
/// With both flags false the input is returned unchanged.
pub fn strip_code(input: &str, strip_comments: bool, strip_string_literals: bool) -> String {
    if !strip_comments && !strip_string_literals {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut state = State::Code;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match state {
            State::Code => match ch {
                '/' if strip_comments && chars.peek() == Some(&'/') => {
                    chars.next();
                    state = State::LineComment;
                }
                '/' if strip_comments && chars.peek() == Some(&'*') => {
                    chars.next();
                    state = State::BlockComment;
                }
                '\'' if strip_string_literals => {
                    out.push(' ');
                    state = State::SingleQuoted;
                }
                '"' if strip_string_literals => {
                    out.push(' ');
                    state = State::DoubleQuoted;
                }
                _ => out.push(ch),
            },
            State::LineComment => {
                if ch == '\n' {
                    out.push('\n');
                    state = State::Code;
                }
            }
            State::BlockComment => {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    out.push(' ');
                    state = State::Code;
                }
            }
            State::SingleQuoted => {
                if ch == '\'' {
                    state = State::Code;
                }
            }
            State::DoubleQuoted => {
                if ch == '"' {
                    state = State::Code;
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_all(input: &str) -> String {
        strip_code(input, true, true)
    }

    #[test]
    fn line_comment_runs_to_newline() {
        assert_eq!(strip_all("a // gone\nb"), "a \nb");
    }

    #[test]
    fn block_comment_spans_lines() {
        assert_eq!(strip_all("a /* x\ny */ b"), "a   b");
    }

    #[test]
    fn string_bodies_removed_quotes_and_all() {
        assert_eq!(strip_all(r#"a "body" b"#), "a   b");
        assert_eq!(strip_all("a 'body' b"), "a   b");
    }

    #[test]
    fn comment_markers_inside_strings_are_inert() {
        assert_eq!(strip_all(r#"url("https://x") y"#), "url( ) y");
    }

    #[test]
    fn unterminated_constructs_run_to_end() {
        assert_eq!(strip_all("a /* never closed"), "a ");
        assert_eq!(strip_all("a \"never closed"), "a  ");
        assert_eq!(strip_all("a // eof"), "a ");
    }

    #[test]
    fn flags_are_independent() {
        assert_eq!(strip_code("a // c\n'x'", true, false), "a \n'x'");
        assert_eq!(strip_code("a // c\n'x'", false, true), "a // c\n ");
        assert_eq!(strip_code("a // c", false, false), "a // c");
    }

    #[test]
    fn lone_slash_survives() {
        assert_eq!(strip_all("a / b"), "a / b");
    }
}
