//! Text normalization for captured declaration fragments
//!
//! Every capture group of every pattern match goes through [`normalize_capture`],
//! so multi-line declarations become single-line tokens. [`strip_comments`]
//! is an optional pre-pass over the whole header.

/// Normalize a captured substring.
///
/// Steps, in order:
/// 1. each non-overlapping double space becomes a single space (one pass only,
///    so runs of three or more spaces may survive partially collapsed)
/// 2. tabs are removed
/// 3. carriage returns are removed
/// 4. newlines are removed with no separator
pub fn normalize_capture(capture: &str) -> String {
    capture
        .replace("  ", " ")
        .replace('\t', "")
        .replace('\r', "")
        .replace('\n', "")
}

/// Replace C comments with a single space.
///
/// Block comments (`/* ... */`) and line comments (`// ...`) are removed.
/// The newline ending a line comment is kept. String and character literals
/// are copied untouched, so `"http://host"` survives intact. An unterminated
/// block comment swallows the rest of the input.
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for inner in chars.by_ref() {
                    if prev == '*' && inner == '/' {
                        break;
                    }
                    prev = inner;
                }
                out.push(' ');
            }
            '/' if chars.peek() == Some(&'/') => {
                while let Some(&inner) = chars.peek() {
                    if inner == '\n' {
                        break;
                    }
                    chars.next();
                }
                out.push(' ');
            }
            '"' | '\'' => {
                out.push(c);
                let mut escaped = false;
                for inner in chars.by_ref() {
                    out.push(inner);
                    if escaped {
                        escaped = false;
                    } else if inner == '\\' {
                        escaped = true;
                    } else if inner == c || inner == '\n' {
                        break;
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_joins_lines_without_separator() {
        assert_eq!(normalize_capture("int a,\r\n\tint b"), "int a,int b");
        assert_eq!(normalize_capture("int\nx"), "intx");
    }

    #[test]
    fn test_normalize_collapses_double_spaces_once() {
        assert_eq!(normalize_capture("a  b"), "a b");
        // Four spaces become two, three become two: a single pass only
        assert_eq!(normalize_capture("a    b"), "a  b");
        assert_eq!(normalize_capture("a   b"), "a  b");
    }

    #[test]
    fn test_normalize_is_idempotent_on_normalized_text() {
        let samples = ["int add", "const char* name", "x[16]", "", "\"hello world\""];
        for sample in samples {
            let once = normalize_capture(sample);
            assert_eq!(once, sample);
            assert_eq!(normalize_capture(&once), once);
        }
    }

    #[test]
    fn test_strip_block_and_line_comments() {
        let source = "int x; /* the x\n coordinate */ int y; // trailing\nint z;";
        assert_eq!(strip_comments(source), "int x;   int y;  \nint z;");
    }

    #[test]
    fn test_strip_comments_keeps_string_literals() {
        let source = "#define URL \"http://example.com/*x*/\" // note";
        assert_eq!(
            strip_comments(source),
            "#define URL \"http://example.com/*x*/\"  "
        );
        assert_eq!(strip_comments("char c = '/'; // c"), "char c = '/';  ");
    }

    #[test]
    fn test_strip_comments_unterminated_block() {
        assert_eq!(strip_comments("int a; /* never closed"), "int a;  ");
    }
}
