//! Common text utilities shared by the lowering and formatting passes.

use tree_sitter::Node;

// ============ Threshold Constants ============

/// Longest rendering of a non-literal default value before it is cut
pub const MAX_DEFAULT_VALUE_LEN: usize = 40;
/// Longest rendering of a destructuring parameter pattern
pub const MAX_PATTERN_LEN: usize = 60;

// ============ Text Helpers ============

/// Get the source text covered by a node
pub fn get_node_text<'a>(node: Node, source: &'a [u8]) -> &'a str {
    let start = node.start_byte();
    let end = node.end_byte();
    let slice = source.get(start..end).unwrap_or(&[]);
    match std::str::from_utf8(slice) {
        Ok(text) => text.trim_end_matches(|ch| ch == '\n' || ch == '\r'),
        Err(_) => "",
    }
}

/// Truncate a line to `max_len` characters, marking the cut with `...`
pub fn truncate_line(line: &str, max_len: usize) -> String {
    let mut out = String::new();
    let mut count = 0;
    let mut truncated = false;
    for ch in line.chars() {
        if count >= max_len {
            truncated = true;
            break;
        }
        out.push(ch);
        count += 1;
    }
    if truncated {
        out.push_str("...");
    }
    out
}

/// Collapse every whitespace run (newlines included) into a single space
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Single-line, length-capped rendering of an arbitrary source snippet
pub fn compact_text(text: &str, max_len: usize) -> String {
    truncate_line(&collapse_whitespace(text), max_len)
}

/// Strip one layer of matching quotes from a string literal's source text.
///
/// Escape sequences are left as written.
pub fn unquote(text: &str) -> &str {
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close))
            if open == close && matches!(open, '"' | '\'' | '`') =>
        {
            &text[open.len_utf8()..text.len() - close.len_utf8()]
        }
        _ => text,
    }
}

/// Value of a string literal: quotes removed, escape sequences applied.
///
/// Malformed escapes are kept as written.
pub fn cook_string(text: &str) -> String {
    let body = unquote(text);
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        let Some(escaped) = chars.next() else {
            out.push('\\');
            break;
        };
        match escaped {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !chars.peek().map_or(false, |c| c.is_ascii_digit()) => out.push('\0'),
            // Line continuation
            '\n' => {}
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            'x' => {
                let digits: String = chars.by_ref().take(2).collect();
                push_code_point(&mut out, &digits, "\\x");
            }
            'u' if chars.peek() == Some(&'{') => {
                chars.next();
                let digits: String = chars.by_ref().take_while(|c| *c != '}').collect();
                if let Some(decoded) = decode_hex(&digits) {
                    out.push(decoded);
                } else {
                    out.push_str("\\u{");
                    out.push_str(&digits);
                    out.push('}');
                }
            }
            'u' => {
                let digits: String = chars.by_ref().take(4).collect();
                push_code_point(&mut out, &digits, "\\u");
            }
            other => out.push(other),
        }
    }
    out
}

fn push_code_point(out: &mut String, digits: &str, prefix: &str) {
    match decode_hex(digits) {
        Some(decoded) => out.push(decoded),
        None => {
            out.push_str(prefix);
            out.push_str(digits);
        }
    }
}

fn decode_hex(digits: &str) -> Option<char> {
    if digits.is_empty() {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
}
