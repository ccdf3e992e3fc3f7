//! Formal parameter rendering: `name` or `name=value`.

use crate::outline::common::{compact_text, MAX_DEFAULT_VALUE_LEN};
use crate::outline::syntax::{DefaultValue, Param, SyntaxNode};

/// Render each parameter with its default, if any.
///
/// `defaults` is aligned with `params` by index and may be shorter; a missing
/// or `None` entry means the parameter has no default.
pub fn format_params(params: &[Param], defaults: &[Option<DefaultValue>]) -> Vec<String> {
    params
        .iter()
        .enumerate()
        .map(|(i, param)| match defaults.get(i).and_then(Option::as_ref) {
            Some(default) => format!("{}={}", param.name, render_default(default)),
            None => param.name.clone(),
        })
        .collect()
}

/// Literal defaults render their raw value; anything else falls back to a
/// compacted copy of its source text.
fn render_default(default: &DefaultValue) -> String {
    match default.node.as_ref() {
        SyntaxNode::Literal(literal) => literal.value.clone(),
        _ => compact_text(&default.source, MAX_DEFAULT_VALUE_LEN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::syntax::Literal;

    fn param(name: &str) -> Param {
        Param {
            name: name.to_string(),
            pattern: None,
        }
    }

    fn literal(value: &str, source: &str) -> Option<DefaultValue> {
        Some(DefaultValue {
            node: Box::new(SyntaxNode::Literal(Literal {
                value: value.to_string(),
            })),
            source: source.to_string(),
        })
    }

    #[test]
    fn test_params_without_defaults() {
        let params = vec![param("a"), param("b")];
        assert_eq!(format_params(&params, &[]), vec!["a", "b"]);
    }

    #[test]
    fn test_defaults_shorter_than_params() {
        let params = vec![param("a"), param("b"), param("c")];
        let defaults = vec![literal("1", "1")];
        assert_eq!(format_params(&params, &defaults), vec!["a=1", "b", "c"]);
    }

    #[test]
    fn test_defaults_with_gaps() {
        let params = vec![param("a"), param("b"), param("c")];
        let defaults = vec![None, literal("x", "\"x\""), None];
        assert_eq!(format_params(&params, &defaults), vec!["a", "b=x", "c"]);
    }

    #[test]
    fn test_non_literal_default_uses_source() {
        let params = vec![param("opts")];
        let defaults = vec![Some(DefaultValue {
            node: Box::new(SyntaxNode::other("object", Vec::new())),
            source: "{\n  retries: 3\n}".to_string(),
        })];
        assert_eq!(format_params(&params, &defaults), vec!["opts={ retries: 3 }"]);
    }

    #[test]
    fn test_long_default_is_truncated() {
        let params = vec![param("cb")];
        let source = format!("() => {}", "x".repeat(100));
        let defaults = vec![Some(DefaultValue {
            node: Box::new(SyntaxNode::other("arrow_function", Vec::new())),
            source,
        })];
        let rendered = &format_params(&params, &defaults)[0];
        assert!(rendered.starts_with("cb=() => xxx"));
        assert!(rendered.ends_with("..."));
        assert_eq!(rendered.chars().count(), "cb=".len() + MAX_DEFAULT_VALUE_LEN + 3);
    }
}
