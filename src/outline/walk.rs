//! Depth-first traversal that accumulates outline entries.

use crate::outline::classify::{classify, Visit};
use crate::outline::syntax::SyntaxNode;
use crate::outline::OutlineEntry;

/// Walk `node` and its subtree in pre-order, appending every declaration.
///
/// `hint` names the next anonymous function; it only flows downward, so a
/// hint set inside one subtree never reaches that subtree's siblings.
/// `level` counts enclosing declarations, not syntactic nesting.
pub fn traverse(
    node: &SyntaxNode,
    mut list: Vec<OutlineEntry>,
    hint: &str,
    level: usize,
) -> Vec<OutlineEntry> {
    let mut child_level = level;
    let child_hint = match classify(node, hint, level) {
        Visit::Declaration(entry) => {
            list.push(entry);
            child_level += 1;
            None
        }
        Visit::Hint(name) => Some(name),
        Visit::Nothing => None,
    };
    let child_hint = child_hint.as_deref().unwrap_or(hint);

    for child in node.children() {
        list = traverse(child, list, child_hint, child_level);
    }
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::syntax::{FunctionNode, Property, VariableDeclarator};
    use crate::outline::{Category, UNNAMED_PLACEHOLDER};

    fn function(id: Option<&str>, line: usize, body: Vec<SyntaxNode>) -> SyntaxNode {
        SyntaxNode::Function(FunctionNode {
            id: id.map(str::to_string),
            decorators: Vec::new(),
            computed_name: None,
            params: Vec::new(),
            defaults: Vec::new(),
            generator: false,
            line,
            body: Some(Box::new(SyntaxNode::other("statement_block", body))),
        })
    }

    fn declarator(name: &str, init: SyntaxNode) -> SyntaxNode {
        SyntaxNode::VariableDeclarator(VariableDeclarator {
            id: Some(name.to_string()),
            pattern: None,
            init: Some(Box::new(init)),
        })
    }

    fn summary(list: &[OutlineEntry]) -> Vec<(&str, usize, usize)> {
        list.iter()
            .map(|e| (e.name.as_str(), e.line, e.level))
            .collect()
    }

    #[test]
    fn test_preorder_and_levels() {
        let tree = SyntaxNode::other(
            "program",
            vec![
                function(
                    Some("outer"),
                    1,
                    vec![
                        // Non-declaration nesting does not add a level
                        SyntaxNode::other(
                            "if_statement",
                            vec![SyntaxNode::other(
                                "statement_block",
                                vec![function(Some("inner"), 3, Vec::new())],
                            )],
                        ),
                        function(Some("sibling"), 5, Vec::new()),
                    ],
                ),
                function(Some("last"), 8, Vec::new()),
            ],
        );

        let list = traverse(&tree, Vec::new(), "", 0);
        assert_eq!(
            summary(&list),
            vec![("outer", 1, 0), ("inner", 3, 1), ("sibling", 5, 1), ("last", 8, 0)]
        );
    }

    #[test]
    fn test_hint_does_not_leak_to_siblings() {
        let tree = SyntaxNode::other(
            "program",
            vec![
                SyntaxNode::other(
                    "lexical_declaration",
                    vec![declarator("handler", function(None, 1, Vec::new()))],
                ),
                function(None, 2, Vec::new()),
            ],
        );

        let list = traverse(&tree, Vec::new(), "", 0);
        assert_eq!(list[0].name, "handler");
        assert_eq!(list[1].name, UNNAMED_PLACEHOLDER);
        assert_eq!(list[1].category, Category::Unnamed);
    }

    #[test]
    fn test_hint_survives_declaration() {
        // An anonymous callback inside a named function expression inherits
        // the outer hint when nothing closer renames it
        let tree = declarator(
            "load",
            function(
                None,
                1,
                vec![SyntaxNode::other(
                    "call_expression",
                    vec![function(None, 2, Vec::new())],
                )],
            ),
        );

        let list = traverse(&tree, Vec::new(), "", 0);
        assert_eq!(summary(&list), vec![("load", 1, 0), ("load", 2, 1)]);
    }

    #[test]
    fn test_nearest_hint_wins() {
        let tree = SyntaxNode::other(
            "object",
            vec![
                SyntaxNode::Property(Property {
                    key: Some("start".to_string()),
                    computed: None,
                    value: Some(Box::new(function(None, 2, Vec::new()))),
                }),
                SyntaxNode::Property(Property {
                    key: Some("stop".to_string()),
                    computed: None,
                    value: Some(Box::new(function(None, 3, Vec::new()))),
                }),
            ],
        );

        let list = traverse(&tree, Vec::new(), "api", 0);
        let names: Vec<_> = list.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["start", "stop"]);
    }

    #[test]
    fn test_accumulator_is_extended() {
        let seed = traverse(&function(Some("a"), 1, Vec::new()), Vec::new(), "", 0);
        let list = traverse(&function(Some("b"), 2, Vec::new()), seed, "", 0);
        assert_eq!(summary(&list), vec![("a", 1, 0), ("b", 2, 0)]);
    }

    #[test]
    fn test_empty_tree() {
        let list = traverse(&SyntaxNode::other("program", Vec::new()), Vec::new(), "", 0);
        assert!(list.is_empty());
    }
}
