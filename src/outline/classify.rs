//! Per-node classification: declaration, naming hint, or nothing.

use crate::outline::params::format_params;
use crate::outline::syntax::{AssignTarget, FunctionNode, SyntaxNode};
use crate::outline::{Category, OutlineEntry, UNNAMED_PLACEHOLDER};

/// What a single node contributes to the outline
#[derive(Debug, Clone, PartialEq)]
pub enum Visit {
    /// The node is a function-like declaration
    Declaration(OutlineEntry),
    /// The node names a function literal somewhere below it
    Hint(String),
    Nothing,
}

/// Classify one node given the hint carried in from its context.
pub fn classify(node: &SyntaxNode, hint: &str, level: usize) -> Visit {
    match node {
        SyntaxNode::Function(func) => Visit::Declaration(declaration(func, hint, level)),

        SyntaxNode::VariableDeclarator(decl) => match &decl.id {
            Some(name) => Visit::Hint(name.clone()),
            None => Visit::Nothing,
        },

        SyntaxNode::ExpressionStatement {
            expression: Some(expression),
        } => match expression.as_ref() {
            SyntaxNode::Assignment(assign) => match &assign.target {
                AssignTarget::Identifier(name) => Visit::Hint(name.clone()),
                AssignTarget::Member {
                    property: Some(property),
                    ..
                } => Visit::Hint(property.clone()),
                _ => Visit::Nothing,
            },
            _ => Visit::Nothing,
        },

        SyntaxNode::Property(prop) => match &prop.key {
            Some(key) => Visit::Hint(key.clone()),
            None => Visit::Nothing,
        },

        _ => Visit::Nothing,
    }
}

fn declaration(func: &FunctionNode, hint: &str, level: usize) -> OutlineEntry {
    let name = match (&func.id, hint) {
        (Some(id), _) => id.clone(),
        (None, hint) if !hint.is_empty() => hint.to_string(),
        _ => UNNAMED_PLACEHOLDER.to_string(),
    };
    OutlineEntry {
        category: categorize(&name, func.generator),
        line: func.line,
        level,
        args: format_params(&func.params, &func.defaults),
        name,
    }
}

/// Category for a resolved name; the first matching rule wins.
pub fn categorize(name: &str, generator: bool) -> Category {
    if generator {
        return Category::Generator;
    }
    if name == UNNAMED_PLACEHOLDER {
        return Category::Unnamed;
    }
    let Some(first) = name.chars().next() else {
        return Category::Public;
    };
    if first == '_' {
        Category::Private
    } else if first.to_uppercase().eq(std::iter::once(first)) {
        // Naming convention only; `$` also passes
        Category::Class
    } else {
        Category::Public
    }
}
