//! Closed syntax model for outline extraction, lowered from tree-sitter.
//!
//! The tree-sitter tree is untyped: every node is a kind string plus fields.
//! Lowering turns it into [`SyntaxNode`], which names exactly the node shapes
//! the classifier cares about and keeps everything else as [`SyntaxNode::Other`]
//! with its named children, so nothing below an unknown node is lost.
//!
//! This is the only module that knows grammar kind strings. Both the
//! JavaScript and TypeScript grammars share the kinds used here.

use tree_sitter::Node;

use crate::outline::common::{
    compact_text, cook_string, get_node_text, MAX_PATTERN_LEN,
};

// ============ Syntax Model ============

/// A lowered syntax node.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxNode {
    /// Anything carrying a formal parameter list
    Function(FunctionNode),
    /// `name = init` inside `var`/`let`/`const`
    VariableDeclarator(VariableDeclarator),
    /// A statement consisting of a single expression
    ExpressionStatement {
        expression: Option<Box<SyntaxNode>>,
    },
    /// Plain or augmented assignment expression
    Assignment(Assignment),
    /// Object literal pair or class field definition
    Property(Property),
    /// Simple literal value
    Literal(Literal),
    /// Any other node, with its named children in source order
    Other {
        kind: String,
        children: Vec<SyntaxNode>,
    },
}

/// Function declaration, expression, arrow, generator or method.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionNode {
    /// Own identifier, if the declaration has one
    pub id: Option<String>,
    pub decorators: Vec<SyntaxNode>,
    /// `[expr]() {}` method name
    pub computed_name: Option<Box<SyntaxNode>>,
    pub params: Vec<Param>,
    /// Default values, aligned with `params` by index
    pub defaults: Vec<Option<DefaultValue>>,
    pub generator: bool,
    /// 1-based line of the declaration start
    pub line: usize,
    pub body: Option<Box<SyntaxNode>>,
}

/// Rendered name of one formal parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    /// Lowered pattern when the parameter is not a plain identifier
    pub pattern: Option<Box<SyntaxNode>>,
}

/// A parameter default: its lowered expression plus the source it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultValue {
    pub node: Box<SyntaxNode>,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    /// Declared name when the binding is a plain identifier
    pub id: Option<String>,
    /// Destructuring pattern when the binding is not an identifier
    pub pattern: Option<Box<SyntaxNode>>,
    pub init: Option<Box<SyntaxNode>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: AssignTarget,
    pub value: Option<Box<SyntaxNode>>,
}

/// Left-hand side of an assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignTarget {
    Identifier(String),
    /// `object.property`; `property` is `None` when it has no usable name
    Member {
        object: Box<SyntaxNode>,
        property: Option<String>,
    },
    /// Subscripts, destructuring and anything else
    Pattern(Box<SyntaxNode>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Key name when the key is a plain identifier
    pub key: Option<String>,
    /// Computed key expression, `[expr]: value`
    pub computed: Option<Box<SyntaxNode>>,
    pub value: Option<Box<SyntaxNode>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    /// String contents with escapes applied, other literals as written
    pub value: String,
}

impl SyntaxNode {
    pub fn other(kind: &str, children: Vec<SyntaxNode>) -> Self {
        SyntaxNode::Other {
            kind: kind.to_string(),
            children,
        }
    }

    /// Structural child slots, in source order.
    pub fn children(&self) -> Vec<&SyntaxNode> {
        match self {
            SyntaxNode::Function(func) => {
                let mut children: Vec<&SyntaxNode> = func.decorators.iter().collect();
                children.extend(func.computed_name.as_deref());
                for (i, param) in func.params.iter().enumerate() {
                    children.extend(param.pattern.as_deref());
                    if let Some(Some(default)) = func.defaults.get(i) {
                        children.push(default.node.as_ref());
                    }
                }
                children.extend(func.body.as_deref());
                children
            }
            SyntaxNode::VariableDeclarator(decl) => decl
                .pattern
                .as_deref()
                .into_iter()
                .chain(decl.init.as_deref())
                .collect(),
            SyntaxNode::ExpressionStatement { expression } => {
                expression.as_deref().into_iter().collect()
            }
            SyntaxNode::Assignment(assign) => {
                let target = match &assign.target {
                    AssignTarget::Identifier(_) => None,
                    AssignTarget::Member { object, .. } => Some(object.as_ref()),
                    AssignTarget::Pattern(pattern) => Some(pattern.as_ref()),
                };
                target.into_iter().chain(assign.value.as_deref()).collect()
            }
            SyntaxNode::Property(prop) => prop
                .computed
                .as_deref()
                .into_iter()
                .chain(prop.value.as_deref())
                .collect(),
            SyntaxNode::Literal(_) => Vec::new(),
            SyntaxNode::Other { children, .. } => children.iter().collect(),
        }
    }
}

// ============ Lowering ============

/// Lower a tree-sitter node (usually the root `program`) into the syntax model
pub fn lower(node: Node, source: &[u8]) -> SyntaxNode {
    match node.kind() {
        "function_declaration"
        | "function_expression"
        | "function"
        | "generator_function_declaration"
        | "generator_function"
        | "arrow_function"
        | "method_definition" => SyntaxNode::Function(lower_function(node, source)),

        "variable_declarator" => SyntaxNode::VariableDeclarator(lower_declarator(node, source)),

        "expression_statement" => SyntaxNode::ExpressionStatement {
            expression: first_named_child(node).map(|expr| Box::new(lower(expr, source))),
        },

        "assignment_expression" | "augmented_assignment_expression" => {
            SyntaxNode::Assignment(lower_assignment(node, source))
        }

        "pair" | "pair_pattern" | "field_definition" | "public_field_definition" => {
            SyntaxNode::Property(lower_property(node, source))
        }

        // `{ cb = function () {} }` names its default like a property would
        "object_assignment_pattern" => match node.child_by_field_name("left") {
            Some(left) if left.kind() == "shorthand_property_identifier_pattern" => {
                SyntaxNode::Property(Property {
                    key: identifier_text(left, source),
                    computed: None,
                    value: node
                        .child_by_field_name("right")
                        .map(|right| Box::new(lower(right, source))),
                })
            }
            _ => lower_other(node, source),
        },

        "string" | "number" | "true" | "false" | "null" | "undefined" | "regex" => {
            let text = get_node_text(node, source);
            let value = if node.kind() == "string" {
                cook_string(text)
            } else {
                text.to_string()
            };
            SyntaxNode::Literal(Literal { value })
        }

        // Parentheses carry no structure of their own
        "parenthesized_expression" => match only_named_child(node) {
            Some(inner) => lower(inner, source),
            None => lower_other(node, source),
        },

        _ => lower_other(node, source),
    }
}

fn lower_other(node: Node, source: &[u8]) -> SyntaxNode {
    SyntaxNode::Other {
        kind: node.kind().to_string(),
        children: named_children(node)
            .into_iter()
            .map(|child| lower(child, source))
            .collect(),
    }
}

fn lower_function(node: Node, source: &[u8]) -> FunctionNode {
    let name = node.child_by_field_name("name");
    let id = name.and_then(|name| identifier_text(name, source));
    let computed_name = name
        .filter(|name| name.kind() == "computed_property_name")
        .map(|name| Box::new(lower(name, source)));
    let decorators = named_children(node)
        .into_iter()
        .filter(|child| child.kind() == "decorator")
        .map(|child| lower(child, source))
        .collect();

    let mut params = Vec::new();
    let mut defaults = Vec::new();
    if let Some(list) = node.child_by_field_name("parameters") {
        for param in named_children(list) {
            let (param, default) = lower_parameter(param, source);
            params.push(param);
            defaults.push(default);
        }
    } else if let Some(single) = node.child_by_field_name("parameter") {
        // `x => x`
        let (param, default) = lower_parameter(single, source);
        params.push(param);
        defaults.push(default);
    }

    FunctionNode {
        id,
        decorators,
        computed_name,
        params,
        defaults,
        generator: is_generator(node),
        line: node.start_position().row + 1,
        body: node
            .child_by_field_name("body")
            .map(|body| Box::new(lower(body, source))),
    }
}

fn is_generator(node: Node) -> bool {
    if node.kind().starts_with("generator_") {
        return true;
    }
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == "*");
    found
}

/// Lower one entry of a formal parameter list and pull out its default
fn lower_parameter(node: Node, source: &[u8]) -> (Param, Option<DefaultValue>) {
    let (binding, default) = match node.kind() {
        "assignment_pattern" => (
            node.child_by_field_name("left"),
            node.child_by_field_name("right"),
        ),
        // TypeScript wraps every parameter with its annotation and modifiers
        "required_parameter" | "optional_parameter" => (
            node.child_by_field_name("pattern"),
            node.child_by_field_name("value"),
        ),
        _ => (Some(node), None),
    };

    let param = match binding {
        Some(binding) => Param {
            name: parameter_name(binding, source),
            pattern: pattern_slot(binding, source),
        },
        None => Param {
            name: String::new(),
            pattern: None,
        },
    };
    (param, default.map(|value| lower_default(value, source)))
}

/// Subtree of a non-identifier binding, which may hold nested defaults
fn pattern_slot(node: Node, source: &[u8]) -> Option<Box<SyntaxNode>> {
    match node.kind() {
        "identifier" | "this" => None,
        "rest_pattern" => first_named_child(node).and_then(|inner| pattern_slot(inner, source)),
        _ => Some(Box::new(lower(node, source))),
    }
}

fn parameter_name(node: Node, source: &[u8]) -> String {
    match node.kind() {
        "identifier" | "this" => get_node_text(node, source).to_string(),
        "rest_pattern" => match first_named_child(node) {
            Some(inner) => format!("...{}", parameter_name(inner, source)),
            None => compact_text(get_node_text(node, source), MAX_PATTERN_LEN),
        },
        _ => compact_text(get_node_text(node, source), MAX_PATTERN_LEN),
    }
}

fn lower_default(node: Node, source: &[u8]) -> DefaultValue {
    DefaultValue {
        node: Box::new(lower(node, source)),
        source: get_node_text(node, source).to_string(),
    }
}

fn lower_declarator(node: Node, source: &[u8]) -> VariableDeclarator {
    let name = node.child_by_field_name("name");
    let id = name.and_then(|name| match name.kind() {
        "identifier" => identifier_text(name, source),
        _ => None,
    });
    let pattern = match (name, &id) {
        (Some(name), None) => Some(Box::new(lower(name, source))),
        _ => None,
    };
    VariableDeclarator {
        id,
        pattern,
        init: node
            .child_by_field_name("value")
            .map(|value| Box::new(lower(value, source))),
    }
}

fn lower_assignment(node: Node, source: &[u8]) -> Assignment {
    let target = match node.child_by_field_name("left") {
        Some(left) => lower_target(left, source),
        None => AssignTarget::Pattern(Box::new(SyntaxNode::other("ERROR", Vec::new()))),
    };
    Assignment {
        target,
        value: node
            .child_by_field_name("right")
            .map(|right| Box::new(lower(right, source))),
    }
}

fn lower_target(node: Node, source: &[u8]) -> AssignTarget {
    match node.kind() {
        "identifier" => match identifier_text(node, source) {
            Some(name) => AssignTarget::Identifier(name),
            None => AssignTarget::Pattern(Box::new(lower(node, source))),
        },
        "member_expression" => {
            let object = match node.child_by_field_name("object") {
                Some(object) => lower(object, source),
                None => SyntaxNode::other("ERROR", Vec::new()),
            };
            AssignTarget::Member {
                object: Box::new(object),
                property: node
                    .child_by_field_name("property")
                    .and_then(|property| identifier_text(property, source)),
            }
        }
        "parenthesized_expression" => match only_named_child(node) {
            Some(inner) => lower_target(inner, source),
            None => AssignTarget::Pattern(Box::new(lower(node, source))),
        },
        _ => AssignTarget::Pattern(Box::new(lower(node, source))),
    }
}

fn lower_property(node: Node, source: &[u8]) -> Property {
    // JS class fields name the slot `property`, TS and object pairs use `name`/`key`
    let key_node = node
        .child_by_field_name("key")
        .or_else(|| node.child_by_field_name("property"))
        .or_else(|| node.child_by_field_name("name"));

    let (key, computed) = match key_node {
        Some(key) if key.kind() == "computed_property_name" => {
            (None, Some(Box::new(lower(key, source))))
        }
        Some(key) => (identifier_text(key, source), None),
        None => (None, None),
    };

    Property {
        key,
        computed,
        value: node
            .child_by_field_name("value")
            .map(|value| Box::new(lower(value, source))),
    }
}

// ============ Node Helpers ============

/// Text of an identifier-like node; `None` for literals, computed names and
/// zero-width recovery nodes
fn identifier_text(node: Node, source: &[u8]) -> Option<String> {
    if !matches!(
        node.kind(),
        "identifier"
            | "property_identifier"
            | "private_property_identifier"
            | "shorthand_property_identifier"
            | "shorthand_property_identifier_pattern"
            | "type_identifier"
    ) || node.is_missing()
    {
        return None;
    }
    let text = get_node_text(node, source);
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Named, non-comment children in source order
fn named_children(node: Node) -> Vec<Node> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .collect();
    children
}

fn first_named_child(node: Node) -> Option<Node> {
    named_children(node).into_iter().next()
}

fn only_named_child(node: Node) -> Option<Node> {
    let children = named_children(node);
    match children.as_slice() {
        [only] => Some(*only),
        _ => None,
    }
}
