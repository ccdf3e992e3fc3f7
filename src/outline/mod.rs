//! Function outline: AST-based declaration listing
//!
//! This module turns JavaScript/TypeScript source into a flat, ordered list of
//! function-like declarations for navigation sidebars.
//!
//! ## Architecture
//!
//! ```text
//! outline/
//! ├── mod.rs       - Entry point, dialect dispatch, record types
//! ├── common.rs    - Shared text utilities
//! ├── syntax.rs    - tree-sitter tree -> closed SyntaxNode model
//! ├── params.rs    - Parameter list rendering
//! ├── classify.rs  - Declaration / naming hint / nothing, per node
//! └── walk.rs      - Pre-order traversal threading hint and level
//! ```
//!
//! ## Usage
//!
//! ```
//! use js_outline::outline::{parse, Category};
//!
//! let entries = parse("function foo(a, b = 2) { function bar() {} }").unwrap();
//! assert_eq!(entries[0].name, "foo");
//! assert_eq!(entries[0].args, vec!["a", "b=2"]);
//! assert_eq!(entries[1].level, 1);
//! assert_eq!(entries[1].category, Category::Public);
//! ```

pub mod classify;
pub mod common;
pub mod params;
pub mod syntax;
pub mod walk;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tree_sitter::{Language, Parser};

use crate::error::{OutlineError, Result};

// ============ Constants ============

/// Name given to a function with no identifier and no naming hint
pub const UNNAMED_PLACEHOLDER: &str = "function";

// ============ Dialects ============

/// Source dialects with a grammar available for outlining
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
}

impl Dialect {
    /// Detect dialect from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "js" | "mjs" | "cjs" => Some(Self::JavaScript),
            "jsx" => Some(Self::Jsx),
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    /// Detect dialect from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Get the tree-sitter language for this dialect
    fn tree_sitter_language(&self) -> Language {
        match self {
            // The JavaScript grammar parses JSX natively
            Self::JavaScript | Self::Jsx => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

// ============ Result Types ============

/// Declaration category, decided once from the generator flag and the name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Generator,
    Unnamed,
    Private,
    Class,
    Public,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generator => "generator",
            Self::Unnamed => "unnamed",
            Self::Private => "private",
            Self::Class => "class",
            Self::Public => "public",
        }
    }
}

/// One function-like declaration in the outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    pub name: String,
    /// 1-based line where the declaration starts
    pub line: usize,
    #[serde(rename = "type")]
    pub category: Category,
    /// Number of enclosing declarations
    pub level: usize,
    pub args: Vec<String>,
}

// ============ Main Entry Point ============

/// Extract the outline of JavaScript source
pub fn parse(source: &str) -> Result<Vec<OutlineEntry>> {
    extract_outline(source, Dialect::JavaScript)
}

/// Extract the outline of `source` parsed as `dialect`.
///
/// Syntax errors never fail: tree-sitter recovers and the outline covers
/// whatever it could build. Only a parser that yields no tree is an error.
pub fn extract_outline(source: &str, dialect: Dialect) -> Result<Vec<OutlineEntry>> {
    let mut parser = Parser::new();
    parser
        .set_language(&dialect.tree_sitter_language())
        .map_err(|e| OutlineError::Language(e.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or(OutlineError::Parse { dialect })?;

    let root = tree.root_node();
    if root.has_error() {
        tracing::debug!(?dialect, "source has syntax errors, outlining recovered tree");
    }

    let syntax = syntax::lower(root, source.as_bytes());
    let entries = walk::traverse(&syntax, Vec::new(), "", 0);

    tracing::debug!(
        ?dialect,
        bytes = source.len(),
        entries = entries.len(),
        "extracted outline"
    );
    Ok(entries)
}
