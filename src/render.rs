//! Plain-text rendering of outlines for terminals.

use std::fmt::Write;

use crate::outline::{Category, OutlineEntry};

fn marker(category: Category) -> char {
    match category {
        Category::Generator => '*',
        Category::Unnamed => '~',
        Category::Private => '-',
        Category::Class => 'C',
        Category::Public => '+',
    }
}

/// One line per entry, indented two spaces per nesting level:
/// `  + name(a, b=2) :12`
pub fn render_entries(entries: &[OutlineEntry]) -> String {
    let mut output = String::new();
    for entry in entries {
        let _ = writeln!(
            output,
            "{}{} {}({}) :{}",
            "  ".repeat(entry.level),
            marker(entry.category),
            entry.name,
            entry.args.join(", "),
            entry.line
        );
    }
    output
}
