//! Go source parsing.
//!
//! Wraps tree-sitter so that a file either yields a clean syntax tree or a
//! `ParseFailure` pointing at the first syntax error. tree-sitter recovers from
//! errors by inserting `ERROR`/`MISSING` nodes; any such node fails the file.

use std::path::Path;

use tree_sitter::{Node, Parser, Tree};

use crate::detectors::common::visit_all;
use crate::error::{GherkinError, Result};

/// Build a tree-sitter parser loaded with the Go grammar.
pub fn go_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| GherkinError::Language {
            message: format!("Failed to set Go language: {:?}", e),
        })?;
    Ok(parser)
}

/// Parse Go source into a syntax tree.
///
/// Comments are kept in the tree as `comment` nodes.
///
/// # Errors
///
/// Returns `GherkinError::ParseFailure` if:
/// - The parser produces no tree
/// - The tree contains an error or missing node
/// - The file has no `package` clause
pub fn parse_go(file_path: &Path, source: &str) -> Result<Tree> {
    let mut parser = go_parser()?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| GherkinError::ParseFailure {
            path: file_path.to_path_buf(),
            message: "parser produced no syntax tree".to_string(),
        })?;

    let root = tree.root_node();
    if root.has_error() {
        let message = match first_error(&root) {
            Some(node) => describe_error(&node, source),
            None => "syntax error".to_string(),
        };
        return Err(GherkinError::ParseFailure {
            path: file_path.to_path_buf(),
            message,
        });
    }

    if !has_package_clause(&root) {
        return Err(GherkinError::ParseFailure {
            path: file_path.to_path_buf(),
            message: "expected 'package' clause".to_string(),
        });
    }

    Ok(tree)
}

/// Find the first `ERROR` or `MISSING` node in document order.
fn first_error<'tree>(root: &Node<'tree>) -> Option<Node<'tree>> {
    let mut found = None;
    visit_all(root, |node| {
        if found.is_none() && (node.is_error() || node.is_missing()) {
            found = Some(*node);
        }
    });
    found
}

fn describe_error(node: &Node, source: &str) -> String {
    let pos = node.start_position();
    let line = pos.row + 1;
    let column = pos.column + 1;
    if node.is_missing() {
        format!("missing '{}' at line {}, column {}", node.kind(), line, column)
    } else {
        let text = node.utf8_text(source.as_bytes()).unwrap_or("");
        let preview: String = text.chars().take(20).collect();
        format!(
            "syntax error at line {}, column {} near {:?}",
            line, column, preview
        )
    }
}

fn has_package_clause(root: &Node) -> bool {
    let mut cursor = root.walk();
    let found = root
        .children(&mut cursor)
        .any(|child| child.kind() == "package_clause");
    found
}
