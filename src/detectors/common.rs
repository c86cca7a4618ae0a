//! Common utilities shared by detectors
//!
//! Helpers for AST traversal and node text extraction.

use tree_sitter::Node;

// ============================================================================
// Text Extraction
// ============================================================================

/// Get the raw source text of a node
pub fn get_node_text<'src>(node: &Node, source: &'src str) -> &'src str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Named children of a node, excluding comments
pub fn named_children_without_comments<'tree>(node: &Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();
    children
}

// ============================================================================
// AST Traversal
// ============================================================================

/// Visit all nodes in a tree, depth-first pre-order (iterative to avoid stack overflow)
pub fn visit_all<'tree, F>(node: &Node<'tree>, mut visitor: F)
where
    F: FnMut(&Node<'tree>),
{
    let mut cursor = node.walk();
    let mut did_visit_children = false;

    loop {
        if !did_visit_children {
            visitor(&cursor.node());

            // Try to go to first child
            if cursor.goto_first_child() {
                continue;
            }
        }

        // Try to go to next sibling
        if cursor.goto_next_sibling() {
            did_visit_children = false;
            continue;
        }

        // Go back to parent; the walk stops once we are back at the start node
        if !cursor.goto_parent() {
            break;
        }
        did_visit_children = true;
    }
}
