//! Gherkin marker-call detector
//!
//! Recognizes exactly one call shape in Go source:
//!
//! ```text
//! gherkin.Scenario(`...`)   // or "..."
//! ```
//!
//! The callee must be a selector on the plain identifier `gherkin`, the
//! selected name must be `Scenario`, and the call must have exactly one
//! argument that is a string literal token. Nothing is resolved: whatever
//! `gherkin` binds to in scope, a call shaped like this matches. Calls of any
//! other shape are ignored without diagnostics.

use std::borrow::Cow;

use tree_sitter::{Node, Tree};
use tracing::debug;

use crate::config::ExtractOptions;
use crate::detectors::common::{get_node_text, named_children_without_comments, visit_all};
use crate::utils::{normalize_scenario, strip_delimiters};

/// Qualifier identifier the marker function is called through.
pub const MARKER_QUALIFIER: &str = "gherkin";

/// Name of the marker function.
pub const MARKER_FUNCTION: &str = "Scenario";

const STRING_LITERAL_KINDS: &[&str] = &["interpreted_string_literal", "raw_string_literal"];

/// Return the raw literal text if `node` is a marker call.
///
/// The text is the literal's source span, delimiters included, with no
/// unescaping. Carriage returns are dropped from raw (backtick) literals, as
/// the Go scanner does, so CRLF sources yield the same text as LF ones.
pub fn match_marker_call<'src>(node: &Node, source: &'src str) -> Option<Cow<'src, str>> {
    if node.kind() != "call_expression" {
        return None;
    }

    let function = node.child_by_field_name("function")?;
    if function.kind() != "selector_expression" {
        return None;
    }

    let field = function.child_by_field_name("field")?;
    if get_node_text(&field, source) != MARKER_FUNCTION {
        return None;
    }

    let operand = function.child_by_field_name("operand")?;
    if operand.kind() != "identifier" || get_node_text(&operand, source) != MARKER_QUALIFIER {
        return None;
    }

    // Generic instantiation (gherkin.Scenario[T](...)) is a different shape
    if node.child_by_field_name("type_arguments").is_some() {
        return None;
    }

    let arguments = node.child_by_field_name("arguments")?;
    let args = named_children_without_comments(&arguments);
    let [arg] = args.as_slice() else {
        return None;
    };

    if !STRING_LITERAL_KINDS.contains(&arg.kind()) {
        return None;
    }

    let text = get_node_text(arg, source);
    if arg.kind() == "raw_string_literal" && text.contains('\r') {
        return Some(Cow::Owned(text.replace('\r', "")));
    }
    Some(Cow::Borrowed(text))
}

/// Collect the normalized scenarios of every marker call in `tree`, in walk order.
pub fn extract_scenarios(tree: &Tree, source: &str, options: &ExtractOptions) -> Vec<String> {
    let mut scenarios = Vec::new();

    visit_all(&tree.root_node(), |node| {
        if let Some(raw) = match_marker_call(node, source) {
            debug!(
                line = node.start_position().row + 1,
                "found {}.{} marker call", MARKER_QUALIFIER, MARKER_FUNCTION
            );
            let text = if options.strip_delimiters {
                strip_delimiters(raw.as_ref())
            } else {
                raw.as_ref()
            };
            scenarios.push(normalize_scenario(text));
        }
    });

    scenarios
}
