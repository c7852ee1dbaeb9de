//! Graphviz DOT export of the binding graph.
//!
//! Controllers become boxed nodes labeled with their element count.
//! Each binding contributes one `data-controller` edge per referenced
//! controller (selector node to controller node), and one edge per
//! structurally valid action (event node to `controller#method` node,
//! labeled with the raw action). Malformed actions stay out of the
//! graph; the lint report is where they show up.

use std::fmt::Write as _;

use crate::lint::parse_action;
use crate::types::ScanResult;

/// Render the whole artifact as a DOT digraph.
pub fn render_dot(result: &ScanResult) -> String {
    let mut out = String::from("digraph stimulus {\n  rankdir=LR;\n  node [shape=box];\n");

    for controller in &result.controllers {
        let _ = writeln!(
            out,
            "  \"{}\" [label=\"{}\\n({} elements)\"];",
            escape(&controller.name),
            escape(&controller.name),
            controller.element_count
        );
    }

    for binding in &result.bindings {
        for controller in &binding.controllers {
            let _ = writeln!(
                out,
                "  \"{}\" -> \"{}\" [label=\"data-controller\"];",
                escape(&binding.selector),
                escape(controller)
            );
        }

        for action in &binding.actions {
            let Some(parts) = parse_action(action) else {
                continue;
            };
            let _ = writeln!(
                out,
                "  \"{}\" -> \"{}#{}\" [label=\"{}\"];",
                escape(parts.event),
                escape(parts.controller),
                escape(parts.method),
                escape(action)
            );
        }
    }

    out.push('}');
    return out;
}

/// Escape a string for use inside a double-quoted DOT identifier.
/// Selectors carry tag previews, so embedded quotes are common.
fn escape(text: &str) -> String {
    return text.replace('\\', "\\\\").replace('"', "\\\"");
}
