//! Plain-text report renderers for the cache-backed commands.
//!
//! Renderers build complete strings instead of printing, so command
//! bodies stay thin and tests can assert on exact output. Shapes are
//! stable: two-space indented blocks, one blank line after each record,
//! list lines omitted entirely when their list is empty.

use std::fmt::Write as _;

use crate::types::{AggregatedController, Binding, LintFinding};

/// Render the controller summary listing.
pub fn render_controllers(controllers: &[AggregatedController]) -> String {
    let mut out = String::from("Controllers:\n");

    for controller in controllers {
        let _ = writeln!(out, "  {} ({})", controller.name, controller.module_path);
        let _ = writeln!(out, "    Elements: {}", controller.element_count);
        if !controller.actions.is_empty() {
            let _ = writeln!(out, "    Actions: {}", controller.actions.join(", "));
        }
        if !controller.targets.is_empty() {
            let _ = writeln!(out, "    Targets: {}", controller.targets.join(", "));
        }
        if !controller.values.is_empty() {
            let _ = writeln!(out, "    Values: {}", controller.values.join(", "));
        }
        out.push('\n');
    }

    return out;
}

/// Render the binding listing. Callers filter before rendering, so the
/// renderer never needs to know about `--controller`.
pub fn render_bindings(bindings: &[Binding]) -> String {
    let mut out = String::from("Bindings:\n");

    for binding in bindings {
        let _ = writeln!(out, "  {} - {}", binding.id, binding.selector);
        if !binding.controllers.is_empty() {
            let _ = writeln!(out, "    Controllers: {}", binding.controllers.join(", "));
        }
        if !binding.actions.is_empty() {
            let _ = writeln!(out, "    Actions: {}", binding.actions.join(", "));
        }
        if !binding.targets.is_empty() {
            let targets: Vec<String> = binding
                .targets
                .iter()
                .map(|t| return format!("{}.{}", t.controller, t.name))
                .collect();
            let _ = writeln!(out, "    Targets: {}", targets.join(", "));
        }
        if !binding.values.is_empty() {
            let values: Vec<String> = binding
                .values
                .iter()
                .map(|v| return format!("{}.{}={}", v.controller, v.name, v.value))
                .collect();
            let _ = writeln!(out, "    Values: {}", values.join(", "));
        }
        if binding.broken == Some(true) {
            out.push_str("    BROKEN\n");
        }
        out.push('\n');
    }

    return out;
}

/// Render the lint findings listing.
pub fn render_lint(findings: &[LintFinding]) -> String {
    let mut out = String::from("Lint Results:\n");

    for finding in findings {
        let _ = writeln!(out, "  [{}] {}", finding.level, finding.title);
        let _ = writeln!(out, "    {}", finding.detail);
        if let Some(hint) = &finding.hint {
            let _ = writeln!(out, "    Hint: {hint}");
        }
        if let Some(location) = &finding.location {
            let _ = writeln!(out, "    Location: {location}");
        }
        out.push('\n');
    }

    return out;
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use crate::types::{LintLevel, TargetRef, ValueRef};

    #[test]
    fn controller_listing_omits_empty_list_lines() {
        let controllers = vec![AggregatedController {
            name: "nav".to_string(),
            module_path: "app/javascript/controllers/nav_controller.js".to_string(),
            element_count: 2,
            actions: vec!["close".to_string(), "open".to_string()],
            targets: Vec::new(),
            values: Vec::new(),
        }];
        let expected = "Controllers:\n  \
            nav (app/javascript/controllers/nav_controller.js)\n    \
            Elements: 2\n    \
            Actions: close, open\n\n";
        assert_eq!(render_controllers(&controllers), expected);
    }

    #[test]
    fn empty_inventory_renders_header_only() {
        assert_eq!(render_controllers(&[]), "Controllers:\n");
    }

    #[test]
    fn binding_listing_formats_targets_values_and_broken_flag() {
        let bindings = vec![
            Binding {
                id: "el_0001".to_string(),
                selector: "app/views/index.html.erb:1 <div data-controller=...>".to_string(),
                controllers: vec!["chat".to_string()],
                actions: vec!["submit->chat#send".to_string()],
                targets: vec![TargetRef {
                    controller: "chat".to_string(),
                    name: "input".to_string(),
                }],
                values: vec![ValueRef {
                    controller: "chat".to_string(),
                    name: "room".to_string(),
                    value: "lobby".to_string(),
                }],
                broken: None,
            },
            Binding {
                id: "el_0002".to_string(),
                selector: "app/views/index.html.erb:9 <div data-controller=...>".to_string(),
                controllers: vec!["ghost".to_string()],
                actions: Vec::new(),
                targets: Vec::new(),
                values: Vec::new(),
                broken: Some(true),
            },
        ];
        let rendered = render_bindings(&bindings);
        assert!(rendered.starts_with("Bindings:\n"));
        assert!(rendered.contains("  el_0001 - app/views/index.html.erb:1 <div data-controller=...>\n"));
        assert!(rendered.contains("    Targets: chat.input\n"));
        assert!(rendered.contains("    Values: chat.room=lobby\n"));
        assert!(rendered.contains("    BROKEN\n"));
        assert_eq!(rendered.matches("BROKEN").count(), 1);
    }

    #[test]
    fn lint_listing_uppercases_levels_and_keeps_optional_lines() {
        let findings = vec![
            LintFinding {
                level: LintLevel::Warn,
                title: "Unknown controller".to_string(),
                detail: "Controller 'ghost' is referenced but not found in controllers directory"
                    .to_string(),
                hint: None,
                location: Some("app/views/index.html.erb:9 <div data-controller=...>".to_string()),
            },
            LintFinding {
                level: LintLevel::Info,
                title: "Empty binding".to_string(),
                detail: "Element has data-controller but no actions, targets, or values"
                    .to_string(),
                hint: Some(
                    "Consider adding data-action, targets, or values to make the controller useful"
                        .to_string(),
                ),
                location: Some("app/views/index.html.erb:9 <div data-controller=...>".to_string()),
            },
        ];
        let rendered = render_lint(&findings);
        assert!(rendered.starts_with("Lint Results:\n"));
        assert!(rendered.contains("  [WARN] Unknown controller\n"));
        assert!(rendered.contains("  [INFO] Empty binding\n"));
        assert!(rendered.contains("    Hint: Consider adding data-action"));
        assert!(rendered.contains("    Location: app/views/index.html.erb:9"));
        let warn_block = rendered.split("  [INFO]").next().unwrap();
        assert!(!warn_block.contains("Hint:"));
    }
}
