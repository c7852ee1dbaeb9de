//! Lint pass: cross-reference bindings against the controller inventory
//! and flag dangling references, malformed actions, and empty bindings.
//!
//! Findings are produced in binding order, and within one binding in
//! rule order (unknown controllers, then action format, then presence),
//! so reports are stable across runs.

use std::collections::HashSet;

use crate::types::{Binding, ControllerDescriptor, LintFinding, LintLevel};

/// A structurally valid action descriptor split into its three parts.
pub struct ActionParts<'a> {
    pub event: &'a str,
    pub controller: &'a str,
    pub method: &'a str,
}

/// Parse an action descriptor of the shape `event->controller#method`.
///
/// The event is everything before the first `->`, the controller sits
/// between that arrow and the first following `#`, and the method is
/// the remainder. All three parts must be non-empty, the event must not
/// contain `#`, and neither controller nor method may contain another
/// separator. Events themselves are unconstrained beyond that, so
/// dashed and namespaced event names (`turbo:load`) parse fine.
pub fn parse_action(raw: &str) -> Option<ActionParts<'_>> {
    let (event, rest) = raw.split_once("->")?;
    let (controller, method) = rest.split_once('#')?;

    if event.is_empty() || controller.is_empty() || method.is_empty() {
        return None;
    }
    if event.contains('#')
        || controller.contains("->")
        || method.contains('#')
        || method.contains("->")
    {
        return None;
    }

    return Some(ActionParts { event, controller, method });
}

/// Run all lint rules over the scanned bindings.
pub fn lint_bindings(
    controllers: &[ControllerDescriptor],
    bindings: &[Binding],
) -> Vec<LintFinding> {
    let known: HashSet<&str> = controllers.iter().map(|c| return c.name.as_str()).collect();
    let mut findings = Vec::new();

    for binding in bindings {
        check_unknown_controllers(binding, &known, &mut findings);
        check_action_formats(binding, &mut findings);
        check_empty_binding(binding, &mut findings);
    }

    return findings;
}

/// Warn for every referenced controller that has no module on disk.
fn check_unknown_controllers(
    binding: &Binding,
    known: &HashSet<&str>,
    findings: &mut Vec<LintFinding>,
) {
    for controller in &binding.controllers {
        if known.contains(controller.as_str()) {
            continue;
        }
        findings.push(LintFinding {
            level: LintLevel::Warn,
            title: "Unknown controller".to_string(),
            detail: format!(
                "Controller '{controller}' is referenced but not found in controllers directory"
            ),
            hint: None,
            location: Some(binding.selector.clone()),
        });
    }
}

/// Warn for every action that does not parse as `event->controller#method`.
fn check_action_formats(binding: &Binding, findings: &mut Vec<LintFinding>) {
    for action in &binding.actions {
        if parse_action(action).is_some() {
            continue;
        }
        findings.push(LintFinding {
            level: LintLevel::Warn,
            title: "Suspicious action format".to_string(),
            detail: format!(
                "Action '{action}' doesn't match expected 'event->controller#method' format"
            ),
            hint: Some("Expected format: 'click->controller#method'".to_string()),
            location: Some(binding.selector.clone()),
        });
    }
}

/// Info for a binding that declares controllers but wires nothing to
/// them. Shares its predicate with the binding's `broken` flag, which
/// the scanner computed from the same emptiness test.
fn check_empty_binding(binding: &Binding, findings: &mut Vec<LintFinding>) {
    if binding.broken != Some(true) {
        return;
    }
    findings.push(LintFinding {
        level: LintLevel::Info,
        title: "Empty binding".to_string(),
        detail: "Element has data-controller but no actions, targets, or values".to_string(),
        hint: Some(
            "Consider adding data-action, targets, or values to make the controller useful"
                .to_string(),
        ),
        location: Some(binding.selector.clone()),
    });
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    fn descriptor(name: &str) -> ControllerDescriptor {
        ControllerDescriptor {
            name: name.to_string(),
            module_path: format!("app/javascript/controllers/{}_controller.js", name),
        }
    }

    fn binding(controllers: &[&str], actions: &[&str]) -> Binding {
        let controllers: Vec<String> = controllers.iter().map(|c| return (*c).to_string()).collect();
        let actions: Vec<String> = actions.iter().map(|a| return (*a).to_string()).collect();
        let broken = (!controllers.is_empty() && actions.is_empty()).then_some(true);
        Binding {
            id: "el_0001".to_string(),
            selector: "app/views/home/index.html.erb:4 <div data-controller=...>".to_string(),
            controllers,
            actions,
            targets: Vec::new(),
            values: Vec::new(),
            broken,
        }
    }

    #[test]
    fn parses_well_formed_actions() {
        let parts = parse_action("click->nav#open").unwrap();
        assert_eq!(parts.event, "click");
        assert_eq!(parts.controller, "nav");
        assert_eq!(parts.method, "open");
    }

    #[test]
    fn dashed_and_namespaced_events_are_valid() {
        assert!(parse_action("turbo:load->nav#init").is_some());
        assert!(parse_action("my-event->nav#go").is_some());
    }

    #[test]
    fn rejects_missing_or_duplicated_separators() {
        assert!(parse_action("invalid-action-format").is_none());
        assert!(parse_action("click->nav").is_none());
        assert!(parse_action("nav#open").is_none());
        assert!(parse_action("a->b->c#d").is_none());
        assert!(parse_action("a->b#c#d").is_none());
        assert!(parse_action("a#x->b#c").is_none());
        assert!(parse_action("->nav#open").is_none());
        assert!(parse_action("click->#open").is_none());
        assert!(parse_action("click->nav#").is_none());
    }

    #[test]
    fn unknown_controller_is_warned_with_its_name() {
        let known = vec![descriptor("nav")];
        let bindings = vec![binding(&["nav", "ghost"], &["click->nav#open"])];
        let findings = lint_bindings(&known, &bindings);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].level, LintLevel::Warn);
        assert_eq!(findings[0].title, "Unknown controller");
        assert_eq!(
            findings[0].detail,
            "Controller 'ghost' is referenced but not found in controllers directory"
        );
        assert_eq!(findings[0].hint, None);
        assert_eq!(findings[0].location.as_deref(), Some(bindings[0].selector.as_str()));
    }

    #[test]
    fn malformed_action_is_warned_with_hint() {
        let known = vec![descriptor("nav")];
        let bindings = vec![binding(&["nav"], &["invalid-action-format"])];
        let findings = lint_bindings(&known, &bindings);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].title, "Suspicious action format");
        assert_eq!(
            findings[0].detail,
            "Action 'invalid-action-format' doesn't match expected 'event->controller#method' format"
        );
        assert_eq!(findings[0].hint.as_deref(), Some("Expected format: 'click->controller#method'"));
    }

    #[test]
    fn empty_binding_is_reported_as_info() {
        let known = vec![descriptor("presence")];
        let bindings = vec![binding(&["presence"], &[])];
        let findings = lint_bindings(&known, &bindings);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].level, LintLevel::Info);
        assert_eq!(findings[0].title, "Empty binding");
        assert_eq!(
            findings[0].detail,
            "Element has data-controller but no actions, targets, or values"
        );
        assert_eq!(
            findings[0].hint.as_deref(),
            Some("Consider adding data-action, targets, or values to make the controller useful")
        );
    }

    #[test]
    fn rules_fire_in_order_within_one_binding() {
        let known = vec![descriptor("nav")];
        let bindings = vec![binding(&["ghost"], &["broken"])];
        let findings = lint_bindings(&known, &bindings);
        let titles: Vec<&str> = findings.iter().map(|f| return f.title.as_str()).collect();
        assert_eq!(titles, vec!["Unknown controller", "Suspicious action format"]);
    }

    #[test]
    fn clean_binding_produces_no_findings() {
        let known = vec![descriptor("nav")];
        let bindings = vec![binding(&["nav"], &["click->nav#open"])];
        assert!(lint_bindings(&known, &bindings).is_empty());
    }
}
