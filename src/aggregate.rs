//! Per-controller rollup: fold scanned bindings into one summary row
//! per inventoried controller.

use crate::lint::parse_action;
use crate::types::{AggregatedController, Binding, ControllerDescriptor};

/// Aggregate bindings per controller, preserving inventory order. Each
/// descriptor produces exactly one row, even when nothing references it
/// (all-empty row) and even when two modules map to the same name (two
/// identical rows, surfacing the collision instead of hiding it).
pub fn aggregate_controllers(
    controllers: &[ControllerDescriptor],
    bindings: &[Binding],
) -> Vec<AggregatedController> {
    return controllers
        .iter()
        .map(|controller| return aggregate_one(controller, bindings))
        .collect();
}

/// Build the summary row for a single controller descriptor.
fn aggregate_one(controller: &ControllerDescriptor, bindings: &[Binding]) -> AggregatedController {
    let name = controller.name.as_str();
    let mut element_count = 0usize;
    let mut actions = Vec::new();
    let mut targets = Vec::new();
    let mut values = Vec::new();

    for binding in bindings {
        if !binding.controllers.iter().any(|c| return c == name) {
            continue;
        }
        element_count += 1;

        // Only structurally valid actions contribute methods, and only
        // when they address this controller.
        for action in &binding.actions {
            let Some(parts) = parse_action(action) else {
                continue;
            };
            if parts.controller == name {
                actions.push(parts.method.to_string());
            }
        }

        for target in &binding.targets {
            if target.controller == name {
                targets.push(target.name.clone());
            }
        }

        for value in &binding.values {
            if value.controller == name {
                values.push(value.name.clone());
            }
        }
    }

    return AggregatedController {
        name: controller.name.clone(),
        module_path: controller.module_path.clone(),
        element_count,
        actions: sorted_unique(actions),
        targets: sorted_unique(targets),
        values: sorted_unique(values),
    };
}

/// Sort and de-duplicate collected names.
fn sorted_unique(mut names: Vec<String>) -> Vec<String> {
    names.sort();
    names.dedup();
    return names;
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use crate::types::{TargetRef, ValueRef};

    fn descriptor(name: &str) -> ControllerDescriptor {
        ControllerDescriptor {
            name: name.to_string(),
            module_path: format!("app/javascript/controllers/{}_controller.js", name),
        }
    }

    fn binding(id: &str, controllers: &[&str]) -> Binding {
        Binding {
            id: id.to_string(),
            selector: format!("app/views/index.html.erb:1 <{id}...>"),
            controllers: controllers.iter().map(|c| return (*c).to_string()).collect(),
            actions: Vec::new(),
            targets: Vec::new(),
            values: Vec::new(),
            broken: None,
        }
    }

    #[test]
    fn counts_elements_per_binding_not_per_mention() {
        let controllers = vec![descriptor("nav")];
        let bindings = vec![binding("el_0001", &["nav", "nav"]), binding("el_0002", &["nav"])];
        let rows = aggregate_controllers(&controllers, &bindings);
        assert_eq!(rows[0].element_count, 2);
    }

    #[test]
    fn methods_come_only_from_valid_actions_addressing_the_controller() {
        let controllers = vec![descriptor("nav")];
        let mut b = binding("el_0001", &["nav"]);
        b.actions = vec![
            "click->nav#open".to_string(),
            "keyup->nav#open".to_string(),
            "click->other#close".to_string(),
            "not-an-action".to_string(),
        ];
        let rows = aggregate_controllers(&controllers, &[b]);
        assert_eq!(rows[0].actions, vec!["open"]);
    }

    #[test]
    fn names_are_sorted_and_deduplicated() {
        let controllers = vec![descriptor("list")];
        let mut b = binding("el_0001", &["list"]);
        b.targets = vec![
            TargetRef { controller: "list".to_string(), name: "row".to_string() },
            TargetRef { controller: "list".to_string(), name: "item".to_string() },
            TargetRef { controller: "list".to_string(), name: "row".to_string() },
        ];
        b.values = vec![
            ValueRef { controller: "list".to_string(), name: "pageSize".to_string(), value: "10".to_string() },
            ValueRef { controller: "list".to_string(), name: "endpoint".to_string(), value: "/x".to_string() },
        ];
        let rows = aggregate_controllers(&controllers, &[b]);
        assert_eq!(rows[0].targets, vec!["item", "row"]);
        assert_eq!(rows[0].values, vec!["endpoint", "pageSize"]);
    }

    #[test]
    fn unreferenced_controller_gets_an_all_empty_row() {
        let controllers = vec![descriptor("modal")];
        let rows = aggregate_controllers(&controllers, &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].element_count, 0);
        assert!(rows[0].actions.is_empty());
        assert!(rows[0].targets.is_empty());
        assert!(rows[0].values.is_empty());
    }

    #[test]
    fn colliding_names_produce_one_row_per_module() {
        let controllers = vec![
            ControllerDescriptor {
                name: "nav".to_string(),
                module_path: "app/javascript/controllers/nav_controller.js".to_string(),
            },
            ControllerDescriptor {
                name: "nav".to_string(),
                module_path: "app/javascript/controllers/legacy/nav_controller.js".to_string(),
            },
        ];
        let bindings = vec![binding("el_0001", &["nav"])];
        let rows = aggregate_controllers(&controllers, &bindings);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].element_count, 1);
        assert_eq!(rows[1].element_count, 1);
        assert_ne!(rows[0].module_path, rows[1].module_path);
    }
}
