//! Whole-project analysis: discovery, scanning, lint, and aggregation
//! in one pass, producing the artifact that every other command reads.

use std::path::Path;

use crate::aggregate::aggregate_controllers;
use crate::config::Config;
use crate::error::Error;
use crate::extract::AttributePatterns;
use crate::inventory::discover_controllers;
use crate::lint::lint_bindings;
use crate::scanner::{TemplateScanner, template_files};
use crate::types::{ScanMeta, ScanResult};

/// Run a full analysis of the project under `root`.
///
/// Stages run in a fixed order: controller discovery, template scanning
/// (files in lexicographic order, so binding identifiers are stable),
/// lint, then per-controller aggregation. Lint and aggregation both see
/// the complete binding list, never a partial one.
///
/// # Errors
///
/// Returns `Error::FileNotFound` if a discovered template file cannot
/// be read.
pub fn run_scan(root: &Path, config: &Config) -> Result<ScanResult, Error> {
    let patterns = AttributePatterns::compile();
    let controllers = discover_controllers(root, config);

    let mut bindings = Vec::new();
    let mut scanner = TemplateScanner::new(&patterns);
    for path in template_files(root, config) {
        let origin = path.strip_prefix(root).unwrap_or(&path).to_string_lossy().into_owned();
        scanner.scan_file(&path, &origin, &mut bindings)?;
    }

    let lint = lint_bindings(&controllers, &bindings);
    let aggregated = aggregate_controllers(&controllers, &bindings);

    return Ok(ScanResult {
        meta: ScanMeta { root: root.display().to_string(), generated_at: now_iso8601() },
        controllers: aggregated,
        bindings,
        lint,
    });
}

/// Current UTC time as an RFC 3339 timestamp for the artifact's meta.
fn now_iso8601() -> String {
    return time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| return "1970-01-01T00:00:00Z".to_string());
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn full_scan_wires_discovery_bindings_lint_and_rollup_together() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "app/javascript/controllers/chat_controller.js",
            "export default class extends Controller {}",
        );
        write(
            root,
            "app/views/rooms/show.html.erb",
            concat!(
                "<div data-controller=\"chat\" data-chat-room-id-value=\"12\"\n",
                "     data-action=\"submit->chat#send\" data-chat-target=\"input\">\n",
                "</div>\n",
                "<span data-controller=\"missing\"></span>\n",
            ),
        );

        let result = run_scan(root, &Config::default()).unwrap();

        assert_eq!(result.meta.root, root.display().to_string());
        assert_eq!(result.controllers.len(), 1);
        let chat = &result.controllers[0];
        assert_eq!(chat.name, "chat");
        assert_eq!(chat.element_count, 1);
        assert_eq!(chat.actions, vec!["send"]);
        assert_eq!(chat.targets, vec!["input"]);
        assert_eq!(chat.values, vec!["roomId"]);

        assert_eq!(result.bindings.len(), 2);
        assert_eq!(result.bindings[0].id, "el_0001");
        assert_eq!(result.bindings[1].id, "el_0002");
        assert_eq!(result.bindings[1].controllers, vec!["missing"]);
        assert_eq!(result.bindings[1].broken, Some(true));

        let titles: Vec<&str> = result.lint.iter().map(|f| return f.title.as_str()).collect();
        assert_eq!(titles, vec!["Unknown controller", "Empty binding"]);
    }

    #[test]
    fn element_with_controller_and_action_lints_clean() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "app/javascript/controllers/test_controller.js",
            "export default class extends Controller {}",
        );
        write(
            root,
            "app/views/widgets/show.html.erb",
            "<div data-controller=\"test\" data-action=\"click->test#test\"></div>\n",
        );

        let result = run_scan(root, &Config::default()).unwrap();

        assert_eq!(result.bindings.len(), 1);
        let binding = &result.bindings[0];
        assert_eq!(binding.controllers, vec!["test"]);
        assert_eq!(binding.actions, vec!["click->test#test"]);
        assert_eq!(binding.broken, None);
        assert!(result.lint.is_empty());
    }

    #[test]
    fn binding_identifiers_follow_lexicographic_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(root, "app/views/b/page.html.erb", "<div data-controller=\"two\">");
        write(root, "app/views/a/page.html.erb", "<div data-controller=\"one\">");

        let result = run_scan(root, &Config::default()).unwrap();
        assert_eq!(result.bindings[0].controllers, vec!["one"]);
        assert_eq!(result.bindings[0].id, "el_0001");
        assert_eq!(result.bindings[1].controllers, vec!["two"]);
        assert_eq!(result.bindings[1].id, "el_0002");
    }

    #[test]
    fn empty_project_scans_to_empty_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_scan(dir.path(), &Config::default()).unwrap();
        assert!(result.controllers.is_empty());
        assert!(result.bindings.is_empty());
        assert!(result.lint.is_empty());
    }

    #[test]
    fn excluded_templates_are_not_scanned() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::write(root.join(".stimref.toml"), "exclude = [\"app/views/legacy\"]\n").unwrap();
        write(root, "app/views/legacy/old.html.erb", "<div data-controller=\"old\">");
        write(root, "app/views/home/new.html.erb", "<div data-controller=\"new\">");

        let config = Config::load(root).unwrap();
        let result = run_scan(root, &config).unwrap();
        assert_eq!(result.bindings.len(), 1);
        assert_eq!(result.bindings[0].controllers, vec!["new"]);
    }

    #[test]
    fn excluded_controllers_lint_as_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::write(
            root.join(".stimref.toml"),
            "exclude = [\"app/javascript/controllers/legacy\"]\n",
        )
        .unwrap();
        write(
            root,
            "app/javascript/controllers/legacy/old_controller.js",
            "export default class extends Controller {}",
        );
        write(
            root,
            "app/views/home/index.html.erb",
            "<div data-controller=\"old\" data-action=\"click->old#go\"></div>\n",
        );

        let config = Config::load(root).unwrap();
        let result = run_scan(root, &config).unwrap();

        assert!(result.controllers.is_empty());
        assert_eq!(result.lint.len(), 1);
        assert_eq!(result.lint[0].title, "Unknown controller");
        assert_eq!(
            result.lint[0].detail,
            "Controller 'old' is referenced but not found in controllers directory"
        );
    }
}
