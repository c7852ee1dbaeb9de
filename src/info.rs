use std::path::PathBuf;

use serde::Serialize;

use crate::types::ScanResult;

/// Output the comprehensive stimref reference document.
pub fn run(json: bool) {
    let root = PathBuf::from(".");
    let state = gather_state(&root);

    if json {
        print_json(&state);
    } else {
        print_markdown(&state);
    }
}

// ── State gathering ───────────────────────────────────────────────────

struct CurrentState {
    config_found: bool,
    cache: Option<CacheCounts>,
}

struct CacheCounts {
    controllers: usize,
    bindings: usize,
    lint: usize,
}

fn gather_state(root: &std::path::Path) -> CurrentState {
    let config_found = root.join(".stimref.toml").exists();
    let cache = ScanResult::read(&root.join(".stimref.json")).ok().map(|r| CacheCounts {
        controllers: r.controllers.len(),
        bindings: r.bindings.len(),
        lint: r.lint.len(),
    });

    CurrentState { config_found, cache }
}

// ── Markdown output ───────────────────────────────────────────────────

fn print_markdown(state: &CurrentState) {
    let version = env!("CARGO_PKG_VERSION");
    print_markdown_header(version);
    print_markdown_state(state);
    println!();
    print_markdown_exit_codes();
}

fn print_markdown_header(version: &str) {
    print!(
        "\
# stimref {version}

Cross-reference Stimulus controllers and template bindings - find dangling
references, malformed actions, and dead wiring before they ship.

## Attribute Syntax

    data-controller=\"chat\"                         attach controllers
    data-action=\"click->chat#send\"                 wire events to methods
    data-chat-target=\"input\"                       declare one target
    data-chat-targets=\"row item\"                   declare several targets
    data-chat-room-id-value=\"12\"                   pass a value (roomId)

## Workflow

    stimref scan                      Scan the project, write .stimref.json
    stimref list                      List controllers from the cache
    stimref bindings                  Show DOM bindings from the cache
    stimref bindings --controller c   Only bindings referencing controller c
    stimref lint --fail-on warn       Print findings, exit 1 at/above level
    stimref export --format dot --out graph.dot
                                      Export the binding graph
    stimref watch                     Re-scan whenever sources change

## Scanned Files

| Pattern                                     | Role               |
|---------------------------------------------|--------------------|
| <controllers_dir>/**/*_controller.{{js,ts}} | Controller modules |
| <views_dir>/**/*.erb                        | Templates          |

## Configuration (.stimref.toml)

    controllers_dir = \"app/javascript/controllers\"  # controller module tree
    views_dir = \"app/views\"                         # template tree
    include = [\"app/views/admin\"]                   # only scan these paths
    exclude = [\"app/views/legacy\"]                  # skip these paths

## Current State

"
    );
}

fn print_markdown_state(state: &CurrentState) {
    if state.config_found {
        println!("Config: .stimref.toml (found)");
    } else {
        println!("Config: .stimref.toml (not found)");
    }

    match &state.cache {
        Some(c) => println!(
            "Cache:  .stimref.json ({} controllers, {} bindings, {} findings)",
            c.controllers, c.bindings, c.lint
        ),
        None => println!("Cache:  .stimref.json (not found)"),
    }
}

fn print_markdown_exit_codes() {
    print!(
        "\
## Exit Codes

| Code | Meaning |
|------|---------|
| 0    | Success |
| 1    | Lint findings at or above the --fail-on level |
| 2    | Runtime error |
"
    );
}

// ── JSON output ───────────────────────────────────────────────────────

#[derive(Serialize)]
struct InfoJson {
    version: String,
    scanned_files: Vec<ScannedFileInfo>,
    exit_codes: Vec<ExitCodeInfo>,
    current_state: StateJson,
}

#[derive(Serialize)]
struct ScannedFileInfo {
    pattern: String,
    role: String,
}

#[derive(Serialize)]
struct ExitCodeInfo {
    code: u8,
    meaning: String,
}

#[derive(Serialize)]
struct StateJson {
    config_found: bool,
    cache: Option<CacheJson>,
}

#[derive(Serialize)]
struct CacheJson {
    controllers: usize,
    bindings: usize,
    lint: usize,
}

fn print_json(state: &CurrentState) {
    let info = InfoJson {
        version: env!("CARGO_PKG_VERSION").to_string(),
        scanned_files: vec![
            ScannedFileInfo {
                pattern: "<controllers_dir>/**/*_controller.{js,ts}".to_string(),
                role: "Controller modules".to_string(),
            },
            ScannedFileInfo {
                pattern: "<views_dir>/**/*.erb".to_string(),
                role: "Templates".to_string(),
            },
        ],
        exit_codes: vec![
            ExitCodeInfo { code: 0, meaning: "Success".to_string() },
            ExitCodeInfo {
                code: 1,
                meaning: "Lint findings at or above the --fail-on level".to_string(),
            },
            ExitCodeInfo { code: 2, meaning: "Runtime error".to_string() },
        ],
        current_state: StateJson {
            config_found: state.config_found,
            cache: state.cache.as_ref().map(|c| CacheJson {
                controllers: c.controllers,
                bindings: c.bindings,
                lint: c.lint,
            }),
        },
    };

    // serde_json::to_string_pretty won't fail on this structure.
    let json = serde_json::to_string_pretty(&info).unwrap_or_default();
    println!("{json}");
}
