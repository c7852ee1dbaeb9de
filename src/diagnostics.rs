use crate::error::Error;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Render an error as valid markdown with bold headings and print to stderr.
pub fn print_error(e: &Error) {
    let md = render_error(e);
    for line in md.lines() {
        if line.starts_with('#') {
            eprintln!("{BOLD}{line}{RESET}");
        } else {
            eprintln!("{line}");
        }
    }
}

/// Render an error as a structured markdown diagnostic.
///
/// Each variant produces a block with what happened and, where a single
/// command fixes it, how to recover.
pub fn render_error(e: &Error) -> String {
    match e {
        Error::CacheNotFound { path } => format!(
            "\
# Error: Cache Not Found

`{}` does not exist.

## Fix

Run a scan to generate it:

    stimref scan
",
            path.display()
        ),

        Error::CacheCorrupt { reason } => format!(
            "\
# Error: Cache Corrupt

{reason}

## Fix

Regenerate the cache:

    stimref scan
"
        ),

        Error::FileNotFound { path } => format!(
            "\
# Error: File Not Found

`{}` does not exist.
",
            path.display()
        ),

        Error::UnknownFormat { format } => format!(
            "\
# Error: Unknown Format

`{format}` is not an export format.

## Supported formats

- `json`: the scan artifact, pretty-printed
- `dot`: Graphviz digraph of controllers and bindings
"
        ),

        Error::WatchSetup { reason } => format!(
            "\
# Error: Watch Setup

Could not start the filesystem watcher: {reason}
"
        ),

        Error::Io(e) => format!(
            "\
# Error: I/O

{e}
"
        ),

        Error::Json(e) => format!(
            "\
# Error: Invalid JSON

{e}
"
        ),

        Error::TomlDe(e) => format!(
            "\
# Error: Invalid TOML

{e}
"
        ),
    }
}
