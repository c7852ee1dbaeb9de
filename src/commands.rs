//! Core CLI commands for stimref: scan, list, bindings, lint, export.
//!
//! Bodies stay thin: load the cache (or run the analysis), hand off to
//! a renderer, print. Data goes to stdout, status lines to stderr, so
//! reports stay pipeable.

use std::path::Path;
use std::process::ExitCode;

use crate::analysis;
use crate::config::Config;
use crate::dot;
use crate::error::Error;
use crate::report;
use crate::types::{LintLevel, ScanResult};

/// Show DOM bindings from the cache, optionally filtered to those
/// referencing one controller.
///
/// # Errors
///
/// Returns errors from cache reading.
pub fn bindings(cache: &Path, controller: Option<&str>) -> Result<(), Error> {
    let result = ScanResult::read(cache)?;
    let filtered = match controller {
        None => result.bindings,
        Some(name) => result
            .bindings
            .into_iter()
            .filter(|b| return b.controllers.iter().any(|c| return c == name))
            .collect(),
    };

    print!("{}", report::render_bindings(&filtered));
    return Ok(());
}

/// Export the cached artifact in another format.
///
/// # Errors
///
/// Returns `Error::UnknownFormat` for formats other than `json`/`dot`,
/// plus errors from cache reading or output writing.
pub fn export(cache: &Path, format: &str, out: &Path) -> Result<(), Error> {
    let result = ScanResult::read(cache)?;
    let content = match format {
        "json" => result.serialize()?,
        "dot" => dot::render_dot(&result),
        other => return Err(Error::UnknownFormat { format: other.to_string() }),
    };

    std::fs::write(out, content)?;
    eprintln!("Exported to {} in {format} format", out.display());
    return Ok(());
}

/// Map a `--fail-on` argument to a threshold level. `none` and any
/// unrecognized value mean never fail.
fn fail_threshold(fail_on: &str) -> Option<LintLevel> {
    return match fail_on {
        "info" => Some(LintLevel::Info),
        "warn" => Some(LintLevel::Warn),
        "error" => Some(LintLevel::Error),
        _ => None,
    };
}

/// Output a comprehensive reference document for stimref.
pub fn info(json: bool) {
    return crate::info::run(json);
}

/// Print lint findings from the cache; exit 1 when any finding reaches
/// the `--fail-on` threshold.
///
/// # Errors
///
/// Returns errors from cache reading.
pub fn lint(cache: &Path, fail_on: &str) -> Result<ExitCode, Error> {
    let result = ScanResult::read(cache)?;
    print!("{}", report::render_lint(&result.lint));

    let Some(threshold) = fail_threshold(fail_on) else {
        return Ok(ExitCode::SUCCESS);
    };
    if result.lint.iter().any(|f| return f.level >= threshold) {
        return Ok(ExitCode::from(1));
    }
    return Ok(ExitCode::SUCCESS);
}

/// List aggregated controllers from the cache.
///
/// # Errors
///
/// Returns errors from cache reading.
pub fn list(cache: &Path) -> Result<(), Error> {
    let result = ScanResult::read(cache)?;
    print!("{}", report::render_controllers(&result.controllers));
    return Ok(());
}

/// Absolutize the project root so artifact metadata doesn't depend on
/// the invocation directory. A root that doesn't resolve is kept as
/// given; the scan of it comes back empty rather than failing here.
fn resolve_root(root: &Path) -> std::path::PathBuf {
    return root.canonicalize().unwrap_or_else(|_err| return root.to_path_buf());
}

/// Scan the project and write the artifact.
///
/// # Errors
///
/// Returns errors from config loading, scanning, or artifact writing.
pub fn scan(root: &Path, out: &Path) -> Result<(), Error> {
    let root = resolve_root(root);
    let config = Config::load(&root)?;
    let result = analysis::run_scan(&root, &config)?;

    result.write(out)?;
    eprintln!("Scan completed. Results saved to {}", out.display());
    return Ok(());
}

/// Scan continuously, re-running on filesystem changes.
///
/// # Errors
///
/// Returns errors from watcher setup or the initial config load.
pub fn watch(root: &Path, out: &Path) -> Result<(), Error> {
    let root = resolve_root(root);
    return crate::watch::run(&root, out);
}
