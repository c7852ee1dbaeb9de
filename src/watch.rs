//! File watcher: runs a scan on startup, then re-scans on source changes.

use std::path::Path;
use std::time::Duration;

use notify::{RecursiveMode, Watcher as _};

use crate::analysis;
use crate::config::Config;
use crate::diagnostics;
use crate::error::Error;

/// Debounce delay between filesystem events and re-scan.
const DEBOUNCE_MS: u64 = 100;

/// Create a filesystem watcher that sends events on the given channel.
///
/// # Errors
///
/// Returns an error if the watcher cannot be created.
fn create_watcher(
    tx: crossbeam_channel::Sender<()>,
) -> Result<notify::RecommendedWatcher, Error> {
    return notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
        if let Ok(event) = res
            && matches!(
                event.kind,
                notify::EventKind::Create(_)
                    | notify::EventKind::Modify(_)
                    | notify::EventKind::Remove(_)
            )
        {
            let _ = tx.send(());
        }
    })
    .map_err(|e| {
        return Error::WatchSetup { reason: e.to_string() };
    });
}

/// Entry point for the watch command.
///
/// Scans once, then monitors the controller and view trees and re-scans
/// on changes, rewriting the artifact each time. The config is reloaded
/// before every scan so edits to `.stimref.toml` take effect without a
/// restart, though newly configured directories only get watched after
/// one.
///
/// # Errors
///
/// Returns errors from the initial config load or watcher setup.
pub fn run(root: &Path, out: &Path) -> Result<(), Error> {
    eprintln!("watch: initial scan");
    rescan(root, out);

    let config = Config::load(root)?;
    let watch_dirs = [root.join(&config.controllers_dir), root.join(&config.views_dir)];

    let (tx, rx) = crossbeam_channel::unbounded();
    let mut watcher = create_watcher(tx)?;

    for dir in &watch_dirs {
        if dir.exists() {
            let _ = watcher.watch(dir, RecursiveMode::Recursive);
        }
    }

    let dir_count = watch_dirs.len();
    eprintln!("watch: monitoring {dir_count} directories, press Ctrl+C to stop");

    while rx.recv().is_ok() {
        let debounce = Duration::from_millis(DEBOUNCE_MS);
        while rx.recv_timeout(debounce).is_ok() {}
        eprintln!("watch: change detected, re-scanning...");
        rescan(root, out);
    }

    return Ok(());
}

/// Run one scan and report the outcome without ending the watch. Scan
/// failures are printed and swallowed so a transient error (a template
/// mid-save, a briefly malformed config) never kills the session.
fn rescan(root: &Path, out: &Path) {
    match scan_once(root, out) {
        Ok(summary) => eprintln!("watch: {summary}"),
        Err(e) => diagnostics::print_error(&e),
    }
}

/// Scan the project and rewrite the artifact, returning a one-line summary.
///
/// # Errors
///
/// Returns errors from config loading, scanning, or artifact writing.
fn scan_once(root: &Path, out: &Path) -> Result<String, Error> {
    let config = Config::load(root)?;
    let result = analysis::run_scan(root, &config)?;
    result.write(out)?;
    return Ok(format!(
        "{} controllers, {} bindings, {} findings",
        result.controllers.len(),
        result.bindings.len(),
        result.lint.len()
    ));
}
