//! Controller inventory: discover behavior modules on disk and derive
//! their logical names from filenames.

use std::path::Path;

use walkdir::WalkDir;

use crate::config::Config;
use crate::types::ControllerDescriptor;

/// Filename suffix that marks a module as a controller.
const CONTROLLER_SUFFIX: &str = "_controller";

/// Discover all controller modules under the configured controllers
/// directory, in lexicographic path order. Include/exclude prefixes
/// apply to the root-relative module path, the same filter template
/// files pass through, so an excluded module never enters the
/// inventory and references to it lint as unknown. A missing directory
/// is not an error: the inventory is simply empty.
pub fn discover_controllers(root: &Path, config: &Config) -> Vec<ControllerDescriptor> {
    let controllers_root = root.join(&config.controllers_dir);
    let mut controllers = Vec::new();

    for entry in WalkDir::new(controllers_root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| return e.file_type().is_file())
    {
        let path = entry.path();
        let Some(name) = controller_name(path) else {
            continue;
        };
        let module_path = path.strip_prefix(root).unwrap_or(path).to_string_lossy().into_owned();
        if config.should_scan(&module_path) {
            controllers.push(ControllerDescriptor { name, module_path });
        }
    }

    return controllers;
}

/// Derive a controller's logical name from its module path, or `None`
/// when the file is not a controller module. `message_form_controller.js`
/// maps to `message-form`: drop the extension, drop the suffix, then
/// replace underscores with dashes to match attribute spelling.
fn controller_name(path: &Path) -> Option<String> {
    let extension = path.extension().and_then(|ext| return ext.to_str())?;
    if extension != "js" && extension != "ts" {
        return None;
    }

    let stem = path.file_stem().and_then(|stem| return stem.to_str())?;
    let base = stem.strip_suffix(CONTROLLER_SUFFIX)?;
    return Some(base.replace('_', "-"));
}
