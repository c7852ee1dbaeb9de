use std::path::Path;

use crate::error::Error;

/// Configuration file name looked up in the project root.
const CONFIG_FILE: &str = ".stimref.toml";

/// Project configuration loaded from `.stimref.toml`.
/// Directory settings locate the controller and view trees relative to
/// the project root; include/exclude patterns are path prefixes applied
/// to the root-relative paths of both template and controller files.
pub struct Config {
    pub controllers_dir: String,
    pub views_dir: String,
    include: Vec<String>,
    exclude: Vec<String>,
}

/// Raw TOML structure for `.stimref.toml`.
#[derive(serde::Deserialize)]
struct StimrefTomlConfig {
    #[serde(default = "default_controllers_dir")]
    controllers_dir: String,
    #[serde(default = "default_views_dir")]
    views_dir: String,
    #[serde(default)]
    include: Vec<String>,
    #[serde(default)]
    exclude: Vec<String>,
}

fn default_controllers_dir() -> String {
    "app/javascript/controllers".to_string()
}

fn default_views_dir() -> String {
    "app/views".to_string()
}

impl Default for Config {
    /// Conventional Rails layout, scanning every template.
    fn default() -> Self {
        Self {
            controllers_dir: default_controllers_dir(),
            views_dir: default_views_dir(),
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from `.stimref.toml` in the given root directory.
    /// Returns the conventional defaults if the file doesn't exist.
    /// Returns an error if the file exists but is malformed, never
    /// silently falling back to defaults when the user wrote a config file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(Error::Io(e)),
        };

        let raw: StimrefTomlConfig = toml::from_str(&content)?;
        Ok(Self {
            controllers_dir: raw.controllers_dir,
            views_dir: raw.views_dir,
            include: raw.include,
            exclude: raw.exclude,
        })
    }

    /// Check whether a discovered file, template or controller module,
    /// should enter the scan. `relative_path` is relative to the root.
    ///
    /// A path is included if no include patterns are set (scan everything),
    /// or if the path starts with at least one include pattern.
    /// An included path is then excluded if it starts with any exclude pattern.
    pub fn should_scan(&self, relative_path: &str) -> bool {
        let included = self.include.is_empty()
            || self.include.iter().any(|p| relative_path.starts_with(p.as_str()));

        if !included {
            return false;
        }

        !self.exclude.iter().any(|p| relative_path.starts_with(p.as_str()))
    }
}
