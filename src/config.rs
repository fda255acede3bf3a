use std::path::Path;

use crate::error::Error;

/// Name of the config file looked up in the scan root.
pub const CONFIG_FILE: &str = ".swordlink.toml";

/// Extensions scanned when the config does not list any.
const DEFAULT_EXTENSIONS: &[&str] = &["htm", "html", "md", "osis", "xhtml", "xml"];

/// Project configuration loaded from `.swordlink.toml`.
/// Include/exclude patterns are path prefixes applied to scanned documents.
#[derive(Debug)]
pub struct Config {
    /// Path prefixes that must not be scanned.
    exclude: Vec<String>,
    /// File extensions (without the dot) that are scanned.
    extensions: Vec<String>,
    /// Path prefixes to scan; empty means everything.
    include: Vec<String>,
}

/// Raw TOML structure for `.swordlink.toml`.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct SwordlinkTomlConfig {
    /// Path prefixes that must not be scanned.
    #[serde(default)]
    exclude: Vec<String>,
    /// File extensions to scan; defaults apply when absent.
    extensions: Option<Vec<String>>,
    /// Path prefixes to scan.
    #[serde(default)]
    include: Vec<String>,
}

impl Config {
    /// Load config from `.swordlink.toml` in the given root directory.
    /// Returns a default that scans everything if the file doesn't exist.
    /// Returns an error if the file exists but is malformed; a config the
    /// user wrote is never silently replaced by defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, scanning everything");
                return Ok(Self::scan_everything_by_default());
            },
            Err(e) => return Err(Error::Io(e)),
        };

        return Self::parse(&content);
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::TomlDe` if the TOML is malformed or has unknown keys.
    pub fn parse(content: &str) -> Result<Self, Error> {
        let raw: SwordlinkTomlConfig = toml::from_str(content)?;
        let extensions = raw.extensions.unwrap_or_else(default_extensions);
        return Ok(Self {
            exclude: raw.exclude,
            extensions: extensions
                .into_iter()
                .map(|ext| return ext.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            include: raw.include,
        });
    }

    /// Default config that includes everything and excludes nothing.
    fn scan_everything_by_default() -> Self {
        return Self {
            exclude: Vec::new(),
            extensions: default_extensions(),
            include: Vec::new(),
        };
    }

    /// Check whether a file's extension is one that gets scanned.
    /// Comparison ignores ASCII case.
    pub fn scans_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| return e.to_str()) else {
            return false;
        };
        return self.extensions.iter().any(|known| return known.eq_ignore_ascii_case(ext));
    }

    /// Check whether a document path should be scanned.
    ///
    /// A path is included if no include patterns are set (scan everything),
    /// or if the path starts with at least one include pattern.
    /// An included path is then excluded if it starts with any exclude pattern.
    pub fn should_scan(&self, relative_path: &str) -> bool {
        let included = self.include.is_empty()
            || self.include.iter().any(|p| return relative_path.starts_with(p.as_str()));

        if !included {
            return false;
        }

        return !self.exclude.iter().any(|p| return relative_path.starts_with(p.as_str()));
    }
}

/// Owned copy of the default extension list.
fn default_extensions() -> Vec<String> {
    return DEFAULT_EXTENSIONS.iter().map(|ext| return (*ext).to_string()).collect();
}
