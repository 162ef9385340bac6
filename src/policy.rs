use tracing::{debug, warn};

/// Name fragments that exclude a file or directory wherever they occur.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    "coverage",
    ".git",
    ".cache",
    ".next",
    "__pycache__",
    ".DS_Store",
];

pub const DEFAULT_INCLUDE_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".js", ".jsx", ".json", ".d.ts"];

fn resolve(kind: &str, values: Option<Vec<String>>, defaults: &[&str]) -> Vec<String> {
    let values = values.unwrap_or_else(|| defaults.iter().map(|s| s.to_string()).collect());
    values
        .into_iter()
        .filter(|v| {
            if v.is_empty() {
                warn!("Dropping empty {} entry", kind);
                false
            } else {
                true
            }
        })
        .collect()
}

/// Substring denylist applied to single directory or file names.
///
/// A name is ignored when it *contains* a pattern, so `mybuild` is skipped
/// just like `build`.
#[derive(Debug, Clone)]
pub struct IgnorePolicy {
    patterns: Vec<String>,
}

impl IgnorePolicy {
    pub fn new(patterns: Option<Vec<String>>) -> Self {
        let patterns = resolve("ignore pattern", patterns, DEFAULT_IGNORE_PATTERNS);
        debug!("Using ignore patterns: {:?}", patterns);
        IgnorePolicy { patterns }
    }

    pub fn should_ignore(&self, name: &str) -> bool {
        self.patterns.iter().any(|pattern| name.contains(pattern.as_str()))
    }
}

impl Default for IgnorePolicy {
    fn default() -> Self {
        IgnorePolicy::new(None)
    }
}

/// Suffix allowlist for file names.
#[derive(Debug, Clone)]
pub struct IncludePolicy {
    extensions: Vec<String>,
}

impl IncludePolicy {
    pub fn new(extensions: Option<Vec<String>>) -> Self {
        let extensions = resolve("include extension", extensions, DEFAULT_INCLUDE_EXTENSIONS);
        debug!("Using include extensions: {:?}", extensions);
        IncludePolicy { extensions }
    }

    pub fn includes(&self, name: &str) -> bool {
        self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
    }
}

impl Default for IncludePolicy {
    fn default() -> Self {
        IncludePolicy::new(None)
    }
}
