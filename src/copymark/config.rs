use std::path::PathBuf;

/// Path fragments excluded from scanning wherever they occur in a path.
pub const DEFAULT_IGNORE_PATHS: &[&str] = &[
    "vendor",
    "node_modules",
    ".git",
    ".idea",
    ".vscode",
    "build",
    "dist",
    "bin",
    "tmp",
    "tests",
];

/// Filename suffixes eligible for annotation.
pub const DEFAULT_SUFFIXES: &[&str] = &[".go"];

/// Runtime configuration, built once at startup from CLI arguments and
/// passed by reference through the API and command layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute root of the tree to scan.
    pub root: PathBuf,

    /// Literal notice text prepended to qualifying files, verbatim.
    pub notice: String,

    /// Path fragments that exclude a file when found anywhere in its path.
    pub ignore_paths: Vec<String>,

    /// Filename suffixes a file must end with to qualify (e.g. ".go").
    pub suffixes: Vec<String>,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>, notice: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            notice: notice.into(),
            ignore_paths: DEFAULT_IGNORE_PATHS.iter().map(|s| s.to_string()).collect(),
            suffixes: DEFAULT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the suffix list (normalizes each suffix to start with a dot).
    pub fn with_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.suffixes = suffixes
            .into_iter()
            .map(|s| normalize_suffix(s.as_ref()))
            .collect();
        self
    }
}

fn normalize_suffix(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}
