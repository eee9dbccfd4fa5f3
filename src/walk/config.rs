//! Configuration types for the walker

/// Configuration for walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// List dot-prefixed entries and descend into dot-prefixed directories
    pub include_hidden: bool,
    /// List directories themselves (they are always traversed)
    pub include_dirs: bool,
    /// Print paths relative to their root; ignored when several roots are walked
    pub strip_root: bool,
    /// Descend at most this many levels below a root
    pub max_depth: Option<usize>,
    /// Names or globs whose entries (and subtrees) are never listed
    pub ignore_patterns: Vec<String>,
}
