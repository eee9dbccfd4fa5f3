//! Entry filtering for walking

use std::path::Path;

use super::config::WalkerConfig;
use super::utils::{base_name, is_hidden_name, matches_ignore_pattern};

/// What the walker should do with a discovered entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Record the entry in the output.
    Accept,
    /// Leave the entry out, but keep descending if it is a directory.
    SkipEntry,
    /// Leave the entry out and do not descend into it.
    SkipSubtree,
}

/// The facts about an entry that filtering looks at.
#[derive(Debug, Clone, Copy)]
pub struct EntryInfo<'a> {
    pub path: &'a Path,
    pub is_dir: bool,
    /// Distance from the root; the root itself is depth 0.
    pub depth: usize,
}

impl<'a> EntryInfo<'a> {
    pub fn new(path: &'a Path, is_dir: bool, depth: usize) -> Self {
        Self {
            path,
            is_dir,
            depth,
        }
    }

    pub fn from_dir_entry(entry: &'a ignore::DirEntry) -> Self {
        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
        Self::new(entry.path(), is_dir, entry.depth())
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }
}

/// Decides which entries are listed and which directories are descended into.
#[derive(Debug, Clone)]
pub struct PathFilter {
    include_hidden: bool,
    include_dirs: bool,
    ignore_patterns: Vec<String>,
}

impl PathFilter {
    pub fn new(config: &WalkerConfig) -> Self {
        Self {
            include_hidden: config.include_hidden,
            include_dirs: config.include_dirs,
            ignore_patterns: config.ignore_patterns.clone(),
        }
    }

    pub fn decide(&self, entry: &EntryInfo<'_>) -> Decision {
        // The root is where the walk starts, not something it found
        if entry.is_root() {
            return Decision::SkipEntry;
        }

        let name = base_name(entry.path);

        // Hidden directories are pruned even when directories are not listed,
        // so nothing below them can leak into the output
        if !self.include_hidden && is_hidden_name(&name) {
            return Self::prune(entry);
        }

        if matches_ignore_pattern(&name, &self.ignore_patterns) {
            return Self::prune(entry);
        }

        if entry.is_dir && !self.include_dirs {
            return Decision::SkipEntry;
        }

        Decision::Accept
    }

    /// Whether the walker may descend into (or visit) this entry at all.
    pub fn allows_descent(&self, entry: &EntryInfo<'_>) -> bool {
        self.decide(entry) != Decision::SkipSubtree
    }

    fn prune(entry: &EntryInfo<'_>) -> Decision {
        if entry.is_dir {
            Decision::SkipSubtree
        } else {
            Decision::SkipEntry
        }
    }
}
