//! Turning walked paths into output strings

use std::path::{Component, Path, PathBuf};

use tracing::warn;

/// How output paths relate to the root they were found under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootMode {
    /// Relative to the root (`sub/b.txt`).
    Strip,
    /// Prefixed with the root as given (`root/sub/b.txt`).
    Join,
}

/// Rewrites paths found under a single root.
#[derive(Debug, Clone)]
pub struct PathRewriter {
    root: PathBuf,
    mode: RootMode,
}

impl PathRewriter {
    pub fn new(root: &Path, mode: RootMode) -> Self {
        Self {
            root: root.to_path_buf(),
            mode,
        }
    }

    /// Rewrite a path the walker produced by joining names onto the root.
    ///
    /// Names are kept byte for byte, whether or not they are valid UTF-8.
    pub fn rewrite(&self, path: &Path) -> PathBuf {
        match self.mode {
            RootMode::Join => path.to_path_buf(),
            RootMode::Strip => match self.relativize(path) {
                Some(relative) => relative.to_path_buf(),
                None => {
                    warn!(
                        path = %path.display(),
                        root = %self.root.display(),
                        "path is not under its root, keeping it as walked"
                    );
                    path.to_path_buf()
                }
            },
        }
    }

    /// The path relative to the root, or `None` if it would escape it.
    fn relativize<'p>(&self, path: &'p Path) -> Option<&'p Path> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let escapes = matches!(relative.components().next(), Some(Component::ParentDir));
        if escapes || relative.as_os_str().is_empty() {
            return None;
        }
        Some(relative)
    }
}
