//! Walker - lists the entries under a single root

use std::path::{Path, PathBuf};

use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::config::WalkerConfig;
use super::filter::{Decision, EntryInfo, PathFilter};
use super::rewrite::{PathRewriter, RootMode};

/// Depth-first walker that collects the output paths of one root at a time.
pub struct Walker {
    filter: PathFilter,
    max_depth: Option<usize>,
    mode: RootMode,
}

impl Walker {
    pub fn new(config: &WalkerConfig, mode: RootMode) -> Self {
        Self {
            filter: PathFilter::new(config),
            max_depth: config.max_depth,
            mode,
        }
    }

    pub fn mode(&self) -> RootMode {
        self.mode
    }

    /// Walk `root` and return its output paths in discovery order.
    ///
    /// The first listing error aborts the walk and nothing found so far is
    /// returned.
    pub fn walk(&self, root: &Path) -> Result<Vec<PathBuf>> {
        debug!(root = %root.display(), mode = ?self.mode, "walking root");

        let paths = self.collect(root, self.builder(root).build())?;

        debug!(root = %root.display(), entries = paths.len(), "finished root");
        Ok(paths)
    }

    /// Filter and rewrite the entries listed under `root`.
    fn collect<I>(&self, root: &Path, entries: I) -> Result<Vec<PathBuf>>
    where
        I: IntoIterator<Item = std::result::Result<DirEntry, ignore::Error>>,
    {
        let rewriter = PathRewriter::new(root, self.mode);
        let mut paths = Vec::new();

        for result in entries {
            let entry = result.map_err(|source| Error::Walk {
                root: root.to_path_buf(),
                source,
            })?;

            let info = EntryInfo::from_dir_entry(&entry);
            match self.filter.decide(&info) {
                Decision::Accept => paths.push(rewriter.rewrite(entry.path())),
                Decision::SkipEntry | Decision::SkipSubtree => {}
            }
        }

        Ok(paths)
    }

    fn builder(&self, root: &Path) -> WalkBuilder {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .max_depth(self.max_depth);

        // Pruned directories are never opened, so errors inside them
        // cannot abort the root
        let filter = self.filter.clone();
        builder.filter_entry(move |entry| {
            let info = EntryInfo::from_dir_entry(entry);
            let descend = filter.allows_descent(&info);
            if !descend {
                trace!(path = %entry.path().display(), "pruned");
            }
            descend
        });

        builder
    }
}
