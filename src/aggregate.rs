//! Walking several roots into one output sequence

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;
use crate::walk::{RootMode, Walker, WalkerConfig};

/// Pick how output paths relate to their roots for a whole invocation.
///
/// Several roots always keep their prefix so their entries stay
/// distinguishable, whatever was asked for.
pub fn effective_mode(root_count: usize, strip_root: bool) -> RootMode {
    if root_count == 1 && strip_root {
        RootMode::Strip
    } else {
        RootMode::Join
    }
}

/// Walk every root in order and concatenate their entries.
///
/// A root that fails contributes nothing; its error is handed to `on_error`
/// and the remaining roots are still walked.
pub fn aggregate<P, F>(roots: &[P], config: &WalkerConfig, mut on_error: F) -> Vec<PathBuf>
where
    P: AsRef<Path>,
    F: FnMut(Error),
{
    let walker = Walker::new(config, effective_mode(roots.len(), config.strip_root));
    let mut paths = Vec::new();

    for root in roots {
        match walker.walk(root.as_ref()) {
            Ok(found) => paths.extend(found),
            Err(e) => on_error(e),
        }
    }

    debug!(roots = roots.len(), entries = paths.len(), mode = ?walker.mode(), "aggregated");
    paths
}
