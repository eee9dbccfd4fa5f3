//! Error types shared by the walker, the aggregator and the CLI

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The `-o` value does not name a known output style.
    #[error("'{0}' is not a valid output style (use -o help to list styles)")]
    UnknownStyle(String),

    /// Listing a directory under `root` failed; the whole root is dropped.
    #[error("cannot walk '{}': {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: ignore::Error,
    },

    /// No roots were given and the working directory could not be read.
    #[error("no directories given and the current directory is unavailable: {0}")]
    CurrentDir(#[source] io::Error),
}
