//! Koala - list the files under one or more directories on a single line

pub mod aggregate;
pub mod error;
pub mod output;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use aggregate::{aggregate, effective_mode};
pub use error::{Error, Result};
pub use output::{Diagnostics, OutputStyle, StyleSelection, style_list, write_line};
pub use walk::{Decision, EntryInfo, PathFilter, PathRewriter, RootMode, Walker, WalkerConfig};
