//! Directory walking
//!
//! - `filter` decides which entries are listed and which directories are pruned
//! - `rewrite` turns walked paths into root-relative or root-prefixed strings
//! - `walker` drives the traversal of a single root

mod config;
mod filter;
mod rewrite;
mod utils;
mod walker;

pub use config::WalkerConfig;
pub use filter::{Decision, EntryInfo, PathFilter};
pub use rewrite::{PathRewriter, RootMode};
pub use walker::Walker;
