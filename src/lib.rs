//! Koa Radix Trie Library
//!
//! This library provides a compact prefix tree ("radix trie") that stores a
//! set of strings with shared-prefix compression. Chains of single-child
//! nodes are merged into one edge carrying a multi-character label, which
//! keeps the node count proportional to the number of branch points.
//!
//! # Architecture
//!
//! The crate is designed with the following principles in mind:
//! - One owned node graph, shared by every operation
//! - Exclusive ownership throughout: each node owns its children outright,
//!   so teardown cascades and no lifetime bookkeeping is needed
//! - Maximal compaction as an invariant, not a maintenance task: insertion
//!   splits edges and removal merges them back eagerly
//! - Deterministic traversal order for reproducible listing and rendering
//! - Comprehensive error handling where failure is possible at all; the
//!   only fallible operation is rendering with an unknown mode selector

// Re-export public modules
pub mod config;
pub mod error;

// Internal modules; their public types are re-exported below
mod node;
mod render;
mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use config::KoaTrieConfig;
pub use error::KoaTrieError;
pub use render::RenderMode;
pub use trie::{EntryView, KoaTrie};

/// Result type for Koa Trie operations.
pub type KoaTrieResult<T> = Result<T, KoaTrieError>;

/// Version information for the Koa Radix Trie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
