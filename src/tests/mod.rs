//! Test modules for the Koa Radix Trie.
//!
//! Unit tests live next to the code they cover; this tree holds the
//! property-based suites, which check the trie's guarantees against naive
//! reference models:
//! - Round-trip and idempotence of insertion
//! - Lookup and deletion correctness
//! - The maximal-compaction structural invariant
//! - Completion-set correctness
