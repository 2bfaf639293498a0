// Copyright (c) 2025 Koa Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Koa Radix Trie.

/// Configuration options for the Koa Radix Trie.
///
/// The defaults match the trie's plain semantics: keys are matched on their
/// raw characters and completion enumerates every suffix. The knobs exist
/// for callers that feed user input into the trie and want case folding or
/// a bound on completion fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KoaTrieConfig {
    /// Whether keys are matched case-sensitively.
    /// When disabled, every word and query is folded to lowercase on entry.
    case_sensitive: bool,

    /// Optional cap on the number of suffixes a single `complete` call
    /// enumerates. `None` means unbounded.
    max_completions: Option<usize>,
}

impl KoaTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - case_sensitive: true
    /// - max_completions: None (unbounded)
    pub fn new() -> Self {
        Self {
            case_sensitive: true,
            max_completions: None,
        }
    }

    /// Set whether keys are matched case-sensitively.
    ///
    /// When set to `false`, words and queries are folded to lowercase on
    /// the way in, so `"Apple"` and `"apple"` address the same entry.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Cap the number of suffixes a single completion call enumerates.
    ///
    /// Useful when completing short prefixes over large word sets, where
    /// the full suffix set can be far bigger than a caller can display.
    pub fn with_max_completions(mut self, max_completions: usize) -> Self {
        if max_completions == 0 {
            panic!("Maximum completion count must be greater than 0");
        }
        self.max_completions = Some(max_completions);
        self
    }

    /// Get whether keys are matched case-sensitively.
    pub fn get_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Get the completion cap, if any.
    pub fn get_max_completions(&self) -> Option<usize> {
        self.max_completions
    }
}

impl Default for KoaTrieConfig {
    fn default() -> Self {
        Self::new()
    }
}
