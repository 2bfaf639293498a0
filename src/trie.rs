//! Koa Radix Trie implementation.
//!
//! This module provides a compact prefix tree ("radix trie") for storing a
//! set of strings with shared-prefix compression. Chains of single-child
//! nodes are collapsed into one edge carrying a multi-character label, so
//! the node count is proportional to the number of branch points rather
//! than the total number of characters stored.
//!
//! Key features:
//! * Insertion with automatic edge splitting
//! * Exact and partial lookup through a read-only node view
//! * Prefix completion reported as suffixes
//! * Deletion with automatic path re-compaction
//! * Deterministic traversal order for listing and rendering
//!
//! # Example
//!
//! ```
//! use koa_trie::KoaTrie;
//!
//! let mut trie = KoaTrie::new();
//! trie.insert("car");
//! trie.insert("cart");
//! trie.insert("carbon");
//!
//! assert!(trie.contains("car"));
//! assert_eq!(trie.complete("car"), vec!["bon".to_string(), "t".to_string()]);
//!
//! assert!(trie.remove("cart"));
//! assert!(!trie.contains("cart"));
//! ```

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::config::KoaTrieConfig;
use crate::node::RadixNode;
use crate::render::{self, RenderMode};
use crate::KoaTrieResult;

/// Koa Radix Trie is a compact prefix tree storing a set of strings with
/// shared-prefix compression.
///
/// The tree is kept maximally compacted at all times: no node off the root
/// is a non-terminal with fewer than two children. Insertion splits edges
/// where a new word diverges from an existing label, and removal merges
/// pass-through nodes back into single edges.
///
/// Mutation requires `&mut self`, so the borrow checker enforces that
/// callers serialize writes; shared reads may run concurrently.
#[derive(Debug, Clone)]
pub struct KoaTrie {
    /// The root node. It carries no label and is only terminal while the
    /// empty word is stored.
    root: RadixNode,

    /// Number of stored words.
    len: usize,

    /// Configuration options.
    config: KoaTrieConfig,
}

impl KoaTrie {
    /// Creates a new empty `KoaTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(KoaTrieConfig::default())
    }

    /// Creates a new empty `KoaTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: KoaTrieConfig) -> Self {
        Self {
            root: RadixNode::root(),
            len: 0,
            config,
        }
    }

    /// Inserts a word into the trie.
    ///
    /// Insertion is idempotent: inserting a word that is already present
    /// only confirms its terminal flag and never duplicates structure.
    /// Inserting the empty string marks the root itself, since the root
    /// stands for the empty word.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// `true` if the word was newly added, `false` if it was already
    /// present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = self.normalize(word);
        let chars: Vec<char> = word.chars().collect();

        let mut node = &mut self.root;
        let mut idx = 0;

        while idx < chars.len() {
            let ch = chars[idx];

            if !node.children.contains_key(&ch) {
                // No edge starts with this character: the whole remaining
                // suffix becomes a new leaf.
                let suffix: String = chars[idx..].iter().collect();
                trace!(label = %suffix, "attaching new leaf");
                node.attach(RadixNode::leaf(suffix));
                self.len += 1;
                return true;
            }

            // Compare the unconsumed word against the child's label.
            let label: Vec<char> = node.children[&ch].label.chars().collect();
            let mut k = 0;
            while k < label.len() && idx < chars.len() && chars[idx] == label[k] {
                idx += 1;
                k += 1;
            }

            if k == label.len() {
                // Whole label matched; keep walking from the child.
                // The child is present, checked above.
                node = node.children.get_mut(&ch).unwrap();
                continue;
            }

            // The word diverged at offset k, or ran out inside the label.
            // Split the edge: a new common node takes the shared prefix and
            // the old child keeps the remainder. k >= 1 because the first
            // label character is the child's map key.
            let mut detached = node.children.remove(&ch).unwrap();
            detached.label = label[k..].iter().collect();

            let common_label: String = label[..k].iter().collect();
            let mut common = if idx == chars.len() {
                // The word is a proper prefix of the label, so the common
                // node itself is the finished word.
                RadixNode::leaf(common_label)
            } else {
                RadixNode::interior(common_label)
            };
            common.attach(detached);
            if idx < chars.len() {
                common.attach(RadixNode::leaf(chars[idx..].iter().collect()));
            }
            debug!(offset = k, "splitting edge");
            node.attach(common);
            self.len += 1;
            return true;
        }

        // The word was consumed exactly at a node boundary.
        if node.is_terminal {
            return false;
        }
        node.is_terminal = true;
        self.len += 1;
        true
    }

    /// Looks up a query without mutating the trie.
    ///
    /// The walk matches whole labels edge by edge. On success the reached
    /// node is returned as a read-only [`EntryView`]; inspect
    /// [`EntryView::is_terminal`] to distinguish a stored word from a path
    /// that exists only as a prefix.
    ///
    /// # Arguments
    ///
    /// * `query` - The character sequence to match.
    /// * `allow_partial` - When `true`, a query that is exhausted strictly
    ///   inside an edge label still resolves to the partially-matched node
    ///   instead of failing.
    ///
    /// # Returns
    ///
    /// The reached node's view, or `None` if the query leaves every edge.
    pub fn find(&self, query: &str, allow_partial: bool) -> Option<EntryView<'_>> {
        let query = self.normalize(query);
        let chars: Vec<char> = query.chars().collect();

        let mut node = &self.root;
        let mut idx = 0;

        while idx < chars.len() {
            let child = node.children.get(&chars[idx])?;

            let label: Vec<char> = child.label.chars().collect();
            let mut k = 0;
            while k < label.len() && idx < chars.len() {
                if chars[idx] != label[k] {
                    return None;
                }
                idx += 1;
                k += 1;
            }

            if k < label.len() {
                // Query exhausted strictly inside this label.
                if allow_partial {
                    return Some(EntryView { node: child });
                }
                return None;
            }

            node = child;
        }

        Some(EntryView { node })
    }

    /// Checks whether a word is stored in the trie.
    ///
    /// A path that exists only as a shared prefix does not count.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word, false)
            .map_or(false, |entry| entry.is_terminal())
    }

    /// Removes a word from the trie.
    ///
    /// The walk mirrors lookup; on the way back up, dead leaves are pruned
    /// and pass-through nodes are merged with their only child, so the tree
    /// never accumulates single-child non-terminal chains.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to remove.
    ///
    /// # Returns
    ///
    /// `true` if the word was present and removed, `false` otherwise.
    pub fn remove(&mut self, word: &str) -> bool {
        let word = self.normalize(word);
        let chars: Vec<char> = word.chars().collect();

        let removed = Self::remove_from(&mut self.root, &chars);
        if removed {
            self.len -= 1;
            debug!(word = %word, "removed word");
        }
        removed
    }

    fn remove_from(node: &mut RadixNode, rest: &[char]) -> bool {
        if rest.is_empty() {
            if !node.is_terminal {
                return false;
            }
            node.is_terminal = false;
            return true;
        }

        let ch = rest[0];
        let Some(child) = node.children.get_mut(&ch) else {
            return false;
        };

        // The whole label must match the next stretch of the word.
        let label_len = child.label.chars().count();
        if label_len > rest.len() || !child.label.chars().eq(rest[..label_len].iter().copied()) {
            return false;
        }

        if !Self::remove_from(child, &rest[label_len..]) {
            return false;
        }

        // Re-compact on the way back up.
        if !child.is_terminal && child.children.is_empty() {
            trace!("pruning dead leaf");
            node.children.remove(&ch);
        } else if !child.is_terminal && child.children.len() == 1 {
            trace!("merging pass-through node");
            child.merge_only_child();
        }
        true
    }

    /// Enumerates every stored word extending `prefix`, reported as the
    /// suffix beyond the prefix. Concatenating `prefix` with a returned
    /// suffix reconstructs the full word.
    ///
    /// A prefix that ends strictly inside an edge label continues through
    /// the remainder of that label. The empty suffix is never reported:
    /// a word equal to the prefix itself is not a completion of it.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to complete.
    ///
    /// # Returns
    ///
    /// The matching suffixes in sorted order, empty if the prefix matches
    /// no path. Truncated to the configured completion cap, if one is set.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let prefix = self.normalize(prefix);
        let chars: Vec<char> = prefix.chars().collect();
        let limit = self.config.get_max_completions();
        let mut out = Vec::new();

        let mut node = &self.root;
        let mut idx = 0;

        while idx < chars.len() {
            let Some(child) = node.children.get(&chars[idx]) else {
                return out;
            };

            let label: Vec<char> = child.label.chars().collect();
            let mut k = 0;
            while k < label.len() && idx < chars.len() {
                if chars[idx] != label[k] {
                    return out;
                }
                idx += 1;
                k += 1;
            }

            if k < label.len() {
                // The prefix ran out inside this label: the label remainder
                // starts every completion below this node.
                let carry: String = label[k..].iter().collect();
                Self::collect(child, &carry, limit, &mut out);
                return out;
            }

            node = child;
        }

        // Exact boundary match: completions start below the reached node.
        // The node's own terminal flag would only contribute the empty
        // suffix, which is excluded.
        for child in node.children.values() {
            Self::collect(child, &child.label, limit, &mut out);
        }
        out
    }

    /// Lists every stored word, in sorted traversal order.
    pub fn list(&self) -> Vec<String> {
        let mut out = Vec::new();
        Self::collect(&self.root, "", None, &mut out);
        out
    }

    /// Depth-first word collection. `acc` is the concatenation of labels
    /// from the start of the traversal down to `node`.
    fn collect(node: &RadixNode, acc: &str, limit: Option<usize>, out: &mut Vec<String>) {
        if limit.map_or(false, |max| out.len() >= max) {
            return;
        }
        if node.is_terminal {
            out.push(acc.to_string());
        }
        for child in node.children.values() {
            let next = format!("{acc}{}", child.label);
            Self::collect(child, &next, limit, out);
        }
    }

    /// Renders the trie using a mode selector.
    ///
    /// # Arguments
    ///
    /// * `mode` - `"words"` or `"tree"`.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The rendered text.
    /// * `Err(KoaTrieError::UnknownRenderMode)` - If the selector is not a
    ///   recognized mode; the error names the offending value.
    pub fn render(&self, mode: &str) -> KoaTrieResult<String> {
        let mode = mode.parse::<RenderMode>()?;
        Ok(self.render_as(mode))
    }

    /// Renders the trie using an already-parsed mode. Infallible.
    pub fn render_as(&self, mode: RenderMode) -> String {
        match mode {
            RenderMode::Words => render::words(&self.root),
            RenderMode::Tree => render::tree(&self.root),
        }
    }

    /// Returns the number of stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no words are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes all words from the trie.
    pub fn clear(&mut self) {
        debug!("clearing trie");
        self.root = RadixNode::root();
        self.len = 0;
    }

    fn normalize<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if self.config.get_case_sensitive() {
            Cow::Borrowed(input)
        } else {
            Cow::Owned(input.to_lowercase())
        }
    }

    #[cfg(test)]
    pub(crate) fn root_for_tests(&self) -> &RadixNode {
        &self.root
    }
}

impl Default for KoaTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of a node reached by [`KoaTrie::find`].
///
/// The view exposes the node's own label and terminal flag but gives no
/// access to the child set, so trie internals cannot be mutated through it.
#[derive(Debug, Clone, Copy)]
pub struct EntryView<'a> {
    node: &'a RadixNode,
}

impl EntryView<'_> {
    /// Whether the matched path spells a stored word.
    pub fn is_terminal(&self) -> bool {
        self.node.is_terminal
    }

    /// The label of the edge leading into the matched node. Empty for the
    /// root, i.e. for the empty query.
    pub fn label(&self) -> &str {
        &self.node.label
    }

    /// Number of edges leaving the matched node.
    pub fn child_count(&self) -> usize {
        self.node.children.len()
    }
}
