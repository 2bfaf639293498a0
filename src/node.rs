//! Node implementation for the Koa Radix Trie.
//!
//! Nodes are the building blocks of the trie. Unlike a plain character trie,
//! each node carries a multi-character edge label, so a node stands for a
//! whole shared segment of one or more stored words.

use std::collections::BTreeMap;

/// A node in the Koa Radix Trie.
///
/// The concatenation of labels from the root down to a node spells a path;
/// terminal nodes mark paths that are stored words. Children are keyed by
/// the first character of their label, which keeps sibling labels disjoint,
/// and the map is ordered so every traversal is deterministic.
///
/// Each node exclusively owns its children; dropping a node drops its whole
/// subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RadixNode {
    /// Edge label leading into this node. Non-empty for every node except
    /// the root.
    pub(crate) label: String,

    /// Whether the root-to-node label concatenation is a stored word.
    pub(crate) is_terminal: bool,

    /// Child nodes, keyed by the first character of each child's label.
    pub(crate) children: BTreeMap<char, RadixNode>,
}

impl RadixNode {
    /// Creates the root node. The root carries no label and is only
    /// terminal while the empty word is stored.
    pub(crate) fn root() -> Self {
        Self::default()
    }

    /// Creates a terminal node carrying `label`.
    pub(crate) fn leaf(label: String) -> Self {
        Self {
            label,
            is_terminal: true,
            children: BTreeMap::new(),
        }
    }

    /// Creates a non-terminal interior node carrying `label`.
    pub(crate) fn interior(label: String) -> Self {
        Self {
            label,
            is_terminal: false,
            children: BTreeMap::new(),
        }
    }

    /// The character this node is keyed under in its parent's child map.
    pub(crate) fn key_char(&self) -> char {
        debug_assert!(!self.label.is_empty(), "only the root may have an empty label");
        self.label.chars().next().unwrap_or('\0')
    }

    /// Attaches `child` under this node, keyed by the first character of
    /// its label.
    pub(crate) fn attach(&mut self, child: RadixNode) {
        self.children.insert(child.key_char(), child);
    }

    /// Absorbs this node's only child: the labels are concatenated and the
    /// child's terminal flag and children are adopted. Restores maximal
    /// compaction after a removal turned this node into a pass-through.
    pub(crate) fn merge_only_child(&mut self) {
        debug_assert!(!self.is_terminal && self.children.len() == 1);
        if let Some((_, child)) = self.children.pop_first() {
            self.label.push_str(&child.label);
            self.is_terminal = child.is_terminal;
            self.children = child.children;
        }
    }
}
