// Copyright (c) 2025 Koa Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Structural rendering for the Koa Radix Trie.
//!
//! Two modes are supported: `"words"` emits every stored word, one per
//! line, and `"tree"` emits one node per line with a depth marker per
//! level and an annotation on terminal nodes. Both walk children in the
//! map's sorted order, so output is deterministic.

use std::str::FromStr;

use crate::error::KoaTrieError;
use crate::node::RadixNode;

/// Marker repeated once per depth level by the tree renderer.
const DEPTH_MARKER: char = '#';

/// Annotation appended to terminal nodes by the tree renderer.
const TERMINAL_MARKER: &str = " *";

/// Render modes understood by the trie's `render` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Every stored word, one per line, in traversal order.
    Words,
    /// One node per line: depth markers, the node label, and a `*`
    /// annotation on terminal nodes.
    Tree,
}

impl FromStr for RenderMode {
    type Err = KoaTrieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "words" => Ok(RenderMode::Words),
            "tree" => Ok(RenderMode::Tree),
            other => Err(KoaTrieError::UnknownRenderMode(other.to_string())),
        }
    }
}

/// Renders every stored word below `root`, one per line.
pub(crate) fn words(root: &RadixNode) -> String {
    let mut out = String::new();
    words_from(root, "", &mut out);
    out
}

fn words_from(node: &RadixNode, base: &str, out: &mut String) {
    if node.is_terminal {
        out.push_str(base);
        out.push('\n');
    }
    for child in node.children.values() {
        let next = format!("{base}{}", child.label);
        words_from(child, &next, out);
    }
}

/// Renders the node structure below `root`, one node per line. The root is
/// rendered at depth one with its empty label.
pub(crate) fn tree(root: &RadixNode) -> String {
    let mut out = String::new();
    tree_from(root, 1, &mut out);
    out
}

fn tree_from(node: &RadixNode, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push(DEPTH_MARKER);
    }
    out.push(' ');
    out.push_str(&node.label);
    if node.is_terminal {
        out.push_str(TERMINAL_MARKER);
    }
    out.push('\n');

    for child in node.children.values() {
        tree_from(child, depth + 1, out);
    }
}
