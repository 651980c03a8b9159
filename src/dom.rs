//! DOM Operations Adapter
//!
//! Node-level helpers over `dom_query` used by every filter: tag lookup,
//! attachment/depth checks against a filtering root, deepest-first candidate
//! snapshots, and whitespace-collapsed text measurement.
//!
//! The filters never reparent or clone nodes. A removal detaches the node
//! from its parent, after which any stale reference to it (or to one of its
//! descendants) fails the "still under root" check.

use std::cmp::Reverse;
use std::collections::HashSet;

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

// === Tag/Node Information ===

/// Get lowercase tag name, `None` for text/comment/document nodes.
#[must_use]
pub fn tag_name(node: &NodeRef) -> Option<String> {
    if !node.is_element() {
        return None;
    }
    node.node_name().map(|t| t.to_ascii_lowercase())
}

/// Check whether an element node has the given (lowercase) tag.
#[inline]
#[must_use]
pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    tag_name(node).is_some_and(|t| t == tag)
}

/// Get any attribute value as an owned string.
#[inline]
#[must_use]
pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    node.attr(name).map(|s| s.to_string())
}

/// First node of a selection, the root all filters operate under.
#[inline]
#[must_use]
pub fn first_node<'a>(sel: &Selection<'a>) -> Option<NodeRef<'a>> {
    sel.nodes().first().copied()
}

// === Tree Position ===

/// Number of parent hops from `node` up to `root`.
///
/// Returns `None` when `node` is `root` itself, is detached, or sits under a
/// detached ancestor.
#[must_use]
pub fn depth_under(node: &NodeRef, root: &NodeRef) -> Option<usize> {
    let mut depth = 0;
    let mut current = node.parent();
    while let Some(parent) = current {
        depth += 1;
        if parent.id == root.id {
            return Some(depth);
        }
        current = parent.parent();
    }
    None
}

/// Check that `node` is still attached somewhere below `root`.
#[inline]
#[must_use]
pub fn is_attached_under(node: &NodeRef, root: &NodeRef) -> bool {
    depth_under(node, root).is_some()
}

/// All element descendants of `root` (excluding `root`) in document order.
#[must_use]
pub fn descendant_elements<'a>(root: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    root.descendants()
        .into_iter()
        .filter(|n| n.is_element() && n.id != root.id)
        .collect()
}

/// Count every node (elements, text, comments) below `root`.
#[must_use]
pub fn count_descendants(root: &NodeRef) -> usize {
    root.descendants().into_iter().filter(|n| n.id != root.id).count()
}

/// Snapshot element descendants whose tag is in `tags`, deepest first.
///
/// Candidates at the same depth keep document order, so the result is
/// deterministic for a given tree.
#[must_use]
pub fn candidates_deepest_first<'a>(
    root: &NodeRef<'a>,
    tags: &HashSet<&'static str>,
) -> Vec<NodeRef<'a>> {
    let mut with_depth: Vec<(usize, NodeRef<'a>)> = descendant_elements(root)
        .into_iter()
        .filter(|n| tag_name(n).is_some_and(|t| tags.contains(t.as_str())))
        .filter_map(|n| depth_under(&n, root).map(|d| (d, n)))
        .collect();

    with_depth.sort_by_key(|(depth, _)| Reverse(*depth));
    with_depth.into_iter().map(|(_, n)| n).collect()
}

// === Tree Manipulation ===

/// Detach a node from its parent.
#[inline]
pub fn remove(node: &NodeRef) {
    node.remove_from_parent();
}

/// Replace an element with a plain text node carrying `text`.
///
/// The text is escaped before it is handed to the fragment parser, so markup
/// characters in link text survive as literal text.
pub fn replace_with_text(node: &NodeRef, text: &str) {
    let escaped = html_escape::encode_text(text);
    node.replace_with_html(escaped.into_owned());
}

// === Text Measurement ===

/// Check for a text node that holds only whitespace.
#[must_use]
pub fn is_blank_text(node: &NodeRef) -> bool {
    node.is_text() && node.text().trim().is_empty()
}

/// Character count of `text` after trimming and collapsing whitespace runs
/// to a single space.
#[must_use]
pub fn collapsed_len(text: &str) -> usize {
    let mut len: usize = 0;
    let mut tokens: usize = 0;
    for token in text.split_whitespace() {
        len += token.chars().count();
        tokens += 1;
    }
    len + tokens.saturating_sub(1)
}

/// Count whitespace-separated tokens of at least three characters.
///
/// Shorter tokens ("a", "of", "|", "»") are separator noise in navigation
/// blocks and are excluded from word counts.
#[must_use]
pub fn significant_word_count(text: &str) -> usize {
    text.split_whitespace()
        .filter(|token| token.chars().count() >= 3)
        .count()
}
