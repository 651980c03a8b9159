//! Whitespace normalization of `<br>` and `<hr>` markers.
//!
//! Removing elements leaves stray line breaks behind: runs of `<br>` where a
//! block used to be, breaks hugging a paragraph or closing one, several rules
//! in a row.
//! Whitespace-only text between siblings is ignored when looking for runs
//! and neighbours.

use dom_query::NodeRef;

use crate::dom;
use crate::options::FilterConfig;

use super::tags::is_block_tag;
use super::LOG_TARGET;

/// Longest run of consecutive `<br>` kept.
const MAX_BREAK_RUN: usize = 2;
/// Longest run of consecutive `<hr>` kept.
const MAX_RULE_RUN: usize = 1;

/// Children of `parent` that matter for adjacency: elements and non-blank text.
fn significant_children<'a>(parent: &NodeRef<'a>) -> Vec<NodeRef<'a>> {
    parent
        .children()
        .into_iter()
        .filter(|n| n.is_element() || (n.is_text() && !dom::is_blank_text(n)))
        .collect()
}

fn is_block(node: &NodeRef) -> bool {
    dom::tag_name(node).is_some_and(|t| is_block_tag(&t))
}

/// Drop `<br>` children next to a block sibling, or at the start or end of
/// a block parent.
fn strip_block_adjacent_breaks(parent: &NodeRef) -> usize {
    let children = significant_children(parent);
    let block_parent = is_block(parent);
    let last = children.len().saturating_sub(1);

    let mut removed = 0;
    for (i, child) in children.iter().enumerate() {
        if !dom::is_tag(child, "br") {
            continue;
        }
        let at_block_edge = block_parent && (i == 0 || i == last);
        let after_block = i > 0 && is_block(&children[i - 1]);
        let before_block = children.get(i + 1).is_some_and(is_block);

        if at_block_edge || after_block || before_block {
            dom::remove(child);
            removed += 1;
        }
    }
    removed
}

/// Keep at most `keep` consecutive `tag` children of `parent`.
fn collapse_runs(parent: &NodeRef, tag: &str, keep: usize) -> usize {
    let mut removed = 0;
    let mut run = 0;

    for child in significant_children(parent) {
        if !dom::is_tag(&child, tag) {
            run = 0;
            continue;
        }
        run += 1;
        if run > keep {
            dom::remove(&child);
            removed += 1;
        }
    }
    removed
}

/// One pass over `root` and every attached element below it.
fn sweep(root: &NodeRef) -> usize {
    let mut parents = vec![*root];
    parents.extend(dom::descendant_elements(root));

    let mut removed = 0;
    for parent in parents {
        if parent.id != root.id && !dom::is_attached_under(&parent, root) {
            continue;
        }
        removed += strip_block_adjacent_breaks(&parent);
        removed += collapse_runs(&parent, "br", MAX_BREAK_RUN);
        removed += collapse_runs(&parent, "hr", MAX_RULE_RUN);
    }
    removed
}

/// Collapse `<br>` runs to two, `<hr>` runs to one, and drop `<br>` next to
/// or alone inside block containers. Repeats until nothing changes.
///
/// Returns the number of removed markers.
pub fn normalize_whitespace(root: &NodeRef, config: &FilterConfig) -> usize {
    let mut total = 0;
    loop {
        let removed = sweep(root);
        if removed == 0 {
            break;
        }
        total += removed;
    }

    if config.debug && total > 0 {
        log::debug!(target: LOG_TARGET, "whitespace normalization removed {total} markers");
    }
    total
}
