//! Empty-Element Cleanup
//!
//! Earlier stages leave wrappers behind: a `<div>` whose only child was a
//! removed menu, list items whose links were images, spacer blocks. This stage
//! removes every removable container that no longer holds media or a minimum
//! amount of text.

use dom_query::NodeRef;

use crate::dom;
use crate::options::FilterConfig;
use crate::result::{FilterKind, FilterResult};

use super::remove_deepest_first;
use super::tags::{MEANINGFUL_LEAF_TAG_SET, REMOVABLE_EMPTY_TAG_SET};

/// Check whether `node` holds no media leaf and less than `threshold`
/// characters of collapsed text.
#[must_use]
pub fn is_effectively_empty(node: &NodeRef, threshold: usize) -> bool {
    let has_media = node
        .descendants()
        .iter()
        .any(|n| dom::tag_name(n).is_some_and(|t| MEANINGFUL_LEAF_TAG_SET.contains(t.as_str())));
    if has_media {
        return false;
    }

    dom::collapsed_len(&node.text()) < threshold
}

/// Remove effectively empty containers under `root` until a full pass
/// removes nothing.
///
/// Table structure and headings are never removed, even when empty.
///
/// Returns the total number of removed nodes.
pub fn remove_empty_elements(root: &NodeRef, config: &FilterConfig) -> usize {
    let threshold = config.empty_element_threshold;
    let mut total = 0;

    loop {
        let removed = remove_deepest_first(root, &REMOVABLE_EMPTY_TAG_SET, config.debug, |node| {
            if is_effectively_empty(node, threshold) {
                FilterResult::remove(FilterKind::Empty, "no text or media")
            } else {
                FilterResult::keep()
            }
        });
        if removed == 0 {
            break;
        }
        total += removed;
    }

    total
}
