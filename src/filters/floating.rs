//! Floating-Element Filter
//!
//! Floated blocks are usually sidebars, pull-quotes or promo boxes laid out
//! beside the article flow. They are dropped unless they carry enough
//! content of their own.

use dom_query::NodeRef;

use crate::dom;
use crate::layout::Layout;
use crate::metrics;
use crate::options::FilterConfig;
use crate::result::{FilterKind, FilterResult};

use super::remove_deepest_first;
use super::tags::FLOATABLE_TAG_SET;

/// Decide whether a floated container should be removed.
///
/// Only floatable tags floated left or right qualify. Such a node is kept if
/// its plain text exceeds `floating_min_text`, if it holds a large image, or
/// if it holds a medium image and no link text.
#[must_use]
pub fn evaluate_floating<L: Layout>(node: &NodeRef, config: &FilterConfig, layout: &L) -> FilterResult {
    let floatable = dom::tag_name(node).is_some_and(|tag| FLOATABLE_TAG_SET.contains(tag.as_str()));
    if !floatable {
        return FilterResult::keep();
    }

    let m = metrics::collect(node, layout);
    if !m.is_floating {
        return FilterResult::keep();
    }

    let has_content = m.plain_text_length > config.floating_min_text
        || m.images.large > 0
        || (m.images.medium > 0 && m.link_text_length == 0);
    if has_content {
        return FilterResult::keep();
    }

    FilterResult::remove(FilterKind::Floating, "floated without standalone content")
}

/// Remove floated containers under `root`, deepest first.
///
/// Returns the number of removed nodes.
pub fn filter_floating_elements<L: Layout>(root: &NodeRef, config: &FilterConfig, layout: &L) -> usize {
    remove_deepest_first(root, &FLOATABLE_TAG_SET, config.debug, |node| {
        evaluate_floating(node, config, layout)
    })
}
