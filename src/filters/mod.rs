//! Content filter stages.
//!
//! # Module Structure
//!
//! - `tags`: Tag catalogs shared by the stages
//! - `link_density`: Navigation/boilerplate detection by link-text ratio
//! - `floating`: Floated sidebars and pull-outs without standalone content
//! - `ad_domains`: Ad-network images and advertising/affiliate links
//! - `empty`: Fixed-point removal of content-less containers
//! - `whitespace`: `<br>`/`<hr>` run collapsing
//! - `pipeline`: Stage ordering and statistics
//!
//! Every stage mutates the tree in place and returns how many nodes it
//! removed or neutralized. Stages that remove containers share the same
//! discipline: snapshot the candidates once, sort deepest first, and skip any
//! candidate that an earlier removal already detached from the root.

use std::collections::HashSet;

use dom_query::NodeRef;

use crate::dom;
use crate::result::FilterResult;

pub mod ad_domains;
pub mod empty;
pub mod floating;
pub mod link_density;
pub mod pipeline;
pub mod tags;
pub mod whitespace;

pub use ad_domains::{filter_ad_images, filter_tracking_pixels, neutralize_ad_links};
pub use empty::{is_effectively_empty, remove_empty_elements};
pub use floating::{evaluate_floating, filter_floating_elements};
pub use link_density::{evaluate_link_density, filter_by_link_density};
pub use pipeline::ContentFilter;
pub use whitespace::normalize_whitespace;

/// Log target for removal decisions.
pub(crate) const LOG_TARGET: &str = "clip_filter";

/// Emit a removal decision when the config's debug flag is set.
pub(crate) fn log_removal(debug: bool, node: &NodeRef, verdict: &FilterResult) {
    if !debug {
        return;
    }
    log::debug!(
        target: LOG_TARGET,
        "removing <{}> [{}]: {}",
        dom::tag_name(node).unwrap_or_default(),
        verdict.filter_kind.map_or("-", |kind| kind.as_str()),
        verdict.reason.unwrap_or("no reason"),
    );
}

/// Evaluate `tags` candidates under `root` deepest first and detach every
/// node the evaluator marks for removal.
///
/// Candidates are snapshotted before any mutation. Each one is re-checked for
/// attachment right before evaluation, so a node whose ancestor was removed
/// earlier in the pass is skipped rather than evaluated on stale structure.
pub(crate) fn remove_deepest_first<'a, F>(
    root: &NodeRef<'a>,
    tags: &HashSet<&'static str>,
    debug: bool,
    mut evaluate: F,
) -> usize
where
    F: FnMut(&NodeRef<'a>) -> FilterResult,
{
    let mut removed = 0;

    for node in dom::candidates_deepest_first(root, tags) {
        if !dom::is_attached_under(&node, root) {
            continue;
        }

        let verdict = evaluate(&node);
        if verdict.should_remove {
            log_removal(debug, &node, &verdict);
            dom::remove(&node);
            removed += 1;
        }
    }

    removed
}
