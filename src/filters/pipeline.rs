//! Content filter pipeline.
//!
//! Runs the stages in a fixed order over one root and accumulates their
//! counts:
//!
//! link-density → floating → ad-links → ad-images → tracking-pixels →
//! empty-cleanup → whitespace-normalize
//!
//! The order matters: link-density and floating removal leave wrappers that
//! only the empty-element cleanup collects, and whitespace normalization
//! runs last so it sees the final structure.

use dom_query::Selection;

use crate::dom;
use crate::domains::Blocklists;
use crate::layout::{InlineStyleLayout, Layout};
use crate::options::FilterConfig;
use crate::result::FilterStats;

use super::{
    filter_ad_images, filter_by_link_density, filter_floating_elements, filter_tracking_pixels,
    neutralize_ad_links, normalize_whitespace, remove_empty_elements, LOG_TARGET,
};

/// A configured filter pipeline.
///
/// Holds no per-run state, so one instance can filter any number of trees,
/// and instances with different configs or blocklists can coexist.
///
/// # Example
///
/// ```rust
/// use clip_filter::{ContentFilter, FilterConfig};
/// use dom_query::Document;
///
/// let doc = Document::from(r#"<article><div><br></div><p>Body text of the story.</p></article>"#);
/// let filter = ContentFilter::new(FilterConfig::default());
/// let stats = filter.apply(&doc.select("article"));
///
/// assert_eq!(stats.empty_elements, 1);
/// assert!(doc.select("article p").exists());
/// ```
#[derive(Debug, Clone)]
pub struct ContentFilter<L = InlineStyleLayout> {
    config: FilterConfig,
    blocklists: Blocklists,
    layout: L,
}

impl ContentFilter {
    /// Pipeline with the default blocklists and the inline-style layout.
    #[must_use]
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            blocklists: Blocklists::default(),
            layout: InlineStyleLayout,
        }
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

impl<L: Layout> ContentFilter<L> {
    /// Replace the layout source (float direction, rendered sizes).
    #[must_use]
    pub fn with_layout<M: Layout>(self, layout: M) -> ContentFilter<M> {
        ContentFilter {
            config: self.config,
            blocklists: self.blocklists,
            layout,
        }
    }

    /// Replace the ad/tracking domain tables.
    #[must_use]
    pub fn with_blocklists(mut self, blocklists: Blocklists) -> Self {
        self.blocklists = blocklists;
        self
    }

    #[must_use]
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    #[must_use]
    pub fn blocklists(&self) -> &Blocklists {
        &self.blocklists
    }

    /// Filter the subtree rooted at the first node of `root` in place.
    ///
    /// The root itself is never removed. An empty selection yields zeroed
    /// stats. `total_processed` counts the nodes left below the root.
    pub fn apply(&self, root: &Selection) -> FilterStats {
        let mut stats = FilterStats::default();
        let Some(root) = dom::first_node(root) else {
            return stats;
        };

        let config = &self.config;
        let layout = &self.layout;

        stats.link_density = filter_by_link_density(&root, config, layout);
        stats.floating = filter_floating_elements(&root, config, layout);
        stats.ad_links = neutralize_ad_links(&root, config, &self.blocklists);
        stats.images_skipped = filter_ad_images(&root, config, &self.blocklists, layout);
        stats.images_skipped += filter_tracking_pixels(&root, config, &self.blocklists, layout);
        stats.empty_elements = remove_empty_elements(&root, config);
        stats.whitespace = normalize_whitespace(&root, config);
        stats.total_processed = dom::count_descendants(&root);

        if config.debug {
            log::debug!(target: LOG_TARGET, "content filters: {stats}");
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::DomainList;
    use crate::error::Result;
    use crate::layout::FloatDirection;
    use dom_query::{Document, NodeRef};

    /// Layout that floats every element whose class contains `pull`.
    struct ClassLayout;

    impl Layout for ClassLayout {
        fn float_direction(&self, node: &NodeRef) -> Result<FloatDirection> {
            let pulled = node.attr("class").is_some_and(|c| c.contains("pull"));
            Ok(if pulled { FloatDirection::Left } else { FloatDirection::None })
        }

        fn rendered_size(&self, node: &NodeRef) -> Option<(u32, u32)> {
            dom::is_tag(node, "img").then_some((1, 1))
        }
    }

    #[test]
    fn test_empty_selection_yields_zero_stats() {
        let doc = Document::from("<div></div>");
        let stats = ContentFilter::default().apply(&doc.select("article"));
        assert_eq!(stats, FilterStats::default());
    }

    #[test]
    fn test_custom_layout_is_used() {
        let doc = Document::from(
            r#"<article>
                <div class="pull-quote">A short quote pulled aside.</div>
                <img src="/hero.jpg" width="800" height="400">
                <p>Body text that stays in place.</p>
            </article>"#,
        );

        let stats = ContentFilter::default()
            .with_layout(ClassLayout)
            .apply(&doc.select("article"));

        assert_eq!(stats.floating, 1);
        // rendered size 1x1 wins over declared 800x400
        assert_eq!(stats.images_skipped, 1);
        assert!(doc.select(".pull-quote").is_empty());
        assert!(doc.select("p").exists());
    }

    #[test]
    fn test_custom_blocklists_are_used() {
        let doc = Document::from(
            r#"<article><p>Read it on <a href="https://partner.example.net/r">the partner site</a> today.</p></article>"#,
        );

        let filter = ContentFilter::default().with_blocklists(Blocklists {
            ad_images: DomainList::default(),
            ad_links: DomainList::new(["example.net"]),
        });
        let stats = filter.apply(&doc.select("article"));

        assert_eq!(stats.ad_links, 1);
        assert!(doc.select("a").is_empty());
        assert_eq!(
            doc.select("p").text().as_ref(),
            "Read it on the partner site today."
        );
    }

    #[test]
    fn test_total_processed_counts_remaining_nodes() {
        let doc = Document::from(r#"<article><p>Hello there</p><p>Second one</p></article>"#);
        let stats = ContentFilter::default().apply(&doc.select("article"));

        // two paragraphs and their two text nodes
        assert_eq!(stats.total_processed, 4);
        assert!(stats.is_noop());
    }
}
