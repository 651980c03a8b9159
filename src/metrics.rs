//! Per-node text, link and image metrics.
//!
//! Metrics are computed fresh each time a filter evaluates a node; nothing is
//! cached across mutations.

use dom_query::NodeRef;

use crate::dom;
use crate::image::{classify_image, ImageSizeClass};
use crate::layout::Layout;

/// Image counts by size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageCounts {
    pub large: usize,
    pub medium: usize,
    pub small: usize,
    pub skip: usize,
}

impl ImageCounts {
    fn record(&mut self, class: ImageSizeClass) {
        match class {
            ImageSizeClass::Large => self.large += 1,
            ImageSizeClass::Medium => self.medium += 1,
            ImageSizeClass::Small => self.small += 1,
            ImageSizeClass::Skip => self.skip += 1,
        }
    }

    /// Total images seen.
    #[must_use]
    pub fn total(&self) -> usize {
        self.large + self.medium + self.small + self.skip
    }
}

/// Text, link and image statistics of one subtree.
///
/// `total_text_length == plain_text_length + link_text_length` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementMetrics {
    pub plain_text_length: usize,
    pub plain_word_count: usize,
    pub link_text_length: usize,
    pub link_word_count: usize,
    pub link_count: usize,
    pub total_text_length: usize,
    pub images: ImageCounts,
    pub is_floating: bool,
    /// `link_text_length / total_text_length`, 0 for a node without text.
    pub link_density: f64,
}

/// Walk `node`'s subtree once and collect its metrics.
///
/// Each non-blank text leaf contributes its whitespace-collapsed length and
/// its count of words of three or more characters, either to the link
/// counters (when an `<a>` lies between it and `node`) or to the plain ones.
/// `node` itself is never treated as the enclosing link.
#[must_use]
pub fn collect<L: Layout>(node: &NodeRef, layout: &L) -> ElementMetrics {
    let mut metrics = ElementMetrics {
        is_floating: layout
            .float_direction(node)
            .map(|f| f.is_floating())
            .unwrap_or(false),
        ..ElementMetrics::default()
    };

    let mut stack: Vec<(NodeRef, bool)> = node
        .children()
        .into_iter()
        .rev()
        .map(|child| (child, false))
        .collect();

    while let Some((current, in_link)) = stack.pop() {
        if current.is_text() {
            let text = current.text();
            let len = dom::collapsed_len(&text);
            if len == 0 {
                continue;
            }
            let words = dom::significant_word_count(&text);
            if in_link {
                metrics.link_text_length += len;
                metrics.link_word_count += words;
            } else {
                metrics.plain_text_length += len;
                metrics.plain_word_count += words;
            }
            continue;
        }

        let Some(tag) = dom::tag_name(&current) else {
            continue;
        };

        let child_in_link = match tag.as_str() {
            "a" => {
                metrics.link_count += 1;
                true
            }
            "img" => {
                metrics.images.record(classify_image(&current, layout));
                in_link
            }
            _ => in_link,
        };

        for child in current.children().into_iter().rev() {
            stack.push((child, child_in_link));
        }
    }

    metrics.total_text_length = metrics.plain_text_length + metrics.link_text_length;
    if metrics.total_text_length > 0 {
        metrics.link_density = metrics.link_text_length as f64 / metrics.total_text_length as f64;
    }

    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::InlineStyleLayout;
    use dom_query::Document;

    fn metrics_of(html: &str, selector: &str) -> ElementMetrics {
        let doc = Document::from(html);
        let node = dom::first_node(&doc.select(selector)).unwrap();
        collect(&node, &InlineStyleLayout)
    }

    #[test]
    fn test_plain_and_link_split() {
        let m = metrics_of(
            r#"<div id="d">Read the   full story <a href="/x">here now</a> today</div>"#,
            "#d",
        );

        assert_eq!(m.plain_text_length, "Read the full story".len() + "today".len());
        assert_eq!(m.link_text_length, "here now".len());
        assert_eq!(m.total_text_length, m.plain_text_length + m.link_text_length);
        assert_eq!(m.link_count, 1);
        // "the" counts, "a"-style short tokens would not
        assert_eq!(m.plain_word_count, 5);
        assert_eq!(m.link_word_count, 2);
        assert!(m.link_density > 0.0 && m.link_density < 0.5);
    }

    #[test]
    fn test_short_tokens_excluded_from_word_count() {
        let m = metrics_of(r#"<div id="d">a b c to of is by it</div>"#, "#d");
        assert_eq!(m.plain_word_count, 0);
        assert_eq!(m.plain_text_length, 20);
    }

    #[test]
    fn test_nested_link_text_counts_as_link() {
        let m = metrics_of(
            r#"<ul id="nav"><li><a href="/"><span>Home page</span></a></li><li><a href="/w">World</a></li></ul>"#,
            "#nav",
        );
        assert_eq!(m.plain_text_length, 0);
        assert_eq!(m.link_text_length, 9 + 5);
        assert_eq!(m.link_count, 2);
        assert!((m.link_density - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_root_link_text_is_plain() {
        let m = metrics_of(r#"<p><a id="l" href="/x">Link text</a></p>"#, "#l");
        assert_eq!(m.plain_text_length, 9);
        assert_eq!(m.link_text_length, 0);
        assert_eq!(m.link_count, 0);
    }

    #[test]
    fn test_empty_node_has_zero_density() {
        let m = metrics_of(r#"<div id="d">   </div>"#, "#d");
        assert_eq!(m.total_text_length, 0);
        assert!(m.link_density.abs() < f64::EPSILON);
    }

    #[test]
    fn test_image_histogram() {
        let m = metrics_of(
            r#"<div id="d">
                <img src="a.jpg" width="800" height="600">
                <img src="b.jpg" width="200" height="100">
                <img src="c.jpg" width="40" height="40">
                <img src="d.gif" width="1" height="1">
                <img src="e.jpg">
            </div>"#,
            "#d",
        );
        assert_eq!(m.images.large, 1);
        assert_eq!(m.images.medium, 1);
        assert_eq!(m.images.small, 2);
        assert_eq!(m.images.skip, 1);
        assert_eq!(m.images.total(), 5);
    }

    #[test]
    fn test_float_flag() {
        let m = metrics_of(r#"<div><aside id="a" style="float: left">Side</aside></div>"#, "#a");
        assert!(m.is_floating);
    }

    #[test]
    fn test_detached_node_is_not_floating() {
        let doc = Document::from(r#"<div><aside id="a" style="float: left">Side</aside></div>"#);
        let aside = dom::first_node(&doc.select("#a")).unwrap();
        dom::remove(&aside);

        let m = collect(&aside, &InlineStyleLayout);
        assert!(!m.is_floating);
        assert_eq!(m.plain_text_length, 4);
    }
}
