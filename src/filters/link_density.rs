//! Link Density Filter
//!
//! Flags containers whose text is mostly link text (menus, tag clouds,
//! "related" lists). The single most effective boilerplate signal.

use dom_query::NodeRef;

use crate::dom;
use crate::layout::Layout;
use crate::metrics;
use crate::options::FilterConfig;
use crate::result::{FilterKind, FilterResult};

use super::remove_deepest_first;
use super::tags::{LINK_DENSITY_TAG_SET, PROTECTED_TAG_SET};

/// Density floor for the many-short-links rule.
const SHORT_LINKS_MIN_DENSITY: f64 = 0.3;

/// Decide whether a single node is link-heavy boilerplate.
///
/// Rules, first match wins:
/// 1. protected or non-container tag: keep
/// 2. plain text above `link_density_keep_above`: keep
/// 3. holds a large or medium image: keep
/// 4. total text below `link_density_min_text`: keep (left to empty cleanup)
/// 5. link density above `link_density_threshold`: remove
/// 6. more than one link, `links * 2 >= plain words` and density above 0.3: remove
#[must_use]
pub fn evaluate_link_density<L: Layout>(
    node: &NodeRef,
    config: &FilterConfig,
    layout: &L,
) -> FilterResult {
    let Some(tag) = dom::tag_name(node) else {
        return FilterResult::keep();
    };
    if PROTECTED_TAG_SET.contains(tag.as_str()) || !LINK_DENSITY_TAG_SET.contains(tag.as_str()) {
        return FilterResult::keep();
    }

    let m = metrics::collect(node, layout);

    if m.plain_text_length > config.link_density_keep_above {
        return FilterResult::keep();
    }

    if m.images.large > 0 || m.images.medium > 0 {
        return FilterResult::keep();
    }

    if m.total_text_length < config.link_density_min_text {
        return FilterResult::keep();
    }

    if m.link_density > config.link_density_threshold {
        return FilterResult::remove(FilterKind::LinkDensity, "link density above threshold");
    }

    if m.link_count > 1
        && m.link_count * 2 >= m.plain_word_count
        && m.link_density > SHORT_LINKS_MIN_DENSITY
    {
        return FilterResult::remove(FilterKind::LinkDensity, "many short links");
    }

    FilterResult::keep()
}

/// Remove link-heavy containers under `root`, deepest first.
///
/// Removing an inner menu lowers the link density of its parent, which is
/// evaluated afterwards on the updated tree.
///
/// Returns the number of removed nodes.
pub fn filter_by_link_density<L: Layout>(
    root: &NodeRef,
    config: &FilterConfig,
    layout: &L,
) -> usize {
    remove_deepest_first(root, &LINK_DENSITY_TAG_SET, config.debug, |node| {
        evaluate_link_density(node, config, layout)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::InlineStyleLayout;
    use dom_query::Document;

    fn verdict(html: &str, selector: &str) -> FilterResult {
        let doc = Document::from(html);
        let node = dom::first_node(&doc.select(selector)).unwrap();
        evaluate_link_density(&node, &FilterConfig::default(), &InlineStyleLayout)
    }

    #[test]
    fn test_link_density_nav_menu() {
        let result = verdict(
            r#"<nav>
                <a href="/world">World News</a>
                <a href="/tech">Technology</a>
                <a href="/sport">Sports Coverage</a>
            </nav>"#,
            "nav",
        );

        assert!(result.should_remove);
        assert_eq!(result.filter_kind, Some(FilterKind::LinkDensity));
    }

    #[test]
    fn test_link_density_article_paragraph_block() {
        let result = verdict(
            r#"<div id="d">
                This is a long block with substantial text content that discusses
                various topics. It contains a <a href="/link">single link</a> but the
                majority of the content is regular text, not links.
            </div>"#,
            "#d",
        );

        assert!(!result.should_remove);
    }

    #[test]
    fn test_protected_tags_are_immune() {
        for tag in ["p", "article", "main", "h2"] {
            let html = format!(
                r#"<div><{tag} id="t"><a href="/a">Entirely linked text here</a> <a href="/b">and more of it</a></{tag}></div>"#
            );
            let result = verdict(&html, "#t");
            assert!(!result.should_remove, "{tag} must never be removed");
        }
    }

    #[test]
    fn test_substantial_plain_text_wins() {
        let plain = "Plain words of the article body. ".repeat(7);
        let links = "Linked headline for another story ".repeat(9);
        let html = format!(r#"<div id="d"><span>{plain}</span><a href="/x">{links}</a></div>"#);

        let doc = Document::from(html.as_str());
        let node = dom::first_node(&doc.select("#d")).unwrap();
        let m = metrics::collect(&node, &InlineStyleLayout);
        assert!(m.plain_text_length > 200);
        assert!(m.link_density > 0.5);

        assert!(!verdict(&html, "#d").should_remove);
    }

    #[test]
    fn test_medium_image_keeps_link_block() {
        let result = verdict(
            r#"<div id="d"><a href="/gallery"><img src="g.jpg" width="200" height="120">Open the full photo gallery</a></div>"#,
            "#d",
        );
        assert!(!result.should_remove);
    }

    #[test]
    fn test_too_little_text_is_kept() {
        let result = verdict(r#"<ul id="u"><li><a href="/">Home</a></li><li><a href="/a">About</a></li></ul>"#, "#u");
        assert!(!result.should_remove);
    }

    #[test]
    fn test_short_links_rule_boundary() {
        // 2 links, 4 plain words, density exactly 12/40 = 0.3: not above the floor
        let result = verdict(
            r#"<div id="d">alpha bravo charlie<a href="/1">Link1</a>deltaxyzw<a href="/2">Second7</a></div>"#,
            "#d",
        );
        assert!(!result.should_remove);

        // one more link character pushes density to 13/41
        let result = verdict(
            r#"<div id="d">alpha bravo charlie<a href="/1">Link1</a>deltaxyzw<a href="/2">Second78</a></div>"#,
            "#d",
        );
        assert!(result.should_remove);
        assert_eq!(result.reason, Some("many short links"));
    }

    #[test]
    fn test_filter_removes_inner_menu_first() {
        let doc = Document::from(
            r#"<div id="root">
                <div id="wrapper">
                    <ul id="menu">
                        <li><a href="/world">World News</a></li>
                        <li><a href="/tech">Technology</a></li>
                        <li><a href="/sport">Sports Coverage</a></li>
                    </ul>
                    <p>The wrapper also holds a real paragraph of article text that stays.</p>
                </div>
            </div>"#,
        );
        let root = dom::first_node(&doc.select("#root")).unwrap();

        let removed = filter_by_link_density(&root, &FilterConfig::default(), &InlineStyleLayout);

        assert_eq!(removed, 1);
        assert!(doc.select("#menu").is_empty());
        assert!(doc.select("#wrapper").exists());
        assert!(doc.select("#wrapper p").exists());
    }

    #[test]
    fn test_filter_reevaluates_parent_after_inner_removal() {
        let doc = Document::from(
            r#"<div id="root">
                <footer id="foot">
                    <div id="col"><a href="/a">Privacy policy</a> <a href="/b">Terms of service</a></div>
                    <a href="/c">Contact the newsroom and editors</a>
                </footer>
            </div>"#,
        );
        let root = dom::first_node(&doc.select("#root")).unwrap();

        let removed = filter_by_link_density(&root, &FilterConfig::default(), &InlineStyleLayout);

        // inner column first, then the footer on what remains
        assert_eq!(removed, 2);
        assert!(doc.select("#foot").is_empty());
    }

    #[test]
    fn test_filter_never_removes_root() {
        let doc = Document::from(
            r#"<div id="root"><a href="/a">Only links in this root container</a></div>"#,
        );
        let root = dom::first_node(&doc.select("#root")).unwrap();

        assert_eq!(filter_by_link_density(&root, &FilterConfig::default(), &InlineStyleLayout), 0);
        assert!(doc.select("#root").exists());
    }
}
