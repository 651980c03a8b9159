//! Tag catalogs for the content filters.
//!
//! Each catalog is an array (for iteration and docs) plus a `HashSet` for
//! O(1) lookup.

use std::collections::HashSet;
use std::sync::LazyLock;

// === Link-Density Filter ===

/// Containers the link-density filter evaluates: generic blocks, lists,
/// landmarks and table bodies.
pub static LINK_DENSITY_TAGS: [&str; 11] = [
    "div", "section", "ul", "ol", "dl", "menu", "nav", "header", "footer", "aside", "tbody",
];

/// `LINK_DENSITY_TAGS` as a `HashSet`
pub static LINK_DENSITY_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    LINK_DENSITY_TAGS.into_iter().collect()
});

/// Tags the link-density filter never removes, whatever their metrics.
pub static PROTECTED_TAGS: [&str; 10] = [
    "article", "main", "body", "h1", "h2", "h3", "h4", "h5", "h6", "p",
];

/// `PROTECTED_TAGS` as a `HashSet`
pub static PROTECTED_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    PROTECTED_TAGS.into_iter().collect()
});

// === Floating-Element Filter ===

/// Tags that may be removed as floated sidebars or pull-outs.
pub static FLOATABLE_TAGS: [&str; 5] = ["div", "aside", "figure", "table", "section"];

/// `FLOATABLE_TAGS` as a `HashSet`
pub static FLOATABLE_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    FLOATABLE_TAGS.into_iter().collect()
});

// === Empty-Element Cleanup ===

/// Leaf tags that carry content without text. A subtree holding any of them
/// is never empty.
pub static MEANINGFUL_LEAF_TAGS: [&str; 11] = [
    "img", "picture", "video", "audio", "iframe", "embed", "object", "svg", "canvas", "math", "hr",
];

/// `MEANINGFUL_LEAF_TAGS` as a `HashSet`
pub static MEANINGFUL_LEAF_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    MEANINGFUL_LEAF_TAGS.into_iter().collect()
});

/// Containers and block text tags that may be removed when empty.
///
/// Table structure (`table`, `tr`, `td`, ...), headings and inline phrasing
/// tags (`a`, `em`, `sup`, ...) are never removed.
pub static REMOVABLE_EMPTY_TAGS: [&str; 16] = [
    "div", "section", "aside", "nav", "header", "footer", "figure", "figcaption",
    "blockquote", "p", "ul", "ol", "li", "dl", "dt", "dd",
];

/// `REMOVABLE_EMPTY_TAGS` as a `HashSet`
pub static REMOVABLE_EMPTY_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    REMOVABLE_EMPTY_TAGS.into_iter().collect()
});

// === Whitespace Normalization ===

/// Block-level containers next to which a `<br>` is redundant.
pub static BLOCK_TAGS: [&str; 30] = [
    "address", "article", "aside", "blockquote", "details", "dd", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5",
    "h6", "header", "li", "main", "nav", "ol", "p", "pre", "section", "table", "ul",
];

/// `BLOCK_TAGS` as a `HashSet`
pub static BLOCK_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    BLOCK_TAGS.into_iter().collect()
});

/// Check whether a tag is a block-level container.
#[inline]
#[must_use]
pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAG_SET.contains(tag)
}
