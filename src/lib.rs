//! # clip-filter
//!
//! Boilerplate classifier for an already-extracted article tree.
//!
//! Given the container an upstream extractor picked as "the article", this
//! library decides node by node which subtrees are content and which are
//! navigation, ad units, tracking pixels, floated sidebars or leftover empty
//! wrappers, and removes or neutralizes the latter in place.
//!
//! ## Quick Start
//!
//! ```rust
//! use clip_filter::{apply_content_filters, FilterOverrides};
//! use dom_query::Document;
//!
//! let html = r#"<article>
//!     <nav><a href="/world">World News</a> <a href="/tech">Technology</a> <a href="/sport">Sports Coverage</a></nav>
//!     <p>Main content of the story, long enough to stand on its own.</p>
//! </article>"#;
//!
//! let doc = Document::from(html);
//! let stats = apply_content_filters(&doc.select("article"), &FilterOverrides::default());
//!
//! assert_eq!(stats.link_density, 1);
//! assert!(doc.select("nav").is_empty());
//! ```
//!
//! ## Stages
//!
//! - **Link density**: containers whose text is mostly link text
//! - **Floating**: floated sidebars without standalone content
//! - **Ad domains**: ad-network images removed, affiliate links turned into text
//! - **Tracking pixels**: images of at most 5x5 pixels
//! - **Empty cleanup**: wrappers left without text or media
//! - **Whitespace**: redundant `<br>`/`<hr>` runs
//!
//! Filtering never fails: unreadable URLs and layout state resolve to
//! keeping the content.

mod error;
mod options;
mod patterns;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Advertising, tracking and affiliate domain tables.
pub mod domains;

/// Content filter stages and the pipeline that orders them.
pub mod filters;

/// Image size classification.
pub mod image;

/// Layout queries (float direction, rendered size).
pub mod layout;

/// Per-node text, link and image metrics.
pub mod metrics;

/// URL resolution for domain matching.
pub mod url_utils;

// Public API - re-exports
pub use domains::{Blocklists, DomainList};
pub use error::{Error, Result};
pub use filters::ContentFilter;
pub use image::{classify_size, ImageSizeClass};
pub use layout::{FloatDirection, InlineStyleLayout, Layout};
pub use metrics::ElementMetrics;
pub use options::{create_filter_config, FilterConfig, FilterOverrides, DEFAULT_LINK_BASE_URL};
pub use result::{FilterKind, FilterResult, FilterStats};

/// Run every content filter over the subtree rooted at `root`.
///
/// `overrides` are merged onto [`FilterConfig::default`]; the tree is mutated
/// in place and the per-stage counts are returned.
///
/// # Example
///
/// ```rust
/// use clip_filter::{apply_content_filters, FilterOverrides};
/// use dom_query::Document;
///
/// let doc = Document::from(
///     r#"<article><p>Text <a href="https://taboola.com/x">Sponsored text</a></p></article>"#,
/// );
/// let stats = apply_content_filters(&doc.select("article"), &FilterOverrides::default());
///
/// assert_eq!(stats.ad_links, 1);
/// assert_eq!(doc.select("p").text().as_ref(), "Text Sponsored text");
/// ```
pub fn apply_content_filters(
    root: &dom_query::Selection,
    overrides: &FilterOverrides,
) -> FilterStats {
    ContentFilter::new(create_filter_config(overrides)).apply(root)
}
