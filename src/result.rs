//! Result types for filter decisions and pipeline statistics.

use std::fmt;

use serde::Serialize;

/// Which filter produced a removal decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    LinkDensity,
    Floating,
    AdImage,
    AdLink,
    TrackingPixel,
    Empty,
}

impl FilterKind {
    /// Stable kebab-case tag used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LinkDensity => "link-density",
            Self::Floating => "floating",
            Self::AdImage => "ad-image",
            Self::AdLink => "ad-link",
            Self::TrackingPixel => "tracking-pixel",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict of a single filter on a single node.
///
/// Keeping a node is the normal, silent outcome: `should_remove` is false and
/// neither `reason` nor `filter_kind` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterResult {
    pub should_remove: bool,
    pub reason: Option<&'static str>,
    pub filter_kind: Option<FilterKind>,
}

impl FilterResult {
    /// Keep the node.
    #[must_use]
    pub const fn keep() -> Self {
        Self {
            should_remove: false,
            reason: None,
            filter_kind: None,
        }
    }

    /// Remove the node, tagged with the filter and a short reason.
    #[must_use]
    pub const fn remove(kind: FilterKind, reason: &'static str) -> Self {
        Self {
            should_remove: true,
            reason: Some(reason),
            filter_kind: Some(kind),
        }
    }
}

/// Counters accumulated over one pipeline run.
///
/// Created zeroed when the pipeline starts and returned once at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterStats {
    /// Containers removed for high link density.
    pub link_density: usize,
    /// Floated containers removed.
    pub floating: usize,
    /// Advertising links replaced by their text.
    pub ad_links: usize,
    /// Ad-network images plus tracking pixels removed.
    pub images_skipped: usize,
    /// Effectively empty elements removed.
    pub empty_elements: usize,
    /// Redundant `<br>`/`<hr>` markers removed by whitespace normalization.
    pub whitespace: usize,
    /// Descendant nodes remaining under the root after filtering.
    pub total_processed: usize,
}

impl FilterStats {
    /// Sum of every removal/neutralization counter (excludes `total_processed`).
    #[must_use]
    pub fn removals(&self) -> usize {
        self.link_density
            + self.floating
            + self.ad_links
            + self.images_skipped
            + self.empty_elements
            + self.whitespace
    }

    /// True when the run changed nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.removals() == 0
    }
}

impl fmt::Display for FilterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "link-density={} floating={} ad-links={} images-skipped={} empty={} whitespace={} remaining={}",
            self.link_density,
            self.floating,
            self.ad_links,
            self.images_skipped,
            self.empty_elements,
            self.whitespace,
            self.total_processed,
        )
    }
}
