//! Configuration for the content filters.
//!
//! `FilterConfig` is the immutable record every filter reads. There is exactly
//! one canonical default; callers either use struct update syntax on
//! `FilterConfig::default()` or pass a `FilterOverrides` (all fields optional),
//! which is merged onto the default before any filter sees it.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Base URL used to resolve relative `href`/`src` values for domain matching.
///
/// Only the host of the resolved URL is ever inspected, so any stable base works.
pub const DEFAULT_LINK_BASE_URL: &str = "https://clip.invalid/";

/// Configuration for the content filter pipeline.
///
/// # Example
///
/// ```rust
/// use clip_filter::FilterConfig;
///
/// let config = FilterConfig {
///     link_density_threshold: 0.6,
///     enable_ad_link_filter: false,
///     ..FilterConfig::default()
/// };
/// assert_eq!(config.floating_min_text, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct FilterConfig {
    /// Link density above which a container is treated as navigation.
    ///
    /// Default: `0.5`
    pub link_density_threshold: f64,

    /// Minimum total text (characters) before link density is evaluated.
    ///
    /// Smaller nodes are left to the empty-element cleanup.
    ///
    /// Default: `25`
    pub link_density_min_text: usize,

    /// Plain (non-link) text length above which a node is always kept by the
    /// link-density filter.
    ///
    /// Default: `200`
    pub link_density_keep_above: usize,

    /// Plain text length above which a floated container is kept.
    ///
    /// Default: `200`
    pub floating_min_text: usize,

    /// Remove images served from advertising/tracking hosts.
    ///
    /// Default: `true`
    pub enable_ad_image_filter: bool,

    /// Replace links to advertising/affiliate hosts with their text.
    ///
    /// Default: `true`
    pub enable_ad_link_filter: bool,

    /// Remove images classified as tracking pixels.
    ///
    /// Default: `true`
    pub enable_tracking_pixel_skip: bool,

    /// Collapsed text length below which a media-free container is empty.
    ///
    /// Default: `5`
    pub empty_element_threshold: usize,

    /// Fallback base for resolving relative URLs before host matching.
    ///
    /// Default: [`DEFAULT_LINK_BASE_URL`]
    pub link_base_url: String,

    /// Emit per-node removal decisions through `log::debug!`.
    ///
    /// Default: `false`
    pub debug: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            link_density_threshold: 0.5,
            link_density_min_text: 25,
            link_density_keep_above: 200,
            floating_min_text: 200,
            enable_ad_image_filter: true,
            enable_ad_link_filter: true,
            enable_tracking_pixel_skip: true,
            empty_element_threshold: 5,
            link_base_url: DEFAULT_LINK_BASE_URL.to_string(),
            debug: false,
        }
    }
}

/// Partial configuration: every `Some` field replaces the default.
///
/// Deserializes from camelCase JSON so a host can hand over its settings
/// object unchanged:
///
/// ```rust
/// use clip_filter::FilterOverrides;
///
/// let overrides = FilterOverrides::from_json(r#"{"linkDensityThreshold": 0.7}"#)?;
/// assert_eq!(overrides.link_density_threshold, Some(0.7));
/// # Ok::<(), clip_filter::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterOverrides {
    pub link_density_threshold: Option<f64>,
    pub link_density_min_text: Option<usize>,
    pub link_density_keep_above: Option<usize>,
    pub floating_min_text: Option<usize>,
    pub enable_ad_image_filter: Option<bool>,
    pub enable_ad_link_filter: Option<bool>,
    pub enable_tracking_pixel_skip: Option<bool>,
    pub empty_element_threshold: Option<usize>,
    pub link_base_url: Option<String>,
    pub debug: Option<bool>,
}

impl FilterOverrides {
    /// Parse overrides from a JSON object with camelCase keys.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for malformed JSON, wrong value types, or
    /// unknown keys.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Merge these overrides onto `base`.
    #[must_use]
    pub fn apply_to(&self, base: FilterConfig) -> FilterConfig {
        FilterConfig {
            link_density_threshold: self
                .link_density_threshold
                .unwrap_or(base.link_density_threshold),
            link_density_min_text: self
                .link_density_min_text
                .unwrap_or(base.link_density_min_text),
            link_density_keep_above: self
                .link_density_keep_above
                .unwrap_or(base.link_density_keep_above),
            floating_min_text: self.floating_min_text.unwrap_or(base.floating_min_text),
            enable_ad_image_filter: self
                .enable_ad_image_filter
                .unwrap_or(base.enable_ad_image_filter),
            enable_ad_link_filter: self
                .enable_ad_link_filter
                .unwrap_or(base.enable_ad_link_filter),
            enable_tracking_pixel_skip: self
                .enable_tracking_pixel_skip
                .unwrap_or(base.enable_tracking_pixel_skip),
            empty_element_threshold: self
                .empty_element_threshold
                .unwrap_or(base.empty_element_threshold),
            link_base_url: self.link_base_url.clone().unwrap_or(base.link_base_url),
            debug: self.debug.unwrap_or(base.debug),
        }
    }
}

/// Build a complete configuration from optional overrides.
///
/// Fields left as `None` take the canonical default, so no filter ever sees a
/// partially specified record.
#[must_use]
pub fn create_filter_config(overrides: &FilterOverrides) -> FilterConfig {
    overrides.apply_to(FilterConfig::default())
}
