//! Image size classification and per-image skip decisions.

use dom_query::NodeRef;
use url::Url;

use crate::domains::Blocklists;
use crate::layout::Layout;
use crate::options::FilterConfig;
use crate::patterns::{capture_px, DIMENSION_ATTR};
use crate::result::{FilterKind, FilterResult};
use crate::url_utils;

/// Images at or below this size on both axes are tracking pixels.
pub const TRACKING_PIXEL_MAX: u32 = 5;
/// Area at or above which an image is `Large`.
pub const LARGE_MIN_AREA: u64 = 50_000;
/// Width/height pair at or above which an image is `Large` (banner-shaped).
pub const LARGE_MIN_WIDTH: u32 = 350;
pub const LARGE_MIN_HEIGHT: u32 = 75;
/// Area at or above which an image is `Medium`.
pub const MEDIUM_MIN_AREA: u64 = 20_000;
/// Both dimensions at or above this make an image `Medium`.
pub const MEDIUM_MIN_SIDE: u32 = 150;

/// Size class of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImageSizeClass {
    Skip,
    Small,
    Medium,
    Large,
}

/// Classify an image by its resolved pixel size.
///
/// An image with no measurable size (0x0) is `Small`, never `Skip`.
#[must_use]
pub fn classify_size(width: u32, height: u32) -> ImageSizeClass {
    if width == 0 && height == 0 {
        return ImageSizeClass::Small;
    }

    if width <= TRACKING_PIXEL_MAX && height <= TRACKING_PIXEL_MAX {
        return ImageSizeClass::Skip;
    }

    let area = u64::from(width) * u64::from(height);

    if area >= LARGE_MIN_AREA || (width >= LARGE_MIN_WIDTH && height >= LARGE_MIN_HEIGHT) {
        ImageSizeClass::Large
    } else if area >= MEDIUM_MIN_AREA || (width >= MEDIUM_MIN_SIDE && height >= MEDIUM_MIN_SIDE) {
        ImageSizeClass::Medium
    } else {
        ImageSizeClass::Small
    }
}

/// Declared `width`/`height` attributes; a missing or non-pixel value is 0.
fn declared_size(node: &NodeRef) -> (u32, u32) {
    let dimension = |name: &str| {
        node.attr(name)
            .and_then(|value| capture_px(&DIMENSION_ATTR, &value))
            .unwrap_or(0)
    };
    (dimension("width"), dimension("height"))
}

/// Resolve an image's size: rendered box, then intrinsic size, then declared
/// attributes. The first source reporting a non-zero size wins; if none does
/// the result is `(0, 0)`.
#[must_use]
pub fn resolve_dimensions<L: Layout>(node: &NodeRef, layout: &L) -> (u32, u32) {
    let measured = |size: Option<(u32, u32)>| size.filter(|&(w, h)| w > 0 || h > 0);

    measured(layout.rendered_size(node))
        .or_else(|| measured(layout.intrinsic_size(node)))
        .or_else(|| measured(Some(declared_size(node))))
        .unwrap_or((0, 0))
}

/// Classify an image element through the dimension fallback chain.
#[must_use]
pub fn classify_image<L: Layout>(node: &NodeRef, layout: &L) -> ImageSizeClass {
    let (width, height) = resolve_dimensions(node, layout);
    classify_size(width, height)
}

/// Decide whether an image should be dropped.
///
/// Ad-network hosts win over size: an ad creative is reported as `ad network`
/// even when it is also pixel-sized. Each reason only applies when its
/// config switch is on.
#[must_use]
pub fn should_skip_image<L: Layout>(
    node: &NodeRef,
    resolved_url: Option<&Url>,
    config: &FilterConfig,
    blocklists: &Blocklists,
    layout: &L,
) -> FilterResult {
    if config.enable_ad_image_filter {
        let ad_host = resolved_url
            .and_then(|url| url_utils::host_of(url).ok())
            .is_some_and(|host| blocklists.ad_images.matches(&host));
        if ad_host {
            return FilterResult::remove(FilterKind::AdImage, "ad network");
        }
    }

    if config.enable_tracking_pixel_skip && classify_image(node, layout) == ImageSizeClass::Skip {
        return FilterResult::remove(FilterKind::TrackingPixel, "tracking pixel");
    }

    FilterResult::keep()
}
