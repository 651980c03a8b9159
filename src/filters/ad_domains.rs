//! Ad-Domain Filter
//!
//! Removes images served by advertising/tracking hosts and tracking pixels,
//! and turns links to advertising/affiliate hosts into plain text. URLs that
//! cannot be resolved never match a blocklist.

use dom_query::NodeRef;

use crate::dom;
use crate::domains::Blocklists;
use crate::image::should_skip_image;
use crate::layout::Layout;
use crate::options::FilterConfig;
use crate::result::{FilterKind, FilterResult};
use crate::url_utils;

use super::{log_removal, LOG_TARGET};

/// Detach every attached `<img>` under `root` whose skip verdict has `kind`.
fn remove_images_of_kind<L: Layout>(
    root: &NodeRef,
    kind: FilterKind,
    config: &FilterConfig,
    blocklists: &Blocklists,
    layout: &L,
) -> usize {
    let images: Vec<NodeRef> = dom::descendant_elements(root)
        .into_iter()
        .filter(|n| dom::is_tag(n, "img"))
        .collect();

    let mut removed = 0;
    for img in images {
        if !dom::is_attached_under(&img, root) {
            continue;
        }

        let resolved = url_utils::image_source(&img)
            .and_then(|src| url_utils::resolve_url(&src, &config.link_base_url).ok());
        let verdict = should_skip_image(&img, resolved.as_ref(), config, blocklists, layout);

        if verdict.filter_kind == Some(kind) {
            log_removal(config.debug, &img, &verdict);
            dom::remove(&img);
            removed += 1;
        }
    }

    removed
}

/// Remove images whose source host is on the ad-image blocklist.
///
/// Returns the number of removed images; 0 when the filter is disabled.
pub fn filter_ad_images<L: Layout>(
    root: &NodeRef,
    config: &FilterConfig,
    blocklists: &Blocklists,
    layout: &L,
) -> usize {
    if !config.enable_ad_image_filter {
        return 0;
    }
    remove_images_of_kind(root, FilterKind::AdImage, config, blocklists, layout)
}

/// Remove images classified as tracking pixels.
///
/// Returns the number of removed images; 0 when the filter is disabled.
pub fn filter_tracking_pixels<L: Layout>(
    root: &NodeRef,
    config: &FilterConfig,
    blocklists: &Blocklists,
    layout: &L,
) -> usize {
    if !config.enable_tracking_pixel_skip {
        return 0;
    }
    remove_images_of_kind(root, FilterKind::TrackingPixel, config, blocklists, layout)
}

/// Replace links to ad/affiliate hosts with their text content.
///
/// Relative hrefs are resolved against `config.link_base_url`. The visible
/// text is always preserved; only the link element goes.
///
/// Returns the number of neutralized links; 0 when the filter is disabled.
pub fn neutralize_ad_links(root: &NodeRef, config: &FilterConfig, blocklists: &Blocklists) -> usize {
    if !config.enable_ad_link_filter {
        return 0;
    }

    let links: Vec<NodeRef> = dom::descendant_elements(root)
        .into_iter()
        .filter(|n| dom::is_tag(n, "a") && n.attr("href").is_some())
        .collect();

    let mut neutralized = 0;
    for link in links {
        if !dom::is_attached_under(&link, root) {
            continue;
        }
        let Some(href) = link.attr("href") else {
            continue;
        };

        let host = match url_utils::resolve_host(&href, &config.link_base_url) {
            Ok(host) => host,
            Err(err) => {
                if config.debug {
                    log::debug!(target: LOG_TARGET, "keeping link `{href}`: {err}");
                }
                continue;
            }
        };

        if blocklists.ad_links.matches(&host) {
            let verdict = FilterResult::remove(FilterKind::AdLink, "ad or affiliate host");
            log_removal(config.debug, &link, &verdict);
            dom::replace_with_text(&link, &link.text());
            neutralized += 1;
        }
    }

    neutralized
}
