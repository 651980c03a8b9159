//! URL Utility Functions
//!
//! Resolution of `href`/`src` values to hosts for domain matching. Every
//! function returns an explicit `Result`; the filters treat any error as
//! "does not match a blocklist".

use dom_query::NodeRef;
use url::Url;

use crate::dom;
use crate::error::{Error, Result};

/// Attributes checked, in order, for an image's source URL.
const IMAGE_SOURCE_ATTRS: [&str; 3] = ["src", "data-src", "data-original"];

/// Resolve a possibly relative URL against `base`.
///
/// Absolute URLs of any scheme are returned parsed; relative and
/// protocol-relative ones are joined onto `base`.
///
/// # Errors
///
/// Returns `Error::InvalidUrl` if `base` or the joined URL cannot be parsed.
pub fn resolve_url(raw: &str, base: &str) -> Result<Url> {
    let raw = raw.trim();

    match Url::parse(raw) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base_url = Url::parse(base).map_err(|source| Error::InvalidUrl {
                url: base.to_string(),
                source,
            })?;
            base_url.join(raw).map_err(|source| Error::InvalidUrl {
                url: raw.to_string(),
                source,
            })
        }
        Err(source) => Err(Error::InvalidUrl {
            url: raw.to_string(),
            source,
        }),
    }
}

/// Lowercase host of a resolved URL.
///
/// # Errors
///
/// Returns `Error::NoHost` for URLs without a host (`data:`, `mailto:`,
/// `javascript:` and similar).
pub fn host_of(url: &Url) -> Result<String> {
    url.host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_ascii_lowercase)
        .ok_or_else(|| Error::NoHost(url.to_string()))
}

/// Resolve `raw` against `base` and return its lowercase host.
///
/// # Errors
///
/// Propagates the errors of [`resolve_url`] and [`host_of`].
pub fn resolve_host(raw: &str, base: &str) -> Result<String> {
    host_of(&resolve_url(raw, base)?)
}

/// Source URL of an image element: `src`, then lazy-loading attributes.
#[must_use]
pub fn image_source(node: &NodeRef) -> Option<String> {
    IMAGE_SOURCE_ATTRS.iter().find_map(|name| {
        dom::get_attribute(node, name)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}
