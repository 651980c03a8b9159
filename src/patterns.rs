//! Compiled regex patterns for inline style and attribute parsing.
//!
//! All patterns are compiled once using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// `float` declaration inside an inline `style` attribute.
///
/// Anchored on a declaration boundary so custom properties such as
/// `--float: left` do not match.
pub static STYLE_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*float\s*:\s*([a-z-]+)").expect("STYLE_FLOAT regex")
});

/// `width: NNNpx` declaration inside an inline `style` attribute.
///
/// The `(?:^|;)` anchor keeps `max-width`/`min-width` out.
pub static STYLE_WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*width\s*:\s*(\d+(?:\.\d+)?)\s*px").expect("STYLE_WIDTH regex")
});

/// `height: NNNpx` declaration inside an inline `style` attribute.
pub static STYLE_HEIGHT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|;)\s*height\s*:\s*(\d+(?:\.\d+)?)\s*px").expect("STYLE_HEIGHT regex")
});

/// Declared `width`/`height` attribute: a bare number, optionally suffixed `px`.
///
/// Percentages and other units do not match.
pub static DIMENSION_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d+(?:\.\d+)?)\s*(?:px)?\s*$").expect("DIMENSION_ATTR regex")
});

/// Parse a captured pixel value, rounding to whole pixels.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn capture_px(re: &Regex, haystack: &str) -> Option<u32> {
    let value: f64 = re.captures(haystack)?.get(1)?.as_str().parse().ok()?;
    Some(value.round().min(f64::from(u32::MAX)) as u32)
}
