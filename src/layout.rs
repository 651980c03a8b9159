//! Layout queries: float direction and rendered image size.
//!
//! The classifier itself never talks to a rendering engine. Hosts that have
//! one implement [`Layout`]; everyone else gets [`InlineStyleLayout`], which
//! reads the same information from inline `style` and presentational
//! attributes.

use dom_query::NodeRef;

use crate::dom;
use crate::error::{Error, Result};
use crate::patterns::{capture_px, STYLE_FLOAT, STYLE_HEIGHT, STYLE_WIDTH};

/// Computed `float` of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloatDirection {
    Left,
    Right,
    #[default]
    None,
}

impl FloatDirection {
    /// Parse a CSS `float` value. Unknown values are `None`.
    #[must_use]
    pub fn from_css(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" | "inline-start" => Self::Left,
            "right" | "inline-end" => Self::Right,
            _ => Self::None,
        }
    }

    /// True for `Left` and `Right`.
    #[must_use]
    pub fn is_floating(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Layout state the filters need from the host environment.
pub trait Layout {
    /// Computed float of `node`.
    ///
    /// # Errors
    ///
    /// Implementations return an error when style cannot be read, for
    /// example for a detached node. Callers treat that as not floating.
    fn float_direction(&self, node: &NodeRef) -> Result<FloatDirection>;

    /// Rendered box size in CSS pixels, if known.
    fn rendered_size(&self, _node: &NodeRef) -> Option<(u32, u32)> {
        None
    }

    /// Intrinsic (natural) image size in pixels, if known.
    fn intrinsic_size(&self, _node: &NodeRef) -> Option<(u32, u32)> {
        None
    }
}

impl<L: Layout + ?Sized> Layout for &L {
    fn float_direction(&self, node: &NodeRef) -> Result<FloatDirection> {
        (**self).float_direction(node)
    }

    fn rendered_size(&self, node: &NodeRef) -> Option<(u32, u32)> {
        (**self).rendered_size(node)
    }

    fn intrinsic_size(&self, node: &NodeRef) -> Option<(u32, u32)> {
        (**self).intrinsic_size(node)
    }
}

/// Host-free layout derived from inline styles.
///
/// - float: the `float` declaration of the `style` attribute, else the
///   `align="left|right"` hint on `table` and `img`
/// - rendered size: `width`/`height` pixel declarations of the `style` attribute
/// - intrinsic size: unknown
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineStyleLayout;

impl Layout for InlineStyleLayout {
    fn float_direction(&self, node: &NodeRef) -> Result<FloatDirection> {
        if node.parent().is_none() {
            return Err(Error::Detached);
        }

        if let Some(style) = node.attr("style") {
            if let Some(caps) = STYLE_FLOAT.captures(&style) {
                return Ok(FloatDirection::from_css(&caps[1]));
            }
        }

        let align_hint = dom::tag_name(node).is_some_and(|t| t == "table" || t == "img");
        if align_hint {
            if let Some(align) = node.attr("align") {
                return Ok(FloatDirection::from_css(&align));
            }
        }

        Ok(FloatDirection::None)
    }

    fn rendered_size(&self, node: &NodeRef) -> Option<(u32, u32)> {
        let style = node.attr("style")?;
        let width = capture_px(&STYLE_WIDTH, &style)?;
        let height = capture_px(&STYLE_HEIGHT, &style)?;
        Some((width, height))
    }
}
