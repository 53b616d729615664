//! Per-element sizing configuration.

use crate::align::{HAlign, VAlign};

/// How an element is sized and anchored against its viewport.
///
/// Defaults fill both axes, preserve the aspect ratio, and center.
///
/// # Example
///
/// ```
/// use fullsize::{Config, HAlign, VAlign};
///
/// let config = Config::new()
///     .full_height(false)
///     .valign(VAlign::Top)
///     .halign(HAlign::Right);
///
/// assert!(config.full_width);
/// assert!(config.constrain_proportions);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct Config {
    /// Drive the element width to the viewport width.
    pub full_width: bool,
    /// Drive the element height to the viewport height.
    pub full_height: bool,
    /// Vertical anchor for leftover or overflowing space.
    pub valign: VAlign,
    /// Horizontal anchor for leftover or overflowing space.
    pub halign: HAlign,
    /// Preserve the element's original aspect ratio.
    pub constrain_proportions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// The default configuration.
    pub const fn new() -> Self {
        Self {
            full_width: true,
            full_height: true,
            valign: VAlign::Center,
            halign: HAlign::Center,
            constrain_proportions: true,
        }
    }

    /// Set whether the width follows the viewport.
    pub const fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Set whether the height follows the viewport.
    pub const fn full_height(mut self, full_height: bool) -> Self {
        self.full_height = full_height;
        self
    }

    /// Set the vertical anchor.
    pub const fn valign(mut self, valign: VAlign) -> Self {
        self.valign = valign;
        self
    }

    /// Set the horizontal anchor.
    pub const fn halign(mut self, halign: HAlign) -> Self {
        self.halign = halign;
        self
    }

    /// Set whether the original aspect ratio is preserved.
    pub const fn constrain_proportions(mut self, constrain: bool) -> Self {
        self.constrain_proportions = constrain;
        self
    }
}
