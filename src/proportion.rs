//! Target element size from the viewport size.
//!
//! A [`Resizer`] is selected once from a [`Config`] and the element's
//! original size, then evaluated on every recomputation.
//!
//! Only [`Resizer::Cover`] rounds to whole pixels. The single-axis variants
//! return exact values, so their output may be fractional.

use num_traits::Float;

use crate::config::Config;
use crate::geometry::Size;

/// Sizing strategy, one per meaningful `(full_width, full_height,
/// constrain_proportions)` combination.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Resizer {
    /// Fill both axes and keep the original ratio, overflowing on one axis.
    ///
    /// The leading dimension matches the viewport; the other is derived
    /// from `ratio` and rounded to the nearest pixel.
    Cover {
        /// Original aspect ratio.
        ratio: f64,
    },
    /// Fill both axes exactly, ignoring the aspect ratio.
    Stretch,
    /// Match the viewport width; height follows the original ratio.
    FitWidth {
        /// Original aspect ratio.
        ratio: f64,
    },
    /// Match the viewport width; keep the original height.
    FillWidth {
        /// Original height.
        height: f64,
    },
    /// Match the viewport height; width follows the original ratio.
    FitHeight {
        /// Original aspect ratio.
        ratio: f64,
    },
    /// Match the viewport height; keep the original width.
    FillHeight {
        /// Original width.
        width: f64,
    },
    /// Neither axis is driven: always the original size.
    Original {
        /// Original size.
        size: Size,
    },
}

/// Which dimension matches the viewport exactly under [`Resizer::Cover`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Leading {
    /// Viewport is relatively wider (or equally proportioned).
    Width,
    /// Viewport is relatively taller.
    Height,
}

impl Leading {
    /// Choose the leading dimension. Equal ratios lead with width; a `NaN`
    /// on either side leads with height.
    pub fn select(viewport_ratio: f64, original_ratio: f64) -> Self {
        if viewport_ratio >= original_ratio {
            Self::Width
        } else {
            Self::Height
        }
    }
}

impl Resizer {
    /// Pick the strategy for `config`.
    ///
    /// `original_ratio` is taken as given (normally `original.ratio()`), so a
    /// zero-height original carries its infinite ratio into the output.
    pub fn new(config: &Config, original: Size, original_ratio: f64) -> Self {
        let ratio = original_ratio;
        match (config.full_width, config.full_height, config.constrain_proportions) {
            (true, true, true) => Self::Cover { ratio },
            (true, true, false) => Self::Stretch,
            (true, false, true) => Self::FitWidth { ratio },
            (true, false, false) => Self::FillWidth {
                height: original.height,
            },
            (false, true, true) => Self::FitHeight { ratio },
            (false, true, false) => Self::FillHeight {
                width: original.width,
            },
            (false, false, _) => Self::Original { size: original },
        }
    }

    /// Target size for a viewport of `viewport` with ratio `viewport_ratio`.
    pub fn resize(&self, viewport: Size, viewport_ratio: f64) -> Size {
        match *self {
            Self::Cover { ratio } => match Leading::select(viewport_ratio, ratio) {
                Leading::Width => Size::new(viewport.width, Float::round(viewport.width / ratio)),
                Leading::Height => {
                    Size::new(Float::round(viewport.height * ratio), viewport.height)
                }
            },
            Self::Stretch => viewport,
            Self::FitWidth { ratio } => Size::new(viewport.width, viewport.width / ratio),
            Self::FillWidth { height } => Size::new(viewport.width, height),
            Self::FitHeight { ratio } => Size::new(viewport.height * ratio, viewport.height),
            Self::FillHeight { width } => Size::new(width, viewport.height),
            Self::Original { size } => size,
        }
    }
}
