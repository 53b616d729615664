//! Sizes, rectangles, and aspect ratios.
//!
//! All measurements are `f64` CSS-style pixels. Offsets in [`Rect`] are
//! relative to the viewport origin and may be negative.

/// Width × height of a box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Aspect ratio `width / height`.
    ///
    /// Greater than 1 is landscape, less than 1 is portrait. A zero height
    /// yields `inf` (or `NaN` for `0×0`); the value is returned as-is and
    /// propagates through every formula that consumes it.
    pub fn ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Whether both dimensions are finite and non-zero, i.e. [`ratio`](Self::ratio)
    /// is a usable finite number.
    pub fn is_proper(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width != 0.0 && self.height != 0.0
    }
}

/// Computed placement for an element inside its viewport.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Element width.
    pub width: f64,
    /// Element height.
    pub height: f64,
    /// Offset of the element's top edge from the viewport's top edge.
    pub top: f64,
    /// Offset of the element's left edge from the viewport's left edge.
    pub left: f64,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(width: f64, height: f64, top: f64, left: f64) -> Self {
        Self {
            width,
            height,
            top,
            left,
        }
    }
}
