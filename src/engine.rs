//! Rectangle computation: sizing followed by anchoring.
//!
//! # Example
//!
//! ```
//! use fullsize::{Config, Engine, HAlign, Rect, Size};
//!
//! let engine = Engine::new(
//!     &Config::new()
//!         .full_width(false)
//!         .constrain_proportions(false)
//!         .halign(HAlign::Right),
//!     Size::new(30.0, 30.0),
//! );
//!
//! // Width stays at the original 30, pinned to the right edge.
//! let rect = engine.compute(Size::new(300.0, 300.0));
//! assert_eq!(rect, Rect::new(30.0, 300.0, 0.0, 270.0));
//! ```

use crate::align::{HAlign, VAlign};
use crate::config::Config;
use crate::geometry::{Rect, Size};
use crate::proportion::Resizer;

/// Precomputed strategies for one element.
///
/// Built once from a [`Config`] and the element's original size; evaluated
/// against each new viewport size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Engine {
    original: Size,
    original_ratio: f64,
    resizer: Resizer,
    valign: VAlign,
    halign: HAlign,
}

impl Engine {
    /// Select strategies for an element of `original` size.
    pub fn new(config: &Config, original: Size) -> Self {
        let original_ratio = original.ratio();
        Self {
            original,
            original_ratio,
            resizer: Resizer::new(config, original, original_ratio),
            valign: config.valign,
            halign: config.halign,
        }
    }

    /// Size and offsets for a viewport of `viewport`.
    pub fn compute(&self, viewport: Size) -> Rect {
        let size = self.resizer.resize(viewport, viewport.ratio());
        Rect {
            width: size.width,
            height: size.height,
            top: self.valign.offset(size.height, viewport),
            left: self.halign.offset(size.width, viewport),
        }
    }

    /// Element size captured at construction.
    pub fn original(&self) -> Size {
        self.original
    }

    /// Aspect ratio of [`original`](Self::original).
    pub fn original_ratio(&self) -> f64 {
        self.original_ratio
    }

    /// The selected sizing strategy.
    pub fn resizer(&self) -> Resizer {
        self.resizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proportion::Leading;
    use proptest::prelude::*;

    const SQUARE: Size = Size::new(30.0, 30.0);

    #[test]
    fn cover_square_in_square() {
        let e = Engine::new(&Config::new(), SQUARE);
        assert_eq!(
            e.compute(Size::new(300.0, 300.0)),
            Rect::new(300.0, 300.0, 0.0, 0.0)
        );
    }

    #[test]
    fn cover_square_in_tall_viewport_overflows_horizontally() {
        let e = Engine::new(&Config::new(), SQUARE);
        // Height leads: 300×300, centered → left = (100 - 300) / 2.
        assert_eq!(
            e.compute(Size::new(100.0, 300.0)),
            Rect::new(300.0, 300.0, 0.0, -100.0)
        );
    }

    #[test]
    fn stretch_in_tall_viewport() {
        let e = Engine::new(&Config::new().constrain_proportions(false), SQUARE);
        assert_eq!(
            e.compute(Size::new(100.0, 300.0)),
            Rect::new(100.0, 300.0, 0.0, 0.0)
        );
    }

    #[test]
    fn bottom_right_anchor_pulls_overflow_up_and_left() {
        let config = Config::new().valign(VAlign::Bottom).halign(HAlign::Right);
        let e = Engine::new(&config, Size::new(100.0, 50.0));
        // Viewport 200×200: height leads → 400×200, left = -(400 - 200).
        assert_eq!(
            e.compute(Size::new(200.0, 200.0)),
            Rect::new(400.0, 200.0, 0.0, -200.0)
        );
    }

    #[test]
    fn top_left_anchor_never_moves() {
        let config = Config::new().valign(VAlign::Top).halign(HAlign::Left);
        let e = Engine::new(&config, Size::new(100.0, 50.0));
        for vp in [Size::new(10.0, 900.0), Size::new(900.0, 10.0)] {
            let r = e.compute(vp);
            assert_eq!((r.top, r.left), (0.0, 0.0));
        }
    }

    #[test]
    fn fixed_size_is_only_positioned() {
        let config = Config::new()
            .full_width(false)
            .full_height(false)
            .valign(VAlign::Bottom);
        let e = Engine::new(&config, SQUARE);
        assert_eq!(
            e.compute(Size::new(300.0, 200.0)),
            Rect::new(30.0, 30.0, 170.0, 135.0)
        );
    }

    #[test]
    fn compute_is_repeatable() {
        let e = Engine::new(&Config::new(), Size::new(70.0, 30.0));
        let vp = Size::new(123.0, 456.0);
        assert_eq!(e.compute(vp), e.compute(vp));
    }

    #[test]
    fn zero_height_original_degenerates_without_panicking() {
        let e = Engine::new(&Config::new(), Size::new(30.0, 0.0));
        assert!(e.original_ratio().is_infinite());
        let r = e.compute(Size::new(300.0, 300.0));
        // Infinite ratio: height leads, width becomes infinite.
        assert_eq!(r.height, 300.0);
        assert!(r.width.is_infinite());
    }

    proptest! {
        #[test]
        fn cover_preserves_ratio_within_rounding(
            ow in 1u32..2000,
            oh in 1u32..2000,
            vw in 1u32..4000,
            vh in 1u32..4000,
        ) {
            let original = Size::new(ow as f64, oh as f64);
            let viewport = Size::new(vw as f64, vh as f64);
            let r = Engine::new(&Config::new(), original).compute(viewport);
            let ratio = original.ratio();

            // The leading side matches the viewport; the other is within half a
            // pixel of the exact proportional value.
            match Leading::select(viewport.ratio(), ratio) {
                Leading::Width => {
                    prop_assert_eq!(r.width, viewport.width);
                    prop_assert!((r.height - viewport.width / ratio).abs() <= 0.5 + 1e-9);
                }
                Leading::Height => {
                    prop_assert_eq!(r.height, viewport.height);
                    prop_assert!((r.width - viewport.height * ratio).abs() <= 0.5 + 1e-9);
                }
            }
            // Cover never leaves part of the viewport empty.
            prop_assert!(r.width >= viewport.width - 0.5);
            prop_assert!(r.height >= viewport.height - 0.5);
        }

        #[test]
        fn center_anchor_is_symmetric(
            ow in 1u32..500,
            oh in 1u32..500,
            vw in 1u32..1000,
            vh in 1u32..1000,
        ) {
            let viewport = Size::new(vw as f64, vh as f64);
            let r = Engine::new(&Config::new(), Size::new(ow as f64, oh as f64)).compute(viewport);
            let right_gap = viewport.width - (r.left + r.width);
            let bottom_gap = viewport.height - (r.top + r.height);
            prop_assert!((r.left - right_gap).abs() < 1e-6);
            prop_assert!((r.top - bottom_gap).abs() < 1e-6);
        }
    }
}
