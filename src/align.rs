//! Anchoring along one axis.
//!
//! [`VAlign`] places an element vertically, [`HAlign`] horizontally. Both
//! reduce to the same three strategies: pin to the near edge, pin to the far
//! edge, or split the leftover space evenly.

use core::fmt;
use core::str::FromStr;

use crate::geometry::Size;

/// Vertical anchor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VAlign {
    /// Top edges coincide.
    Top,
    /// Centered vertically.
    #[default]
    Center,
    /// Bottom edges coincide.
    Bottom,
}

/// Horizontal anchor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HAlign {
    /// Left edges coincide.
    Left,
    /// Centered horizontally.
    #[default]
    Center,
    /// Right edges coincide.
    Right,
}

/// Which axis an alignment keyword belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// `valign`: top, center, bottom.
    Vertical,
    /// `halign`: left, center, right.
    Horizontal,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical => f.write_str("vertical"),
            Self::Horizontal => f.write_str("horizontal"),
        }
    }
}

/// An alignment keyword that names no anchor on its axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {axis} alignment keyword")]
pub struct UnknownKeyword {
    /// Axis the keyword was parsed for.
    pub axis: Axis,
}

/// Shared placement rule for one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Edge {
    Near,
    Middle,
    Far,
}

impl Edge {
    fn offset(self, element: f64, viewport: f64) -> f64 {
        match self {
            Self::Near => 0.0,
            Self::Middle => (viewport - element) / 2.0,
            Self::Far => -(element - viewport),
        }
    }
}

impl VAlign {
    /// Parse `top`, `center`, or `bottom` (ASCII case-insensitive, surrounding
    /// whitespace ignored).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let k = keyword.trim();
        if k.eq_ignore_ascii_case("top") {
            Some(Self::Top)
        } else if k.eq_ignore_ascii_case("center") {
            Some(Self::Center)
        } else if k.eq_ignore_ascii_case("bottom") {
            Some(Self::Bottom)
        } else {
            None
        }
    }

    /// Like [`from_keyword`](Self::from_keyword), substituting the default
    /// ([`VAlign::Center`]) for anything unrecognized.
    pub fn from_keyword_or_default(keyword: &str) -> Self {
        Self::from_keyword(keyword).unwrap_or_else(|| {
            log::warn!(target: "fullsize::align", "unknown valign {keyword:?}, using center");
            Self::default()
        })
    }

    /// Keyword form, as accepted by [`from_keyword`](Self::from_keyword).
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }

    /// Top offset for an element of `height` inside `viewport`.
    ///
    /// Negative when the element is taller than the viewport and anchored
    /// at the bottom or center.
    pub fn offset(self, height: f64, viewport: Size) -> f64 {
        self.edge().offset(height, viewport.height)
    }

    fn edge(self) -> Edge {
        match self {
            Self::Top => Edge::Near,
            Self::Center => Edge::Middle,
            Self::Bottom => Edge::Far,
        }
    }
}

impl HAlign {
    /// Parse `left`, `center`, or `right` (ASCII case-insensitive, surrounding
    /// whitespace ignored).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let k = keyword.trim();
        if k.eq_ignore_ascii_case("left") {
            Some(Self::Left)
        } else if k.eq_ignore_ascii_case("center") {
            Some(Self::Center)
        } else if k.eq_ignore_ascii_case("right") {
            Some(Self::Right)
        } else {
            None
        }
    }

    /// Like [`from_keyword`](Self::from_keyword), substituting the default
    /// ([`HAlign::Center`]) for anything unrecognized.
    pub fn from_keyword_or_default(keyword: &str) -> Self {
        Self::from_keyword(keyword).unwrap_or_else(|| {
            log::warn!(target: "fullsize::align", "unknown halign {keyword:?}, using center");
            Self::default()
        })
    }

    /// Keyword form, as accepted by [`from_keyword`](Self::from_keyword).
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Left offset for an element of `width` inside `viewport`.
    pub fn offset(self, width: f64, viewport: Size) -> f64 {
        self.edge().offset(width, viewport.width)
    }

    fn edge(self) -> Edge {
        match self {
            Self::Left => Edge::Near,
            Self::Center => Edge::Middle,
            Self::Right => Edge::Far,
        }
    }
}

impl FromStr for VAlign {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or(UnknownKeyword {
            axis: Axis::Vertical,
        })
    }
}

impl FromStr for HAlign {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or(UnknownKeyword {
            axis: Axis::Horizontal,
        })
    }
}

impl fmt::Display for VAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for HAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// Deserialization goes through the same fallback as every other keyword
// input: anything unrecognized becomes center.

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for VAlign {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(KeywordVisitor(Self::from_keyword_or_default))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HAlign {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(KeywordVisitor(Self::from_keyword_or_default))
    }
}

#[cfg(feature = "serde")]
struct KeywordVisitor<T>(fn(&str) -> T);

#[cfg(feature = "serde")]
impl<T> serde::de::Visitor<'_> for KeywordVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an alignment keyword")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<T, E> {
        Ok((self.0)(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(300.0, 200.0);

    // ── vertical ────────────────────────────────────────────────────────

    #[test]
    fn top_is_always_zero() {
        assert_eq!(VAlign::Top.offset(50.0, VIEWPORT), 0.0);
        assert_eq!(VAlign::Top.offset(500.0, VIEWPORT), 0.0);
    }

    #[test]
    fn bottom_pins_far_edge() {
        // Smaller element: pushed down so bottoms meet.
        assert_eq!(VAlign::Bottom.offset(50.0, VIEWPORT), 150.0);
        // Taller element: pulled up past the top edge.
        assert_eq!(VAlign::Bottom.offset(260.0, VIEWPORT), -60.0);
    }

    #[test]
    fn vertical_center_splits_space() {
        assert_eq!(VAlign::Center.offset(100.0, VIEWPORT), 50.0);
        assert_eq!(VAlign::Center.offset(300.0, VIEWPORT), -50.0);
    }

    // ── horizontal ──────────────────────────────────────────────────────

    #[test]
    fn left_is_always_zero() {
        assert_eq!(HAlign::Left.offset(30.0, VIEWPORT), 0.0);
    }

    #[test]
    fn right_pins_far_edge() {
        assert_eq!(HAlign::Right.offset(30.0, Size::new(300.0, 300.0)), 270.0);
        assert_eq!(HAlign::Right.offset(400.0, VIEWPORT), -100.0);
    }

    #[test]
    fn horizontal_center_splits_space() {
        assert_eq!(HAlign::Center.offset(100.0, VIEWPORT), 100.0);
        assert_eq!(HAlign::Center.offset(301.0, VIEWPORT), -0.5);
    }

    // ── keywords ────────────────────────────────────────────────────────

    #[test]
    fn keywords_parse_case_insensitively() {
        assert_eq!(VAlign::from_keyword("Bottom"), Some(VAlign::Bottom));
        assert_eq!(VAlign::from_keyword(" top "), Some(VAlign::Top));
        assert_eq!(HAlign::from_keyword("RIGHT"), Some(HAlign::Right));
        assert_eq!(HAlign::from_keyword("center"), Some(HAlign::Center));
    }

    #[test]
    fn cross_axis_keywords_rejected() {
        assert_eq!(VAlign::from_keyword("left"), None);
        assert_eq!(HAlign::from_keyword("bottom"), None);
    }

    #[test]
    fn unknown_keyword_falls_back_to_center() {
        assert_eq!(VAlign::from_keyword_or_default("middle"), VAlign::Center);
        assert_eq!(HAlign::from_keyword_or_default(""), HAlign::Center);
        assert_eq!(HAlign::from_keyword_or_default("left"), HAlign::Left);
    }

    #[test]
    fn from_str_reports_axis() {
        assert_eq!(
            "middle".parse::<VAlign>(),
            Err(UnknownKeyword {
                axis: Axis::Vertical
            })
        );
        assert_eq!(
            "up".parse::<HAlign>(),
            Err(UnknownKeyword {
                axis: Axis::Horizontal
            })
        );
        assert_eq!("right".parse::<HAlign>(), Ok(HAlign::Right));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_falls_back_to_center() {
        let v: VAlign = serde_json::from_str(r#""middle""#).unwrap();
        assert_eq!(v, VAlign::Center);
        let h: HAlign = serde_json::from_str(r#""Right""#).unwrap();
        assert_eq!(h, HAlign::Right);
        assert_eq!(serde_json::to_string(&VAlign::Bottom).unwrap(), r#""bottom""#);
    }
}
