//! Numeric primitives shared by every shape.
//!
//! Points are plain `glam::DVec2` values. Unlike a strict newtype layer,
//! nothing here refuses a NaN or an infinity: bad numbers are logged and kept
//! as-is, so callers who need sane output validate beforehand.

use std::fmt;

use crate::log::warn;

/// A point (or displacement) in user space.
pub type Point = glam::DVec2;

/// Shorthand for [`Point::new`].
#[inline]
pub fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Classify a single value.
#[inline]
pub fn finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

/// Log a warning if any of `values` is NaN or infinite.
///
/// Returns `true` when everything was finite. `what` names the constructor or
/// mutator that received the values, e.g. `"Circle::new"`.
pub(crate) fn check_finite(what: &'static str, values: &[f64]) -> bool {
    match values.iter().copied().map(finite).find_map(Result::err) {
        None => true,
        Some(err) => {
            warn!(what, %err, ?values, "non-finite value provided");
            false
        }
    }
}

/// Same as [`check_finite`], for a list of points.
pub(crate) fn check_finite_points(what: &'static str, points: &[Point]) -> bool {
    match points.iter().find(|p| !p.is_finite()) {
        None => true,
        Some(p) => {
            warn!(what, x = p.x, y = p.y, "non-finite point provided");
            false
        }
    }
}

/// Width and height of a document or a chart margin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        check_finite("Dimensions::new", &[width, height]);
        Self { width, height }
    }

    /// Same value for both sides.
    pub fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl Default for BBox {
    fn default() -> Self {
        Self::new()
    }
}

impl BBox {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        BBox {
            min: Point::splat(f64::MAX),
            max: Point::splat(f64::MIN),
        }
    }

    /// Bounding box of a point list, `None` if the list is empty.
    pub fn of(points: &[Point]) -> Option<Self> {
        let mut bb = BBox::new();
        for p in points {
            bb.expand_point(*p);
        }
        (!bb.is_empty()).then_some(bb)
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: Point) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to include another box
    pub fn union(&mut self, other: &BBox) {
        if !other.is_empty() {
            self.expand_point(other.min);
            self.expand_point(other.max);
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Dimensions {
        Dimensions {
            width: self.width(),
            height: self.height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_classifies_values() {
        assert_eq!(finite(1.5), Ok(1.5));
        assert_eq!(finite(f64::NAN), Err(NumericError::NaN));
        assert_eq!(finite(f64::NEG_INFINITY), Err(NumericError::Infinite));
    }

    #[test]
    fn check_finite_reports_bad_values() {
        assert!(check_finite("test", &[0.0, -3.0, 1e300]));
        assert!(!check_finite("test", &[0.0, f64::NAN]));
        assert!(!check_finite_points("test", &[pt(1.0, f64::INFINITY)]));
    }

    #[test]
    fn dimensions_keep_invalid_values() {
        let d = Dimensions::new(f64::INFINITY, 2.0);
        assert!(d.width.is_infinite());
        assert_eq!(d.height, 2.0);
        assert_eq!(Dimensions::square(3.0), Dimensions::new(3.0, 3.0));
    }

    #[test]
    fn bbox_new_is_empty() {
        assert!(BBox::new().is_empty());
        assert_eq!(BBox::of(&[]), None);
    }

    #[test]
    fn bbox_of_points() {
        let bb = BBox::of(&[pt(1.0, 5.0), pt(-2.0, 3.0), pt(4.0, 8.0)]).unwrap();
        assert_eq!(bb.min, pt(-2.0, 3.0));
        assert_eq!(bb.max, pt(4.0, 8.0));
        assert_eq!(bb.size(), Dimensions::new(6.0, 5.0));
    }

    #[test]
    fn bbox_union_ignores_empty() {
        let mut bb = BBox::of(&[pt(0.0, 0.0), pt(1.0, 1.0)]).unwrap();
        bb.union(&BBox::new());
        assert_eq!(bb.max, pt(1.0, 1.0));
        bb.union(&BBox::of(&[pt(3.0, -1.0)]).unwrap());
        assert_eq!(bb.min, pt(0.0, -1.0));
        assert_eq!(bb.max, pt(3.0, 1.0));
    }
}
