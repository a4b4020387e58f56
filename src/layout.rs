//! Coordinate transform from user space into SVG output space.
//!
//! Every coordinate a shape emits goes through [`Layout::x`] / [`Layout::y`],
//! and every length through [`Layout::scale`].

use crate::defaults;
use crate::types::{Dimensions, Point, check_finite};

/// The corner of the document that user-space `(0, 0)` maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Origin {
    TopLeft,
    #[default]
    BottomLeft,
    TopRight,
    BottomRight,
}

impl Origin {
    /// X grows leftwards from the document's right edge.
    pub fn mirrors_x(self) -> bool {
        matches!(self, Origin::TopRight | Origin::BottomRight)
    }

    /// Y grows upwards from the document's bottom edge.
    pub fn mirrors_y(self) -> bool {
        matches!(self, Origin::BottomLeft | Origin::BottomRight)
    }
}

/// Dimensions, origin corner, scale and origin offset of a document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub dimensions: Dimensions,
    pub origin: Origin,
    pub scale: f64,
    pub origin_offset: Point,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            dimensions: defaults::DOCUMENT_SIZE,
            origin: Origin::default(),
            scale: 1.0,
            origin_offset: Point::ZERO,
        }
    }
}

impl Layout {
    pub fn new(dimensions: Dimensions, origin: Origin) -> Self {
        Self {
            dimensions,
            origin,
            ..Self::default()
        }
    }

    /// Identity transform: top-left origin, zero size, unit scale, no offset.
    ///
    /// Marker contents are drawn in their own coordinate system, so they
    /// render under this layout.
    pub fn neutral() -> Self {
        Self::new(Dimensions::default(), Origin::TopLeft)
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        check_finite("Layout::with_scale", &[scale]);
        self.scale = scale;
        self
    }

    pub fn with_offset(mut self, offset: Point) -> Self {
        check_finite("Layout::with_offset", &[offset.x, offset.y]);
        self.origin_offset = offset;
        self
    }

    /// Map a user-space x coordinate into output space.
    #[inline]
    pub fn x(&self, x: f64) -> f64 {
        if self.origin.mirrors_x() {
            self.dimensions.width - (x + self.origin_offset.x) * self.scale
        } else {
            (self.origin_offset.x + x) * self.scale
        }
    }

    /// Map a user-space y coordinate into output space.
    #[inline]
    pub fn y(&self, y: f64) -> f64 {
        if self.origin.mirrors_y() {
            self.dimensions.height - (y + self.origin_offset.y) * self.scale
        } else {
            (self.origin_offset.y + y) * self.scale
        }
    }

    /// Map a length (radius, width, stroke width...) into output space.
    #[inline]
    pub fn scale(&self, length: f64) -> f64 {
        length * self.scale
    }

    /// Map a point into output space.
    #[inline]
    pub fn point(&self, p: Point) -> Point {
        Point::new(self.x(p.x), self.y(p.y))
    }

    /// Inverse of [`Layout::x`]. Meaningless when the scale is zero.
    pub fn inverse_x(&self, out: f64) -> f64 {
        if self.origin.mirrors_x() {
            (self.dimensions.width - out) / self.scale - self.origin_offset.x
        } else {
            out / self.scale - self.origin_offset.x
        }
    }

    /// Inverse of [`Layout::y`]. Meaningless when the scale is zero.
    pub fn inverse_y(&self, out: f64) -> f64 {
        if self.origin.mirrors_y() {
            (self.dimensions.height - out) / self.scale - self.origin_offset.y
        } else {
            out / self.scale - self.origin_offset.y
        }
    }
}
