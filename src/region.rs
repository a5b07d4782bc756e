//! Axis-aligned rectangular regions described by center and half-extents.
//!
//! A region covers the closed rectangle
//! `[center.x - half.x, center.x + half.x] x [center.y - half.y, center.y + half.y]`.
//! Both predicates are boundary-inclusive, so a point on the edge shared by two
//! sibling quadrants is contained by both of them.

use crate::error::RegionError;
use crate::point::Point;

/// Closed axis-aligned rectangle: center point plus half-width and half-height
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    center: Point,
    half: Point,
}

impl Region {
    /// Creates a region without validating its inputs.
    ///
    /// Half-extents are expected to be non-negative and all coordinates finite.
    /// A zero half-extent is legal and collapses the region to a line or a point.
    #[inline]
    pub const fn new(center: Point, half: Point) -> Self {
        Self { center, half }
    }

    /// Creates a region, rejecting non-finite coordinates and negative half-extents
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::NonFiniteCoordinate`] if any coordinate is NaN or
    /// infinite, and [`RegionError::NegativeHalfExtent`] if a half-extent is
    /// below zero.
    pub fn try_new(center: Point, half: Point) -> Result<Self, RegionError> {
        if !center.is_finite() || !half.is_finite() {
            return Err(RegionError::NonFiniteCoordinate);
        }
        if half.x < 0.0 || half.y < 0.0 {
            return Err(RegionError::NegativeHalfExtent {
                half_x: half.x,
                half_y: half.y,
            });
        }
        Ok(Self::new(center, half))
    }

    /// Creates a region from its corners `(min_x, min_y, max_x, max_y)`
    pub fn from_bounds(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        let half = Point::new((max_x - min_x) / 2.0, (max_y - min_y) / 2.0);
        let center = Point::new(min_x + half.x, min_y + half.y);
        Self::new(center, half)
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Half-width and half-height as a point
    #[inline]
    pub fn half(&self) -> Point {
        self.half
    }

    /// Left edge
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.center.x - self.half.x
    }

    /// Bottom edge
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.center.y - self.half.y
    }

    /// Right edge
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.center.x + self.half.x
    }

    /// Top edge
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.center.y + self.half.y
    }

    /// Returns true if `point` lies inside the region or on its boundary
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    /// Returns true unless the two regions are strictly separated on an axis.
    /// Regions touching along an edge or at a corner intersect.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.max_x() < self.min_x()
            || other.max_y() < self.min_y()
            || other.min_x() > self.max_x()
            || other.min_y() > self.max_y())
    }

    /// Splits the region into four equal quadrants.
    ///
    /// Order is upper-left, upper-right, lower-left, lower-right. Each quadrant
    /// has half the parent's half-extents and is centered at the midpoint of
    /// its quarter, so their union is exactly `self`.
    pub fn quadrants(&self) -> [Self; 4] {
        let half = Point::new(self.half.x / 2.0, self.half.y / 2.0);
        let Point { x: cx, y: cy } = self.center;
        [
            Self::new(Point::new(cx - half.x, cy + half.y), half),
            Self::new(Point::new(cx + half.x, cy + half.y), half),
            Self::new(Point::new(cx - half.x, cy - half.y), half),
            Self::new(Point::new(cx + half.x, cy - half.y), half),
        ]
    }
}
