//! Spatial queries for [`QuadTree`]
//!
//! All queries prune subtrees whose region does not intersect the query
//! region. Results come back in traversal order: upper-left, upper-right,
//! lower-left, lower-right, recursively.

use crate::point::Point;
use crate::quadtree::{Node, QuadTree};
use crate::region::Region;

impl QuadTree {
    /// Returns every stored point that lies inside `area` (boundary-inclusive).
    ///
    /// # Example
    /// ```
    /// use quadtree::prelude::*;
    ///
    /// let mut tree = QuadTree::new(Region::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)));
    /// assert!(tree.insert(Point::new(5.0, 5.0)));
    /// assert!(tree.insert(Point::new(-5.0, -5.0)));
    ///
    /// let found = tree.search_area(&Region::new(Point::new(5.0, 5.0), Point::new(1.0, 1.0)));
    /// assert_eq!(found, vec![Point::new(5.0, 5.0)]);
    /// ```
    pub fn search_area(&self, area: &Region) -> Vec<Point> {
        let mut results = Vec::new();
        self.search_area_into(area, &mut results);
        results
    }

    /// Returns every stored point within Euclidean distance `radius` of `center`.
    ///
    /// Candidates are first gathered with an area query over the square that
    /// bounds the circle, then filtered by exact squared distance.
    pub fn search_near(&self, center: Point, radius: f64) -> Vec<Point> {
        let radius_sq = radius * radius;
        let mut candidates = self.search_area(&bounding_square(center, radius));
        candidates.retain(|p| center.distance_squared(*p) <= radius_sq);
        candidates
    }

    /// Returns true if at least one stored point lies inside `area`.
    /// Stops at the first match.
    pub fn is_any_point_area(&self, area: &Region) -> bool {
        if !self.boundary.intersects(area) {
            return false;
        }

        match &self.node {
            Node::Leaf(points) => points.iter().any(|p| area.contains_point(*p)),
            Node::Internal(children) => children.iter().any(|child| child.is_any_point_area(area)),
        }
    }

    /// Returns true if at least one stored point is within `radius` of `center`.
    /// Stops at the first match.
    pub fn is_any_point_near(&self, center: Point, radius: f64) -> bool {
        let square = bounding_square(center, radius);
        self.is_any_point_near_internal(center, radius * radius, &square)
    }

    // --- Private helpers ---

    fn search_area_into(&self, area: &Region, results: &mut Vec<Point>) {
        if !self.boundary.intersects(area) {
            return;
        }

        match &self.node {
            Node::Leaf(points) => {
                results.extend(points.iter().filter(|p| area.contains_point(**p)));
            }
            Node::Internal(children) => {
                for child in children.iter() {
                    child.search_area_into(area, results);
                }
            }
        }
    }

    fn is_any_point_near_internal(&self, center: Point, radius_sq: f64, square: &Region) -> bool {
        if !self.boundary.intersects(square) {
            return false;
        }

        match &self.node {
            Node::Leaf(points) => points
                .iter()
                .any(|p| square.contains_point(*p) && center.distance_squared(*p) <= radius_sq),
            Node::Internal(children) => children
                .iter()
                .any(|child| child.is_any_point_near_internal(center, radius_sq, square)),
        }
    }
}

/// Square region centered at `center` enclosing the circle of `radius`
#[inline]
fn bounding_square(center: Point, radius: f64) -> Region {
    Region::new(center, Point::new(radius, radius))
}
