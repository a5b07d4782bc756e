//! Point quadtree node: construction, insertion and subdivision.
//!
//! Every node owns a fixed [`Region`]. A node starts as a leaf holding up to
//! [`NODE_CAPACITY`] points. When a full leaf receives another point it splits
//! once into four children covering its quadrants and hands its points down.
//! Nodes never merge back and are never removed, so the tree only grows.
//!
//! Query methods live in [`crate::queries`].

use tracing::trace;

use crate::point::Point;
use crate::region::Region;

/// Number of points a leaf holds before it subdivides
pub const NODE_CAPACITY: usize = 4;

/// Storage state of a node
#[derive(Clone, Debug)]
pub(crate) enum Node {
    /// Up to `NODE_CAPACITY` points stored inline, more only when they are all equal
    Leaf(Vec<Point>),
    /// Children in order upper-left, upper-right, lower-left, lower-right
    Internal(Box<[QuadTree; 4]>),
}

/// Quadtree over 2D points
///
/// The root's region is the domain of the tree: points outside it are rejected
/// by [`QuadTree::insert`]. Points on a boundary shared by sibling quadrants go
/// to the first quadrant, in upper-left, upper-right, lower-left, lower-right
/// order, that contains them, so each stored point lives in exactly one leaf.
///
/// A full leaf whose points all equal the incoming one keeps growing instead of
/// splitting, since no quadrant split could ever separate them. The same holds
/// once halving the region no longer shrinks it.
#[derive(Clone, Debug)]
pub struct QuadTree {
    /// Region covered by this node, fixed at construction
    pub(crate) boundary: Region,
    pub(crate) node: Node,
}

impl QuadTree {
    /// Creates an empty leaf over `boundary`
    pub fn new(boundary: Region) -> Self {
        Self {
            boundary,
            node: Node::Leaf(Vec::with_capacity(NODE_CAPACITY)),
        }
    }

    /// Inserts a point into the tree.
    ///
    /// Returns `false` without touching the tree when the point lies outside
    /// this node's region, `true` otherwise. Duplicates are stored as many
    /// times as they are inserted.
    pub fn insert(&mut self, point: Point) -> bool {
        if !self.boundary.contains_point(point) {
            trace!(x = point.x, y = point.y, "rejected point outside tree boundary");
            return false;
        }
        self.place(point);
        true
    }

    /// Returns the region covered by this node
    #[inline]
    pub fn boundary(&self) -> Region {
        self.boundary
    }

    /// Returns whether this node still stores its points inline
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.node, Node::Leaf(_))
    }

    /// Returns the number of points stored in this subtree
    pub fn len(&self) -> usize {
        match &self.node {
            Node::Leaf(points) => points.len(),
            Node::Internal(children) => children.iter().map(Self::len).sum(),
        }
    }

    /// Returns whether the subtree stores no points
    pub fn is_empty(&self) -> bool {
        match &self.node {
            Node::Leaf(points) => points.is_empty(),
            Node::Internal(children) => children.iter().all(Self::is_empty),
        }
    }

    /// Number of levels in this subtree, 1 for a leaf
    pub fn depth(&self) -> usize {
        match &self.node {
            Node::Leaf(_) => 1,
            Node::Internal(children) => {
                1 + children.iter().map(Self::depth).max().unwrap_or(0)
            }
        }
    }

    /// Returns every stored point in traversal order
    pub fn points(&self) -> Vec<Point> {
        let mut results = Vec::with_capacity(self.len());
        self.collect_points(&mut results);
        results
    }

    fn collect_points(&self, results: &mut Vec<Point>) {
        match &self.node {
            Node::Leaf(points) => results.extend_from_slice(points),
            Node::Internal(children) => {
                for child in children.iter() {
                    child.collect_points(results);
                }
            }
        }
    }

    // --- Private helpers ---

    /// Stores a point already known to lie inside `self.boundary`
    fn place(&mut self, point: Point) {
        if let Node::Leaf(points) = &mut self.node {
            if points.len() < NODE_CAPACITY || !splits_apart(&self.boundary, points, point) {
                points.push(point);
                return;
            }
            self.subdivide();
        }

        if let Node::Internal(children) = &mut self.node {
            place_in_first_child(children, point);
        }
    }

    /// Turns a leaf into an internal node and redistributes its points.
    /// No-op on internal nodes.
    fn subdivide(&mut self) {
        let Node::Leaf(points) = &mut self.node else {
            return;
        };
        let points = std::mem::take(points);

        trace!(
            center_x = self.boundary.center().x,
            center_y = self.boundary.center().y,
            points = points.len(),
            "subdividing leaf"
        );

        let mut children = Box::new(self.boundary.quadrants().map(Self::new));
        for point in points {
            place_in_first_child(&mut children, point);
        }
        self.node = Node::Internal(children);
    }
}

/// Returns whether subdividing `boundary` could move `point` away from the buffered `points`
fn splits_apart(boundary: &Region, points: &[Point], point: Point) -> bool {
    let half = boundary.half();
    let shrinks = half.x / 2.0 < half.x || half.y / 2.0 < half.y;
    if shrinks && points.iter().any(|p| *p != point) {
        return true;
    }
    trace!(
        x = point.x,
        y = point.y,
        stored = points.len(),
        "leaf cannot separate points, growing past capacity"
    );
    false
}

/// Inserts into the first child, in quadrant order, whose region accepts the point
fn place_in_first_child(children: &mut [QuadTree; 4], point: Point) {
    for child in children.iter_mut() {
        if child.boundary.contains_point(point) {
            child.place(point);
            return;
        }
    }
}
