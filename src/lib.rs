//! # quadtree - Point Quadtree Spatial Index
//!
//! A Rust library providing a point quadtree for area and radius queries over
//! 2D points.
//!
//! ## Features
//!
//! - **Incremental Insertion**: Points are inserted one at a time, no build step
//! - **Capacity-Triggered Subdivision**: Leaves split into four quadrants once they overflow
//! - **Area and Radius Queries**: With pruning of subtrees outside the query
//! - **Existence Queries**: Short-circuit on the first matching point
//!
//! ## Quick Start
//!
//! ```rust
//! use quadtree::prelude::*;
//!
//! // Root region centered at the origin, 10 units in every direction
//! let mut tree = QuadTree::new(Region::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)));
//!
//! assert!(tree.insert(Point::new(5.0, 5.0)));
//! assert!(tree.insert(Point::new(-5.0, 5.0)));
//! assert!(tree.insert(Point::new(0.0, 0.0)));
//! // Outside the root region
//! assert!(!tree.insert(Point::new(11.0, 0.0)));
//!
//! // Points inside the upper-right quadrant
//! let area = Region::new(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
//! let results = tree.search_area(&area);
//! println!("Found {} points: {:?}", results.len(), results);
//! // Output: Found 2 points: [Point { x: 5.0, y: 5.0 }, Point { x: 0.0, y: 0.0 }]
//!
//! // Points within distance 5 of (-5, 0)
//! let near = tree.search_near(Point::new(-5.0, 0.0), 5.0);
//! assert_eq!(near.len(), 2);
//! assert!(tree.is_any_point_near(Point::new(-5.0, 0.0), 5.0));
//! ```
//!
//! ## How It Works
//!
//! Each node covers a fixed rectangle given by a center and half-extents. A leaf
//! holds up to [`NODE_CAPACITY`] points; inserting one more splits it into four
//! children, each covering one quadrant, and moves its points into them. Queries
//! descend only into nodes whose rectangle intersects the query, which keeps
//! them proportional to the populated area they touch instead of the tree size.
//!
//! The tree is insert-only: there is no removal, rebalancing or bulk loading.

pub mod error;
pub mod point;
pub mod prelude;
pub mod quadtree;
pub mod queries;
pub mod region;

pub use error::RegionError;
pub use point::Point;
pub use quadtree::{NODE_CAPACITY, QuadTree};
pub use region::Region;
