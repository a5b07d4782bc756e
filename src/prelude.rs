//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use quadtree::prelude::*;
//! ```

pub use crate::{NODE_CAPACITY, Point, QuadTree, Region, RegionError};
