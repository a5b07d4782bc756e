//! Find points inside a rectangular area.
//!
//! Run with `RUST_LOG=quadtree=trace` to see subdivision events.
use quadtree::{Point, QuadTree, Region, RegionError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RegionError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let root = Region::try_new(Point::new(0.0, 0.0), Point::new(10.0, 10.0))?;
    let mut tree = QuadTree::new(root);

    for (x, y) in [(5.0, 5.0), (-5.0, 5.0), (-5.0, -5.0), (5.0, -5.0), (0.0, 0.0)] {
        assert!(tree.insert(Point::new(x, y)), "({x}, {y}) is inside the root");
    }
    for (x, y) in [(11.0, 0.0), (-11.0, 0.0), (0.0, 11.0), (0.0, -11.0)] {
        assert!(!tree.insert(Point::new(x, y)), "({x}, {y}) is outside the root");
    }
    println!("Stored {} points, depth {}", tree.len(), tree.depth());

    let area = Region::new(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
    let results = tree.search_area(&area);
    println!("Inside {:?}: {:?}", area, results);
    assert_eq!(
        results,
        vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)],
        "upper-right quadrant holds the origin and (5, 5)"
    );

    let empty = Region::from_bounds(1.0, 1.0, 4.0, 4.0);
    println!("Any point inside {:?}: {}", empty, tree.is_any_point_area(&empty));
    assert!(!tree.is_any_point_area(&empty), "no point lies in {empty:?}");

    Ok(())
}
