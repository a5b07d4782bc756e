//! Find points within a radius of a center.
//!
//! Candidates come from the square around the circle and are then filtered by
//! exact distance, so points in the square's corners are dropped.
use quadtree::{Point, QuadTree, Region};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = QuadTree::new(Region::from_bounds(-10.0, -10.0, 10.0, 10.0));
    let points = [
        Point::new(0.0, 0.0),  // distance 0 from (0, 0)
        Point::new(3.0, 4.0),  // distance 5
        Point::new(4.0, 4.0),  // distance ~5.66, inside the 5x5 square
        Point::new(-1.0, 0.5), // distance ~1.12
        Point::new(9.0, -9.0), // far away
    ];
    for point in points {
        assert!(tree.insert(point), "{point:?} is inside the root");
    }

    println!("=== Search Near Example ===\n");

    let within_five = tree.search_near(Point::new(0.0, 0.0), 5.0);
    println!("Within 5 of (0, 0): {:?}", within_five);
    assert_eq!(within_five.len(), 3, "expected 3 points within radius 5");
    assert!(
        !within_five.contains(&Point::new(4.0, 4.0)),
        "(4, 4) is in the bounding square but outside the circle"
    );

    let within_one = tree.search_near(Point::new(0.0, 0.0), 1.0);
    println!("Within 1 of (0, 0): {:?}", within_one);
    assert_eq!(within_one, vec![Point::new(0.0, 0.0)], "only the origin is within 1");

    println!(
        "Any point within 1 of (9, 9): {}",
        tree.is_any_point_near(Point::new(9.0, 9.0), 1.0)
    );
    assert!(
        !tree.is_any_point_near(Point::new(9.0, 9.0), 1.0),
        "nothing lies near (9, 9)"
    );
    assert!(
        tree.is_any_point_near(Point::new(9.0, -8.0), 1.0),
        "(9, -9) lies within 1 of (9, -8)"
    );
}
