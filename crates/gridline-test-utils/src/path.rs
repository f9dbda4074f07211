//! Path validity checks shared by line tests.
//!
//! Each helper panics with a message naming the offending points, so a
//! failing sweep reports the first bad line directly.

use gridline_core::Point3;
use indexmap::IndexSet;

/// Assert that every step of `path` moves at most one cell on each axis
/// (26-connected).
pub fn assert_connected(path: &[Point3]) {
    for pair in path.windows(2) {
        let d = (pair[1] - pair[0]).abs();
        assert!(
            d.x <= 1 && d.y <= 1 && d.z <= 1,
            "step {} -> {} is not 26-connected",
            pair[0],
            pair[1]
        );
    }
}

/// Assert that `path` visits no point twice.
pub fn assert_no_duplicates(path: &[Point3]) {
    let unique: IndexSet<_> = path.iter().collect();
    assert_eq!(unique.len(), path.len(), "path {path:?} has duplicates");
}

/// Assert the full contract of a line from `source` to `destination` with
/// zero error terms: `length` points, the first a 26-neighbour of (and not
/// equal to) `source`, the last `destination`, connected and duplicate-free.
pub fn assert_line_3d(source: Point3, destination: Point3, path: &[Point3], length: usize) {
    let Some(&first) = path.first() else {
        panic!("no line generated from {source} to {destination}");
    };
    assert_eq!(
        path.last(),
        Some(&destination),
        "line from {source} does not reach {destination}"
    );
    assert_eq!(
        path.len(),
        length,
        "line from {source} to {destination} has invalid length"
    );
    let d = (first - source).abs();
    assert!(
        d.x <= 1 && d.y <= 1 && d.z <= 1 && first != source,
        "line from {source} starts at {first}"
    );
    assert_connected(path);
    assert_no_duplicates(path);
}
