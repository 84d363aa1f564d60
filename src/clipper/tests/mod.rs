use crate::geometry::point::{Path, Point};

mod clipper_tests;
mod enums_tests;
mod intersect_node_tests;
mod out_rec_tests;
mod poly_tree_tests;

pub fn path(points: &[(i64, i64)]) -> Path {
    points.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Counter-clockwise axis-aligned square.
pub fn square(x: i64, y: i64, size: i64) -> Path {
    path(&[(x, y), (x + size, y), (x + size, y + size), (x, y + size)])
}
