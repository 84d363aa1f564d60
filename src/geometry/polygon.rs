use crate::clipper::enums::PolyType;
use crate::error::{ClipError, InputDefect};
use crate::geometry::point::{Path, PathSet, Point};
use crate::utils::math::cycle_index;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointInPolygon {
    Outside,
    Inside,
    OnBoundary,
}

/// Twice the signed area, exact. Positive for counter-clockwise paths.
pub fn area2(path: &[Point]) -> Result<i128, ClipError> {
    let point_count = path.len();
    if point_count < 3 {
        return Ok(0);
    }

    let origin = path[0];
    let mut result: i128 = 0;

    for i in 1..point_count - 1 {
        let term = Point::cross_product(&origin, &path[i], &path[i + 1]);
        result = result
            .checked_add(term)
            .ok_or_else(|| ClipError::overflow("accumulating path area"))?;
    }

    Ok(result)
}

/// Signed area in floating point.
pub fn area(path: &[Point]) -> f64 {
    let point_count = path.len();
    if point_count < 3 {
        return 0.0;
    }

    let mut result = 0.0;
    let mut prev = path[point_count - 1];

    for point in path {
        result += (prev.x as f64 + point.x as f64) * (prev.y as f64 - point.y as f64);
        prev = *point;
    }

    -result * 0.5
}

pub fn orientation(path: &[Point]) -> bool {
    match area2(path) {
        Ok(value) => value >= 0,
        Err(_) => area(path) >= 0.0,
    }
}

pub fn point_in_polygon(point: &Point, path: &[Point]) -> PointInPolygon {
    locate_doubled(point.x as i128 * 2, point.y as i128 * 2, path)
}

/// Locates the midpoint of `a` and `b` without rounding it to the grid.
pub fn midpoint_in_polygon(a: &Point, b: &Point, path: &[Point]) -> PointInPolygon {
    locate_doubled(
        a.x as i128 + b.x as i128,
        a.y as i128 + b.y as i128,
        path,
    )
}

fn locate_doubled(px: i128, py: i128, path: &[Point]) -> PointInPolygon {
    let point_count = path.len();
    if point_count < 3 {
        return PointInPolygon::Outside;
    }

    let mut inside = false;

    for i in 0..point_count {
        let a = path[i];
        let b = path[cycle_index(i, point_count, 1)];
        let (ax, ay) = (a.x as i128 * 2, a.y as i128 * 2);
        let (bx, by) = (b.x as i128 * 2, b.y as i128 * 2);
        let cross = (bx - ax) * (py - ay) - (by - ay) * (px - ax);

        if cross == 0
            && px >= ax.min(bx)
            && px <= ax.max(bx)
            && py >= ay.min(by)
            && py <= ay.max(by)
        {
            return PointInPolygon::OnBoundary;
        }

        if (ay > py) != (by > py) {
            let is_left = if by > ay { cross > 0 } else { cross < 0 };
            if is_left {
                inside = !inside;
            }
        }
    }

    if inside {
        PointInPolygon::Inside
    } else {
        PointInPolygon::Outside
    }
}

fn slopes_near_collinear(pt1: &Point, pt2: &Point, pt3: &Point, dist_sqrd: f64) -> bool {
    if dist_sqrd <= 0.0 {
        return Point::slopes_equal(pt1, pt2, pt3);
    }

    let (pivot, ln1, ln2) = if (pt1.x - pt2.x).abs() > (pt1.y - pt2.y).abs() {
        if (pt1.x > pt2.x) == (pt1.x < pt3.x) {
            (pt1, pt2, pt3)
        } else if (pt2.x > pt1.x) == (pt2.x < pt3.x) {
            (pt2, pt1, pt3)
        } else {
            (pt3, pt1, pt2)
        }
    } else if (pt1.y > pt2.y) == (pt1.y < pt3.y) {
        (pt1, pt2, pt3)
    } else if (pt2.y > pt1.y) == (pt2.y < pt3.y) {
        (pt2, pt1, pt3)
    } else {
        (pt3, pt1, pt2)
    };

    distance_from_line_sqrd(pivot, ln1, ln2) < dist_sqrd
}

fn distance_from_line_sqrd(point: &Point, ln1: &Point, ln2: &Point) -> f64 {
    let a = ln1.y as f64 - ln2.y as f64;
    let b = ln2.x as f64 - ln1.x as f64;
    let c = a * ln1.x as f64 + b * ln1.y as f64;
    let c = a * point.x as f64 + b * point.y as f64 - c;

    (c * c) / (a * a + b * b)
}

struct Ring {
    prev: Vec<usize>,
    next: Vec<usize>,
    visited: Vec<bool>,
}

impl Ring {
    fn new(size: usize) -> Self {
        Self {
            prev: (0..size).map(|i| cycle_index(i, size, -1)).collect(),
            next: (0..size).map(|i| cycle_index(i, size, 1)).collect(),
            visited: vec![false; size],
        }
    }

    /// Unlinks `index` and returns its predecessor, which must be revisited.
    fn exclude(&mut self, index: usize) -> usize {
        let prev = self.prev[index];
        let next = self.next[index];
        self.next[prev] = next;
        self.prev[next] = prev;
        self.visited[prev] = false;

        prev
    }
}

/// Removes vertices closer than `distance` to a neighbour, spikes, and
/// vertices within `distance` of the line through their neighbours. A zero
/// distance removes exactly collinear vertices only.
pub fn clean_polygon(path: &[Point], distance: f64) -> Path {
    let mut point_count = path.len();
    if point_count < 3 {
        return Vec::new();
    }

    let dist_sqrd = distance * distance;
    let mut ring = Ring::new(point_count);
    let mut curr = 0;

    while !ring.visited[curr] && ring.next[curr] != ring.prev[curr] {
        let prev = ring.prev[curr];
        let next = ring.next[curr];

        if path[curr].close_to(&path[prev], dist_sqrd) {
            curr = ring.exclude(curr);
            point_count -= 1;
        } else if path[prev].close_to(&path[next], dist_sqrd) {
            ring.exclude(next);
            curr = ring.exclude(curr);
            point_count -= 2;
        } else if slopes_near_collinear(&path[prev], &path[curr], &path[next], dist_sqrd) {
            curr = ring.exclude(curr);
            point_count -= 1;
        } else {
            ring.visited[curr] = true;
            curr = next;
        }
    }

    if point_count < 3 {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(point_count);
    let start = curr;
    loop {
        result.push(path[curr]);
        curr = ring.next[curr];
        if curr == start {
            break;
        }
    }

    result
}

/// Rotates a closed path so it starts at its lowest vertex in sweep order.
pub fn rotate_to_lowest(path: &mut Path) {
    if let Some(start) = path
        .iter()
        .enumerate()
        .min_by_key(|(_, point)| **point)
        .map(|(index, _)| index)
    {
        path.rotate_left(start);
    }
}

pub fn reverse_paths(paths: &mut PathSet) {
    for path in paths.iter_mut() {
        path.reverse();
    }
}

/// Converts host coordinates of one input path into the fixed-point grid.
pub fn path_from_f64(
    points: &[(f64, f64)],
    scale: f64,
    operand: PolyType,
    index: usize,
) -> Result<Path, ClipError> {
    points
        .iter()
        .map(|&(x, y)| {
            Point::from_f64(x, y, scale).map_err(|defect| match defect {
                InputDefect::OutOfRange { .. } => {
                    ClipError::overflow(format!("scaling ({x}, {y}) by {scale}"))
                }
                defect => ClipError::InvalidInput {
                    operand,
                    path: index,
                    defect,
                },
            })
        })
        .collect()
}

pub fn path_to_f64(path: &[Point], scale: f64) -> Vec<(f64, f64)> {
    path.iter().map(|point| point.to_f64(scale)).collect()
}
