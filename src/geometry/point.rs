use std::cmp::Ordering;
use std::fmt;

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::constants::HI_RANGE;
use crate::error::InputDefect;
use crate::utils::round::ClipperRound;

/// Fixed-point vertex. Orders by `y`, then by `x` (sweep order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

pub type Path = Vec<Point>;

pub type PathSet = Vec<Path>;

impl Point {
    #[inline(always)]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn is_in_range(&self) -> bool {
        self.x.abs() <= HI_RANGE && self.y.abs() <= HI_RANGE
    }

    /// Twice the signed area of triangle `o, a, b`; positive when `b` is
    /// left of the ray `o -> a`.
    #[inline(always)]
    pub fn cross_product(o: &Point, a: &Point, b: &Point) -> i128 {
        let ax = a.x as i128 - o.x as i128;
        let ay = a.y as i128 - o.y as i128;
        let bx = b.x as i128 - o.x as i128;
        let by = b.y as i128 - o.y as i128;

        ax * by - ay * bx
    }

    #[inline(always)]
    pub fn dot_product(o: &Point, a: &Point, b: &Point) -> i128 {
        let ax = a.x as i128 - o.x as i128;
        let ay = a.y as i128 - o.y as i128;
        let bx = b.x as i128 - o.x as i128;
        let by = b.y as i128 - o.y as i128;

        ax * bx + ay * by
    }

    #[inline(always)]
    pub fn slopes_equal(a: &Point, b: &Point, c: &Point) -> bool {
        Point::cross_product(a, b, c) == 0
    }

    pub fn close_to(&self, other: &Point, dist_sqrd: f64) -> bool {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;

        dx * dx + dy * dy <= dist_sqrd
    }

    /// Scales host coordinates into the fixed-point grid.
    pub fn from_f64(x: f64, y: f64, scale: f64) -> Result<Self, InputDefect> {
        if !x.is_finite() || !y.is_finite() {
            return Err(InputDefect::NonFinite);
        }

        let sx = (x * scale).clipper_rounded();
        let sy = (y * scale).clipper_rounded();

        match (sx.to_i64(), sy.to_i64()) {
            (Some(px), Some(py)) => {
                let point = Point::new(px, py);
                if point.is_in_range() {
                    Ok(point)
                } else {
                    Err(InputDefect::OutOfRange { x: px, y: py })
                }
            }
            _ => Err(InputDefect::OutOfRange {
                x: sx.to_i64().unwrap_or(i64::MAX),
                y: sy.to_i64().unwrap_or(i64::MAX),
            }),
        }
    }

    pub fn to_f64(&self, scale: f64) -> (f64, f64) {
        (self.x as f64 / scale, self.y as f64 / scale)
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}
