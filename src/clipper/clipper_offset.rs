use std::f64::consts::PI;

use crate::clip_config::{ClipConfig, DegeneratePolicy};
use crate::clipper::clipper::Clipper;
use crate::clipper::enums::{ClipType, JoinType, PolyFillType, PolyType};
use crate::clipper::poly_tree::PolyTree;
use crate::constants::{DEFAULT_ARC_TOLERANCE, DEFAULT_MITER_LIMIT};
use crate::error::ClipError;
use crate::geometry::point::{Path, PathSet, Point};
use crate::geometry::polygon::{orientation, reverse_paths};
use crate::utils::almost_equal::AlmostEqual;
use crate::utils::math::cycle_index;
use crate::utils::round::ClipperRound;

type Normal = (f64, f64);

fn unit_normal(pt1: &Point, pt2: &Point) -> Normal {
    let dx = pt2.x as f64 - pt1.x as f64;
    let dy = pt2.y as f64 - pt1.y as f64;
    if dx == 0.0 && dy == 0.0 {
        return (0.0, 0.0);
    }

    let f = 1.0 / (dx * dx + dy * dy).sqrt();
    (dy * f, -dx * f)
}

/// Trigonometry shared by every path of one offset run.
struct OffsetParams {
    delta: f64,
    sin: f64,
    cos: f64,
    steps_per_rad: f64,
    miter_lim: f64,
}

impl OffsetParams {
    fn new(delta: f64, miter_limit: f64, arc_tolerance: f64) -> Self {
        let abs_delta = delta.abs();
        let y = if arc_tolerance <= 0.0 {
            DEFAULT_ARC_TOLERANCE
        } else if arc_tolerance > abs_delta * DEFAULT_ARC_TOLERANCE {
            abs_delta * DEFAULT_ARC_TOLERANCE
        } else {
            arc_tolerance
        };

        let mut steps = PI / (1.0 - y / abs_delta).acos();
        if steps > abs_delta * PI {
            steps = abs_delta * PI;
        }

        let sin = (2.0 * PI / steps).sin();

        Self {
            delta,
            sin: if delta < 0.0 { -sin } else { sin },
            cos: (2.0 * PI / steps).cos(),
            steps_per_rad: steps / (2.0 * PI),
            miter_lim: if miter_limit > 2.0 {
                2.0 / (miter_limit * miter_limit)
            } else {
                0.5
            },
        }
    }
}

/// Grows (positive delta) or shrinks (negative delta) closed polygons.
#[derive(Debug, Clone)]
pub struct ClipperOffset {
    miter_limit: f64,
    arc_tolerance: f64,
    paths: Vec<(Path, JoinType)>,
    /// `(path, vertex)` of the lowest vertex over all paths.
    lowest: Option<(usize, usize)>,
}

impl Default for ClipperOffset {
    fn default() -> Self {
        Self::new(DEFAULT_MITER_LIMIT, DEFAULT_ARC_TOLERANCE)
    }
}

impl ClipperOffset {
    /// `arc_tolerance` is in grid units.
    pub fn new(miter_limit: f64, arc_tolerance: f64) -> Self {
        Self {
            miter_limit,
            arc_tolerance,
            paths: Vec::new(),
            lowest: None,
        }
    }

    /// Paths with fewer than 3 distinct points are ignored.
    pub fn add_path(&mut self, path: &[Point], join_type: JoinType) {
        let mut contour: Path = Vec::with_capacity(path.len());
        for point in path {
            if contour.last() != Some(point) {
                contour.push(*point);
            }
        }
        while contour.len() > 1 && contour.first() == contour.last() {
            contour.pop();
        }
        if contour.len() < 3 {
            return;
        }

        let index = self.paths.len();
        let low = contour
            .iter()
            .enumerate()
            .min_by_key(|(_, point)| (point.y, point.x))
            .map(|(vertex, _)| vertex)
            .unwrap_or(0);

        let is_lower = match self.lowest {
            None => true,
            Some((path, vertex)) => {
                let current = self.paths[path].0[vertex];
                (contour[low].y, contour[low].x) < (current.y, current.x)
            }
        };
        if is_lower {
            self.lowest = Some((index, low));
        }

        self.paths.push((contour, join_type));
    }

    pub fn add_paths(&mut self, paths: &[Path], join_type: JoinType) {
        for path in paths {
            self.add_path(path, join_type);
        }
    }

    pub fn clear(&mut self) {
        self.paths.clear();
        self.lowest = None;
    }

    pub fn execute(&self, delta: f64) -> Result<PolyTree, ClipError> {
        let mut clipper = Clipper::with_config(
            ClipConfig::default().with_degenerate_policy(DegeneratePolicy::Drop),
        );
        clipper.add_paths(&self.do_offset(delta)?, PolyType::Subject);

        clipper.execute(ClipType::Union, PolyFillType::Positive, PolyFillType::Positive)
    }

    pub fn execute_paths(&self, delta: f64) -> Result<PathSet, ClipError> {
        Ok(self.execute(delta)?.into_paths())
    }

    /// Outer contours must be positive; flips everything when the path
    /// holding the lowest vertex is not.
    fn oriented_paths(&self) -> Vec<(Path, JoinType)> {
        let reverse = self
            .lowest
            .map_or(false, |(path, _)| !orientation(&self.paths[path].0));

        let mut paths: PathSet = self.paths.iter().map(|(path, _)| path.clone()).collect();
        if reverse {
            reverse_paths(&mut paths);
        }

        paths
            .into_iter()
            .zip(self.paths.iter().map(|(_, join_type)| *join_type))
            .collect()
    }

    fn do_offset(&self, delta: f64) -> Result<PathSet, ClipError> {
        let paths = self.oriented_paths();
        if delta.almost_equal(0.0, None) {
            return Ok(paths.into_iter().map(|(path, _)| path).collect());
        }

        let params = OffsetParams::new(delta, self.miter_limit, self.arc_tolerance);
        let mut result = Vec::with_capacity(paths.len());

        for (path, join_type) in &paths {
            let point_count = path.len();
            let normals: Vec<Normal> = (0..point_count)
                .map(|i| unit_normal(&path[i], &path[cycle_index(i, point_count, 1)]))
                .collect();

            let mut offset = PathOffset {
                src: path,
                normals: &normals,
                params: &params,
                dest: Vec::with_capacity(point_count * 2),
            };

            let mut k = point_count - 1;
            for j in 0..point_count {
                k = offset.offset_point(j, k, *join_type)?;
            }

            result.push(offset.dest);
        }

        Ok(result)
    }
}

struct PathOffset<'a> {
    src: &'a Path,
    normals: &'a [Normal],
    params: &'a OffsetParams,
    dest: Path,
}

impl PathOffset<'_> {
    fn push(&mut self, x: f64, y: f64) -> Result<(), ClipError> {
        let point = Point::from_f64(x.clipper_rounded(), y.clipper_rounded(), 1.0)
            .map_err(|_| ClipError::overflow(format!("offsetting to ({x}, {y})")))?;
        self.dest.push(point);
        Ok(())
    }

    fn push_along(&mut self, j: usize, normal: Normal) -> Result<(), ClipError> {
        let delta = self.params.delta;
        let origin = self.src[j];
        self.push(
            origin.x as f64 + normal.0 * delta,
            origin.y as f64 + normal.1 * delta,
        )
    }

    /// Emits the offset vertices for corner `j`, reached along edge `k`.
    /// Returns the edge the next corner is reached along.
    fn offset_point(&mut self, j: usize, k: usize, join_type: JoinType) -> Result<usize, ClipError> {
        let (nk, nj) = (self.normals[k], self.normals[j]);
        let delta = self.params.delta;
        let mut sin_a = nk.0 * nj.1 - nj.0 * nk.1;

        if (sin_a * delta).abs() < 1.0 {
            let cos_a = nk.0 * nj.0 + nj.1 * nk.1;
            if cos_a > 0.0 {
                self.push_along(j, nk)?;
                return Ok(k);
            }
        } else {
            sin_a = sin_a.clamp(-1.0, 1.0);
        }

        if sin_a * delta < 0.0 {
            self.push_along(j, nk)?;
            self.dest.push(self.src[j]);
            self.push_along(j, nj)?;
        } else {
            match join_type {
                JoinType::Miter => {
                    let r = 1.0 + (nj.0 * nk.0 + nj.1 * nk.1);
                    if r >= self.params.miter_lim {
                        self.do_miter(j, k, r)?;
                    } else {
                        self.do_square(j, k, sin_a)?;
                    }
                }
                JoinType::Square => self.do_square(j, k, sin_a)?,
                JoinType::Round => self.do_round(j, k, sin_a)?,
            }
        }

        Ok(j)
    }

    fn do_square(&mut self, j: usize, k: usize, sin_a: f64) -> Result<(), ClipError> {
        let (nk, nj) = (self.normals[k], self.normals[j]);
        let delta = self.params.delta;
        let origin = self.src[j];
        let dx = (sin_a.atan2(nk.0 * nj.0 + nk.1 * nj.1) / 4.0).tan();

        self.push(
            origin.x as f64 + delta * (nk.0 - nk.1 * dx),
            origin.y as f64 + delta * (nk.1 + nk.0 * dx),
        )?;
        self.push(
            origin.x as f64 + delta * (nj.0 + nj.1 * dx),
            origin.y as f64 + delta * (nj.1 - nj.0 * dx),
        )
    }

    fn do_miter(&mut self, j: usize, k: usize, r: f64) -> Result<(), ClipError> {
        let (nk, nj) = (self.normals[k], self.normals[j]);
        let q = self.params.delta / r;
        let origin = self.src[j];

        self.push(
            origin.x as f64 + (nk.0 + nj.0) * q,
            origin.y as f64 + (nk.1 + nj.1) * q,
        )
    }

    fn do_round(&mut self, j: usize, k: usize, sin_a: f64) -> Result<(), ClipError> {
        let (nk, nj) = (self.normals[k], self.normals[j]);
        let a = sin_a.atan2(nk.0 * nj.0 + nk.1 * nj.1);
        let steps = ((self.params.steps_per_rad * a.abs()).clipper_rounded() as usize).max(1);

        let (mut x, mut y) = nk;
        for _ in 0..steps {
            self.push_along(j, (x, y))?;
            let x2 = x;
            x = x * self.params.cos - self.params.sin * y;
            y = x2 * self.params.sin + y * self.params.cos;
        }

        self.push_along(j, nj)
    }
}

/// Offsets `paths` by `delta` grid units with one join type for all corners.
pub fn offset_paths(
    paths: &[Path],
    delta: f64,
    join_type: JoinType,
    miter_limit: f64,
    arc_tolerance: f64,
) -> Result<PolyTree, ClipError> {
    let mut offset = ClipperOffset::new(miter_limit, arc_tolerance);
    offset.add_paths(paths, join_type);
    offset.execute(delta)
}
