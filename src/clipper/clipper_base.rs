use log::{debug, warn};

use crate::clip_config::{ClipConfig, DegeneratePolicy};
use crate::clipper::enums::{ClipType, PolyType};
use crate::clipper::intersect_node::is_self_intersecting;
use crate::error::{ClipError, InputDefect};
use crate::geometry::bound_rect::BoundRect;
use crate::geometry::point::{Path, PathSet, Point};
use crate::geometry::polygon::area2;

/// An input path that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedPath {
    pub points: Path,
    /// Twice the signed area.
    pub area2: i128,
    pub bounds: BoundRect,
    pub poly_type: PolyType,
    /// Position among the paths of its operand.
    pub index: usize,
    pub is_self_intersecting: bool,
}

#[derive(Debug, Default)]
pub struct PreparedInput {
    pub paths: Vec<PreparedPath>,
    /// Degenerate paths skipped under `DegeneratePolicy::Drop`.
    pub dropped: usize,
    /// Paths left out because they cannot affect the result.
    pub culled: usize,
}

/// Validates and normalises one input path.
pub fn prepare_path(path: &[Point], poly_type: PolyType, index: usize) -> Result<PreparedPath, ClipError> {
    let invalid = |defect| ClipError::InvalidInput {
        operand: poly_type,
        path: index,
        defect,
    };

    if let Some(point) = path.iter().find(|point| !point.is_in_range()) {
        return Err(invalid(InputDefect::OutOfRange {
            x: point.x,
            y: point.y,
        }));
    }

    let mut points: Path = Vec::with_capacity(path.len());
    for point in path {
        if points.last() != Some(point) {
            points.push(*point);
        }
    }
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    if points.len() < 3 {
        return Err(invalid(InputDefect::TooFewPoints {
            count: points.len(),
        }));
    }

    let (origin, direction) = (points[0], points[1]);
    if points
        .iter()
        .all(|point| Point::slopes_equal(&origin, &direction, point))
    {
        return Err(invalid(InputDefect::Collinear));
    }

    let area2 = area2(&points)?;
    let bounds = BoundRect::from_path(&points).ok_or_else(|| invalid(InputDefect::TooFewPoints { count: 0 }))?;
    let is_self_intersecting = is_self_intersecting(&points);

    Ok(PreparedPath {
        points,
        area2,
        bounds,
        poly_type,
        index,
        is_self_intersecting,
    })
}

/// Input storage shared by every operation run on a `Clipper`.
#[derive(Debug, Clone, Default)]
pub struct ClipperBase {
    subjects: PathSet,
    clips: PathSet,
}

impl ClipperBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_path(&mut self, path: &[Point], poly_type: PolyType) {
        match poly_type {
            PolyType::Subject => self.subjects.push(path.to_vec()),
            PolyType::Clip => self.clips.push(path.to_vec()),
        }
    }

    pub fn add_paths(&mut self, paths: &[Path], poly_type: PolyType) {
        for path in paths {
            self.add_path(path, poly_type);
        }
    }

    pub fn paths(&self, poly_type: PolyType) -> &PathSet {
        match poly_type {
            PolyType::Subject => &self.subjects,
            PolyType::Clip => &self.clips,
        }
    }

    pub fn clear(&mut self) {
        self.subjects.clear();
        self.clips.clear();
    }

    /// Validates every stored path and leaves out those that cannot
    /// contribute to `clip_type`.
    pub fn prepare(&self, config: &ClipConfig, clip_type: ClipType) -> Result<PreparedInput, ClipError> {
        let mut result = PreparedInput::default();

        for poly_type in [PolyType::Subject, PolyType::Clip] {
            for (index, path) in self.paths(poly_type).iter().enumerate() {
                match prepare_path(path, poly_type, index) {
                    Ok(prepared) => {
                        if prepared.is_self_intersecting {
                            debug!("{:?} path #{} is self-intersecting", poly_type, index);
                        }
                        result.paths.push(prepared);
                    }
                    Err(ClipError::InvalidInput { defect, .. })
                        if config.degenerate_policy == DegeneratePolicy::Drop
                            && !matches!(defect, InputDefect::OutOfRange { .. }) =>
                    {
                        warn!("dropping {:?} path #{}: {}", poly_type, index, defect);
                        result.dropped += 1;
                    }
                    Err(error) => return Err(error),
                }
            }
        }

        result.culled = cull_isolated(&mut result.paths, clip_type);

        Ok(result)
    }
}

fn total_bounds(paths: &[PreparedPath], poly_type: PolyType) -> Option<BoundRect> {
    paths
        .iter()
        .filter(|path| path.poly_type == poly_type)
        .map(|path| path.bounds)
        .reduce(|acc, bounds| acc.union(&bounds))
}

/// Drops paths whose box misses the other operand entirely when the
/// operation makes them irrelevant. Returns how many were dropped.
fn cull_isolated(paths: &mut Vec<PreparedPath>, clip_type: ClipType) -> usize {
    let subject_bounds = total_bounds(paths, PolyType::Subject);
    let clip_bounds = total_bounds(paths, PolyType::Clip);
    let before = paths.len();

    let overlaps = |bounds: &BoundRect, other: Option<BoundRect>| {
        other.map_or(false, |other| bounds.overlaps(&other))
    };

    match clip_type {
        ClipType::Intersection => paths.retain(|path| match path.poly_type {
            PolyType::Subject => overlaps(&path.bounds, clip_bounds),
            PolyType::Clip => overlaps(&path.bounds, subject_bounds),
        }),
        ClipType::Difference => paths.retain(|path| {
            path.poly_type == PolyType::Subject || overlaps(&path.bounds, subject_bounds)
        }),
        ClipType::Union | ClipType::Xor => {}
    }

    before - paths.len()
}
