use log::debug;

use crate::geometry::bound_rect::BoundRect;
use crate::geometry::point::{Path, PathSet};
use crate::error::ClipError;
use crate::geometry::polygon::{area2, midpoint_in_polygon, point_in_polygon, rotate_to_lowest, PointInPolygon};
use crate::utils::math::cycle_index;

/// An output loop together with its place in the nesting.
#[derive(Debug, Clone, PartialEq)]
pub struct OutRec {
    pub idx: usize,
    pub pts: Path,
    /// Twice the signed area.
    pub area2: i128,
    pub bounds: BoundRect,
    pub is_hole: bool,
    pub depth: usize,
    /// Smallest loop enclosing this one.
    pub first_left: Option<usize>,
}

impl OutRec {
    pub fn new(idx: usize, pts: Path, area2: i128) -> Option<Self> {
        let bounds = BoundRect::from_path(&pts)?;

        Some(Self {
            idx,
            pts,
            area2,
            bounds,
            is_hole: false,
            depth: 0,
            first_left: None,
        })
    }

    /// Whether `other` lies inside this loop. Loops never cross, so one
    /// point of `other` off this boundary decides.
    pub fn contains(&self, other: &OutRec) -> bool {
        if !self.bounds.contains(&other.bounds) {
            return false;
        }

        for point in &other.pts {
            match point_in_polygon(point, &self.pts) {
                PointInPolygon::Inside => return true,
                PointInPolygon::Outside => return false,
                PointInPolygon::OnBoundary => {}
            }
        }

        let point_count = other.pts.len();
        for i in 0..point_count {
            let next = &other.pts[cycle_index(i, point_count, 1)];
            match midpoint_in_polygon(&other.pts[i], next, &self.pts) {
                PointInPolygon::Inside => return true,
                PointInPolygon::Outside => return false,
                PointInPolygon::OnBoundary => {}
            }
        }

        false
    }

    /// Outer loops run counter-clockwise and holes clockwise, or the other
    /// way round with `reverse_solution`.
    fn fix_orientation(&mut self, reverse_solution: bool) {
        let want_positive = self.is_hole == reverse_solution;
        if (self.area2 > 0) != want_positive {
            debug!(
                "reversing output loop #{} (hole: {}, area2: {})",
                self.idx, self.is_hole, self.area2
            );
            self.pts.reverse();
            rotate_to_lowest(&mut self.pts);
            self.area2 = -self.area2;
        }
    }
}

/// Pairs every loop with its exact doubled area.
pub fn measure_loops(loops: PathSet) -> Result<Vec<(Path, i128)>, ClipError> {
    loops
        .into_iter()
        .map(|pts| area2(&pts).map(|area2| (pts, area2)))
        .collect()
}

/// Nests closed, mutually non-crossing loops and classifies them by depth.
pub fn build_out_recs(loops: Vec<(Path, i128)>, reverse_solution: bool) -> Vec<OutRec> {
    let mut recs: Vec<OutRec> = loops
        .into_iter()
        .enumerate()
        .filter_map(|(idx, (pts, area2))| OutRec::new(idx, pts, area2))
        .collect();

    let mut order: Vec<usize> = (0..recs.len()).collect();
    order.sort_by(|&a, &b| {
        recs[b]
            .area2
            .abs()
            .cmp(&recs[a].area2.abs())
            .then(a.cmp(&b))
    });

    for (n, &i) in order.iter().enumerate() {
        let parent = order[..n]
            .iter()
            .rev()
            .copied()
            .find(|&j| recs[j].contains(&recs[i]));
        let depth = parent.map_or(0, |j| recs[j].depth + 1);

        let rec = &mut recs[i];
        rec.first_left = parent;
        rec.depth = depth;
        rec.is_hole = depth % 2 == 1;
    }

    for rec in recs.iter_mut() {
        rec.fix_orientation(reverse_solution);
    }

    recs
}
