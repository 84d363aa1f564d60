use crate::clipper::out_rec::{build_out_recs, measure_loops, OutRec};
use crate::error::ClipError;
use crate::geometry::point::{Path, PathSet};

use super::{path, square};

fn reversed(points: Path) -> Path {
    points.into_iter().rev().collect()
}

fn measured(loops: PathSet) -> Vec<(Path, i128)> {
    measure_loops(loops).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hole_is_nested_and_reoriented() {
        // Inner loop comes in counter-clockwise.
        let recs = build_out_recs(measured(vec![square(0, 0, 10), square(2, 2, 6)]), false);

        assert_eq!(recs.len(), 2);
        assert!(!recs[0].is_hole);
        assert_eq!(recs[0].first_left, None);
        assert_eq!(recs[0].area2, 200);

        assert!(recs[1].is_hole);
        assert_eq!(recs[1].first_left, Some(0));
        assert_eq!(recs[1].depth, 1);
        assert_eq!(recs[1].area2, -72);
        assert_eq!(recs[1].pts, path(&[(2, 2), (2, 8), (8, 8), (8, 2)]));
    }

    #[test]
    fn test_nesting_picks_smallest_container() {
        let loops = vec![square(10, 10, 10), square(0, 0, 30), reversed(square(5, 5, 20))];
        let recs = build_out_recs(measured(loops), false);

        assert_eq!(recs[1].depth, 0);
        assert_eq!(recs[2].first_left, Some(1));
        assert_eq!(recs[2].depth, 1);
        assert_eq!(recs[0].first_left, Some(2));
        assert_eq!(recs[0].depth, 2);
        assert!(!recs[0].is_hole);
        assert!(recs[0].area2 > 0);
    }

    #[test]
    fn test_reverse_solution() {
        let recs = build_out_recs(measured(vec![square(0, 0, 10), square(2, 2, 6)]), true);
        assert!(recs[0].area2 < 0);
        assert!(recs[1].area2 > 0);
    }

    #[test]
    fn test_contains_with_shared_boundary() {
        let outer = OutRec::new(0, square(0, 0, 10), 200).unwrap();
        let corner = OutRec::new(1, path(&[(0, 0), (5, 0), (0, 5)]), 25).unwrap();
        let apart = OutRec::new(2, square(10, 10, 5), 50).unwrap();

        assert!(outer.contains(&corner));
        assert!(!corner.contains(&outer));
        assert!(!outer.contains(&apart));
    }

    #[test]
    fn test_measure_loops_reports_area_overflow() {
        let far = i64::MAX;
        let loops = vec![square(0, 0, 4), path(&[(0, 0), (far, -far), (far, far), (-far, far)])];

        let error = measure_loops(loops).unwrap_err();
        assert!(matches!(error, ClipError::Overflow { .. }));
    }

    #[test]
    fn test_measure_loops_keeps_order() {
        let loops = measured(vec![square(0, 0, 4), reversed(square(0, 0, 2))]);
        assert_eq!(loops[0].1, 32);
        assert_eq!(loops[1].1, -8);
        assert_eq!(loops[1].0, reversed(square(0, 0, 2)));
    }
}
