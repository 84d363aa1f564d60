use crate::clip_config::{ClipConfig, DegeneratePolicy};
use crate::clipper::clipper::{ClipStats, Clipper};
use crate::clipper::enums::{ClipType, Phase, PolyFillType, PolyType};
use crate::clipper::poly_tree::PolyTree;
use crate::error::{ClipError, InputDefect};
use crate::geometry::point::{Path, PathSet};
use crate::geometry::polygon::area2;

use super::{path, square};

fn two_squares() -> Clipper {
    let mut clipper = Clipper::new();
    clipper.add_path(&square(0, 0, 10), PolyType::Subject);
    clipper.add_path(&square(5, 5, 10), PolyType::Clip);
    clipper
}

fn run(clipper: &Clipper, clip_type: ClipType) -> PolyTree {
    clipper
        .execute(clip_type, PolyFillType::NonZero, PolyFillType::NonZero)
        .unwrap()
}

fn total_area2(paths: &PathSet) -> i128 {
    paths.iter().map(|path| area2(path).unwrap()).sum()
}

fn framed_hole() -> Clipper {
    let mut hole: Path = square(10, 10, 10);
    hole.reverse();

    let mut clipper = Clipper::new();
    clipper.add_paths(&[square(0, 0, 30), hole], PolyType::Subject);
    clipper.add_path(&square(10, 10, 10), PolyType::Clip);
    clipper
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection() {
        let tree = run(&two_squares(), ClipType::Intersection);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node(0).contour(), &square(5, 5, 5));
        assert!(!tree.node(0).is_hole());
    }

    #[test]
    fn test_union() {
        let tree = run(&two_squares(), ClipType::Union);
        assert_eq!(tree.len(), 1);
        assert_eq!(
            tree.node(0).contour(),
            &path(&[(0, 0), (10, 0), (10, 5), (15, 5), (15, 15), (5, 15), (5, 10), (0, 10)])
        );
    }

    #[test]
    fn test_difference() {
        let tree = run(&two_squares(), ClipType::Difference);
        assert_eq!(tree.len(), 1);
        assert_eq!(
            tree.node(0).contour(),
            &path(&[(0, 0), (10, 0), (10, 5), (5, 5), (5, 10), (0, 10)])
        );
    }

    #[test]
    fn test_xor() {
        let tree = run(&two_squares(), ClipType::Xor);
        assert_eq!(tree.roots().count(), 2);

        let mut paths = tree.into_paths();
        paths.sort();
        assert_eq!(
            paths,
            vec![
                path(&[(0, 0), (10, 0), (10, 5), (5, 5), (5, 10), (0, 10)]),
                path(&[(10, 5), (15, 5), (15, 15), (5, 15), (5, 10), (10, 10)]),
            ]
        );
        assert_eq!(total_area2(&paths), 300);
    }

    #[test]
    fn test_intersection_and_difference_partition_subject() {
        let clipper = two_squares();
        let inside = run(&clipper, ClipType::Intersection).into_paths();
        let outside = run(&clipper, ClipType::Difference).into_paths();
        assert_eq!(total_area2(&inside) + total_area2(&outside), 200);
    }

    #[test]
    fn test_difference_keeps_hole() {
        let tree = run(&framed_hole(), ClipType::Difference);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.node(0).contour(), &square(0, 0, 30));
        assert!(tree.node(1).is_hole());
        assert_eq!(tree.node(1).parent(), Some(0));
        assert_eq!(
            tree.node(1).contour(),
            &path(&[(10, 10), (10, 20), (20, 20), (20, 10)])
        );
    }

    #[test]
    fn test_filling_hole() {
        let clipper = framed_hole();

        for clip_type in [ClipType::Union, ClipType::Xor] {
            let tree = run(&clipper, clip_type);
            assert_eq!(tree.len(), 1, "{:?}", clip_type);
            assert_eq!(tree.node(0).contour(), &square(0, 0, 30));
        }

        assert!(run(&clipper, ClipType::Intersection).is_empty());
    }

    #[test]
    fn test_union_corner_touching() {
        let mut clipper = Clipper::new();
        clipper.add_paths(&[square(0, 0, 10), square(10, 10, 10)], PolyType::Subject);

        let tree = run(&clipper, ClipType::Union);
        assert_eq!(tree.roots().count(), 2);
        assert!(tree.nodes().iter().all(|node| node.contour().len() == 4));
    }

    #[test]
    fn test_union_shared_edge() {
        let mut clipper = Clipper::new();
        clipper.add_path(&square(0, 0, 10), PolyType::Subject);
        clipper.add_path(&square(10, 0, 10), PolyType::Clip);

        let tree = run(&clipper, ClipType::Union);
        assert_eq!(tree.len(), 1);
        assert_eq!(
            tree.node(0).contour(),
            &path(&[(0, 0), (20, 0), (20, 10), (0, 10)])
        );
    }

    #[test]
    fn test_fill_rules_on_nested_squares() {
        let mut clipper = Clipper::new();
        clipper.add_paths(&[square(0, 0, 30), square(10, 10, 10)], PolyType::Subject);

        let even_odd = clipper
            .execute(ClipType::Union, PolyFillType::EvenOdd, PolyFillType::EvenOdd)
            .unwrap();
        assert_eq!(even_odd.len(), 2);
        assert!(even_odd.node(1).is_hole());
        assert_eq!(even_odd.depth(1), 1);

        let non_zero = run(&clipper, ClipType::Union);
        assert_eq!(non_zero.len(), 1);
        assert_eq!(non_zero.node(0).contour(), &square(0, 0, 30));
    }

    #[test]
    fn test_reverse_solution() {
        let mut clipper = Clipper::with_config(ClipConfig::default().with_reverse_solution(true));
        clipper.add_path(&square(0, 0, 10), PolyType::Subject);
        clipper.add_path(&square(5, 5, 10), PolyType::Clip);

        let tree = run(&clipper, ClipType::Intersection);
        assert_eq!(area2(tree.node(0).contour()).unwrap(), -50);
    }

    #[test]
    fn test_invalid_input_fails_operation() {
        let mut clipper = Clipper::new();
        clipper.add_path(&path(&[(0, 0), (10, 10)]), PolyType::Subject);

        let mut operation = clipper.operation(ClipType::Union, PolyFillType::NonZero, PolyFillType::NonZero);
        let error = operation.run().unwrap_err();

        assert_eq!(
            error,
            ClipError::InvalidInput {
                operand: PolyType::Subject,
                path: 0,
                defect: InputDefect::TooFewPoints { count: 2 },
            }
        );
        assert_eq!(operation.phase(), Phase::Failed);
    }

    #[test]
    fn test_operation_reaches_done() {
        let clipper = two_squares();
        let mut operation = clipper.operation(ClipType::Union, PolyFillType::NonZero, PolyFillType::NonZero);
        assert_eq!(operation.phase(), Phase::Idle);
        operation.run().unwrap();
        assert_eq!(operation.phase(), Phase::Done);
    }

    #[test]
    fn test_drop_policy_skips_degenerate_paths() {
        let mut clipper = Clipper::with_config(
            ClipConfig::default().with_degenerate_policy(DegeneratePolicy::Drop),
        );
        clipper.add_path(&square(0, 0, 10), PolyType::Subject);
        clipper.add_path(&path(&[(0, 0), (5, 5), (10, 10)]), PolyType::Subject);

        let (tree, stats) = clipper
            .execute_with_stats(ClipType::Union, PolyFillType::NonZero, PolyFillType::NonZero)
            .unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(stats.input_paths, 2);
        assert_eq!(stats.dropped_paths, 1);
    }

    #[test]
    fn test_intersection_stats() {
        let (_, stats) = two_squares()
            .execute_with_stats(ClipType::Intersection, PolyFillType::NonZero, PolyFillType::NonZero)
            .unwrap();

        assert_eq!(
            stats,
            ClipStats {
                input_paths: 2,
                dropped_paths: 0,
                culled_paths: 0,
                self_intersecting_paths: 0,
                input_edges: 8,
                noded_edges: 12,
                noding_passes: 2,
                intersections: 2,
                scanlines: 4,
                output_edges: 4,
                contours: 1,
                holes: 0,
            }
        );
    }

    #[test]
    fn test_disjoint_intersection_is_culled() {
        let mut clipper = Clipper::new();
        clipper.add_path(&square(0, 0, 10), PolyType::Subject);
        clipper.add_path(&square(50, 50, 10), PolyType::Clip);

        let (tree, stats) = clipper
            .execute_with_stats(ClipType::Intersection, PolyFillType::NonZero, PolyFillType::NonZero)
            .unwrap();
        assert!(tree.is_empty());
        assert_eq!(stats.culled_paths, 2);
        assert_eq!(stats.input_edges, 0);
    }

    #[test]
    fn test_empty_input() {
        let tree = run(&Clipper::new(), ClipType::Union);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_execute_is_repeatable() {
        let clipper = two_squares();
        let first = clipper
            .execute_paths(ClipType::Xor, PolyFillType::NonZero, PolyFillType::NonZero)
            .unwrap();
        let second = clipper
            .execute_paths(ClipType::Xor, PolyFillType::NonZero, PolyFillType::NonZero)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clear_resets_input() {
        let mut clipper = two_squares();
        clipper.clear();
        assert!(run(&clipper, ClipType::Union).is_empty());
    }
}
