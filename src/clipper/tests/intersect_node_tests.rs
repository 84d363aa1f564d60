use crate::clipper::enums::Winding;
use crate::clipper::intersect_node::{find_intersections, is_self_intersecting, merge_coincident, node_edges};
use crate::clipper::t_edge::TEdge;
use crate::geometry::point::Point;

use super::{path, square};

fn edge(x1: i64, y1: i64, x2: i64, y2: i64, wind: Winding) -> TEdge {
    TEdge::from_segment(Point::new(x1, y1), Point::new(x2, y2), wind).unwrap()
}

fn endpoints(edges: &[TEdge]) -> Vec<(Point, Point)> {
    edges.iter().map(|edge| (edge.bot, edge.top)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proper_crossing_is_split() {
        let subject = Winding::new(1, 0);
        let edges = vec![
            edge(0, 0, 10, 10, subject),
            edge(10, 0, 0, 10, subject),
        ];

        let nodes = find_intersections(&edges);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].pt, Point::new(5, 5));

        let noded = node_edges(edges).unwrap();
        assert_eq!(noded.edges.len(), 4);
        assert_eq!(noded.passes, 2);
        assert_eq!(noded.intersections, 1);
        assert!(noded
            .edges
            .iter()
            .all(|edge| edge.bot == Point::new(5, 5) || edge.top == Point::new(5, 5)));
    }

    #[test]
    fn test_touching_vertex_splits_edge() {
        let subject = Winding::new(1, 0);
        let edges = vec![edge(0, 0, 10, 0, subject), edge(5, 0, 5, 10, subject)];

        let noded = node_edges(edges).unwrap();
        assert_eq!(
            endpoints(&noded.edges),
            vec![
                (Point::new(0, 0), Point::new(5, 0)),
                (Point::new(5, 0), Point::new(10, 0)),
                (Point::new(5, 0), Point::new(5, 10)),
            ]
        );
    }

    #[test]
    fn test_overlapping_collinear_edges_merge() {
        let subject = Winding::new(1, 0);
        let edges = vec![edge(0, 0, 10, 0, subject), edge(5, 0, 15, 0, subject)];

        let noded = node_edges(edges).unwrap();
        assert_eq!(
            endpoints(&noded.edges),
            vec![
                (Point::new(0, 0), Point::new(5, 0)),
                (Point::new(5, 0), Point::new(10, 0)),
                (Point::new(10, 0), Point::new(15, 0)),
            ]
        );
        assert_eq!(noded.edges[1].wind_delta, Winding::new(2, 0));
    }

    #[test]
    fn test_opposite_coincident_edges_cancel() {
        let edges = vec![
            edge(0, 0, 10, 0, Winding::new(1, 0)),
            edge(10, 0, 0, 0, Winding::new(1, 0)),
        ];
        assert!(merge_coincident(edges).is_empty());
    }

    #[test]
    fn test_coincident_edges_of_both_operands_keep_both_deltas() {
        let edges = vec![
            edge(0, 0, 0, 10, Winding::new(1, 0)),
            edge(0, 10, 0, 0, Winding::new(0, 1)),
        ];
        let merged = merge_coincident(edges);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].wind_delta, Winding::new(1, -1));
    }

    #[test]
    fn test_is_self_intersecting() {
        assert!(is_self_intersecting(&path(&[(0, 0), (10, 10), (10, 0), (0, 10)])));
        assert!(!is_self_intersecting(&square(0, 0, 10)));
        assert!(!is_self_intersecting(&path(&[(0, 0), (10, 0), (5, 8)])));
        // Vertex (5, 0) visited twice.
        assert!(is_self_intersecting(&path(&[
            (0, 0),
            (5, 0),
            (5, 5),
            (10, 5),
            (10, 0),
            (5, 0),
            (5, -5),
            (0, -5)
        ])));
    }
}
