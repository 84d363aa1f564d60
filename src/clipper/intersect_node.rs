use std::collections::BTreeMap;

use log::trace;
use num_traits::Zero;

use crate::clipper::enums::Winding;
use crate::clipper::t_edge::TEdge;
use crate::constants::MAX_NODING_PASSES;
use crate::error::ClipError;
use crate::geometry::point::Point;
use crate::utils::math::cycle_index;
use crate::utils::round::ClipperRound;

/// Point where two edges meet, on the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectNode {
    pub edge1: usize,
    pub edge2: usize,
    pub pt: Point,
}

/// Result of noding a set of edges.
#[derive(Debug, Default)]
pub struct NodedEdges {
    pub edges: Vec<TEdge>,
    pub passes: usize,
    pub intersections: usize,
}

/// Splits edges until no two of them cross or touch away from shared
/// endpoints, merging coincident edges by summing their winding deltas.
pub fn node_edges(edges: Vec<TEdge>) -> Result<NodedEdges, ClipError> {
    let mut edges = merge_coincident(edges);
    let mut intersections = 0;

    for pass in 1..=MAX_NODING_PASSES {
        let nodes = find_intersections(&edges);
        if nodes.is_empty() {
            trace!("noding converged after {} pass(es), {} edges", pass, edges.len());
            return Ok(NodedEdges {
                edges,
                passes: pass,
                intersections,
            });
        }

        intersections += nodes.len();
        edges = merge_coincident(split_edges(&edges, &nodes));
    }

    let (x, y) = edges
        .first()
        .map(|edge| (edge.bot.x, edge.bot.y))
        .unwrap_or((0, 0));

    Err(ClipError::ambiguous(
        x,
        y,
        format!("edge intersections did not settle after {MAX_NODING_PASSES} passes"),
    ))
}

/// Whether a closed path crosses or touches itself anywhere other than at
/// the shared vertex of consecutive edges.
pub fn is_self_intersecting(path: &[Point]) -> bool {
    let point_count = path.len();
    let edges: Vec<(usize, TEdge)> = (0..point_count)
        .filter_map(|i| {
            let next = path[cycle_index(i, point_count, 1)];
            TEdge::from_segment(path[i], next, Winding::zero()).map(|edge| (i, edge))
        })
        .collect();

    let order = sorted_by_min_x(edges.iter().map(|(_, edge)| edge));

    for (n, &i) in order.iter().enumerate() {
        let (index_i, edge_i) = &edges[i];
        for &j in &order[n + 1..] {
            let (index_j, edge_j) = &edges[j];
            if edge_j.min_x() > edge_i.max_x() {
                break;
            }
            if !y_overlaps(edge_i, edge_j) {
                continue;
            }

            let adjacent = cycle_index(*index_i, point_count, 1) == *index_j
                || cycle_index(*index_j, point_count, 1) == *index_i;

            if adjacent {
                if overlaps_collinear(edge_i, edge_j) {
                    return true;
                }
            } else if segments_touch(edge_i, edge_j) {
                return true;
            }
        }
    }

    false
}

fn sorted_by_min_x<'a>(edges: impl Iterator<Item = &'a TEdge>) -> Vec<usize> {
    let keys: Vec<i64> = edges.map(TEdge::min_x).collect();
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by_key(|&i| keys[i]);
    order
}

#[inline(always)]
fn y_overlaps(e1: &TEdge, e2: &TEdge) -> bool {
    e1.bot.y <= e2.top.y && e2.bot.y <= e1.top.y
}

/// Collinear edges sharing more than one point.
fn overlaps_collinear(e1: &TEdge, e2: &TEdge) -> bool {
    Point::slopes_equal(&e1.bot, &e1.top, &e2.bot)
        && Point::slopes_equal(&e1.bot, &e1.top, &e2.top)
        && (e1.has_interior_point(&e2.bot)
            || e1.has_interior_point(&e2.top)
            || e2.has_interior_point(&e1.bot)
            || e2.has_interior_point(&e1.top)
            || (e1.bot == e2.bot && e1.top == e2.top))
}

fn segments_touch(e1: &TEdge, e2: &TEdge) -> bool {
    if e1.bot == e2.bot || e1.bot == e2.top || e1.top == e2.bot || e1.top == e2.top {
        return true;
    }

    proper_crossing(e1, e2).is_some()
        || e1.has_interior_point(&e2.bot)
        || e1.has_interior_point(&e2.top)
        || e2.has_interior_point(&e1.bot)
        || e2.has_interior_point(&e1.top)
}

/// Orientations `(d1, d2, d3, d4)` when the interiors of both edges cross
/// at a single point.
fn proper_crossing(e1: &TEdge, e2: &TEdge) -> Option<(i128, i128)> {
    let d1 = Point::cross_product(&e1.bot, &e1.top, &e2.bot);
    let d2 = Point::cross_product(&e1.bot, &e1.top, &e2.top);
    let d3 = Point::cross_product(&e2.bot, &e2.top, &e1.bot);
    let d4 = Point::cross_product(&e2.bot, &e2.top, &e1.top);

    let opposite = |a: i128, b: i128| (a > 0 && b < 0) || (a < 0 && b > 0);

    if opposite(d1, d2) && opposite(d3, d4) {
        Some((d3, d4))
    } else {
        None
    }
}

/// Rounded crossing point, clamped into the common bounding box.
fn crossing_point(e1: &TEdge, e2: &TEdge, d3: i128, d4: i128) -> Point {
    let t = d3 as f64 / (d3 as f64 - d4 as f64);
    let dx = e1.top.x as f64 - e1.bot.x as f64;
    let dy = e1.top.y as f64 - e1.bot.y as f64;

    let x = (e1.bot.x as f64 + dx * t).clipper_rounded();
    let y = (e1.bot.y as f64 + dy * t).clipper_rounded();

    let left = e1.min_x().max(e2.min_x());
    let right = e1.max_x().min(e2.max_x());
    let bottom = e1.bot.y.max(e2.bot.y);
    let top = e1.top.y.min(e2.top.y);

    Point::new(
        (x as i64).clamp(left, right.max(left)),
        (y as i64).clamp(bottom, top.max(bottom)),
    )
}

/// All points where an edge must be split.
pub fn find_intersections(edges: &[TEdge]) -> Vec<IntersectNode> {
    let order = sorted_by_min_x(edges.iter());
    let mut result = Vec::new();

    for (n, &i) in order.iter().enumerate() {
        let e1 = &edges[i];
        for &j in &order[n + 1..] {
            let e2 = &edges[j];
            if e2.min_x() > e1.max_x() {
                break;
            }
            if !y_overlaps(e1, e2) {
                continue;
            }

            collect_pair(i, e1, j, e2, &mut result);
        }
    }

    result
}

fn collect_pair(i: usize, e1: &TEdge, j: usize, e2: &TEdge, result: &mut Vec<IntersectNode>) {
    if let Some((d3, d4)) = proper_crossing(e1, e2) {
        let pt = crossing_point(e1, e2, d3, d4);
        result.push(IntersectNode {
            edge1: i,
            edge2: j,
            pt,
        });
        return;
    }

    for pt in [e2.bot, e2.top] {
        if e1.has_interior_point(&pt) {
            result.push(IntersectNode {
                edge1: i,
                edge2: j,
                pt,
            });
        }
    }

    for pt in [e1.bot, e1.top] {
        if e2.has_interior_point(&pt) {
            result.push(IntersectNode {
                edge1: j,
                edge2: i,
                pt,
            });
        }
    }
}

fn split_edges(edges: &[TEdge], nodes: &[IntersectNode]) -> Vec<TEdge> {
    let mut splits: Vec<Vec<Point>> = vec![Vec::new(); edges.len()];

    for node in nodes {
        // A touching vertex splits only the edge it lies on.
        let touches = edges[node.edge2].bot == node.pt || edges[node.edge2].top == node.pt;
        splits[node.edge1].push(node.pt);
        if !touches {
            splits[node.edge2].push(node.pt);
        }
    }

    let mut result = Vec::with_capacity(edges.len() + nodes.len() * 2);

    for (edge, points) in edges.iter().zip(splits.iter_mut()) {
        if points.is_empty() {
            result.push(edge.clone());
            continue;
        }

        points.sort_by_key(|pt| (Point::dot_product(&edge.bot, &edge.top, pt), *pt));
        points.dedup();

        let mut from = edge.bot;
        for &pt in points.iter().chain(std::iter::once(&edge.top)) {
            if let Some(part) = TEdge::from_segment(from, pt, edge.wind_delta) {
                result.push(part);
            }
            from = pt;
        }
    }

    result
}

/// Collapses edges with equal endpoints into one, summing their deltas.
/// Edges whose summed delta is zero separate nothing and are dropped.
pub fn merge_coincident(edges: Vec<TEdge>) -> Vec<TEdge> {
    let mut merged: BTreeMap<(Point, Point), Winding> = BTreeMap::new();

    for edge in edges {
        *merged.entry((edge.bot, edge.top)).or_insert_with(Winding::zero) += edge.wind_delta;
    }

    merged
        .into_iter()
        .filter_map(|((bot, top), wind_delta)| {
            if wind_delta.is_zero() {
                None
            } else {
                TEdge::from_segment(bot, top, wind_delta)
            }
        })
        .collect()
}
