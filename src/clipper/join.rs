use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use crate::clipper::enums::Phase;
use crate::error::ClipError;
use crate::geometry::point::{Path, PathSet, Point};
use crate::geometry::polygon::{area2, clean_polygon, rotate_to_lowest};

/// A boundary edge of the result, directed so the result lies on its left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutEdge {
    pub from: Point,
    pub to: Point,
}

impl OutEdge {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

type Vector = (i128, i128);

#[inline(always)]
fn vector(from: &Point, to: &Point) -> Vector {
    (to.x as i128 - from.x as i128, to.y as i128 - from.y as i128)
}

#[inline(always)]
fn cross(a: Vector, b: Vector) -> i128 {
    a.0 * b.1 - a.1 * b.0
}

/// Half-turn bucket of `d` measured clockwise from `r`: inside the first
/// half turn, exactly opposite, inside the second half turn, same direction.
fn turn_class(r: Vector, d: Vector) -> u8 {
    let side = cross(r, d);
    let dot = r.0 * d.0 + r.1 * d.1;

    if side < 0 {
        0
    } else if side == 0 && dot < 0 {
        1
    } else if side > 0 {
        2
    } else {
        3
    }
}

/// Orders outgoing directions by the clockwise angle from `r`.
fn turn_order(r: Vector, d1: Vector, d2: Vector) -> Ordering {
    turn_class(r, d1)
        .cmp(&turn_class(r, d2))
        .then_with(|| cross(d1, d2).cmp(&0))
}

pub struct Join<'a> {
    edges: &'a [OutEdge],
    outgoing: BTreeMap<Point, Vec<usize>>,
    used: Vec<bool>,
}

impl<'a> Join<'a> {
    pub fn new(edges: &'a [OutEdge]) -> Self {
        let mut outgoing: BTreeMap<Point, Vec<usize>> = BTreeMap::new();
        for (index, edge) in edges.iter().enumerate() {
            outgoing.entry(edge.from).or_default().push(index);
        }

        Self {
            edges,
            outgoing,
            used: vec![false; edges.len()],
        }
    }

    /// Links every edge into closed simple paths, lowest start first.
    pub fn execute(mut self, preserve_collinear: bool) -> Result<PathSet, ClipError> {
        let starts: Vec<usize> = self.outgoing.values().flatten().copied().collect();
        let mut result = Vec::new();

        for first in starts {
            if self.used[first] {
                continue;
            }

            let trace = self.trace_loop(first)?;
            for part in split_at_repeats(trace) {
                if let Some(path) = finish_loop(part, preserve_collinear) {
                    result.push(path);
                }
            }
        }

        Ok(result)
    }

    fn trace_loop(&mut self, first: usize) -> Result<Path, ClipError> {
        let start = self.edges[first].from;
        let mut points = vec![start];
        let mut current = first;
        self.used[first] = true;

        loop {
            let edge = self.edges[current];
            if edge.to == start {
                return Ok(points);
            }
            points.push(edge.to);

            let back = vector(&edge.to, &edge.from);
            let next = self
                .outgoing
                .get(&edge.to)
                .into_iter()
                .flatten()
                .copied()
                .filter(|&index| !self.used[index])
                .min_by(|&a, &b| {
                    turn_order(
                        back,
                        vector(&edge.to, &self.edges[a].to),
                        vector(&edge.to, &self.edges[b].to),
                    )
                })
                .ok_or_else(|| {
                    ClipError::invariant(
                        Phase::Sweeping,
                        format!("output boundary does not close at {}", edge.to),
                    )
                })?;

            self.used[next] = true;
            current = next;
        }
    }
}

/// Cuts a closed vertex sequence into loops that visit each vertex once.
fn split_at_repeats(points: Path) -> Vec<Path> {
    let mut stack: Path = Vec::with_capacity(points.len());
    let mut seen: HashMap<Point, usize> = HashMap::new();
    let mut result = Vec::new();

    for point in points {
        match seen.get(&point) {
            Some(&position) => {
                let part: Path = stack.drain(position..).collect();
                for visited in &part[1..] {
                    seen.remove(visited);
                }
                result.push(part);
                stack.push(point);
            }
            None => {
                seen.insert(point, stack.len());
                stack.push(point);
            }
        }
    }

    result.push(stack);
    result
}

fn finish_loop(part: Path, preserve_collinear: bool) -> Option<Path> {
    let mut path = if preserve_collinear {
        part
    } else {
        clean_polygon(&part, 0.0)
    };

    if path.len() < 3 || matches!(area2(&path), Ok(0)) {
        return None;
    }

    rotate_to_lowest(&mut path);
    Some(path)
}
