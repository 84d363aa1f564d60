use std::cmp::Ordering;

use crate::clipper::enums::{PolyType, Winding};
use crate::geometry::point::{Path, Point};
use crate::utils::math::cycle_index;

/// One straight edge, stored with `bot < top` in sweep order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TEdge {
    pub bot: Point,
    pub top: Point,
    /// Winding change of each operand when the edge is crossed. For a
    /// non-horizontal edge the winding right of it is `left - wind_delta`;
    /// for a horizontal edge the winding above it is `below + wind_delta`.
    pub wind_delta: Winding,
    /// Windings left and right of the edge (below and above for horizontals),
    /// filled in by the sweep.
    pub side_winds: Option<(Winding, Winding)>,
}

impl TEdge {
    /// Builds the edge for segment `a -> b`, or `None` if it is a single point.
    pub fn from_segment(a: Point, b: Point, wind_delta: Winding) -> Option<Self> {
        match a.cmp(&b) {
            Ordering::Less => Some(Self::new(a, b, wind_delta)),
            Ordering::Greater => Some(Self::new(b, a, -wind_delta)),
            Ordering::Equal => None,
        }
    }

    fn new(bot: Point, top: Point, wind_delta: Winding) -> Self {
        Self {
            bot,
            top,
            wind_delta,
            side_winds: None,
        }
    }

    #[inline(always)]
    pub fn is_horizontal(&self) -> bool {
        self.bot.y == self.top.y
    }

    #[inline(always)]
    pub fn min_x(&self) -> i64 {
        self.bot.x.min(self.top.x)
    }

    #[inline(always)]
    pub fn max_x(&self) -> i64 {
        self.bot.x.max(self.top.x)
    }

    /// Whether `point` lies on the segment, endpoints excluded.
    pub fn has_interior_point(&self, point: &Point) -> bool {
        *point != self.bot
            && *point != self.top
            && point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.bot.y
            && point.y <= self.top.y
            && Point::slopes_equal(&self.bot, &self.top, point)
    }

    /// Whether the edge's supporting line meets the scanline of `point` at or
    /// left of it. Only meaningful for non-horizontal edges.
    #[inline(always)]
    pub fn passes_left_of(&self, point: &Point) -> bool {
        Point::cross_product(&self.bot, &self.top, point) <= 0
    }
}

/// Edges of one closed path, wound `+1` for edges running up the sweep order.
pub fn create_path_edges(path: &Path, poly_type: PolyType) -> Vec<TEdge> {
    let point_count = path.len();
    let mut result = Vec::with_capacity(point_count);

    for i in 0..point_count {
        let next = path[cycle_index(i, point_count, 1)];
        if let Some(edge) = TEdge::from_segment(path[i], next, Winding::unit(poly_type, 1)) {
            result.push(edge);
        }
    }

    result
}

/// Left-to-right order of two non-horizontal edges that share a scanbeam and
/// do not cross. Edges on the same line with the same bottom compare equal.
pub fn edge_order(ea: &TEdge, eb: &TEdge) -> Ordering {
    if ea.bot.y <= eb.bot.y {
        let mut orientation = Point::cross_product(&ea.bot, &ea.top, &eb.bot);
        if orientation == 0 {
            orientation = Point::cross_product(&ea.bot, &ea.top, &eb.top);
        }

        orientation.cmp(&0)
    } else {
        let mut orientation = Point::cross_product(&eb.bot, &eb.top, &ea.bot);
        if orientation == 0 {
            orientation = Point::cross_product(&eb.bot, &eb.top, &ea.top);
        }

        0i128.cmp(&orientation)
    }
}
