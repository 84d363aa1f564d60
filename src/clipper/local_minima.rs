use crate::clipper::t_edge::TEdge;

/// Schedule of edges entering the sweep, grouped by the scanline of their
/// bottom vertex.
#[derive(Debug, Default)]
pub struct LocalMinima {
    edges: Vec<usize>,
    horizontals: Vec<usize>,
    edge_cursor: usize,
    horizontal_cursor: usize,
}

impl LocalMinima {
    pub fn new(edges: &[TEdge]) -> Self {
        let (mut horizontals, mut others): (Vec<usize>, Vec<usize>) =
            (0..edges.len()).partition(|&i| edges[i].is_horizontal());

        others.sort_by(|&a, &b| edges[a].bot.cmp(&edges[b].bot).then(a.cmp(&b)));
        horizontals.sort_by(|&a, &b| edges[a].bot.cmp(&edges[b].bot).then(a.cmp(&b)));

        Self {
            edges: others,
            horizontals,
            edge_cursor: 0,
            horizontal_cursor: 0,
        }
    }

    /// Non-horizontal edges whose bottom lies on scanline `y`, left to right.
    pub fn pop_edges(&mut self, y: i64, edges: &[TEdge]) -> &[usize] {
        let start = self.edge_cursor;
        while self.edge_cursor < self.edges.len() && edges[self.edges[self.edge_cursor]].bot.y == y {
            self.edge_cursor += 1;
        }

        &self.edges[start..self.edge_cursor]
    }

    /// Horizontal edges lying on scanline `y`, left to right.
    pub fn pop_horizontals(&mut self, y: i64, edges: &[TEdge]) -> &[usize] {
        let start = self.horizontal_cursor;
        while self.horizontal_cursor < self.horizontals.len()
            && edges[self.horizontals[self.horizontal_cursor]].bot.y == y
        {
            self.horizontal_cursor += 1;
        }

        &self.horizontals[start..self.horizontal_cursor]
    }

    pub fn is_empty(&self) -> bool {
        self.edge_cursor >= self.edges.len() && self.horizontal_cursor >= self.horizontals.len()
    }
}
