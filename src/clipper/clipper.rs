use log::{debug, trace};
use num_traits::Zero;

use crate::clip_config::ClipConfig;
use crate::clipper::clipper_base::ClipperBase;
use crate::clipper::enums::{ClipType, Phase, PolyFillType, PolyType, Winding};
use crate::clipper::intersect_node::node_edges;
use crate::clipper::join::{Join, OutEdge};
use crate::clipper::local_minima::LocalMinima;
use crate::clipper::out_rec::{build_out_recs, measure_loops};
use crate::clipper::poly_tree::PolyTree;
use crate::clipper::scanbeam::Scanbeam;
use crate::clipper::t_edge::{create_path_edges, edge_order, TEdge};
use crate::error::ClipError;
use crate::geometry::point::{Path, PathSet, Point};

/// Counters collected while one operation runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipStats {
    pub input_paths: usize,
    pub dropped_paths: usize,
    pub culled_paths: usize,
    pub self_intersecting_paths: usize,
    pub input_edges: usize,
    pub noded_edges: usize,
    pub noding_passes: usize,
    pub intersections: usize,
    pub scanlines: usize,
    pub output_edges: usize,
    pub contours: usize,
    pub holes: usize,
}

/// Active edges of the current scanbeam, left to right, with the winding
/// reached after crossing each of them.
#[derive(Debug)]
struct SweepState {
    active: Vec<usize>,
    prefix: Vec<Winding>,
}

impl SweepState {
    fn new() -> Self {
        Self {
            active: Vec::new(),
            prefix: vec![Winding::zero()],
        }
    }

    /// Winding just left of `point` on its scanline.
    fn winding_at(&self, edges: &[TEdge], point: &Point) -> Winding {
        let count = self
            .active
            .partition_point(|&index| edges[index].passes_left_of(point));
        self.prefix[count]
    }

    fn remove_ending(&mut self, edges: &[TEdge], y: i64) {
        self.active.retain(|&index| edges[index].top.y != y);
    }

    fn insert(&mut self, edges: &[TEdge], index: usize) -> Result<(), ClipError> {
        let edge = &edges[index];
        let position = self
            .active
            .partition_point(|&other| edge_order(&edges[other], edge).is_lt());

        if let Some(&other) = self.active.get(position) {
            if edge_order(&edges[other], edge).is_eq() {
                return Err(ClipError::ambiguous(
                    edge.bot.x,
                    edge.bot.y,
                    format!("edges {}-{} and {}-{} cannot be ordered", edge.bot, edge.top, edges[other].bot, edges[other].top),
                ));
            }
        }

        self.active.insert(position, index);
        Ok(())
    }

    fn verify_order(&self, edges: &[TEdge], y: i64) -> Result<(), ClipError> {
        for pair in self.active.windows(2) {
            if !edge_order(&edges[pair[0]], &edges[pair[1]]).is_lt() {
                return Err(ClipError::invariant(
                    Phase::Sweeping,
                    format!("active edges out of order at y = {y}"),
                ));
            }
        }
        Ok(())
    }

    fn accumulate(&mut self, edges: &[TEdge], y: i64) -> Result<(), ClipError> {
        self.prefix.clear();
        let mut wind = Winding::zero();
        self.prefix.push(wind);

        for &index in &self.active {
            wind = wind - edges[index].wind_delta;
            self.prefix.push(wind);
        }

        if !wind.is_zero() {
            return Err(ClipError::invariant(
                Phase::Sweeping,
                format!("winding {:?} does not close above y = {y}", wind),
            ));
        }
        Ok(())
    }
}

/// One run of the engine. Owns every intermediate structure; nothing
/// outlives the call to `run` except the returned tree.
pub struct ClipOperation<'a> {
    base: &'a ClipperBase,
    config: &'a ClipConfig,
    clip_type: ClipType,
    subject_fill: PolyFillType,
    clip_fill: PolyFillType,
    phase: Phase,
    stats: ClipStats,
}

impl<'a> ClipOperation<'a> {
    fn new(
        base: &'a ClipperBase,
        config: &'a ClipConfig,
        clip_type: ClipType,
        subject_fill: PolyFillType,
        clip_fill: PolyFillType,
    ) -> Self {
        Self {
            base,
            config,
            clip_type,
            subject_fill,
            clip_fill,
            phase: Phase::Idle,
            stats: ClipStats::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stats(&self) -> &ClipStats {
        &self.stats
    }

    pub fn run(&mut self) -> Result<PolyTree, ClipError> {
        self.advance(Phase::Preprocessing)?;
        let edges = match self.preprocess() {
            Ok(edges) => edges,
            Err(error) => return Err(self.fail(error)),
        };

        self.advance(Phase::Sweeping)?;
        let loops = match self.sweep(edges) {
            Ok(loops) => loops,
            Err(error) => return Err(self.fail(error)),
        };

        self.advance(Phase::Reconstructing)?;
        let tree = PolyTree::from_out_recs(build_out_recs(loops, self.config.reverse_solution));
        self.stats.contours = tree.len();
        self.stats.holes = tree.nodes().iter().filter(|node| node.is_hole()).count();

        self.advance(Phase::Done)?;
        debug!("{:?} finished: {:?}", self.clip_type, self.stats);

        Ok(tree)
    }

    fn advance(&mut self, next: Phase) -> Result<(), ClipError> {
        if !self.phase.can_advance_to(next) {
            return Err(ClipError::invariant(
                self.phase,
                format!("cannot move from {:?} to {:?}", self.phase, next),
            ));
        }

        trace!("{:?} -> {:?}", self.phase, next);
        self.phase = next;
        Ok(())
    }

    fn fail(&mut self, error: ClipError) -> ClipError {
        debug!("{:?} failed during {:?}: {}", self.clip_type, self.phase, error);
        if self.phase.can_advance_to(Phase::Failed) {
            self.phase = Phase::Failed;
        }
        error
    }

    fn preprocess(&mut self) -> Result<Vec<TEdge>, ClipError> {
        let prepared = self.base.prepare(self.config, self.clip_type)?;

        self.stats.input_paths =
            self.base.paths(PolyType::Subject).len() + self.base.paths(PolyType::Clip).len();
        self.stats.dropped_paths = prepared.dropped;
        self.stats.culled_paths = prepared.culled;
        self.stats.self_intersecting_paths = prepared
            .paths
            .iter()
            .filter(|path| path.is_self_intersecting)
            .count();

        let edges: Vec<TEdge> = prepared
            .paths
            .iter()
            .flat_map(|path| create_path_edges(&path.points, path.poly_type))
            .collect();
        self.stats.input_edges = edges.len();

        Ok(edges)
    }

    fn sweep(&mut self, edges: Vec<TEdge>) -> Result<Vec<(Path, i128)>, ClipError> {
        let noded = node_edges(edges)?;
        self.stats.noding_passes = noded.passes;
        self.stats.intersections = noded.intersections;
        self.stats.noded_edges = noded.edges.len();

        let mut edges = noded.edges;
        let out_edges = self.sweep_edges(&mut edges)?;
        self.stats.output_edges = out_edges.len();

        measure_loops(Join::new(&out_edges).execute(self.config.preserve_collinear)?)
    }

    fn sweep_edges(&mut self, edges: &mut [TEdge]) -> Result<Vec<OutEdge>, ClipError> {
        let mut scanbeam = Scanbeam::new();
        for edge in edges.iter() {
            scanbeam.insert(edge.bot.y);
            scanbeam.insert(edge.top.y);
        }

        let mut minima = LocalMinima::new(edges);
        let mut state = SweepState::new();
        let mut output = Vec::new();

        while let Some(y) = scanbeam.pop() {
            self.stats.scanlines += 1;

            let horizontals = minima.pop_horizontals(y, edges).to_vec();
            let below: Vec<Winding> = horizontals
                .iter()
                .map(|&index| state.winding_at(edges, &edges[index].bot))
                .collect();

            state.remove_ending(edges, y);
            for index in minima.pop_edges(y, edges).to_vec() {
                state.insert(edges, index)?;
            }
            state.verify_order(edges, y)?;
            state.accumulate(edges, y)?;

            for (position, &index) in state.active.iter().enumerate() {
                let sides = (state.prefix[position], state.prefix[position + 1]);
                self.classify(&mut edges[index], sides, &mut output)?;
            }

            for (&index, below) in horizontals.iter().zip(below) {
                let above = state.winding_at(edges, &edges[index].bot);
                if above - below != edges[index].wind_delta {
                    return Err(ClipError::invariant(
                        Phase::Sweeping,
                        format!(
                            "horizontal edge {}-{} separates {:?} from {:?}",
                            edges[index].bot, edges[index].top, below, above
                        ),
                    ));
                }
                self.classify(&mut edges[index], (below, above), &mut output)?;
            }
        }

        if !minima.is_empty() {
            return Err(ClipError::invariant(
                Phase::Sweeping,
                "edges left over after the last scanline",
            ));
        }

        Ok(output)
    }

    /// Records the windings on both sides of `edge` and emits it when the
    /// result fills exactly one side.
    fn classify(
        &self,
        edge: &mut TEdge,
        sides: (Winding, Winding),
        output: &mut Vec<OutEdge>,
    ) -> Result<(), ClipError> {
        match edge.side_winds {
            Some(known) if known != sides => {
                return Err(ClipError::invariant(
                    Phase::Sweeping,
                    format!("edge {}-{} changed side windings", edge.bot, edge.top),
                ));
            }
            Some(_) => return Ok(()),
            None => edge.side_winds = Some(sides),
        }

        let before = sides.0.is_filled(self.clip_type, self.subject_fill, self.clip_fill);
        let after = sides.1.is_filled(self.clip_type, self.subject_fill, self.clip_fill);
        if before == after {
            return Ok(());
        }

        let forward = if edge.is_horizontal() { after } else { before };
        output.push(if forward {
            OutEdge::new(edge.bot, edge.top)
        } else {
            OutEdge::new(edge.top, edge.bot)
        });

        Ok(())
    }
}

/// Boolean operations on subject and clip path sets.
#[derive(Debug, Clone, Default)]
pub struct Clipper {
    base: ClipperBase,
    config: ClipConfig,
}

impl Clipper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClipConfig) -> Self {
        Self {
            base: ClipperBase::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClipConfig {
        &self.config
    }

    pub fn add_path(&mut self, path: &[Point], poly_type: PolyType) {
        self.base.add_path(path, poly_type);
    }

    pub fn add_paths(&mut self, paths: &[Path], poly_type: PolyType) {
        self.base.add_paths(paths, poly_type);
    }

    pub fn clear(&mut self) {
        self.base.clear();
    }

    /// A fresh operation over the current input; `run` it once.
    pub fn operation(
        &self,
        clip_type: ClipType,
        subject_fill: PolyFillType,
        clip_fill: PolyFillType,
    ) -> ClipOperation<'_> {
        ClipOperation::new(&self.base, &self.config, clip_type, subject_fill, clip_fill)
    }

    pub fn execute(
        &self,
        clip_type: ClipType,
        subject_fill: PolyFillType,
        clip_fill: PolyFillType,
    ) -> Result<PolyTree, ClipError> {
        self.operation(clip_type, subject_fill, clip_fill).run()
    }

    /// Flat result: every contour, holes included, without nesting.
    pub fn execute_paths(
        &self,
        clip_type: ClipType,
        subject_fill: PolyFillType,
        clip_fill: PolyFillType,
    ) -> Result<PathSet, ClipError> {
        Ok(self.execute(clip_type, subject_fill, clip_fill)?.into_paths())
    }

    pub fn execute_with_stats(
        &self,
        clip_type: ClipType,
        subject_fill: PolyFillType,
        clip_fill: PolyFillType,
    ) -> Result<(PolyTree, ClipStats), ClipError> {
        let mut operation = self.operation(clip_type, subject_fill, clip_fill);
        let tree = operation.run()?;
        Ok((tree, operation.stats.clone()))
    }
}
