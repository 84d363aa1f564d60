use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::clip_config::{ClipConfig, DegeneratePolicy};
use crate::clipper::clipper::Clipper;
use crate::clipper::clipper_base::prepare_path;
use crate::clipper::clipper_offset::ClipperOffset;
use crate::clipper::enums::{ClipType, JoinType, PolyFillType, PolyType};
use crate::clipper::poly_tree::PolyTree;
use crate::error::RegionError;
use crate::geometry::point::{Path, PathSet};
use crate::geometry::polygon::{path_from_f64, path_to_f64};

pub type HostPath = Vec<(f64, f64)>;

/// One connected area of the result, in host coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub outer: HostPath,
    pub holes: Vec<HostPath>,
}

/// Merges filled regions given in host (floating-point) coordinates and
/// grows each merged region by a clearance. Region numbers in errors are
/// node indices of the merged tree.
#[derive(Debug, Clone, Default)]
pub struct ClipperWrapper {
    configuration: ClipConfig,
}

impl ClipperWrapper {
    pub fn new(configuration: ClipConfig) -> Self {
        Self { configuration }
    }

    pub fn configuration(&self) -> &ClipConfig {
        &self.configuration
    }

    fn clipper(&self) -> Clipper {
        Clipper::with_config(self.configuration.clone())
    }

    /// Union of all regions under the non-zero rule, one region at a time.
    pub fn union_regions(&self, regions: &[HostPath]) -> Result<PolyTree, RegionError> {
        let mut merged = PolyTree::new();

        for (index, region) in regions.iter().enumerate() {
            let path = path_from_f64(region, self.configuration.scale, PolyType::Subject, index)?;
            if self.configuration.degenerate_policy == DegeneratePolicy::Reject {
                prepare_path(&path, PolyType::Subject, index)?;
            }

            let mut clipper = self.clipper();
            clipper.add_paths(&merged.to_paths(), PolyType::Subject);
            clipper.add_path(&path, PolyType::Clip);
            merged = clipper.execute(ClipType::Union, PolyFillType::NonZero, PolyFillType::NonZero)?;
        }

        Ok(merged)
    }

    /// Grows the region rooted at outer contour `node` by `offset` host
    /// units times the configured clearance factor and returns it as a
    /// single-outline tree.
    pub fn offset_region(&self, tree: &PolyTree, node: usize, offset: f64) -> Result<PolyTree, RegionError> {
        let region = region_paths(tree, node);

        let mut offsetter = ClipperOffset::new(
            self.configuration.miter_limit,
            self.configuration.arc_tolerance * self.configuration.scale,
        );
        offsetter.add_paths(&region, JoinType::Round);
        let delta = offset * self.configuration.clearance_factor * self.configuration.scale;
        let grown = offsetter.execute_paths(delta)?;

        let mut clipper = self.clipper();
        clipper.add_paths(&region, PolyType::Subject);
        clipper.add_paths(&grown, PolyType::Clip);
        let result = clipper.execute(ClipType::Union, PolyFillType::NonZero, PolyFillType::NonZero)?;

        let parts = result.roots().count();
        if parts != 1 {
            return Err(RegionError::OffsetSplit { region: node, parts });
        }

        Ok(result)
    }

    /// Merges `regions`, grows every merged region by `offset` and checks
    /// that the grown regions stay disjoint.
    pub fn merge_and_offset(&self, regions: &[HostPath], offset: f64) -> Result<Vec<Region>, RegionError> {
        let merged = self.union_regions(regions)?;
        let outers: Vec<usize> = (0..merged.len())
            .filter(|&index| !merged.node(index).is_hole())
            .collect();
        info!(
            "merged {} region(s) into {} outline(s)",
            regions.len(),
            outers.len()
        );

        let mut occupied = PolyTree::new();
        let mut result = Vec::with_capacity(outers.len());

        for &node in &outers {
            let grown = self.offset_region(&merged, node, offset)?;
            let grown_paths = grown.to_paths();

            let mut clipper = self.clipper();
            clipper.add_paths(&occupied.to_paths(), PolyType::Subject);
            clipper.add_paths(&grown_paths, PolyType::Clip);

            let overlap = clipper.execute(ClipType::Intersection, PolyFillType::NonZero, PolyFillType::NonZero)?;
            if !overlap.is_empty() {
                debug!("region #{} overlaps by {} contour(s)", node, overlap.len());
                return Err(RegionError::RegionsOverlap { region: node });
            }

            occupied = clipper.execute(ClipType::Union, PolyFillType::NonZero, PolyFillType::NonZero)?;
            result.push(self.to_region(&grown));
        }

        Ok(result)
    }

    fn to_region(&self, tree: &PolyTree) -> Region {
        let scale = self.configuration.scale;
        let Some(root) = tree.roots().next() else {
            return Region {
                outer: HostPath::new(),
                holes: Vec::new(),
            };
        };

        Region {
            outer: path_to_f64(tree.node(root).contour(), scale),
            holes: tree
                .children(root)
                .map(|child| path_to_f64(tree.node(child).contour(), scale))
                .collect(),
        }
    }
}

/// Outer contour of `node` followed by its holes.
fn region_paths(tree: &PolyTree, node: usize) -> PathSet {
    std::iter::once(tree.node(node).contour().clone())
        .chain(
            tree.children(node)
                .map(|child| tree.node(child).contour().clone()),
        )
        .collect::<Vec<Path>>()
}
