//! Boolean clipping and offsetting of polygons with holes on a fixed-point
//! integer grid, plus the region merge pipeline used for gerber clearances.

pub mod clip_config;
pub mod clipper;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod utils;

pub use crate::clip_config::{ClipConfig, DegeneratePolicy};
pub use crate::clipper::clipper::{ClipOperation, ClipStats, Clipper};
pub use crate::clipper::clipper_offset::ClipperOffset;
pub use crate::clipper::clipper_wrapper::{ClipperWrapper, HostPath, Region};
pub use crate::clipper::enums::{ClipType, JoinType, Phase, PolyFillType, PolyType};
pub use crate::clipper::poly_tree::{PolyNode, PolyTree};
pub use crate::error::{ClipError, InputDefect, RegionError};
pub use crate::geometry::point::{Path, PathSet, Point};

use crate::constants::{DEFAULT_ARC_TOLERANCE, DEFAULT_MITER_LIMIT};

pub fn boolean_op(
    clip_type: ClipType,
    subject: &[Path],
    clip: &[Path],
    subject_fill: PolyFillType,
    clip_fill: PolyFillType,
) -> Result<PolyTree, ClipError> {
    let mut clipper = Clipper::new();
    clipper.add_paths(subject, PolyType::Subject);
    clipper.add_paths(clip, PolyType::Clip);
    clipper.execute(clip_type, subject_fill, clip_fill)
}

pub fn intersection(subject: &[Path], clip: &[Path], fill: PolyFillType) -> Result<PolyTree, ClipError> {
    boolean_op(ClipType::Intersection, subject, clip, fill, fill)
}

pub fn union(subject: &[Path], clip: &[Path], fill: PolyFillType) -> Result<PolyTree, ClipError> {
    boolean_op(ClipType::Union, subject, clip, fill, fill)
}

pub fn difference(subject: &[Path], clip: &[Path], fill: PolyFillType) -> Result<PolyTree, ClipError> {
    boolean_op(ClipType::Difference, subject, clip, fill, fill)
}

pub fn xor(subject: &[Path], clip: &[Path], fill: PolyFillType) -> Result<PolyTree, ClipError> {
    boolean_op(ClipType::Xor, subject, clip, fill, fill)
}

/// Resolves self-intersections and overlaps into simple contours.
pub fn simplify_polygons(paths: &[Path], fill: PolyFillType) -> Result<PathSet, ClipError> {
    let mut clipper = Clipper::with_config(
        ClipConfig::default().with_degenerate_policy(DegeneratePolicy::Drop),
    );
    clipper.add_paths(paths, PolyType::Subject);
    clipper.execute_paths(ClipType::Union, fill, fill)
}

pub fn offset_polygons(paths: &[Path], delta: f64, join_type: JoinType) -> Result<PathSet, ClipError> {
    clipper::clipper_offset::offset_paths(
        paths,
        delta,
        join_type,
        DEFAULT_MITER_LIMIT,
        DEFAULT_ARC_TOLERANCE,
    )
    .map(PolyTree::into_paths)
}

/// Unions `regions`, grows each merged region by twice `offset` and
/// rejects results where grown regions split or overlap.
pub fn merge_and_offset(regions: &[HostPath], offset: f64) -> Result<Vec<Region>, RegionError> {
    ClipperWrapper::default().merge_and_offset(regions, offset)
}
