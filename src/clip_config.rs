use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ARC_TOLERANCE, DEFAULT_CLEARANCE_FACTOR, DEFAULT_MITER_LIMIT, DEFAULT_SCALE};

/// What preprocessing does with a degenerate input path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Fail the whole operation with `ClipError::InvalidInput`.
    #[default]
    Reject,
    /// Log a warning and leave the path out.
    Drop,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipConfig {
    pub degenerate_policy: DegeneratePolicy,
    /// Emit outer contours clockwise and holes counter-clockwise.
    pub reverse_solution: bool,
    /// Keep collinear vertices on output contours.
    pub preserve_collinear: bool,
    /// Fixed-point scale used when converting floating-point coordinates.
    pub scale: f64,
    /// Maximum distance between a rounded join and the true arc, in host units.
    pub arc_tolerance: f64,
    /// Miter length limit as a multiple of the offset distance.
    pub miter_limit: f64,
    /// Multiplier on the offset given to the region pipeline. Half of the
    /// grown band lies over the region itself.
    pub clearance_factor: f64,
}

impl Default for ClipConfig {
    fn default() -> Self {
        Self {
            degenerate_policy: DegeneratePolicy::Reject,
            reverse_solution: false,
            preserve_collinear: false,
            scale: DEFAULT_SCALE,
            arc_tolerance: DEFAULT_ARC_TOLERANCE,
            miter_limit: DEFAULT_MITER_LIMIT,
            clearance_factor: DEFAULT_CLEARANCE_FACTOR,
        }
    }
}

impl ClipConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    pub fn with_reverse_solution(mut self, reverse_solution: bool) -> Self {
        self.reverse_solution = reverse_solution;
        self
    }

    pub fn with_preserve_collinear(mut self, preserve_collinear: bool) -> Self {
        self.preserve_collinear = preserve_collinear;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_arc_tolerance(mut self, arc_tolerance: f64) -> Self {
        self.arc_tolerance = arc_tolerance;
        self
    }

    pub fn with_miter_limit(mut self, miter_limit: f64) -> Self {
        self.miter_limit = miter_limit;
        self
    }

    pub fn with_clearance_factor(mut self, clearance_factor: f64) -> Self {
        self.clearance_factor = clearance_factor;
        self
    }
}
