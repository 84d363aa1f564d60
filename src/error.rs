use thiserror::Error;

use crate::clipper::enums::{Phase, PolyType};

/// Why a single input path was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputDefect {
    #[error("fewer than 3 distinct points ({count})")]
    TooFewPoints { count: usize },
    #[error("all points are collinear")]
    Collinear,
    #[error("coordinate ({x}, {y}) is outside the supported range")]
    OutOfRange { x: i64, y: i64 },
    #[error("coordinate is NaN or infinite")]
    NonFinite,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipError {
    #[error("invalid {operand:?} path #{path}: {defect}")]
    InvalidInput {
        operand: PolyType,
        path: usize,
        defect: InputDefect,
    },
    #[error("arithmetic overflow while {context}")]
    Overflow { context: String },
    #[error("ambiguous geometry near ({x}, {y}): {reason}")]
    AmbiguousGeometry { x: i64, y: i64, reason: String },
    #[error("internal invariant violated during {phase:?}: {detail}")]
    InternalInvariantViolation { phase: Phase, detail: String },
}

impl ClipError {
    pub fn overflow(context: impl Into<String>) -> Self {
        ClipError::Overflow {
            context: context.into(),
        }
    }

    pub fn ambiguous(x: i64, y: i64, reason: impl Into<String>) -> Self {
        ClipError::AmbiguousGeometry {
            x,
            y,
            reason: reason.into(),
        }
    }

    pub fn invariant(phase: Phase, detail: impl Into<String>) -> Self {
        ClipError::InternalInvariantViolation {
            phase,
            detail: detail.into(),
        }
    }

    /// The caller can fix the input and retry.
    pub fn is_recoverable(&self) -> bool {
        !self.is_internal()
    }

    /// An engine defect rather than a property of the input.
    pub fn is_internal(&self) -> bool {
        matches!(self, ClipError::InternalInvariantViolation { .. })
    }
}

/// Failures of the region merge and clearance pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    #[error(transparent)]
    Clip(#[from] ClipError),
    #[error("offsetting region #{region} produced {parts} separate outlines")]
    OffsetSplit { region: usize, parts: usize },
    #[error("offset region #{region} overlaps an earlier region")]
    RegionsOverlap { region: usize },
}
