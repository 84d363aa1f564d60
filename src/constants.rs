pub const TOL_F64: f64 = 1e-9;

/// Largest accepted coordinate magnitude. Keeps every cross and dot product
/// of coordinate differences inside `i128`, including the doubled
/// coordinates used by the point-in-polygon test.
pub const HI_RANGE: i64 = (1 << 61) - 1;

/// Fixed-point scale applied to floating-point host coordinates.
pub const DEFAULT_SCALE: f64 = 4294967296.0;

pub const MAX_NODING_PASSES: usize = 32;

pub const DEFAULT_ARC_TOLERANCE: f64 = 0.25;

pub const DEFAULT_MITER_LIMIT: f64 = 2.0;

/// Region clearances are grown by this multiple of the requested offset.
pub const DEFAULT_CLEARANCE_FACTOR: f64 = 2.0;
