use std::ops::{Add, AddAssign, Neg, Sub};

use num_traits::Zero;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PolyFillType {
    EvenOdd = 0,
    NonZero = 1,
    Positive = 2,
    Negative = 3,
}

impl PolyFillType {
    /// Whether a point with winding number `wind` is inside.
    #[inline(always)]
    pub fn is_filled(self, wind: i32) -> bool {
        match self {
            PolyFillType::EvenOdd => wind % 2 != 0,
            PolyFillType::NonZero => wind != 0,
            PolyFillType::Positive => wind > 0,
            PolyFillType::Negative => wind < 0,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PolyType {
    Subject = 0,
    Clip = 1,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ClipType {
    Intersection = 0,
    Union = 1,
    Difference = 2,
    Xor = 3,
}

impl ClipType {
    /// Membership of a point in the result given its membership in each operand.
    #[inline(always)]
    pub fn contains(self, in_subject: bool, in_clip: bool) -> bool {
        match self {
            ClipType::Intersection => in_subject && in_clip,
            ClipType::Union => in_subject || in_clip,
            ClipType::Difference => in_subject && !in_clip,
            ClipType::Xor => in_subject != in_clip,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum JoinType {
    Square = 0,
    Round = 1,
    Miter = 2,
}

/// Lifecycle of one clipping operation.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Phase {
    Idle,
    Preprocessing,
    Sweeping,
    Reconstructing,
    Done,
    Failed,
}

impl Phase {
    pub fn can_advance_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Idle, Phase::Preprocessing)
                | (Phase::Preprocessing, Phase::Sweeping)
                | (Phase::Sweeping, Phase::Reconstructing)
                | (Phase::Reconstructing, Phase::Done)
                | (Phase::Preprocessing, Phase::Failed)
                | (Phase::Sweeping, Phase::Failed)
        )
    }
}

/// Winding numbers of the two operands at one point.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash)]
pub struct Winding {
    pub subject: i32,
    pub clip: i32,
}

impl Winding {
    pub const fn new(subject: i32, clip: i32) -> Self {
        Self { subject, clip }
    }

    /// Unit winding contributed by one edge of the given operand.
    pub fn unit(poly_type: PolyType, sign: i32) -> Self {
        match poly_type {
            PolyType::Subject => Self::new(sign, 0),
            PolyType::Clip => Self::new(0, sign),
        }
    }

    pub fn is_filled(
        &self,
        clip_type: ClipType,
        subject_fill: PolyFillType,
        clip_fill: PolyFillType,
    ) -> bool {
        clip_type.contains(
            subject_fill.is_filled(self.subject),
            clip_fill.is_filled(self.clip),
        )
    }
}

impl Add for Winding {
    type Output = Winding;

    fn add(self, rhs: Winding) -> Winding {
        Winding::new(self.subject + rhs.subject, self.clip + rhs.clip)
    }
}

impl AddAssign for Winding {
    fn add_assign(&mut self, rhs: Winding) {
        self.subject += rhs.subject;
        self.clip += rhs.clip;
    }
}

impl Sub for Winding {
    type Output = Winding;

    fn sub(self, rhs: Winding) -> Winding {
        Winding::new(self.subject - rhs.subject, self.clip - rhs.clip)
    }
}

impl Neg for Winding {
    type Output = Winding;

    fn neg(self) -> Winding {
        Winding::new(-self.subject, -self.clip)
    }
}

impl Zero for Winding {
    fn zero() -> Self {
        Winding::new(0, 0)
    }

    fn is_zero(&self) -> bool {
        self.subject == 0 && self.clip == 0
    }
}
