use crate::geometry::point::Point;

/// Axis-aligned box with inclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundRect {
    pub left: i64,
    pub bottom: i64,
    pub right: i64,
    pub top: i64,
}

impl BoundRect {
    pub fn new(left: i64, bottom: i64, right: i64, top: i64) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    pub fn from_point(point: &Point) -> Self {
        Self::new(point.x, point.y, point.x, point.y)
    }

    pub fn from_path(path: &[Point]) -> Option<Self> {
        let (first, rest) = path.split_first()?;
        let mut result = Self::from_point(first);

        for point in rest {
            result.add_point(point);
        }

        Some(result)
    }

    pub fn add_point(&mut self, point: &Point) {
        self.left = self.left.min(point.x);
        self.right = self.right.max(point.x);
        self.bottom = self.bottom.min(point.y);
        self.top = self.top.max(point.y);
    }

    pub fn union(&self, other: &BoundRect) -> BoundRect {
        BoundRect::new(
            self.left.min(other.left),
            self.bottom.min(other.bottom),
            self.right.max(other.right),
            self.top.max(other.top),
        )
    }

    /// Touching boxes overlap.
    pub fn overlaps(&self, other: &BoundRect) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.bottom <= other.top
            && other.bottom <= self.top
    }

    pub fn contains(&self, other: &BoundRect) -> bool {
        self.left <= other.left
            && self.right >= other.right
            && self.bottom <= other.bottom
            && self.top >= other.top
    }
}
