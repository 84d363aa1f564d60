use std::collections::BTreeSet;

/// Pending scanline heights, popped bottom to top.
#[derive(Debug, Default)]
pub struct Scanbeam {
    values: BTreeSet<i64>,
}

impl Scanbeam {
    pub fn new() -> Self {
        Self::default()
    }

    /// Duplicates are ignored.
    pub fn insert(&mut self, y: i64) {
        self.values.insert(y);
    }

    pub fn pop(&mut self) -> Option<i64> {
        self.values.pop_first()
    }
}
