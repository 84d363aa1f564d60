#[inline(always)]
pub fn cycle_index(index: usize, size: usize, offset: isize) -> usize {
    ((index as isize + offset).rem_euclid(size as isize)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_index() {
        assert_eq!(cycle_index(0, 4, -1), 3);
        assert_eq!(cycle_index(3, 4, 1), 0);
        assert_eq!(cycle_index(2, 4, 5), 3);
    }
}
