/// Rounds half away from zero.
pub trait ClipperRound {
    fn clipper_rounded(self) -> Self;
}

impl ClipperRound for f64 {
    fn clipper_rounded(self) -> Self {
        if self < 0.0 {
            (self - 0.5).ceil()
        } else {
            (self + 0.5).floor()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipper_rounded() {
        assert_eq!(2.5f64.clipper_rounded(), 3.0);
        assert_eq!((-2.5f64).clipper_rounded(), -3.0);
        assert_eq!(2.49f64.clipper_rounded(), 2.0);
        assert_eq!((-0.2f64).clipper_rounded(), 0.0);
    }
}
