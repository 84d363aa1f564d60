use crate::constants::TOL_F64;

pub trait AlmostEqual<Rhs = Self> {
    fn almost_equal(self, other: Rhs, tolerance: Option<Rhs>) -> bool;
}

impl AlmostEqual for f64 {
    fn almost_equal(self, other: f64, tolerance: Option<f64>) -> bool {
        let tol = tolerance.unwrap_or(TOL_F64);
        (self - other).abs() < tol
    }
}
