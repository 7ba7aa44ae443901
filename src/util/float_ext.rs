/// Float comparisons for assertions.
pub trait FloatExt: Copy {
    /// `self == other` up to the type's epsilon.
    fn eq(self, other: Self) -> bool;

    /// `self == other` up to a relative `tolerance`.
    fn eq_relative(self, other: Self, tolerance: Self) -> bool;
}

impl FloatExt for f64 {
    fn eq(self, other: Self) -> bool {
        (self - other).abs() < f64::EPSILON
    }

    fn eq_relative(self, other: Self, tolerance: Self) -> bool {
        (self - other).abs() <= tolerance * self.abs().max(other.abs()).max(1.0)
    }
}
