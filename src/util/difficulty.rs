pub const fn lerp(start: f64, end: f64, amount: f64) -> f64 {
    start + (end - start) * amount
}

/// The `p`-norm of the given values.
pub fn norm<const N: usize>(p: f64, values: [f64; N]) -> f64 {
    values
        .into_iter()
        .map(|x| f64::powf(x, p))
        .sum::<f64>()
        .powf(p.recip())
}

/// Maps a difficulty setting onto the range `min..mid..max` around the
/// midpoint `5.0`.
pub fn difficulty_range(difficulty: f64, min: f64, mid: f64, max: f64) -> f64 {
    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid - (mid - min) * (5.0 - difficulty) / 5.0
    } else {
        mid
    }
}

/// Converts a difficulty rating into its base performance value.
pub fn difficulty_to_performance(difficulty: f64) -> f64 {
    f64::powf(5.0 * f64::max(1.0, difficulty / 0.0675) - 4.0, 3.0) / 100_000.0
}

#[cfg(test)]
mod tests {
    use crate::util::float_ext::FloatExt;

    use super::*;

    #[test]
    fn range_around_midpoint() {
        assert!(difficulty_range(5.0, 1800.0, 1200.0, 450.0).eq(1200.0));
        assert!(difficulty_range(0.0, 1800.0, 1200.0, 450.0).eq(1800.0));
        assert!(difficulty_range(10.0, 1800.0, 1200.0, 450.0).eq(450.0));
        assert!(difficulty_range(7.5, 1800.0, 1200.0, 450.0).eq(825.0));
    }

    #[test]
    fn norm_of_single_value() {
        assert!(norm(1.1, [3.0, 0.0, 0.0]).eq_relative(3.0, 1e-12));
    }

    #[test]
    fn performance_floor() {
        // Anything at or below the threshold maps onto the same base value
        let floor = difficulty_to_performance(0.0);

        assert!(floor.eq(0.00001));
        assert!(difficulty_to_performance(0.0675).eq(floor));
        assert!(difficulty_to_performance(0.5) > floor);
    }
}
