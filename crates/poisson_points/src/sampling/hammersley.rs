//! Hammersley low-discrepancy point sampling strategy.
use crate::point::Point;
use crate::rng::PointRng;
use crate::sampling::PointSampling;

// Largest f32 below 1.0.
const ONE_MINUS_EPSILON: f32 = 1.0 - f32::EPSILON / 2.0;

/// Hammersley sampling over the unit square.
///
/// Point `i` of `count` is `(i / count, radical_inverse_vdc(i))`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HammersleySampling {
    /// Number of points to generate.
    pub count: u32,
}

impl HammersleySampling {
    pub fn new(count: u32) -> Self {
        Self { count }
    }

    pub fn points(&self) -> Vec<Point> {
        (0..self.count)
            .map(|i| hammersley_point(i, self.count))
            .collect()
    }
}

impl PointSampling for HammersleySampling {
    fn generate(&self, _rng: &mut dyn PointRng) -> Vec<Point> {
        self.points()
    }
}

/// Point `index` of a `count`-point Hammersley set.
///
/// The ratio is taken in f64; in f32 it rounds up to 1.0 for indices near
/// `count` once `count` exceeds 2^24.
#[inline]
pub fn hammersley_point(index: u32, count: u32) -> Point {
    let x = (index as f64 / count as f64) as f32;
    Point::new(x.min(ONE_MINUS_EPSILON), radical_inverse_vdc(index))
}

/// Base-2 radical inverse (Van der Corput) of `bits`, in `[0, 1)`.
#[inline]
pub fn radical_inverse_vdc(bits: u32) -> f32 {
    let reversed = bits.reverse_bits() as f64 / 4_294_967_296.0;
    (reversed as f32).min(ONE_MINUS_EPSILON)
}

/// Generates the first `count` points of the Hammersley set.
pub fn generate_hammersley_points(count: u32) -> Vec<Point> {
    HammersleySampling::new(count).points()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_points_match_known_values() {
        let points = generate_hammersley_points(4);
        let xs: Vec<f32> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f32> = points.iter().map(|p| p.y).collect();
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(ys, vec![0.0, 0.5, 0.25, 0.75]);
    }

    #[test]
    fn radical_inverse_basic() {
        assert_eq!(radical_inverse_vdc(0), 0.0);
        assert_eq!(radical_inverse_vdc(1), 0.5);
        assert_eq!(radical_inverse_vdc(2), 0.25);
        assert_eq!(radical_inverse_vdc(3), 0.75);
        assert_eq!(radical_inverse_vdc(4), 0.125);
        assert!(radical_inverse_vdc(u32::MAX) < 1.0);
    }

    #[test]
    fn count_is_exact_and_points_in_square() {
        for count in [0u32, 1, 10, 1024] {
            let points = generate_hammersley_points(count);
            assert_eq!(points.len(), count as usize);
            for p in &points {
                assert!(p.is_in_unit_square());
                assert!(p.x < 1.0 && p.y < 1.0);
            }
        }
    }

    #[test]
    fn last_point_of_a_large_set_stays_below_one() {
        let count = (1u32 << 24) + 3;
        let p = hammersley_point(count - 1, count);
        assert!(p.x < 1.0, "x = {}", p.x);
        assert!(p.x > 0.999_999);
        assert_eq!(hammersley_point(0, count).x, 0.0);
    }

    #[test]
    fn determinism_without_hidden_state() {
        assert_eq!(
            generate_hammersley_points(257),
            HammersleySampling::new(257).points()
        );
    }
}
