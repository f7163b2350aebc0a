//! Vogel disk (golden-angle spiral) point sampling strategy.
use crate::error::{Error, Result};
use crate::point::{Point, Region};
use crate::rng::PointRng;
use crate::sampling::PointSampling;

/// Rotation between consecutive samples, in radians.
pub const GOLDEN_ANGLE: f32 = 2.4;

/// Vogel disk sampling.
///
/// Sample `i` sits at radius `sqrt(i + 0.5) / sqrt(n)` and angle
/// `i * GOLDEN_ANGLE`. In circle mode `n` is four times the count, which keeps
/// the whole spiral inside the unit circle; otherwise `n` equals the count and
/// the outermost samples reach almost one unit from `center`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VogelDiskSampling {
    /// Number of points to generate.
    pub count: u32,
    /// Selects the 4x radial compression used for the unit circle.
    pub region: Region,
    /// Rotation of the whole spiral, in degrees.
    pub angle_degrees: f32,
    /// Spiral center.
    pub center: Point,
}

impl Default for VogelDiskSampling {
    fn default() -> Self {
        Self {
            count: 0,
            region: Region::UnitCircle,
            angle_degrees: 0.0,
            center: Point::UNIT_CENTER,
        }
    }
}

impl VogelDiskSampling {
    /// Create a new Vogel disk sampler for `count` points in the unit circle.
    pub fn new(count: u32) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    pub fn with_angle_degrees(mut self, angle_degrees: f32) -> Self {
        self.angle_degrees = angle_degrees;
        self
    }

    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.angle_degrees.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "angle_degrees must be finite, got {}",
                self.angle_degrees
            )));
        }
        if !self.center.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "center must be finite, got {:?}",
                self.center
            )));
        }
        Ok(())
    }

    /// Validates, then generates.
    pub fn try_generate(&self) -> Result<Vec<Point>> {
        self.validate()?;
        Ok(self.points())
    }

    /// Generates the spiral.
    pub fn points(&self) -> Vec<Point> {
        let sample_count = match self.region {
            Region::UnitCircle => 4 * self.count as u64,
            Region::UnitSquare => self.count as u64,
        };
        let angle = self.angle_degrees.to_radians();

        (0..self.count)
            .map(|i| sample_vogel_disk(i, sample_count, angle) + self.center)
            .collect()
    }
}

impl PointSampling for VogelDiskSampling {
    fn generate(&self, _rng: &mut dyn PointRng) -> Vec<Point> {
        self.points()
    }
}

/// Offset of sample `index` out of `sample_count` from the spiral center.
#[inline]
pub fn sample_vogel_disk(index: u32, sample_count: u64, angle: f32) -> Point {
    let radius = (index as f32 + 0.5).sqrt() / (sample_count as f32).sqrt();
    let theta = index as f32 * GOLDEN_ANGLE + angle;

    Point::new(radius * theta.cos(), radius * theta.sin())
}

/// Generates `count` points on a golden-angle spiral around `center`.
pub fn generate_vogel_points(
    count: u32,
    is_circle: bool,
    angle_degrees: f32,
    center: Point,
) -> Vec<Point> {
    VogelDiskSampling {
        count,
        region: Region::from_is_circle(is_circle),
        angle_degrees,
        center,
    }
    .points()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use super::*;

    #[test]
    fn single_square_sample_lies_on_x_axis() {
        let points = generate_vogel_points(1, false, 0.0, Point::UNIT_CENTER);
        assert_eq!(points.len(), 1);
        assert!((points[0].x - (0.5 + 0.5f32.sqrt())).abs() < 1e-6);
        assert!((points[0].y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn count_is_exact() {
        for count in [0u32, 1, 17, 256] {
            assert_eq!(
                generate_vogel_points(count, true, 0.0, Point::UNIT_CENTER).len(),
                count as usize
            );
            assert_eq!(VogelDiskSampling::new(count).points().len(), count as usize);
        }
    }

    #[test]
    fn circle_mode_stays_in_unit_circle() {
        let points = VogelDiskSampling::new(500).points();
        for p in &points {
            let dx = p.x - 0.5;
            let dy = p.y - 0.5;
            assert!(dx * dx + dy * dy <= 0.25 + 1e-5, "{p:?} outside circle");
        }
    }

    #[test]
    fn consecutive_samples_rotate_by_golden_angle() {
        let points = generate_vogel_points(100, true, 0.0, Point::UNIT_CENTER);
        for pair in points.windows(2) {
            let a = (pair[0].y - 0.5).atan2(pair[0].x - 0.5);
            let b = (pair[1].y - 0.5).atan2(pair[1].x - 0.5);
            let delta = (b - a).rem_euclid(TAU);
            assert!((delta - GOLDEN_ANGLE).abs() < 1e-3, "delta {delta}");
        }
    }

    #[test]
    fn angle_offset_rotates_the_spiral() {
        let rotated = generate_vogel_points(1, false, 90.0, Point::new(0.0, 0.0));
        assert!(rotated[0].x.abs() < 1e-6);
        assert!((rotated[0].y - 0.5f32.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn is_a_pure_function_of_arguments() {
        let a = generate_vogel_points(64, true, 12.5, Point::new(0.25, 0.75));
        let b = generate_vogel_points(64, true, 12.5, Point::new(0.25, 0.75));
        assert_eq!(a, b);
    }

    #[test]
    fn validate_rejects_non_finite_inputs() {
        assert!(VogelDiskSampling::new(4)
            .with_angle_degrees(f32::NAN)
            .try_generate()
            .is_err());
        assert!(VogelDiskSampling::new(4)
            .with_center(Point::new(f32::INFINITY, 0.0))
            .validate()
            .is_err());
        assert!(VogelDiskSampling::new(4).validate().is_ok());
    }
}
