//! Point-set generators over the unit square and its inscribed circle.
//!
//! Each strategy is a small configuration struct implementing
//! [`PointSampling`]; the `generate_*_points` free functions offer the same
//! algorithms with explicit arguments.
use std::f32::consts::TAU;

use crate::point::Point;
use crate::rng::PointRng;

pub mod hammersley;
pub mod jitter_grid;
pub mod poisson_disk;
pub mod vogel_disk;

pub use hammersley::{
    generate_hammersley_points, hammersley_point, radical_inverse_vdc, HammersleySampling,
};
pub use jitter_grid::{generate_jittered_grid_points, JitterGridSampling};
pub use poisson_disk::{generate_poisson_points, PoissonDiskSampling};
pub use vogel_disk::{generate_vogel_points, sample_vogel_disk, VogelDiskSampling};

/// Trait for point-set generation.
///
/// Deterministic strategies ignore `rng`.
pub trait PointSampling: Send + Sync {
    fn generate(&self, rng: &mut dyn PointRng) -> Vec<Point>;
}

/// Random point at distance `[min_distance, 2 * min_distance)` from `center`.
#[inline]
pub(crate) fn random_point_around<R: PointRng + ?Sized>(
    center: Point,
    min_distance: f32,
    rng: &mut R,
) -> Point {
    let r1 = rng.next_float();
    let r2 = rng.next_float();

    let radius = min_distance * (r1 + 1.0);
    let angle = TAU * r2;

    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}
