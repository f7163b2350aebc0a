//! Jittered-grid point sampling strategy.
use tracing::warn;

use crate::error::{Error, Result};
use crate::point::{Point, Region};
use crate::rng::PointRng;
use crate::sampling::{random_point_around, PointSampling};

/// Jitter radius used unless configured otherwise.
pub const DEFAULT_JITTER_RADIUS: f32 = 0.004;

/// Upper bound on re-jitter attempts for one grid node before it is dropped.
pub const MAX_JITTER_ATTEMPTS: usize = 10_000;

/// Jittered grid sampling.
///
/// Places a `floor(sqrt(count))` square lattice at `(x / n, y / n)` and moves
/// every node by a random offset of length `[jitter_radius, 2 * jitter_radius)`,
/// re-drawing the offset until the point lands in the unit square. In circle
/// mode nodes that land outside the unit circle are dropped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JitterGridSampling {
    /// Requested number of points; the lattice uses `floor(sqrt(count))` per axis.
    pub count: u32,
    /// Area to keep points in.
    pub region: Region,
    /// Base jitter distance.
    pub jitter_radius: f32,
    /// Lattice shift: offsets are applied relative to `(0.5, 0.5) - center`.
    pub center: Point,
}

impl Default for JitterGridSampling {
    fn default() -> Self {
        Self {
            count: 0,
            region: Region::UnitSquare,
            jitter_radius: DEFAULT_JITTER_RADIUS,
            center: Point::UNIT_CENTER,
        }
    }
}

impl JitterGridSampling {
    /// Create a new jittered grid sampler for `count` points in the unit square.
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

    pub fn with_jitter_radius(mut self, jitter_radius: f32) -> Self {
        self.jitter_radius = jitter_radius;
        self
    }

    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Lattice nodes per axis.
    pub fn grid_size(&self) -> u32 {
        (self.count as f64).sqrt() as u32
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.jitter_radius.is_finite() || self.jitter_radius < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "jitter_radius must be finite and >= 0, got {}",
                self.jitter_radius
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
    pub fn try_generate<R: PointRng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Point>> {
        self.validate()?;
        Ok(self.sample(rng))
    }

    fn sample<R: PointRng + ?Sized>(&self, rng: &mut R) -> Vec<Point> {
        let grid_size = self.grid_size();
        let shift = Point::UNIT_CENTER - self.center;
        let mut points = Vec::with_capacity(self.count as usize);
        let mut dropped = 0usize;

        for x in 0..grid_size {
            for y in 0..grid_size {
                let node = Point::new(x as f32 / grid_size as f32, y as f32 / grid_size as f32);

                let jittered = (0..MAX_JITTER_ATTEMPTS)
                    .map(|_| {
                        node + random_point_around(Point::default(), self.jitter_radius, &mut *rng)
                            + shift
                    })
                    .find(Point::is_in_unit_square);

                let Some(p) = jittered else {
                    dropped += 1;
                    continue;
                };

                if self.region.is_circle() && !p.is_in_unit_circle() {
                    continue;
                }

                points.push(p);
            }
        }

        if dropped > 0 {
            warn!(
                dropped,
                jitter_radius = self.jitter_radius,
                "jittered grid nodes never landed in the unit square"
            );
        }

        points
    }
}

impl PointSampling for JitterGridSampling {
    fn generate(&self, rng: &mut dyn PointRng) -> Vec<Point> {
        self.sample(rng)
    }
}

/// Generates a jittered grid of at most `floor(sqrt(count))^2` points.
pub fn generate_jittered_grid_points<R: PointRng + ?Sized>(
    count: u32,
    rng: &mut R,
    is_circle: bool,
    jitter_radius: f32,
    center: Point,
) -> Vec<Point> {
    JitterGridSampling {
        count,
        region: Region::from_is_circle(is_circle),
        jitter_radius,
        center,
    }
    .sample(rng)
}
