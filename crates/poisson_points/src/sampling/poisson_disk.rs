//! Poisson disk sampling (Bridson's dart throwing with an active list).
use std::f32::consts::SQRT_2;
use std::f64::consts::FRAC_PI_4;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::point::{Point, Region};
use crate::progress::{EventSink, SamplingEvent};
use crate::rng::PointRng;
use crate::sampling::{random_point_around, PointSampling};

/// Candidates tried around each active sample unless configured otherwise.
pub const DEFAULT_NEW_POINTS_PER_ITERATION: u32 = 30;

/// Largest grid accepted by [`PoissonDiskSampling::validate`], in cells per axis.
///
/// The permissive entry points accept larger grids and store them sparsely.
pub const MAX_GRID_SIZE: usize = 8192;

/// Upper bound on draws for the first sample before the run gives up.
pub const MAX_FIRST_POINT_ATTEMPTS: usize = 10_000;

// Up-front reservation for the output; larger runs grow the Vec as needed.
const MAX_RESERVED_POINTS: usize = 1 << 20;

// A progress event is considered whenever the output length is a multiple of this.
const PROGRESS_STRIDE: usize = 1000;

/// Poisson disk sampling strategy.
///
/// The requested `count` is a density hint: the sampler oversamples it
/// internally and returns roughly that many points, never more than
/// [`PoissonDiskSampling::target_count`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoissonDiskSampling {
    /// Requested number of points.
    pub count: u32,
    /// Area to fill.
    pub region: Region,
    /// Candidates tried around each active sample (`k` in Bridson's paper).
    pub new_points_per_iteration: u32,
    /// Minimum distance between samples; `None` derives it from the target count.
    pub min_distance: Option<f32>,
}

impl Default for PoissonDiskSampling {
    fn default() -> Self {
        Self {
            count: 0,
            region: Region::UnitCircle,
            new_points_per_iteration: DEFAULT_NEW_POINTS_PER_ITERATION,
            min_distance: None,
        }
    }
}

impl PoissonDiskSampling {
    /// Creates a sampler for `count` points in the unit circle.
    pub fn new(count: u32) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    /// Sets the region to fill.
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Sets the number of candidates tried per active sample.
    pub fn with_new_points_per_iteration(mut self, new_points_per_iteration: u32) -> Self {
        self.new_points_per_iteration = new_points_per_iteration;
        self
    }

    /// Sets an explicit minimum distance.
    pub fn with_min_distance(mut self, min_distance: f32) -> Self {
        self.min_distance = Some(min_distance);
        self
    }

    /// Internal target: twice the requested count, scaled by `pi / 4` for the circle.
    pub fn target_count(&self) -> usize {
        let doubled = self.count as usize * 2;
        match self.region {
            Region::UnitCircle => (FRAC_PI_4 * doubled as f64) as usize,
            Region::UnitSquare => doubled,
        }
    }

    /// Minimum distance in effect for this configuration.
    ///
    /// An explicit distance is used when it is finite and positive; otherwise
    /// the distance is `sqrt(target) / target`. Returns `None` when the target is
    /// zero.
    pub fn effective_min_distance(&self) -> Option<f32> {
        let target = self.target_count();
        if target == 0 {
            return None;
        }
        match self.min_distance {
            Some(d) if d.is_finite() && d > 0.0 => Some(d),
            _ => Some(default_min_distance(target)),
        }
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(d) = self.min_distance {
            if !d.is_finite() || d <= 0.0 {
                return Err(Error::InvalidArgument(format!(
                    "min_distance must be finite and > 0, got {d}"
                )));
            }
        }
        if let Some(d) = self.effective_min_distance() {
            let grid_size = grid_size_for(d);
            if grid_size > MAX_GRID_SIZE {
                return Err(Error::InvalidArgument(format!(
                    "min_distance {d} needs a {grid_size}x{grid_size} grid, limit is {MAX_GRID_SIZE}"
                )));
            }
        }
        Ok(())
    }

    /// Validates, then generates.
    pub fn try_generate<R: PointRng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Point>> {
        if let Err(err) = self.validate() {
            warn!("rejecting poisson disk configuration: {err}");
            return Err(err);
        }
        Ok(self.sample(rng, &mut ()))
    }

    /// Generates points, reporting progress to `sink`.
    pub fn generate_with_events<R, S>(&self, rng: &mut R, sink: &mut S) -> Vec<Point>
    where
        R: PointRng + ?Sized,
        S: EventSink + ?Sized,
    {
        self.sample(rng, sink)
    }

    fn sample<R, S>(&self, rng: &mut R, sink: &mut S) -> Vec<Point>
    where
        R: PointRng + ?Sized,
        S: EventSink + ?Sized,
    {
        let target = self.target_count();
        let Some(min_distance) = self.effective_min_distance() else {
            return Vec::new();
        };

        let cell_size = min_distance / SQRT_2;
        let grid_size = grid_size_for(min_distance);
        debug!(
            count = self.count,
            target,
            min_distance,
            grid_size,
            "poisson disk sampling"
        );
        sink.send(SamplingEvent::Started {
            target,
            min_distance,
            grid_size,
        });

        let mut grid = Grid::new(grid_size, grid_size, cell_size);
        if grid.is_sparse() {
            debug!(grid_size, "poisson disk grid stored sparsely");
        }
        let mut active = Vec::new();
        let reserve = target
            .min(grid_size.saturating_mul(grid_size))
            .min(MAX_RESERVED_POINTS);
        let mut points = Vec::with_capacity(reserve);

        let first = (0..MAX_FIRST_POINT_ATTEMPTS)
            .map(|_| Point::new(rng.next_float(), rng.next_float()))
            .find(|p| self.region.contains(*p));
        let Some(first) = first else {
            warn!(
                attempts = MAX_FIRST_POINT_ATTEMPTS,
                "random source never produced a first sample inside the region"
            );
            sink.send(SamplingEvent::Finished {
                accepted: 0,
                reached_target: false,
            });
            return Vec::new();
        };
        active.push(first);
        points.push(first);
        grid.insert(first);

        let mut progress = 0;

        while !active.is_empty() && points.len() < target {
            if points.len() % PROGRESS_STRIDE == 0 {
                let step = 200 * (points.len() + active.len()) / target;
                if step != progress {
                    progress = step;
                    sink.send(SamplingEvent::Progress {
                        accepted: points.len(),
                        active: active.len(),
                        target,
                    });
                }
            }

            let index = rng.next_int(active.len() as u32) as usize;
            let current = active.swap_remove(index);

            for _ in 0..self.new_points_per_iteration {
                if points.len() >= target {
                    break;
                }
                let candidate = random_point_around(current, min_distance, rng);
                if self.region.contains(candidate)
                    && !grid.is_in_neighborhood(candidate, min_distance, cell_size)
                {
                    active.push(candidate);
                    points.push(candidate);
                    grid.insert(candidate);
                }
            }
        }

        let reached_target = points.len() >= target;
        debug!(
            accepted = points.len(),
            target, reached_target, "poisson disk sampling finished"
        );
        sink.send(SamplingEvent::Finished {
            accepted: points.len(),
            reached_target,
        });

        points
    }
}

impl PointSampling for PoissonDiskSampling {
    fn generate(&self, rng: &mut dyn PointRng) -> Vec<Point> {
        self.sample(rng, &mut ())
    }
}

/// Generates a Poisson disk point set.
///
/// A negative (or non-finite, or zero) `min_distance` derives the distance
/// from the count. The result holds roughly `count` points; see
/// [`PoissonDiskSampling`].
pub fn generate_poisson_points<R: PointRng + ?Sized>(
    count: u32,
    rng: &mut R,
    is_circle: bool,
    new_points_per_iteration: u32,
    min_distance: f32,
) -> Vec<Point> {
    let sampling = PoissonDiskSampling {
        count,
        region: Region::from_is_circle(is_circle),
        new_points_per_iteration,
        min_distance: (min_distance >= 0.0).then_some(min_distance),
    };
    sampling.sample(rng, &mut ())
}

#[inline]
fn default_min_distance(target: usize) -> f32 {
    let t = target as f32;
    t.sqrt() / t
}

#[inline]
fn grid_size_for(min_distance: f32) -> usize {
    (1.0 / (min_distance / SQRT_2)).ceil() as usize
}
