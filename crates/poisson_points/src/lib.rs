#![forbid(unsafe_code)]
//! poisson_points: blue-noise and low-discrepancy point sets in the unit square.
//!
//! Modules:
//! - rng: the seedable [`rng::DefaultPrng`] and the [`rng::PointRng`] capability samplers draw from
//! - point: [`point::Point`] and the unit square / unit circle [`point::Region`]s
//! - grid: uniform acceleration grid used for minimum-distance rejection
//! - sampling: Poisson disk, Vogel disk, jittered grid and Hammersley generators
//! - progress: events reported by long Poisson disk runs
//!
//! Every call builds its own working state; the random generator is the only
//! state a caller passes in.
pub mod error;
pub mod grid;
pub mod point;
pub mod progress;
pub mod rng;
pub mod sampling;

pub use sampling::{
    generate_hammersley_points, generate_jittered_grid_points, generate_poisson_points,
    generate_vogel_points,
};

/// Convenient re-exports for common types. Import with `use poisson_points::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::point::{Point, Region};
    pub use crate::progress::{EventSink, FnSink, SamplingEvent, VecSink};
    pub use crate::rng::{DefaultPrng, PointRng, RandRng};
    pub use crate::sampling::{
        generate_hammersley_points, generate_jittered_grid_points, generate_poisson_points,
        generate_vogel_points, HammersleySampling, JitterGridSampling, PointSampling,
        PoissonDiskSampling, VogelDiskSampling,
    };
}
