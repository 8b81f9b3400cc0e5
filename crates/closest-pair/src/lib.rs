//! Closest pair of points in the plane.
//!
//! Layout
//! - `pair`: point preparation, the divide-and-conquer solver, and the
//!   brute-force baseline it reduces to at the leaves.
//! - `observe`: event hooks for callers that want to watch the recursion
//!   (step recording, tracing, strip statistics). Observation never changes
//!   the result.
//! - `sample`: reproducible point clouds for tests, benches and the CLI.
//!
//! API Policy
//! - The free functions in `pair` are the entry points. Everything else is
//!   plumbing around them and may change.

pub mod observe;
pub mod pair;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::observe::{Event, NoopObserver, Observer, StepRecorder, TraceObserver};
    pub use crate::pair::{
        brute_force_distance, closest_pair, closest_pair_distance, closest_pair_observed,
        closest_pair_with, ClosestPair, Distance, InputError, Point, SolveCfg,
    };
    pub use crate::sample::{draw_points, PointCloud, ReplayToken, SampleCfg};
}
