//! Value types shared by the preparer, the solver and the observers.
//!
//! - `Point`: planar point (nalgebra `Point2<f64>`).
//! - `Distance`: minimum distance or an explicit `Undefined` for < 2 points.
//! - `ClosestPair`: witness pair plus its distance.
//! - `SolveCfg`: solver switches and the optional input-size guard.

use std::cmp::Ordering;
use std::fmt;

use super::util::euclidean;

/// A point in the plane. Immutable by convention; only coordinates matter.
pub type Point = nalgebra::Point2<f64>;

/// Minimum pairwise distance of a point set.
///
/// `Undefined` stands for "fewer than two points", never for zero. It loses
/// every comparison against a finite distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Distance {
    Undefined,
    Finite(f64),
}

impl Distance {
    #[inline]
    pub fn of(best: Option<&ClosestPair>) -> Self {
        best.map_or(Distance::Undefined, |p| Distance::Finite(p.distance))
    }

    #[inline]
    pub fn value(self) -> Option<f64> {
        match self {
            Distance::Undefined => None,
            Distance::Finite(d) => Some(d),
        }
    }

    #[inline]
    pub fn is_defined(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Smaller of two distances; `Undefined` only if both are.
    pub fn min(self, other: Distance) -> Distance {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => Distance::Finite(a.min(b)),
            (Distance::Finite(a), Distance::Undefined) | (Distance::Undefined, Distance::Finite(a)) => {
                Distance::Finite(a)
            }
            (Distance::Undefined, Distance::Undefined) => Distance::Undefined,
        }
    }

    /// Search radius implied by this distance: unbounded while undefined.
    #[inline]
    pub(crate) fn radius(self) -> f64 {
        self.value().unwrap_or(f64::INFINITY)
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.partial_cmp(b),
            (Distance::Finite(_), Distance::Undefined) => Some(Ordering::Less),
            (Distance::Undefined, Distance::Finite(_)) => Some(Ordering::Greater),
            (Distance::Undefined, Distance::Undefined) => Some(Ordering::Equal),
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Undefined => f.write_str("undefined"),
            Distance::Finite(d) => match f.precision() {
                Some(p) => write!(f, "{d:.p$}"),
                None => write!(f, "{d}"),
            },
        }
    }
}

/// Two points realizing the minimum distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestPair {
    pub a: Point,
    pub b: Point,
    pub distance: f64,
}

impl ClosestPair {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            a,
            b,
            distance: euclidean(&a, &b),
        }
    }
}

/// Keep `best` unless `candidate` is strictly closer.
#[inline]
pub(crate) fn keep_closer(best: Option<ClosestPair>, candidate: ClosestPair) -> Option<ClosestPair> {
    match best {
        Some(b) if b.distance <= candidate.distance => Some(b),
        _ => Some(candidate),
    }
}

/// Closer of two partial results; ties go to the left one.
#[inline]
pub(crate) fn closer(left: Option<ClosestPair>, right: Option<ClosestPair>) -> Option<ClosestPair> {
    match (left, right) {
        (Some(l), Some(r)) => Some(if r.distance < l.distance { r } else { l }),
        (l, None) => l,
        (None, r) => r,
    }
}

/// Solver configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    /// Stop scanning forward in the strip once the y-gap alone reaches the
    /// current minimum. Does not change the result, only the comparison count.
    pub y_gap_cutoff: bool,
    /// Reject inputs larger than this before solving. `None` accepts any size.
    pub max_points: Option<usize>,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            y_gap_cutoff: true,
            max_points: None,
        }
    }
}
