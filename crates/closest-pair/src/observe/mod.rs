//! Observation hooks for the recursive solver.
//!
//! Purpose
//! - Let a caller watch the recursion (for display, logging or counting)
//!   without touching the algorithm. Observers receive borrowed events and
//!   cannot feed anything back, so the result is the same with or without one.
//!
//! Event order per call with more than three points:
//! `Divide`, (children), `Combine`, `Strip`, then one `Compare` per strip pair.
//! Leaves emit one `Compare` per pair followed by `BaseCase`.
//!
//! Implementations here
//! - `NoopObserver`: default; compiles away.
//! - `TraceObserver`: forwards each event to `tracing` at TRACE level.
//! - `StripStats`: counts forward comparisons per strip.
//! - `StepRecorder` (in `steps`): owned snapshots plus a textual breakdown.

mod steps;

pub use steps::{Step, StepKind, StepRecorder};

use crate::pair::{Distance, Point};

/// Where a pairwise comparison happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    BaseCase,
    Strip,
}

/// One step of the recursion. Slices borrow the solver's working buffers.
#[derive(Clone, Copy, Debug)]
pub enum Event<'a> {
    /// Subsequence split at `midline` (x of the first right-half point).
    Divide {
        depth: usize,
        points: &'a [Point],
        midline: f64,
        left: &'a [Point],
        right: &'a [Point],
    },
    /// Leaf evaluated by exhaustive comparison.
    BaseCase {
        depth: usize,
        points: &'a [Point],
        best: Distance,
    },
    /// Both halves solved; `best` is the smaller of the two.
    Combine {
        depth: usize,
        points: &'a [Point],
        midline: f64,
        left: Distance,
        right: Distance,
        best: Distance,
    },
    /// Strip collected and sorted by y.
    Strip {
        depth: usize,
        points: &'a [Point],
        midline: f64,
        strip: &'a [Point],
        best: Distance,
    },
    /// Pair `(a, b)` measured at `distance`; `best` is the minimum before it.
    Compare {
        depth: usize,
        phase: Phase,
        points: &'a [Point],
        midline: Option<f64>,
        a: Point,
        b: Point,
        distance: f64,
        best: Distance,
    },
}

impl<'a> Event<'a> {
    pub fn kind(&self) -> StepKind {
        match self {
            Event::Divide { .. } => StepKind::Divide,
            Event::BaseCase { .. } => StepKind::BaseCase,
            Event::Combine { .. } => StepKind::Combine,
            Event::Strip { .. } => StepKind::Strip,
            Event::Compare {
                phase: Phase::Strip,
                ..
            } => StepKind::Checking,
            Event::Compare {
                phase: Phase::BaseCase,
                ..
            } => StepKind::Pair,
        }
    }

    pub fn depth(&self) -> usize {
        match *self {
            Event::Divide { depth, .. }
            | Event::BaseCase { depth, .. }
            | Event::Combine { depth, .. }
            | Event::Strip { depth, .. }
            | Event::Compare { depth, .. } => depth,
        }
    }

    /// The subsequence the emitting call works on.
    pub fn points(&self) -> &'a [Point] {
        match *self {
            Event::Divide { points, .. }
            | Event::BaseCase { points, .. }
            | Event::Combine { points, .. }
            | Event::Strip { points, .. }
            | Event::Compare { points, .. } => points,
        }
    }

    pub fn midline(&self) -> Option<f64> {
        match *self {
            Event::Divide { midline, .. }
            | Event::Combine { midline, .. }
            | Event::Strip { midline, .. } => Some(midline),
            Event::Compare { midline, .. } => midline,
            Event::BaseCase { .. } => None,
        }
    }

    /// Best distance known to the emitting call at this point.
    /// A divide has not compared anything yet.
    pub fn best(&self) -> Distance {
        match *self {
            Event::Divide { .. } => Distance::Undefined,
            Event::BaseCase { best, .. }
            | Event::Combine { best, .. }
            | Event::Strip { best, .. }
            | Event::Compare { best, .. } => best,
        }
    }
}

/// Receives solver events in emission order.
pub trait Observer {
    fn on_event(&mut self, event: &Event<'_>);
}

impl<O: Observer + ?Sized> Observer for &mut O {
    #[inline]
    fn on_event(&mut self, event: &Event<'_>) {
        (**self).on_event(event)
    }
}

/// Ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline]
    fn on_event(&mut self, _event: &Event<'_>) {}
}

/// Emits every event as a `tracing` TRACE record under target `closest_pair::steps`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TraceObserver;

impl Observer for TraceObserver {
    fn on_event(&mut self, event: &Event<'_>) {
        let kind = event.kind().label();
        let depth = event.depth();
        let n = event.points().len();
        let best = event.best().value();
        match *event {
            Event::Compare { a, b, distance, .. } => tracing::trace!(
                target: "closest_pair::steps",
                kind,
                depth,
                n,
                ax = a.x,
                ay = a.y,
                bx = b.x,
                by = b.y,
                distance,
                best = ?best,
                "compare"
            ),
            Event::Strip { strip, midline, .. } => tracing::trace!(
                target: "closest_pair::steps",
                kind,
                depth,
                n,
                midline,
                strip = strip.len(),
                best = ?best,
                "strip"
            ),
            _ => tracing::trace!(
                target: "closest_pair::steps",
                kind,
                depth,
                n,
                midline = ?event.midline(),
                best = ?best,
                "step"
            ),
        }
    }
}

/// Forward comparisons made in one strip scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StripScan {
    pub depth: usize,
    pub strip_len: usize,
    pub comparisons: usize,
}

/// Counts strip comparisons per recursive call.
#[derive(Clone, Debug, Default)]
pub struct StripStats {
    pub scans: Vec<StripScan>,
    pub base_case_comparisons: usize,
}

impl StripStats {
    pub fn total_strip_comparisons(&self) -> usize {
        self.scans.iter().map(|s| s.comparisons).sum()
    }
}

impl Observer for StripStats {
    fn on_event(&mut self, event: &Event<'_>) {
        match *event {
            Event::Strip { depth, strip, .. } => self.scans.push(StripScan {
                depth,
                strip_len: strip.len(),
                comparisons: 0,
            }),
            // Strip compares of a call directly follow its own Strip event.
            Event::Compare {
                phase: Phase::Strip,
                ..
            } => {
                if let Some(scan) = self.scans.last_mut() {
                    scan.comparisons += 1;
                }
            }
            Event::Compare {
                phase: Phase::BaseCase,
                ..
            } => self.base_case_comparisons += 1,
            _ => {}
        }
    }
}
