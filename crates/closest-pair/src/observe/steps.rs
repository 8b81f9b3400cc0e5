use std::fmt::Write as _;

use super::{Event, Observer};
use crate::pair::{Distance, Point};

/// Kind of recorded step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepKind {
    Divide,
    BaseCase,
    Combine,
    Strip,
    /// Pair compared inside a strip.
    Checking,
    /// Pair compared inside a base case; folded into the `BaseCase` step.
    Pair,
}

impl StepKind {
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Divide => "divide",
            StepKind::BaseCase => "base_case",
            StepKind::Combine => "combine",
            StepKind::Strip => "strip",
            StepKind::Checking => "checking",
            StepKind::Pair => "pair",
        }
    }
}

/// Owned snapshot of one step, detached from the solver's buffers.
#[derive(Clone, Debug)]
pub struct Step {
    pub kind: StepKind,
    pub depth: usize,
    pub points: Vec<Point>,
    pub midline: Option<f64>,
    pub best: Distance,
    /// Left/right minima, set on `Combine`, `Strip` and `Checking` steps.
    pub halves: Option<(Distance, Distance)>,
    /// y-sorted strip, set on `Strip` and `Checking` steps.
    pub strip: Vec<Point>,
    /// Pair under comparison, set on `Checking` steps.
    pub checking: Option<(Point, Point)>,
    /// Every pair measured by a base case, set on `BaseCase` steps.
    pub base_case_pairs: Vec<(Point, Point, f64)>,
}

impl Step {
    fn bare(kind: StepKind, event: &Event<'_>) -> Self {
        Self {
            kind,
            depth: event.depth(),
            points: event.points().to_vec(),
            midline: event.midline(),
            best: event.best(),
            halves: None,
            strip: Vec::new(),
            checking: None,
            base_case_pairs: Vec::new(),
        }
    }
}

/// Records every step for later replay or display.
///
/// Base-case pair comparisons are collected into the `BaseCase` step that
/// follows them rather than recorded as steps of their own.
#[derive(Clone, Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
    pending_pairs: Vec<(Point, Point, f64)>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    /// Number of recorded steps of `kind`.
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }

    /// Human-readable step listing, one line per step:
    /// `  Step 3: base_case    (depth 2, 2 points)`.
    pub fn breakdown(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Total steps recorded: {}", self.steps.len());
        let _ = writeln!(out, "Step breakdown:");
        for (i, step) in self.steps.iter().enumerate() {
            let _ = writeln!(
                out,
                "  Step {}: {:12} (depth {}, {} points)",
                i + 1,
                step.kind.label(),
                step.depth,
                step.points.len()
            );
        }
        out
    }
}

impl Observer for StepRecorder {
    fn on_event(&mut self, event: &Event<'_>) {
        let kind = event.kind();
        match *event {
            Event::Divide { .. } => self.steps.push(Step::bare(kind, event)),
            Event::BaseCase { .. } => {
                let mut step = Step::bare(kind, event);
                step.base_case_pairs = std::mem::take(&mut self.pending_pairs);
                self.steps.push(step);
            }
            Event::Compare {
                phase: super::Phase::BaseCase,
                a,
                b,
                distance,
                ..
            } => self.pending_pairs.push((a, b, distance)),
            Event::Combine { left, right, .. } => {
                let mut step = Step::bare(kind, event);
                step.halves = Some((left, right));
                self.steps.push(step);
            }
            Event::Strip { strip, .. } => {
                let mut step = Step::bare(kind, event);
                // A strip always directly follows the combine of the same call.
                step.halves = self.steps.last().and_then(|s| s.halves);
                step.strip = strip.to_vec();
                self.steps.push(step);
            }
            Event::Compare {
                phase: super::Phase::Strip,
                a,
                b,
                ..
            } => {
                let mut step = Step::bare(kind, event);
                if let Some(prev) = self.steps.last() {
                    step.halves = prev.halves;
                    step.strip = prev.strip.clone();
                }
                step.checking = Some((a, b));
                self.steps.push(step);
            }
        }
    }
}
