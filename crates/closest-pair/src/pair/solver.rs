//! Divide-and-conquer recursion over an x-sorted slice.
//!
//! Each call splits at `mid = n / 2` by position, solves both halves, then
//! scans the vertical strip of half-width `best` around `xs[mid].x` in y-order.
//! Inside the strip every point is compared against at most `STRIP_WINDOW`
//! successors: a `best × 2·best` box split by the midline holds at most eight
//! points that are pairwise `best` apart within each half.

use super::brute::brute_force_observed;
use super::types::{closer, keep_closer, ClosestPair, Distance, Point, SolveCfg};
use super::util::by_y;
use crate::observe::{Event, Observer, Phase};

/// Largest subsequence handled by exhaustive comparison.
pub const BASE_CASE_MAX: usize = 3;

/// Forward comparisons per strip point.
pub const STRIP_WINDOW: usize = 7;

pub(crate) struct Solver<'o, O: Observer> {
    cfg: SolveCfg,
    observer: &'o mut O,
}

impl<'o, O: Observer> Solver<'o, O> {
    pub(crate) fn new(cfg: SolveCfg, observer: &'o mut O) -> Self {
        Self { cfg, observer }
    }

    /// Closest pair within `xs`, which must be sorted by x.
    pub(crate) fn solve(&mut self, xs: &[Point], depth: usize) -> Option<ClosestPair> {
        let n = xs.len();
        if n <= BASE_CASE_MAX {
            return brute_force_observed(xs, depth, &mut *self.observer);
        }

        let mid = n / 2;
        let midline = xs[mid].x;
        let (left, right) = xs.split_at(mid);
        self.observer.on_event(&Event::Divide {
            depth,
            points: xs,
            midline,
            left,
            right,
        });

        let left_best = self.solve(left, depth + 1);
        let right_best = self.solve(right, depth + 1);
        let mut best = closer(left_best, right_best);
        self.observer.on_event(&Event::Combine {
            depth,
            points: xs,
            midline,
            left: Distance::of(left_best.as_ref()),
            right: Distance::of(right_best.as_ref()),
            best: Distance::of(best.as_ref()),
        });

        let radius = Distance::of(best.as_ref()).radius();
        // Drawn from both halves: the closer pair may straddle the midline.
        let mut strip: Vec<Point> = xs
            .iter()
            .copied()
            .filter(|p| (p.x - midline).abs() <= radius)
            .collect();
        strip.sort_by(by_y);
        self.observer.on_event(&Event::Strip {
            depth,
            points: xs,
            midline,
            strip: &strip,
            best: Distance::of(best.as_ref()),
        });

        for (i, a) in strip.iter().enumerate() {
            let end = (i + 1 + STRIP_WINDOW).min(strip.len());
            for b in &strip[i + 1..end] {
                let current = Distance::of(best.as_ref());
                if self.cfg.y_gap_cutoff && b.y - a.y >= current.radius() {
                    break;
                }
                let candidate = ClosestPair::new(*a, *b);
                self.observer.on_event(&Event::Compare {
                    depth,
                    phase: Phase::Strip,
                    points: xs,
                    midline: Some(midline),
                    a: *a,
                    b: *b,
                    distance: candidate.distance,
                    best: current,
                });
                best = keep_closer(best, candidate);
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::{NoopObserver, StripStats};

    fn solve_sorted(xs: &[Point]) -> Option<ClosestPair> {
        Solver::new(SolveCfg::default(), &mut NoopObserver).solve(xs, 0)
    }

    #[test]
    fn pair_across_the_midline_is_found() {
        // Halves {0, 2} and {2.5, 5}: each side alone reports 2.0 and 2.5.
        let xs = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(2.5, 0.0),
            Point::new(5.0, 0.0),
        ];
        let best = solve_sorted(&xs).unwrap();
        assert_eq!(best.distance, 0.5);
        assert_eq!((best.a, best.b), (xs[1], xs[2]));
    }

    #[test]
    fn small_inputs_skip_recursion() {
        let xs = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(5.0, 1.0)];
        let mut stats = StripStats::default();
        let best = Solver::new(SolveCfg::default(), &mut stats)
            .solve(&xs, 0)
            .unwrap();
        assert!((best.distance - 2f64.sqrt()).abs() < 1e-12);
        assert!(stats.scans.is_empty());
        assert_eq!(stats.base_case_comparisons, 3);
    }

    #[test]
    fn strip_never_exceeds_window() {
        // All points share x: every point lands in every strip.
        let xs: Vec<Point> = (0..200).map(|i| Point::new(0.0, i as f64)).collect();
        for cutoff in [true, false] {
            let mut stats = StripStats::default();
            let cfg = SolveCfg {
                y_gap_cutoff: cutoff,
                ..SolveCfg::default()
            };
            let best = Solver::new(cfg, &mut stats).solve(&xs, 0).unwrap();
            assert_eq!(best.distance, 1.0);
            assert!(!stats.scans.is_empty());
            for scan in &stats.scans {
                assert!(scan.comparisons <= STRIP_WINDOW * scan.strip_len);
            }
        }
    }

    #[test]
    fn cutoff_only_saves_work() {
        let xs: Vec<Point> = (0..64)
            .map(|i| Point::new((i / 8) as f64, (i % 8) as f64 * 3.0))
            .collect();
        let mut with = StripStats::default();
        let mut without = StripStats::default();
        let a = Solver::new(SolveCfg::default(), &mut with).solve(&xs, 0);
        let b = Solver::new(
            SolveCfg {
                y_gap_cutoff: false,
                ..SolveCfg::default()
            },
            &mut without,
        )
        .solve(&xs, 0);
        assert_eq!(a.map(|p| p.distance), b.map(|p| p.distance));
        assert!(with.total_strip_comparisons() <= without.total_strip_comparisons());
    }
}
