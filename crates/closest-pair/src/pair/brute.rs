//! Exhaustive pairwise comparison: the recursion leaf and the O(n²) reference.

use super::types::{keep_closer, ClosestPair, Distance, Point};
use crate::observe::{Event, NoopObserver, Observer, Phase};

/// Closest pair by checking all C(n,2) pairs. `None` for fewer than two points.
pub fn brute_force(points: &[Point]) -> Option<ClosestPair> {
    brute_force_observed(points, 0, &mut NoopObserver)
}

/// As `brute_force`, reporting each comparison and the final leaf result.
pub(crate) fn brute_force_observed<O: Observer>(
    points: &[Point],
    depth: usize,
    observer: &mut O,
) -> Option<ClosestPair> {
    let mut best: Option<ClosestPair> = None;
    // A single point has nothing to compare against; it must not read as distance 0.
    if points.len() >= 2 {
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                let candidate = ClosestPair::new(*a, *b);
                observer.on_event(&Event::Compare {
                    depth,
                    phase: Phase::BaseCase,
                    points,
                    midline: None,
                    a: *a,
                    b: *b,
                    distance: candidate.distance,
                    best: Distance::of(best.as_ref()),
                });
                best = keep_closer(best, candidate);
            }
        }
    }
    observer.on_event(&Event::BaseCase {
        depth,
        points,
        best: Distance::of(best.as_ref()),
    });
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::StripStats;

    #[test]
    fn fewer_than_two_points_is_undefined() {
        assert!(brute_force(&[]).is_none());
        assert!(brute_force(&[Point::new(4.0, 2.0)]).is_none());
    }

    #[test]
    fn two_and_three_points_are_compared() {
        let two = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
        assert_eq!(brute_force(&two).unwrap().distance, 5.0);

        let three = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 1.0),
        ];
        let best = brute_force(&three).unwrap();
        assert_eq!(best.distance, 1.0);
        assert_eq!(best.a, Point::new(10.0, 0.0));
        assert_eq!(best.b, Point::new(10.0, 1.0));
    }

    #[test]
    fn counts_all_pairs() {
        let pts: Vec<Point> = (0..6).map(|i| Point::new(i as f64, 0.0)).collect();
        let mut stats = StripStats::default();
        brute_force_observed(&pts, 0, &mut stats);
        assert_eq!(stats.base_case_comparisons, 15);
        assert!(stats.scans.is_empty());
    }
}
