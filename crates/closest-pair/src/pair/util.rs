use std::cmp::Ordering;

use super::types::Point;

/// Euclidean distance via `hypot`, so large coordinates do not overflow in the square.
#[inline]
pub fn euclidean(a: &Point, b: &Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Total order by x, ties by y.
#[inline]
pub(crate) fn by_x(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}

/// Total order by y, ties by x.
#[inline]
pub(crate) fn by_y(a: &Point, b: &Point) -> Ordering {
    a.y.total_cmp(&b.y).then_with(|| a.x.total_cmp(&b.x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_three_four_five() {
        let d = euclidean(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn euclidean_is_symmetric_and_zero_on_duplicates() {
        let a = Point::new(-2.5, 7.0);
        let b = Point::new(4.0, -1.25);
        assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
        assert_eq!(euclidean(&a, &a), 0.0);
    }

    #[test]
    fn euclidean_survives_large_magnitudes() {
        // Naive dx*dx overflows to +inf here.
        let a = Point::new(1e200, 0.0);
        let b = Point::new(-1e200, 0.0);
        let d = euclidean(&a, &b);
        assert!(d.is_finite());
        assert!((d / 2e200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn orders_break_ties_on_other_axis() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(1.0, 3.0);
        assert_eq!(by_x(&a, &b), Ordering::Less);
        let c = Point::new(0.0, 2.0);
        assert_eq!(by_y(&a, &c), Ordering::Greater);
    }
}
