//! Input validation and the one-time x-sort ahead of recursion.

use std::fmt;

use super::types::{Point, SolveCfg};
use super::util::by_x;

/// Rejected inputs. Raised before any recursion starts.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    NonFinite { index: usize, x: f64, y: f64 },
    TooManyPoints { len: usize, max: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NonFinite { index, x, y } => {
                write!(f, "point {index} has a non-finite coordinate ({x}, {y})")
            }
            InputError::TooManyPoints { len, max } => {
                write!(f, "{len} points exceed the configured limit of {max}")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Validate `points` and return a copy sorted by x (ties by y).
pub fn prepare(points: &[Point], cfg: &SolveCfg) -> Result<Vec<Point>, InputError> {
    if let Some(max) = cfg.max_points {
        if points.len() > max {
            return Err(InputError::TooManyPoints {
                len: points.len(),
                max,
            });
        }
    }
    validate_finite(points)?;
    let mut sorted = points.to_vec();
    sorted.sort_by(by_x);
    Ok(sorted)
}

pub(crate) fn validate_finite(points: &[Point]) -> Result<(), InputError> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(index) => Err(InputError::NonFinite {
            index,
            x: points[index].x,
            y: points[index].y,
        }),
        None => Ok(()),
    }
}
