//! Reproducible planar point clouds.
//!
//! Purpose
//! - Feed tests, benches and the CLI with point sets that exercise the
//!   solver's awkward corners (shared x, duplicates, collinear runs) and can
//!   be regenerated exactly from a replay token.
//!
//! Model
//! - A `SampleCfg` fixes the cloud shape and size; a `ReplayToken`
//!   `(seed, index)` is mixed into a single `StdRng`, so the same token always
//!   yields the same points and neighboring indices give independent draws.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pair::Point;

/// Shape of a generated cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointCloud {
    /// Uniform in the square `[-half_width, half_width]²`.
    Uniform { half_width: f64 },
    /// On the x-axis at multiples of `spacing`, each shifted by up to `±jitter`.
    Collinear { spacing: f64, jitter: f64 },
    /// Drawn with replacement from a `side × side` grid of pitch `step`;
    /// duplicates are certain once `count > side²`.
    Lattice { step: f64, side: u32 },
    /// Every point at the same `x`, y uniform in `[0, height)`.
    Column { x: f64, height: f64 },
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleCfg {
    pub count: usize,
    pub cloud: PointCloud,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: 100,
            cloud: PointCloud::Uniform { half_width: 1.0 },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

impl SampleCfg {
    fn validate(&self) -> Result<(), SampleError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        match self.cloud {
            PointCloud::Uniform { half_width } => {
                if !positive(half_width) {
                    return Err(SampleError::invalid("half_width must be finite and > 0"));
                }
            }
            PointCloud::Collinear { spacing, jitter } => {
                if !positive(spacing) {
                    return Err(SampleError::invalid("spacing must be finite and > 0"));
                }
                if !(jitter.is_finite() && jitter >= 0.0) {
                    return Err(SampleError::invalid("jitter must be finite and >= 0"));
                }
            }
            PointCloud::Lattice { step, side } => {
                if !positive(step) {
                    return Err(SampleError::invalid("step must be finite and > 0"));
                }
                if side == 0 {
                    return Err(SampleError::invalid("side must be >= 1"));
                }
            }
            PointCloud::Column { x, height } => {
                if !x.is_finite() {
                    return Err(SampleError::invalid("column x must be finite"));
                }
                if !positive(height) {
                    return Err(SampleError::invalid("height must be finite and > 0"));
                }
            }
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    /// Token for the following draw in the same stream.
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw `cfg.count` points of shape `cfg.cloud` for `tok`.
pub fn draw_points(cfg: &SampleCfg, tok: ReplayToken) -> Result<Vec<Point>, SampleError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let n = cfg.count;
    let pts = match cfg.cloud {
        PointCloud::Uniform { half_width } => (0..n)
            .map(|_| {
                Point::new(
                    rng.gen_range(-half_width..=half_width),
                    rng.gen_range(-half_width..=half_width),
                )
            })
            .collect(),
        PointCloud::Collinear { spacing, jitter } => (0..n)
            .map(|k| {
                let dx = if jitter > 0.0 {
                    rng.gen_range(-jitter..=jitter)
                } else {
                    0.0
                };
                Point::new(k as f64 * spacing + dx, 0.0)
            })
            .collect(),
        PointCloud::Lattice { step, side } => (0..n)
            .map(|_| {
                let i = rng.gen_range(0..side);
                let j = rng.gen_range(0..side);
                Point::new(f64::from(i) * step, f64::from(j) * step)
            })
            .collect(),
        PointCloud::Column { x, height } => {
            (0..n).map(|_| Point::new(x, rng.gen_range(0.0..height))).collect()
        }
    };
    Ok(pts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pair::{brute_force, closest_pair};

    #[test]
    fn same_token_same_points() {
        let cfg = SampleCfg::default();
        let tok = ReplayToken { seed: 9, index: 3 };
        let a = draw_points(&cfg, tok).unwrap();
        let b = draw_points(&cfg, tok).unwrap();
        assert_eq!(a, b);
        let c = draw_points(&cfg, tok.next()).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn lattice_overflow_forces_duplicates() {
        let cfg = SampleCfg {
            count: 10,
            cloud: PointCloud::Lattice { step: 1.0, side: 3 },
        };
        let pts = draw_points(&cfg, ReplayToken::new(1)).unwrap();
        assert_eq!(closest_pair(&pts).unwrap().unwrap().distance, 0.0);
    }

    #[test]
    fn column_shares_x() {
        let cfg = SampleCfg {
            count: 50,
            cloud: PointCloud::Column {
                x: 2.5,
                height: 10.0,
            },
        };
        let pts = draw_points(&cfg, ReplayToken::new(5)).unwrap();
        assert!(pts.iter().all(|p| p.x == 2.5));
        assert_eq!(
            closest_pair(&pts).unwrap().map(|p| p.distance),
            brute_force(&pts).map(|p| p.distance)
        );
    }

    #[test]
    fn collinear_without_jitter_has_exact_spacing() {
        let cfg = SampleCfg {
            count: 40,
            cloud: PointCloud::Collinear {
                spacing: 0.25,
                jitter: 0.0,
            },
        };
        let pts = draw_points(&cfg, ReplayToken::new(0)).unwrap();
        assert_eq!(closest_pair(&pts).unwrap().unwrap().distance, 0.25);
    }

    #[test]
    fn rejects_bad_params() {
        let bad = [
            PointCloud::Uniform { half_width: 0.0 },
            PointCloud::Collinear {
                spacing: f64::NAN,
                jitter: 0.0,
            },
            PointCloud::Collinear {
                spacing: 1.0,
                jitter: -1.0,
            },
            PointCloud::Lattice { step: 1.0, side: 0 },
            PointCloud::Column {
                x: f64::INFINITY,
                height: 1.0,
            },
        ];
        for cloud in bad {
            let cfg = SampleCfg { count: 3, cloud };
            assert!(matches!(
                draw_points(&cfg, ReplayToken::new(0)),
                Err(SampleError::InvalidParams { .. })
            ));
        }
    }
}
