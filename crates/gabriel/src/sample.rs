//! Reproducible random point sets.
//!
//! Purpose
//! - Feed tests, benches and the CLI with planar point clouds that can be
//!   regenerated exactly from a replay token `(seed, index)`.
//!
//! Model
//! - `uniform_points`: i.i.d. uniform in an axis-aligned box.
//! - `jittered_grid`: one point per grid cell, displaced by a bounded jitter.
//!   Jitter is clamped below one cell so no two points coincide.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{GabrielError, Result};
use crate::geometry::Point;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Axis-aligned sampling box with finite corners and `min < max` on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    min: Point,
    max: Point,
}

impl Bounds2 {
    pub fn new(min: Point, max: Point) -> Result<Self> {
        let finite = [min.x, min.y, max.x, max.y].iter().all(|v| v.is_finite());
        if !finite {
            return Err(GabrielError::invalid("bounds must be finite"));
        }
        if !(min.x < max.x && min.y < max.y) {
            return Err(GabrielError::invalid(format!(
                "bounds need min < max on both axes, got ({}, {})..({}, {})",
                min.x, min.y, max.x, max.y
            )));
        }
        Ok(Self { min, max })
    }

    /// `[0, 1]²`.
    pub fn unit() -> Self {
        Self {
            min: Vector2::new(0.0, 0.0),
            max: Vector2::new(1.0, 1.0),
        }
    }

    #[inline]
    pub fn min(&self) -> Point {
        self.min
    }
    #[inline]
    pub fn max(&self) -> Point {
        self.max
    }
    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Point-cloud layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Layout {
    Uniform,
    /// Square-ish grid with `count` cells; jitter as a fraction of the cell size.
    JitteredGrid { jitter: f64 },
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub count: usize,
    pub bounds: Bounds2,
    pub layout: Layout,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: 100,
            bounds: Bounds2::unit(),
            layout: Layout::Uniform,
        }
    }
}

/// Draw a point cloud according to `cfg`.
pub fn draw_points(cfg: SampleCfg, tok: ReplayToken) -> Result<Vec<Point>> {
    match cfg.layout {
        Layout::Uniform => Ok(uniform_points(cfg.count, cfg.bounds, tok)),
        Layout::JitteredGrid { jitter } => {
            if !jitter.is_finite() || jitter < 0.0 {
                return Err(GabrielError::invalid(format!(
                    "jitter must be finite and >= 0, got {jitter}"
                )));
            }
            let cols = (cfg.count as f64).sqrt().ceil().max(1.0) as usize;
            let rows = cfg.count.div_ceil(cols);
            let mut pts = jittered_grid(cols, rows, jitter, cfg.bounds, tok);
            pts.truncate(cfg.count);
            Ok(pts)
        }
    }
}

/// `n` points uniform in `bounds`.
pub fn uniform_points(n: usize, bounds: Bounds2, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    (0..n)
        .map(|_| {
            Vector2::new(
                rng.gen_range(bounds.min.x..bounds.max.x),
                rng.gen_range(bounds.min.y..bounds.max.y),
            )
        })
        .collect()
}

/// `cols × rows` grid over `bounds`, row-major, each point displaced inside its cell.
///
/// `jitter` is clamped to `[0, 0.98]` (fraction of the cell size, centered).
pub fn jittered_grid(
    cols: usize,
    rows: usize,
    jitter: f64,
    bounds: Bounds2,
    tok: ReplayToken,
) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let j = if jitter.is_finite() {
        jitter.clamp(0.0, 0.98)
    } else {
        0.0
    };
    let cell = Vector2::new(
        (bounds.max.x - bounds.min.x) / cols.max(1) as f64,
        (bounds.max.y - bounds.min.y) / rows.max(1) as f64,
    );
    let mut pts = Vec::with_capacity(cols * rows);
    for r in 0..rows {
        for c in 0..cols {
            let u: f64 = rng.gen::<f64>() - 0.5;
            let v: f64 = rng.gen::<f64>() - 0.5;
            pts.push(Vector2::new(
                bounds.min.x + (c as f64 + 0.5 + j * u) * cell.x,
                bounds.min.y + (r as f64 + 0.5 + j * v) * cell.y,
            ));
        }
    }
    pts
}
