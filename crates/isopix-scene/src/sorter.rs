use std::cmp::Ordering;

use isopix_geom::GridPos;

use crate::octant::{AxisPriority, Octant};

/// Back-to-front ordering for a fixed rotation.
///
/// Each position maps to `key = Σ axis * sign * max_bounds^power`, a base
/// `max_bounds` number whose digits are the axes in priority order. The
/// pairwise score `key(b) - key(a)` places `a` first when negative. This only
/// separates axes lexicographically while every coordinate span stays below
/// `max_bounds`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthOrder {
    weights: [f64; 3],
}

impl DepthOrder {
    pub fn new(rotation: f32, max_bounds: f32) -> Self {
        Self::for_octant(Octant::from_rotation(rotation), max_bounds)
    }

    pub fn for_octant(octant: Octant, max_bounds: f32) -> Self {
        let prio: AxisPriority = octant.axis_priority();
        Self {
            weights: prio.weights(max_bounds as f64),
        }
    }

    #[inline]
    pub fn key(&self, p: GridPos) -> f64 {
        // `+ 0.0` folds -0.0 so identical positions always share a key
        p.x as f64 * self.weights[0] + p.y as f64 * self.weights[1] + p.z as f64 * self.weights[2]
            + 0.0
    }

    /// `(b.x-a.x)*wx + (b.y-a.y)*wy + (b.z-a.z)*wz`.
    #[inline]
    pub fn score(&self, a: GridPos, b: GridPos) -> f64 {
        let d = b - a;
        d.x as f64 * self.weights[0] + d.y as f64 * self.weights[1] + d.z as f64 * self.weights[2]
    }

    /// Total order consistent with the sign of [`DepthOrder::score`].
    #[inline]
    pub fn compare(&self, a: GridPos, b: GridPos) -> Ordering {
        self.key(b).total_cmp(&self.key(a))
    }

    /// Indices into `positions` in draw order. Stable: equal keys keep their
    /// input order. `positions` itself is left untouched.
    pub fn draw_order(&self, positions: &[GridPos]) -> Vec<usize> {
        let keys: Vec<f64> = positions.iter().map(|p| self.key(*p)).collect();
        let mut order: Vec<usize> = (0..positions.len()).collect();
        order.sort_by(|&a, &b| keys[b].total_cmp(&keys[a]));
        order
    }
}
