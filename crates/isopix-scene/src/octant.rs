use std::f32::consts::FRAC_PI_2;

use crate::face::Face;

/// One of the four 90° rotation ranges. Decides which side faces point at
/// the viewer and which axis dominates the depth order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Octant {
    Left = 0,
    Front = 1,
    Right = 2,
    Back = 3,
}

impl Octant {
    /// `floor(rotation / (π/2)) mod 4`, Euclidean so negative angles wrap too.
    pub fn from_rotation(rotation: f32) -> Octant {
        let step = (rotation / FRAC_PI_2).floor() as i64;
        Octant::from_index(step.rem_euclid(4) as usize)
    }

    /// Falls back to `Back` for out-of-range indices.
    #[inline]
    pub fn from_index(i: usize) -> Octant {
        match i {
            0 => Octant::Left,
            1 => Octant::Front,
            2 => Octant::Right,
            _ => Octant::Back,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The two side faces facing the viewer, in draw sequence.
    pub fn visible_sides(self) -> [Face; 2] {
        match self {
            Octant::Left => [Face::Front, Face::Right],
            Octant::Front => [Face::Front, Face::Left],
            Octant::Right => [Face::Left, Face::Back],
            Octant::Back => [Face::Back, Face::Right],
        }
    }

    #[inline]
    pub fn shows(self, face: Face) -> bool {
        face == Face::Top || self.visible_sides().contains(&face)
    }

    /// Axis weighting used by the depth sort for this octant.
    pub fn axis_priority(self) -> AxisPriority {
        match self {
            Octant::Left => AxisPriority::new((1, -1.0), (2, -1.0), (3, 1.0)),
            Octant::Front => AxisPriority::new((2, -1.0), (1, 1.0), (3, 1.0)),
            Octant::Right => AxisPriority::new((1, 1.0), (2, 1.0), (3, 1.0)),
            Octant::Back => AxisPriority::new((2, 1.0), (1, -1.0), (3, 1.0)),
        }
    }
}

/// Per-axis `(power, sign)` pairs. The power selects the digit position of
/// that axis in the base-`max_bounds` sort key; the sign its direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisPriority {
    pub x: (i32, f64),
    pub y: (i32, f64),
    pub z: (i32, f64),
}

impl AxisPriority {
    #[inline]
    pub const fn new(x: (i32, f64), y: (i32, f64), z: (i32, f64)) -> Self {
        Self { x, y, z }
    }

    /// Signed weights `sign * max_bounds^power` for x, y and z.
    #[inline]
    pub fn weights(&self, max_bounds: f64) -> [f64; 3] {
        [
            self.x.1 * max_bounds.powi(self.x.0),
            self.y.1 * max_bounds.powi(self.y.0),
            self.z.1 * max_bounds.powi(self.z.0),
        ]
    }
}
