use std::f32::consts::FRAC_PI_2;

use isopix_geom::{GridPos, ScreenPoint};

use crate::config::ViewConfig;

/// Oblique axonometric projection from grid space to screen space.
///
/// The X and Y grid axes are laid along two screen directions 90° apart,
/// rotated by `rotation` and squashed vertically by `crush`. Z is a plain
/// vertical offset scaled by `crush_z`. No perspective divide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projector {
    pub origin: ScreenPoint,
    pub size: f32,
    pub crush: f32,
    pub crush_z: f32,
    pub rotation: f32,
}

/// Corner offsets of a unit cube, in the order the face tables index them.
/// Corner 8 repeats corner 4.
pub const CORNER_OFFSETS: [(f32, f32, f32); 9] = [
    (0.0, 0.0, 0.0),
    (1.0, 0.0, 0.0),
    (1.0, 1.0, 0.0),
    (0.0, 1.0, 0.0),
    (0.0, 0.0, 1.0),
    (1.0, 0.0, 1.0),
    (1.0, 1.0, 1.0),
    (0.0, 1.0, 1.0),
    (0.0, 0.0, 1.0),
];

impl Projector {
    pub fn from_view(view: &ViewConfig) -> Self {
        Self {
            origin: ScreenPoint::new(view.origin.x, view.origin.y),
            size: view.cube_size,
            crush: view.crush,
            crush_z: view.crush_z,
            rotation: view.rotation,
        }
    }

    pub fn project(&self, pos: GridPos) -> ScreenPoint {
        let (sin_x, cos_x) = self.rotation.sin_cos();
        let (sin_y, cos_y) = (self.rotation + FRAC_PI_2).sin_cos();
        let s = self.size;
        let x = self.origin.x + pos.x * s * cos_x + pos.y * s * cos_y;
        let y = self.origin.y
            + pos.x * s * sin_x * self.crush
            + pos.y * s * sin_y * self.crush
            + pos.z * s * self.crush_z;
        ScreenPoint::new(x, y)
    }

    /// Projected corners of the unit cube at `pos`, ordered as [`CORNER_OFFSETS`].
    pub fn cube_corners(&self, pos: GridPos) -> [ScreenPoint; 9] {
        CORNER_OFFSETS.map(|(dx, dy, dz)| self.project(pos.offset(dx, dy, dz)))
    }
}
